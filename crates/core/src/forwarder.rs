use std::{fmt, marker::PhantomData};

use crate::{Callable, FromValues, InvokeError, Value};

/// Runs a wrapped callable with the arguments it is given.
///
/// A `Forwarder` owns exactly one callable and has no other state. Every
/// invocation calls the callable exactly once and hands back whatever it
/// returns; nothing is cached, retried, or recovered.
///
/// `Args` is the argument tuple of the callable. It is tracked with
/// `PhantomData<fn(Args)>`, so a forwarder is `Send` and `Sync` exactly when
/// its callable is.
///
/// # Concurrency
///
/// A forwarder performs no synchronization. Whether it is safe to invoke from
/// several threads at once is decided entirely by the callable, and is the
/// caller's responsibility.
///
/// # Example
///
/// ```
/// use objalg_core::{Forwarder, Value};
///
/// let add: Forwarder<_, (i64, i64)> = Forwarder::new(|a: i64, b: i64| a + b);
///
/// assert_eq!(add.invoke((3, 4)), 7);
/// assert_eq!(add.invoke_values(&[Value::Int(3), Value::Int(4)]), Ok(7));
/// ```
pub struct Forwarder<F, Args> {
    callable: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Forwarder<F, Args> {
    /// Creates a forwarder that owns `callable`.
    pub fn new(callable: F) -> Self
    where
        F: Callable<Args>,
    {
        Self {
            callable,
            _args: PhantomData,
        }
    }

    /// Returns a reference to the wrapped callable.
    pub fn callable(&self) -> &F {
        &self.callable
    }

    /// Consumes the forwarder, returning the wrapped callable.
    pub fn into_callable(self) -> F {
        self.callable
    }
}

impl<F, Args> Forwarder<F, Args>
where
    F: Callable<Args>,
{
    /// The number of arguments the wrapped callable takes.
    #[must_use]
    pub fn arity(&self) -> usize {
        F::ARITY
    }

    /// Calls the wrapped callable once with `args` and returns its output.
    pub fn invoke(&self, args: Args) -> F::Output {
        self.callable.call(args)
    }

    /// Calls the wrapped callable with an untyped argument list.
    ///
    /// The values are converted into the callable's argument tuple before the
    /// callable runs. If conversion fails the callable is not called.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ArityMismatch`] if `args` has the wrong length,
    /// or [`InvokeError::TypeMismatch`] if an argument has the wrong kind.
    /// A failure returned by the callable is part of its output and comes
    /// back inside `Ok`, unchanged.
    pub fn invoke_values(&self, args: &[Value]) -> Result<F::Output, InvokeError>
    where
        Args: FromValues,
    {
        let args = Args::from_values(args)?;
        Ok(self.invoke(args))
    }
}

impl<F, Args> fmt::Debug for Forwarder<F, Args>
where
    F: Callable<Args>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forwarder")
            .field("arity", &F::ARITY)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        fmt,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;
    use crate::ValueKind;

    /// A callable that counts how many times it has been called.
    struct Counting<'a> {
        calls: &'a Cell<usize>,
    }

    impl Callable<(i64,)> for Counting<'_> {
        type Output = i64;

        const ARITY: usize = 1;

        fn call(&self, (x,): (i64,)) -> i64 {
            self.calls.set(self.calls.get() + 1);
            x * 10
        }
    }

    #[derive(Debug, PartialEq)]
    struct DivideByZero {
        numerator: i64,
    }

    impl fmt::Display for DivideByZero {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "cannot divide {} by zero", self.numerator)
        }
    }

    impl std::error::Error for DivideByZero {}

    fn divide(a: i64, b: i64) -> Result<i64, DivideByZero> {
        if b == 0 {
            Err(DivideByZero { numerator: a })
        } else {
            Ok(a / b)
        }
    }

    #[test]
    fn invoke_returns_callable_output() {
        let zero: Forwarder<_, ()> = Forwarder::new(|| 3);
        let one: Forwarder<_, (i64,)> = Forwarder::new(|x: i64| x + 1);
        let two: Forwarder<_, (String, String)> =
            Forwarder::new(|a: String, b: String| format!("{a} + {b}"));

        assert_eq!(zero.invoke(()), 3);
        assert_eq!(one.invoke((41,)), 42);
        assert_eq!(two.invoke(("3".into(), "4".into())), "3 + 4");

        assert_eq!(zero.arity(), 0);
        assert_eq!(one.arity(), 1);
        assert_eq!(two.arity(), 2);
    }

    #[test]
    fn each_invoke_calls_exactly_once() {
        let calls = Cell::new(0);
        let forwarder: Forwarder<_, (i64,)> = Forwarder::new(Counting { calls: &calls });

        assert_eq!(calls.get(), 0);

        assert_eq!(forwarder.invoke((1,)), 10);
        assert_eq!(calls.get(), 1);

        assert_eq!(forwarder.invoke((2,)), 20);
        assert_eq!(forwarder.invoke((2,)), 20);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn callable_failures_pass_through_unchanged() {
        let forwarder: Forwarder<_, (i64, i64)> = Forwarder::new(divide);

        assert_eq!(forwarder.invoke((8, 2)), Ok(4));
        assert_eq!(
            forwarder.invoke((8, 0)),
            Err(DivideByZero { numerator: 8 })
        );
        assert_eq!(
            forwarder.invoke_values(&[Value::Int(5), Value::Int(0)]),
            Ok(Err(DivideByZero { numerator: 5 }))
        );
    }

    #[test]
    fn invoke_values_converts_arguments() {
        let forwarder: Forwarder<_, (String, i64)> =
            Forwarder::new(|text: String, times: i64| text.repeat(times as usize));

        let output = forwarder
            .invoke_values(&[Value::from("ab"), Value::Int(3)])
            .unwrap();

        assert_eq!(output, "ababab");
    }

    #[test]
    fn invoke_values_rejects_bad_arguments_without_calling() {
        let calls = Cell::new(0);
        let forwarder: Forwarder<_, (i64,)> = Forwarder::new(Counting { calls: &calls });

        assert_eq!(
            forwarder.invoke_values(&[]),
            Err(InvokeError::ArityMismatch {
                expected: 1,
                found: 0
            })
        );
        assert_eq!(
            forwarder.invoke_values(&[Value::Int(1), Value::Int(2)]),
            Err(InvokeError::ArityMismatch {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            forwarder.invoke_values(&[Value::Bool(true)]),
            Err(InvokeError::TypeMismatch {
                index: 0,
                expected: ValueKind::Int,
                found: ValueKind::Bool,
            })
        );
        assert_eq!(calls.get(), 0);

        // A rejected invocation leaves the forwarder usable.
        assert_eq!(forwarder.invoke_values(&[Value::Int(4)]), Ok(40));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn forwarders_are_independent() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));

        let first: Forwarder<_, ()> = Forwarder::new({
            let calls = Arc::clone(&first_calls);
            move || calls.fetch_add(1, Ordering::SeqCst)
        });
        let second: Forwarder<_, ()> = Forwarder::new({
            let calls = Arc::clone(&second_calls);
            move || calls.fetch_add(1, Ordering::SeqCst)
        });

        first.invoke(());
        first.invoke(());
        second.invoke(());

        assert_eq!(first_calls.load(Ordering::SeqCst), 2);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_shows_arity() {
        let forwarder: Forwarder<_, (i64, i64)> = Forwarder::new(|a: i64, b: i64| a * b);

        assert_eq!(format!("{forwarder:?}"), "Forwarder { arity: 2, .. }");
    }

    #[test]
    fn into_callable_returns_the_closure() {
        let forwarder: Forwarder<_, (i64,)> = Forwarder::new(|x: i64| x - 1);
        let callable = forwarder.into_callable();

        assert_eq!(callable(10), 9);
    }
}

use std::fmt;

use crate::{Callable, Forwarder, FromValues, Interface, InvokeError, SyncInterface, Value};

/// A value that implements an interface by forwarding to a callable.
///
/// An `Adapter` owns one [`Forwarder`] and nothing else. The [`interface`]
/// attribute implements the interface trait for `Adapter<F, Args>` whenever
/// `F` is a callable with the method's argument tuple and return type, so the
/// trait method simply runs the callable.
///
/// Most code never names this type: [`wrap_as`] builds an adapter and boxes
/// it as the interface. An unboxed adapter implements the trait too.
///
/// [`interface`]: crate::interface
pub struct Adapter<F, Args> {
    forwarder: Forwarder<F, Args>,
}

impl<F, Args> Adapter<F, Args> {
    /// Creates an adapter over `callable`.
    pub fn new(callable: F) -> Self
    where
        F: Callable<Args>,
    {
        Self {
            forwarder: Forwarder::new(callable),
        }
    }

    /// Returns the forwarder that interface methods delegate to.
    pub fn forwarder(&self) -> &Forwarder<F, Args> {
        &self.forwarder
    }

    /// Consumes the adapter, returning its forwarder.
    pub fn into_forwarder(self) -> Forwarder<F, Args> {
        self.forwarder
    }
}

impl<F, Args> Adapter<F, Args>
where
    F: Callable<Args>,
{
    /// Invokes the adapted method with an untyped argument list.
    ///
    /// # Errors
    ///
    /// See [`Forwarder::invoke_values`].
    pub fn invoke_values(&self, args: &[Value]) -> Result<F::Output, InvokeError>
    where
        Args: FromValues,
    {
        self.forwarder.invoke_values(args)
    }
}

impl<F, Args> fmt::Debug for Adapter<F, Args>
where
    F: Callable<Args>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("forwarder", &self.forwarder)
            .finish()
    }
}

/// Wraps a callable as an instance of the interface `T`.
///
/// Calling the interface method on the result runs `callable` once with the
/// method's arguments and returns its output unchanged. Each call to
/// `wrap_as` allocates a new, independent instance.
///
/// The callable must take exactly the method's parameters and return exactly
/// its return type. Anything else is rejected at compile time.
///
/// # Example
///
/// ```
/// use objalg_core::{interface, wrap_as};
///
/// #[interface]
/// trait Eval {
///     fn eval(&self) -> i64;
/// }
///
/// let three: Box<dyn Eval> = wrap_as(|| 3);
/// let four: Box<dyn Eval> = wrap_as(|| 4);
/// let sum: Box<dyn Eval> = wrap_as(move || three.eval() + four.eval());
///
/// assert_eq!(sum.eval(), 7);
/// ```
///
/// A callable that takes the wrong number of arguments does not compile:
///
/// ```compile_fail
/// # use objalg_core::{interface, wrap_as};
/// # #[interface]
/// # trait Eval {
/// #     fn eval(&self) -> i64;
/// # }
/// let e: Box<dyn Eval> = wrap_as(|x: i64| x);
/// ```
///
/// Neither does one that returns the wrong type:
///
/// ```compile_fail
/// # use objalg_core::{interface, wrap_as};
/// # #[interface]
/// # trait Eval {
/// #     fn eval(&self) -> i64;
/// # }
/// let e = wrap_as::<Box<dyn Eval>>(|| "3".to_string());
/// ```
pub fn wrap_as<T>(callable: impl Callable<T::Args, Output = T::Output> + 'static) -> T
where
    T: Interface,
{
    debug_assert_eq!(
        T::DESCRIPTOR.arity(),
        arity_of::<T::Args, _>(&callable),
        "descriptor of {} disagrees with its argument tuple",
        T::DESCRIPTOR
    );
    T::from_adapter(Adapter::new(callable))
}

/// Wraps a thread-safe callable as an instance of the interface `T`.
///
/// Like [`wrap_as`], for interfaces whose instances are `Send + Sync`. The
/// callable must be thread-safe too:
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use objalg_core::{interface, wrap_as_sync};
/// # #[interface]
/// # trait Eval {
/// #     fn eval(&self) -> i64;
/// # }
/// let shared = Rc::new(3);
/// let e: Box<dyn Eval + Send + Sync> = wrap_as_sync(move || *shared);
/// ```
pub fn wrap_as_sync<T>(
    callable: impl Callable<T::Args, Output = T::Output> + Send + Sync + 'static,
) -> T
where
    T: SyncInterface,
{
    debug_assert_eq!(
        T::DESCRIPTOR.arity(),
        arity_of::<T::Args, _>(&callable),
        "descriptor of {} disagrees with its argument tuple",
        T::DESCRIPTOR
    );
    T::from_adapter(Adapter::new(callable))
}

fn arity_of<Args, F: Callable<Args>>(_: &F) -> usize {
    F::ARITY
}

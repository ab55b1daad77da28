/// A unit of behavior with a fixed arity, called with its arguments as a tuple.
///
/// `Args` is the argument tuple: `()` for a callable taking no arguments,
/// `(A,)` for one, `(A, B)` for two, and so on.
///
/// `Callable` is implemented for every `Fn` closure or function taking up to
/// six arguments, so any such value can be handed to a [`Forwarder`] or
/// [`wrap_as`] directly.
/// Other types can implement it by hand.
///
/// A callable that can fail should return a `Result`. The value it returns,
/// including any error, is passed back to the caller untouched.
///
/// # Example
///
/// ```
/// use objalg_core::Callable;
///
/// fn arity<Args, F: Callable<Args>>(_: &F) -> usize {
///     F::ARITY
/// }
///
/// let add = |a: i64, b: i64| a + b;
///
/// assert_eq!(arity::<(i64, i64), _>(&add), 2);
/// assert_eq!(Callable::call(&add, (3, 4)), 7);
/// ```
///
/// [`Forwarder`]: crate::Forwarder
/// [`wrap_as`]: crate::wrap_as
pub trait Callable<Args> {
    type Output;

    /// The number of arguments the callable takes.
    const ARITY: usize;

    /// Calls the callable once with the given arguments.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! count {
    () => { 0 };
    ($head:ident $($tail:ident)*) => { 1 + count!($($tail)*) };
}

macro_rules! impl_callable {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Out, $($ty),*> Callable<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Out,
        {
            type Output = Out;

            const ARITY: usize = count!($($ty)*);

            fn call(&self, ($($arg,)*): ($($ty,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(a: A);
impl_callable!(a: A, b: B);
impl_callable!(a: A, b: B, c: C);
impl_callable!(a: A, b: B, c: C, d: D);
impl_callable!(a: A, b: B, c: C, d: D, e: E);
impl_callable!(a: A, b: B, c: C, d: D, e: E, f: G);

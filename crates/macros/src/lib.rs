mod interface;
mod utils;

use proc_macro::TokenStream;
use syn::{Error, parse_macro_input};

/// Turns a single-method trait into an interface that closures can implement.
///
/// When applied to a trait, this macro keeps the trait as written and:
///
/// - Implements the trait for `objalg_core::Adapter<F, Args>`, where `Args` is
///   the tuple of the method's parameter types, by forwarding the method's
///   arguments to the callable `F`.
/// - Implements [`Interface`] for `Box<dyn Trait>` and [`SyncInterface`] for
///   `Box<dyn Trait + Send + Sync>`, so that [`wrap_as`] and [`wrap_as_sync`]
///   can produce boxed instances of the trait.
///
/// ## Restrictions
///
/// The trait must have exactly one method and nothing else. The method must:
///
/// - Take `&self`.
/// - Have no default body.
/// - Not be generic, `const`, `async`, `unsafe`, or `extern`.
/// - Use owned parameter and return types (`&'static` references are allowed),
///   without `impl Trait` or `Self`.
///
/// Lifetimes elided inside a path, as in `Cow<str>`, are not visible to the
/// macro. Such types pass through and the compiler rejects the generated
/// impls instead; write the lifetime out (`Cow<'static, str>`).
///
/// The trait itself must not be generic, `unsafe`, or `auto`, and must not
/// have supertraits. Any violation is reported as an unsupported interface
/// shape at compile time.
///
/// ## Example
///
/// ### Input
///
/// ```ignore
/// #[interface]
/// pub trait Eval {
///     fn eval(&self) -> i64;
/// }
/// ```
///
/// ### Expanded
///
/// ```ignore
/// pub trait Eval {
///     fn eval(&self) -> i64;
/// }
///
/// impl<__F> Eval for ::objalg_core::Adapter<__F, ()>
/// where
///     __F: ::objalg_core::Callable<(), Output = i64>,
/// {
///     fn eval(&self) -> i64 {
///         self.forwarder().invoke(())
///     }
/// }
///
/// impl ::objalg_core::Interface for ::std::boxed::Box<dyn Eval> {
///     type Args = ();
///     type Output = i64;
///
///     const DESCRIPTOR: ::objalg_core::InterfaceDescriptor = ::objalg_core::InterfaceDescriptor {
///         name: "Eval",
///         method: "eval",
///         params: &[],
///         output: "i64",
///     };
///
///     fn from_adapter<__F>(adapter: ::objalg_core::Adapter<__F, Self::Args>) -> Self
///     where
///         __F: ::objalg_core::Callable<Self::Args, Output = Self::Output> + 'static,
///     {
///         ::std::boxed::Box::new(adapter)
///     }
/// }
///
/// // ...and the same for `Box<dyn Eval + Send + Sync>` and `SyncInterface`.
/// ```
///
/// [`Interface`]: objalg_core::Interface
/// [`SyncInterface`]: objalg_core::SyncInterface
/// [`wrap_as`]: objalg_core::wrap_as
/// [`wrap_as_sync`]: objalg_core::wrap_as_sync
#[proc_macro_attribute]
pub fn interface(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return Error::new_spanned(attr, "The `interface` attribute does not take arguments.")
            .to_compile_error()
            .into();
    }

    let parsed = parse_macro_input!(item as interface::Parsed);
    parsed.expand().into()
}

use std::fmt;

use crate::{Adapter, Callable};

/// A single-method interface that can be backed by a callable.
///
/// `Interface` is implemented for the boxed trait object of an interface
/// trait (`Box<dyn Eval>`, say). It binds the trait's one method to its
/// argument tuple and return type, and knows how to turn an [`Adapter`] into
/// an instance of the interface.
///
/// Implementations are normally generated by the [`interface`] attribute,
/// which also checks that the trait has exactly one `&self` method.
///
/// [`interface`]: crate::interface
pub trait Interface: Sized {
    /// The argument tuple of the interface method, excluding `&self`.
    type Args;

    /// The return type of the interface method.
    type Output;

    /// Describes the interface method.
    const DESCRIPTOR: InterfaceDescriptor;

    /// Boxes an adapter as an instance of the interface.
    fn from_adapter<F>(adapter: Adapter<F, Self::Args>) -> Self
    where
        F: Callable<Self::Args, Output = Self::Output> + 'static;
}

/// An [`Interface`] whose instances can be shared across threads.
///
/// Implemented for `Box<dyn Trait + Send + Sync>`. Only callables that are
/// themselves `Send + Sync` can back such an instance.
pub trait SyncInterface: Sized {
    type Args;
    type Output;

    const DESCRIPTOR: InterfaceDescriptor;

    fn from_adapter<F>(adapter: Adapter<F, Self::Args>) -> Self
    where
        F: Callable<Self::Args, Output = Self::Output> + Send + Sync + 'static;
}

/// A static description of an interface's single method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceDescriptor {
    /// The name of the interface trait.
    pub name: &'static str,
    /// The name of its method.
    pub method: &'static str,
    /// The parameter types of the method, excluding `&self`.
    pub params: &'static [&'static str],
    /// The return type of the method.
    pub output: &'static str,
}

impl InterfaceDescriptor {
    /// The number of parameters the method takes, excluding `&self`.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for InterfaceDescriptor {
    /// Formats the method signature as `Trait::method(A, B) -> R`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}({}) -> {}",
            self.name,
            self.method,
            self.params.join(", "),
            self.output
        )
    }
}

//! Closure-backed adapters for single-method interfaces.
//!
//! An object algebra builds every result as an instance of some small
//! interface, such as "something that can be evaluated" or "something that
//! can be printed". Writing a struct and a trait impl for every node of every
//! interpretation is tedious; this crate lets an interpretation return a
//! closure instead, wrapped so that it satisfies the interface.
//!
//! - [`Callable`]: a unit of behavior with a fixed arity
//! - [`Forwarder`]: runs one callable with the arguments it is given
//! - [`Adapter`]: implements an interface by delegating to a forwarder
//! - [`wrap_as`], [`wrap_as_sync`]: turn a callable into a boxed interface
//! - [`Interface`], [`SyncInterface`], [`InterfaceDescriptor`]: bind an
//!   interface trait to its method signature
//! - [`Value`], [`InvokeError`]: untyped invocation through
//!   [`Forwarder::invoke_values`]
//!
//! # Features
//!
//! - `macros` (default): re-exports the [`interface`] attribute, which
//!   generates the adapter impls for a single-method trait.
//! - `serde-derive` (default): derives `Serialize` and `Deserialize` for
//!   [`Value`] and [`ValueKind`].
//!
//! # Example
//!
//! ```
//! use objalg_core::{interface, wrap_as};
//!
//! #[interface]
//! pub trait Print {
//!     fn print(&self) -> String;
//! }
//!
//! fn lit(x: i64) -> Box<dyn Print> {
//!     wrap_as(move || x.to_string())
//! }
//!
//! fn add(e1: Box<dyn Print>, e2: Box<dyn Print>) -> Box<dyn Print> {
//!     wrap_as(move || format!("{} + {}", e1.print(), e2.print()))
//! }
//!
//! assert_eq!(add(lit(3), lit(4)).print(), "3 + 4");
//! ```
//!
//! # Interface shape
//!
//! The [`interface`] attribute only accepts traits with exactly one method,
//! and rejects anything else at compile time:
//!
//! ```compile_fail
//! use objalg_core::interface;
//!
//! #[interface]
//! trait Both {
//!     fn a(&self);
//!     fn b(&self);
//! }
//! ```
//!
//! Parameter and return types must be owned or `'static`. The attribute sees
//! lifetimes that are written out, but not ones elided inside a path such as
//! `Cow<str>`; those are still rejected at compile time, by the compiler
//! rather than with an unsupported-shape message:
//!
//! ```compile_fail
//! use std::borrow::Cow;
//!
//! use objalg_core::interface;
//!
//! #[interface]
//! trait Name {
//!     fn name(&self, raw: Cow<str>) -> String;
//! }
//! ```
//!
//! Spelling the lifetime out works:
//!
//! ```
//! use std::borrow::Cow;
//!
//! use objalg_core::{interface, wrap_as};
//!
//! #[interface]
//! trait Name {
//!     fn name(&self, raw: Cow<'static, str>) -> String;
//! }
//!
//! let upper: Box<dyn Name> = wrap_as(|raw: Cow<'static, str>| raw.to_uppercase());
//! assert_eq!(upper.name(Cow::Borrowed("ada")), "ADA");
//! ```

mod adapter;
mod callable;
mod error;
mod forwarder;
mod interface;
mod value;

pub use adapter::{Adapter, wrap_as, wrap_as_sync};
pub use callable::Callable;
pub use error::InvokeError;
pub use forwarder::Forwarder;
pub use interface::{Interface, InterfaceDescriptor, SyncInterface};
pub use value::{FromValue, FromValues, Value, ValueKind};

#[cfg(feature = "macros")]
pub use objalg_macros::interface;

//! Object algebras for a small expression language.
//!
//! The language starts with integer literals and addition ([`ExpAlg`]) and is
//! later extended with subtraction ([`SubExpAlg`]). Each interpretation is an
//! algebra: a type implementing those signatures for one carrier type.
//!
//! - [`EvalExpAlg`], [`EvalSubExpAlg`]: evaluate to an [`Eval`]
//! - [`PrintExpAlg`]: pretty-print through a [`Print`]
//! - [`StringPrintAlg`]: pretty-print straight into a `String`
//!
//! The [`Eval`] and [`Print`] carriers are single-method interfaces; their
//! algebras build every node as a closure wrapped with
//! [`objalg_core::wrap_as`], with no hand-written node types.
//!
//! Expressions are written once, generically over the algebra, and can be
//! interpreted by any algebra that supports the operations they use:
//!
//! ```
//! use objalg_algebra::{Eval, EvalSubExpAlg, Print, PrintExpAlg, exp2};
//!
//! let value: Box<dyn Eval> = exp2(&EvalSubExpAlg);
//! let text: Box<dyn Print> = exp2(&PrintExpAlg);
//!
//! assert_eq!(value.eval(), 3);
//! assert_eq!(text.print(), "3 + 4 - 4");
//! ```

mod algebra;
mod eval;
mod expr;
mod print;
mod report;

pub use algebra::{ExpAlg, SubExpAlg};
pub use eval::{Eval, EvalExpAlg, EvalSubExpAlg};
pub use expr::{exp1, exp2};
pub use print::{Print, PrintExpAlg, StringPrintAlg};
pub use report::report;

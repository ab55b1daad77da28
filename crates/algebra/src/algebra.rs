/// The signature of the initial expression language: literals and addition.
///
/// `E` is the carrier, the type every expression is interpreted as.
pub trait ExpAlg<E> {
    /// An integer literal.
    fn lit(&self, x: i64) -> E;

    /// The sum of two expressions.
    fn add(&self, e1: E, e2: E) -> E;
}

/// The expression language extended with subtraction.
///
/// Algebras written for [`ExpAlg`] keep working unchanged; only algebras that
/// also implement this trait can interpret expressions that subtract.
pub trait SubExpAlg<E>: ExpAlg<E> {
    /// The difference of two expressions.
    fn sub(&self, e1: E, e2: E) -> E;
}

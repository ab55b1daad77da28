use crate::{ExpAlg, SubExpAlg};

/// Builds `3 + 4` in any algebra.
pub fn exp1<E>(alg: &impl ExpAlg<E>) -> E {
    alg.add(alg.lit(3), alg.lit(4))
}

/// Builds `(3 + 4) - 4` in any algebra that supports subtraction.
pub fn exp2<E>(alg: &impl SubExpAlg<E>) -> E {
    alg.sub(exp1(alg), alg.lit(4))
}

use objalg_core::{interface, wrap_as};

use crate::{ExpAlg, SubExpAlg};

/// An expression that can be evaluated to an integer.
///
/// Arithmetic wraps on overflow.
#[interface]
pub trait Eval {
    fn eval(&self) -> i64;
}

/// Evaluates literals and addition.
///
/// This algebra cannot interpret expressions that subtract; passing it to
/// [`exp2`](crate::exp2) is a compile error. Use [`EvalSubExpAlg`] for those.
///
/// ```compile_fail
/// use objalg_algebra::{Eval, EvalExpAlg, exp2};
///
/// let e: Box<dyn Eval> = exp2(&EvalExpAlg);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalExpAlg;

impl ExpAlg<Box<dyn Eval>> for EvalExpAlg {
    fn lit(&self, x: i64) -> Box<dyn Eval> {
        wrap_as(move || x)
    }

    fn add(&self, e1: Box<dyn Eval>, e2: Box<dyn Eval>) -> Box<dyn Eval> {
        wrap_as(move || e1.eval().wrapping_add(e2.eval()))
    }
}

/// Evaluates literals, addition, and subtraction.
///
/// Literals and addition are evaluated exactly as [`EvalExpAlg`] does.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalSubExpAlg;

impl ExpAlg<Box<dyn Eval>> for EvalSubExpAlg {
    fn lit(&self, x: i64) -> Box<dyn Eval> {
        EvalExpAlg.lit(x)
    }

    fn add(&self, e1: Box<dyn Eval>, e2: Box<dyn Eval>) -> Box<dyn Eval> {
        EvalExpAlg.add(e1, e2)
    }
}

impl SubExpAlg<Box<dyn Eval>> for EvalSubExpAlg {
    fn sub(&self, e1: Box<dyn Eval>, e2: Box<dyn Eval>) -> Box<dyn Eval> {
        wrap_as(move || e1.eval().wrapping_sub(e2.eval()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_evaluate_to_themselves() {
        assert_eq!(EvalExpAlg.lit(3).eval(), 3);
        assert_eq!(EvalExpAlg.lit(-12).eval(), -12);
        assert_eq!(EvalSubExpAlg.lit(0).eval(), 0);
    }

    #[test]
    fn addition_and_subtraction() {
        let alg = EvalSubExpAlg;

        let sum = alg.add(alg.lit(3), alg.lit(4));
        assert_eq!(sum.eval(), 7);

        let difference = alg.sub(sum, alg.lit(4));
        assert_eq!(difference.eval(), 3);

        let negative = alg.sub(alg.lit(1), alg.add(alg.lit(2), alg.lit(3)));
        assert_eq!(negative.eval(), -4);
    }

    #[test]
    fn evaluation_repeats_on_every_call() {
        let alg = EvalExpAlg;
        let sum = alg.add(alg.lit(20), alg.lit(22));

        assert_eq!(sum.eval(), 42);
        assert_eq!(sum.eval(), 42);
    }

    #[test]
    fn overflow_wraps() {
        let alg = EvalSubExpAlg;

        assert_eq!(alg.add(alg.lit(i64::MAX), alg.lit(1)).eval(), i64::MIN);
        assert_eq!(alg.sub(alg.lit(i64::MIN), alg.lit(1)).eval(), i64::MAX);
    }
}

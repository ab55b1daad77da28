use objalg_core::{interface, wrap_as};

use crate::{ExpAlg, SubExpAlg};

/// An expression that can be pretty-printed.
#[interface]
pub trait Print {
    fn print(&self) -> String;
}

/// Pretty-prints literals, addition, and subtraction.
///
/// Operators are printed infix with single spaces and no parentheses, so
/// `(3 + 4) - 4` prints as `3 + 4 - 4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintExpAlg;

impl ExpAlg<Box<dyn Print>> for PrintExpAlg {
    fn lit(&self, x: i64) -> Box<dyn Print> {
        wrap_as(move || x.to_string())
    }

    fn add(&self, e1: Box<dyn Print>, e2: Box<dyn Print>) -> Box<dyn Print> {
        wrap_as(move || format!("{} + {}", e1.print(), e2.print()))
    }
}

impl SubExpAlg<Box<dyn Print>> for PrintExpAlg {
    fn sub(&self, e1: Box<dyn Print>, e2: Box<dyn Print>) -> Box<dyn Print> {
        wrap_as(move || format!("{} - {}", e1.print(), e2.print()))
    }
}

/// Pretty-prints directly into a `String`.
///
/// When an interpretation does not need to control when its result is
/// computed, the carrier can simply be the result. This prints exactly as
/// [`PrintExpAlg`] does, but eagerly, without any adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringPrintAlg;

impl ExpAlg<String> for StringPrintAlg {
    fn lit(&self, x: i64) -> String {
        x.to_string()
    }

    fn add(&self, e1: String, e2: String) -> String {
        format!("{e1} + {e2}")
    }
}

impl SubExpAlg<String> for StringPrintAlg {
    fn sub(&self, e1: String, e2: String) -> String {
        format!("{e1} - {e2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_print_as_decimal() {
        assert_eq!(PrintExpAlg.lit(3).print(), "3");
        assert_eq!(PrintExpAlg.lit(-7).print(), "-7");
        assert_eq!(StringPrintAlg.lit(-7), "-7");
    }

    #[test]
    fn operators_print_infix() {
        let alg = PrintExpAlg;

        let sum = alg.add(alg.lit(3), alg.lit(4));
        assert_eq!(sum.print(), "3 + 4");

        let difference = alg.sub(sum, alg.lit(4));
        assert_eq!(difference.print(), "3 + 4 - 4");
    }

    #[test]
    fn nested_right_operands_are_not_parenthesized() {
        let alg = PrintExpAlg;
        let expr = alg.sub(alg.lit(1), alg.add(alg.lit(2), alg.lit(3)));

        assert_eq!(expr.print(), "1 - 2 + 3");
    }

    #[test]
    fn string_printer_matches_adapter_printer() {
        let adapters = PrintExpAlg;
        let strings = StringPrintAlg;

        let printed = adapters.sub(
            adapters.add(adapters.lit(10), adapters.lit(-2)),
            adapters.lit(5),
        );
        let direct = strings.sub(strings.add(strings.lit(10), strings.lit(-2)), strings.lit(5));

        assert_eq!(printed.print(), direct);
        assert_eq!(direct, "10 + -2 - 5");
    }
}

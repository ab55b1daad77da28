use crate::{Eval, EvalSubExpAlg, Print, PrintExpAlg, StringPrintAlg, exp1, exp2};

/// Interprets the sample expressions with every algebra and describes the
/// results, one line per finding.
#[must_use]
pub fn report() -> String {
    let eval = EvalSubExpAlg;
    let print = PrintExpAlg;
    let print_direct = StringPrintAlg;

    // `EvalSubExpAlg` interprets `exp1` too, since it extends the base algebra.
    let ev: Box<dyn Eval> = exp1(&eval);
    let exp1_text: Box<dyn Print> = exp1(&print);
    let exp2_text: Box<dyn Print> = exp2(&print);
    let exp2_value: Box<dyn Eval> = exp2(&eval);
    let exp1_direct: String = exp1(&print_direct);
    let exp2_direct: String = exp2(&print_direct);

    format!(
        "Evaluation of Exp1 '{}' is: {}\n\
         Evaluation of Exp2 '{}' is: {}\n\
         The alternative pretty printer works nicely too!\n\
         Exp1: {exp1_direct}\n\
         Exp2: {exp2_direct}\n",
        exp1_text.print(),
        ev.eval(),
        exp2_text.print(),
        exp2_value.eval(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_every_interpretation() {
        assert_eq!(
            report(),
            "Evaluation of Exp1 '3 + 4' is: 7\n\
             Evaluation of Exp2 '3 + 4 - 4' is: 3\n\
             The alternative pretty printer works nicely too!\n\
             Exp1: 3 + 4\n\
             Exp2: 3 + 4 - 4\n"
        );
    }
}

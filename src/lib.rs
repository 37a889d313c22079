pub mod ast;
pub mod error;
pub mod format;
pub mod functions;

pub use ast::{Evaluator, EvaluatorOptions, ExpressionNode, Operator};
pub use error::{EvalError, FormulaError, ParseError};
pub use format::RoundingMode;

/// Evaluates a formula such as `multiply(add(2, 3), divide(10, 2))`, rounded to two decimals.
pub fn evaluate(formula: &str) -> String {
    Evaluator::default().evaluate(formula)
}

pub fn evaluate_with_precision(formula: &str, decimal_places: u32) -> String {
    Evaluator::new(EvaluatorOptions::default().with_decimal_places(decimal_places))
        .evaluate(formula)
}

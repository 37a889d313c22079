use crate::error::EvalError;
use std::fmt;

mod evaluator;
mod parser;
mod scanner;

pub use evaluator::{Evaluator, EvaluatorOptions, DEFAULT_MAX_DEPTH};
pub use parser::FormulaParser as Parser;
pub use scanner::{
    extract_keyword, extract_parameter_content, split_top_level_parameters, validate_arity,
};

/// Divisor magnitudes strictly below this are treated as zero.
pub const DEFAULT_ZERO_TOLERANCE: f64 = f64::EPSILON;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Number(f64),
    BinaryOperation {
        left: Box<ExpressionNode>,
        operator: Operator,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Resolves the tree to a number using the default zero tolerance for division.
    pub fn resolve(&self) -> Result<f64, EvalError> {
        self.resolve_with(DEFAULT_ZERO_TOLERANCE)
    }

    /// Recursively computes the value of the tree.
    ///
    /// Operands are resolved left to right, except for division where the
    /// divisor is resolved and checked before the dividend is touched.
    pub fn resolve_with(&self, zero_tolerance: f64) -> Result<f64, EvalError> {
        match self {
            ExpressionNode::Number(value) => Ok(*value),
            ExpressionNode::BinaryOperation {
                left,
                operator: Operator::Divide,
                right,
            } => {
                let divisor = right.resolve_with(zero_tolerance)?;
                check_divisor(divisor, zero_tolerance)?;
                let dividend = left.resolve_with(zero_tolerance)?;
                Ok(dividend / divisor)
            }
            ExpressionNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = left.resolve_with(zero_tolerance)?;
                let right_value = right.resolve_with(zero_tolerance)?;
                operator.apply(left_value, right_value, zero_tolerance)
            }
        }
    }

    /// Nesting depth of the formula; a bare literal has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Number(_) => 0,
            ExpressionNode::BinaryOperation { left, right, .. } => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Number(value) => write!(f, "{}", value),
            ExpressionNode::BinaryOperation {
                left,
                operator,
                right,
            } => write!(f, "{}({}, {})", operator.keyword(), left, right),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64, zero_tolerance: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                check_divisor(right, zero_tolerance)?;
                Ok(left / right)
            }
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

fn check_divisor(divisor: f64, zero_tolerance: f64) -> Result<(), EvalError> {
    if divisor.abs() < zero_tolerance {
        return Err(EvalError::DivideByZero);
    }
    Ok(())
}

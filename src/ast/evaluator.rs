use crate::ast::{ExpressionNode, Parser, DEFAULT_ZERO_TOLERANCE};
use crate::error::{EvalError, FormulaError, ParseError};
use crate::format::{format_number, round_to, RoundingMode};
use log::debug;
use rayon::prelude::*;

/// Nesting depth accepted by default before parsing gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for how formulas are parsed, resolved and rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EvaluatorOptions {
    pub decimal_places: u32,
    pub max_depth: Option<usize>,
    pub zero_tolerance: f64,
    pub rounding: RoundingMode,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            rounding: RoundingMode::default(),
        }
    }
}

impl EvaluatorOptions {
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// `None` removes the nesting limit entirely.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Parse a formula string into an expression tree.
    pub fn parse(&self, formula: &str) -> Result<ExpressionNode, ParseError> {
        Parser::new(self.options.max_depth).build(formula)
    }

    pub fn resolve(&self, ast: &ExpressionNode) -> Result<f64, EvalError> {
        let value = ast.resolve_with(self.options.zero_tolerance)?;
        if !value.is_finite() {
            return Err(EvalError::NonFinite { value });
        }
        Ok(value)
    }

    /// Parses, resolves and rounds a formula, keeping the error typed.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` rounded to the configured number of decimal places.
    /// * `Err(FormulaError)` if parsing or resolution fails.
    pub fn evaluate_value(&self, formula: &str) -> Result<f64, FormulaError> {
        let ast = self.parse(formula)?;
        let value = self.resolve(&ast)?;
        debug!("Resolved {} to {}", ast, value);
        Ok(round_to(
            value,
            self.options.decimal_places,
            self.options.rounding,
        ))
    }

    /// Evaluates a formula into display text.
    ///
    /// Never fails: errors are rendered into the returned string, e.g.
    /// `"Error: Division by zero"` or `"Error while parsing formula: ..."`.
    pub fn evaluate(&self, formula: &str) -> String {
        match self.evaluate_value(formula) {
            Ok(value) => format_number(value),
            Err(err) => {
                debug!("Formula {:?} failed: {:?}", formula, err);
                err.render()
            }
        }
    }

    /// Evaluates independent formulas in parallel; output order follows input order.
    pub fn evaluate_batch<S>(&self, formulas: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        formulas
            .par_iter()
            .map(|formula| self.evaluate(formula.as_ref()))
            .collect()
    }
}

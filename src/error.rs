use thiserror::Error;

/// Failures detected while turning formula text into an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Input cannot be empty or whitespace")]
    EmptyInput,

    #[error("Invalid number format: '{text}'")]
    InvalidNumber { text: String },

    #[error("Missing opening parenthesis in: '{text}'")]
    MissingOpenParen { text: String },

    #[error("Missing closing parenthesis in: '{text}'")]
    MissingCloseParen { text: String },

    #[error("Mismatched parentheses in: '{text}'")]
    MismatchedParens { text: String },

    #[error("Mismatched parentheses: too many closing parentheses")]
    TooManyCloseParens,

    #[error("Mismatched parentheses: unclosed opening parentheses")]
    UnclosedParen,

    #[error("Missing function name in: '{text}'")]
    EmptyKeyword { text: String },

    #[error("Unknown function: '{keyword}'")]
    UnknownFunction { keyword: String },

    #[error("Function '{keyword}' expects {expected} parameters but got {actual}")]
    ParameterCountMismatch {
        keyword: String,
        expected: usize,
        actual: usize,
    },

    #[error("Formula nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Failures raised while resolving a built tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("result is not a finite number: {value}")]
    NonFinite { value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl FormulaError {
    /// Renders the error as the text returned to callers of `evaluate`.
    pub fn render(&self) -> String {
        match self {
            FormulaError::Parse(err) => format!("Error while parsing formula: {}", err),
            FormulaError::Eval(EvalError::DivideByZero) => "Error: Division by zero".to_string(),
            FormulaError::Eval(err) => format!("Unexpected error: {}", err),
        }
    }
}

use crate::ast::{
    extract_keyword, extract_parameter_content, split_top_level_parameters, validate_arity,
    ExpressionNode,
};
use crate::error::ParseError;
use crate::functions;
use log::{debug, trace};

/// Recursive-descent builder over whole substrings of the formula.
#[derive(Debug, Clone, Copy)]
pub struct FormulaParser {
    max_depth: Option<usize>,
}

impl Default for FormulaParser {
    fn default() -> Self {
        Self::new(Some(super::DEFAULT_MAX_DEPTH))
    }
}

impl FormulaParser {
    /// `max_depth` of `None` lets nesting recurse without limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    pub fn build(&self, input: &str) -> Result<ExpressionNode, ParseError> {
        debug!("Parsing formula: {}", input);
        let node = self.build_at(input, 0)?;
        debug!("Parse result: {:?}", node);
        Ok(node)
    }

    fn build_at(&self, input: &str, depth: usize) -> Result<ExpressionNode, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Some(value) = parse_literal(input) {
            return Ok(ExpressionNode::Number(value));
        }

        if !input.contains(&['(', ')'][..]) {
            return Err(ParseError::InvalidNumber {
                text: input.to_string(),
            });
        }

        self.build_call(input, depth)
    }

    fn build_call(&self, input: &str, depth: usize) -> Result<ExpressionNode, ParseError> {
        let keyword = extract_keyword(input)?;
        let spec = functions::lookup(keyword).ok_or_else(|| ParseError::UnknownFunction {
            keyword: keyword.to_string(),
        })?;
        trace!("Resolved keyword '{}' to {:?}", keyword, spec.operator);

        if let Some(limit) = self.max_depth {
            if depth >= limit {
                return Err(ParseError::NestingTooDeep { limit });
            }
        }

        let content = extract_parameter_content(input)?;
        let parameters = split_top_level_parameters(content)?;
        validate_arity(keyword, spec.arity, parameters.len())?;

        let left = self.build_at(parameters[0], depth + 1)?;
        let right = self.build_at(parameters[1], depth + 1)?;

        Ok(ExpressionNode::BinaryOperation {
            left: Box::new(left),
            operator: spec.operator,
            right: Box::new(right),
        })
    }
}

/// Parses the whole text as a finite decimal literal; no prefix matching.
fn parse_literal(input: &str) -> Option<f64> {
    let first = input.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return None;
    }
    input.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    fn parse(input: &str) -> Result<ExpressionNode, ParseError> {
        FormulaParser::default().build(input)
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(
            parse("42"),
            Ok(ExpressionNode::Number(42.0))
        );
        assert_eq!(
            parse("  -5  "),
            Ok(ExpressionNode::Number(-5.0))
        );
        assert_eq!(
            parse(".5"),
            Ok(ExpressionNode::Number(0.5))
        );
    }

    #[test]
    fn test_non_finite_words_are_not_literals() {
        for input in ["inf", "NaN", "infinity", "-inf", "1e400"] {
            assert!(
                parse(input).is_err(),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn test_trailing_garbage_is_not_truncated() {
        assert_eq!(
            parse("12abc"),
            Err(ParseError::InvalidNumber {
                text: "12abc".to_string()
            })
        );
        assert_eq!(
            parse("abc"),
            Err(ParseError::InvalidNumber {
                text: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_simple_call() {
        let ast = parse("add(2, 3)").unwrap();
        let expected = ExpressionNode::BinaryOperation {
            left: Box::new(ExpressionNode::Number(2.0)),
            operator: Operator::Add,
            right: Box::new(ExpressionNode::Number(3.0)),
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_nested_call() {
        let ast = parse("multiply(add(2,3), divide(10,2))").unwrap();
        let expected = ExpressionNode::BinaryOperation {
            left: Box::new(ExpressionNode::BinaryOperation {
                left: Box::new(ExpressionNode::Number(2.0)),
                operator: Operator::Add,
                right: Box::new(ExpressionNode::Number(3.0)),
            }),
            operator: Operator::Multiply,
            right: Box::new(ExpressionNode::BinaryOperation {
                left: Box::new(ExpressionNode::Number(10.0)),
                operator: Operator::Divide,
                right: Box::new(ExpressionNode::Number(2.0)),
            }),
        };
        assert_eq!(ast, expected);
        assert_eq!(ast.depth(), 2);
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            parse("unknown(2, 3)"),
            Err(ParseError::UnknownFunction {
                keyword: "unknown".to_string()
            })
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(matches!(
            parse("ADD(2, 3)"),
            Err(ParseError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_arity_errors() {
        assert_eq!(
            parse("add(2)"),
            Err(ParseError::ParameterCountMismatch {
                keyword: "add".to_string(),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            parse("add(2, 3, 4)"),
            Err(ParseError::ParameterCountMismatch {
                keyword: "add".to_string(),
                expected: 2,
                actual: 3,
            })
        );
        assert!(matches!(
            parse("add()"),
            Err(ParseError::ParameterCountMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn test_empty_parameter_is_empty_input() {
        assert_eq!(
            parse("add(, 3)"),
            Err(ParseError::EmptyInput)
        );
    }

    #[test]
    fn test_paren_errors() {
        assert!(matches!(
            parse("add 2, 3)"),
            Err(ParseError::MissingOpenParen { .. })
        ));
        assert!(matches!(
            parse("add(2, 3"),
            Err(ParseError::MissingCloseParen { .. })
        ));
        assert_eq!(
            parse("add(2, 3))"),
            Err(ParseError::TooManyCloseParens)
        );
        assert!(matches!(
            parse("(2, 3)"),
            Err(ParseError::EmptyKeyword { .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let formula = format!("{}1{}", "add(1, ".repeat(5), ")".repeat(5));

        let parser = FormulaParser::new(Some(5));
        assert_eq!(parser.build(&formula).map(|ast| ast.depth()), Ok(5));

        let parser = FormulaParser::new(Some(4));
        assert_eq!(
            parser.build(&formula),
            Err(ParseError::NestingTooDeep { limit: 4 })
        );

        let parser = FormulaParser::new(None);
        assert!(parser.build(&formula).is_ok());
    }

    #[test]
    fn test_text_after_last_paren_is_ignored() {
        assert_eq!(parse("add(2,3)x"), parse("add(2, 3)"));
    }
}

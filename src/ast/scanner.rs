use crate::error::ParseError;
use log::trace;

/// Returns the function name in front of the first `(`, e.g. `add` for `add(2, 3)`.
pub fn extract_keyword(input: &str) -> Result<&str, ParseError> {
    let open = input
        .find('(')
        .ok_or_else(|| ParseError::MissingOpenParen {
            text: input.to_string(),
        })?;

    let keyword = input[..open].trim();
    if keyword.is_empty() {
        return Err(ParseError::EmptyKeyword {
            text: input.to_string(),
        });
    }

    Ok(keyword)
}

/// Returns the trimmed text between the first `(` and the last `)`.
pub fn extract_parameter_content(input: &str) -> Result<&str, ParseError> {
    let open = input.find('(');
    let close = input.rfind(')');

    let open = open.ok_or_else(|| ParseError::MissingOpenParen {
        text: input.to_string(),
    })?;
    let close = close.ok_or_else(|| ParseError::MissingCloseParen {
        text: input.to_string(),
    })?;

    if close < open {
        return Err(ParseError::MismatchedParens {
            text: input.to_string(),
        });
    }

    Ok(input[open + 1..close].trim())
}

/// Splits parameter content on commas at nesting depth 0.
///
/// Nested calls keep their commas: `2, multiply(3, 4)` yields `["2", "multiply(3, 4)"]`.
/// Empty content yields no parameters at all. A trailing separator does not
/// produce an extra empty parameter, so `2,` yields `["2"]` and is then caught
/// by the arity check.
pub fn split_top_level_parameters(content: &str) -> Result<Vec<&str>, ParseError> {
    let mut parameters = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (index, ch) in content.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ParseError::TooManyCloseParens)?;
            }
            ',' if depth == 0 => {
                parameters.push(content[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnclosedParen);
    }

    if start < content.len() {
        parameters.push(content[start..].trim());
    }

    trace!("Split {:?} into {:?}", content, parameters);
    Ok(parameters)
}

pub fn validate_arity(keyword: &str, expected: usize, actual: usize) -> Result<(), ParseError> {
    if expected != actual {
        return Err(ParseError::ParameterCountMismatch {
            keyword: keyword.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

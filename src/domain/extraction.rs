//! Typed JSON extraction from chat-completion responses.
//!
//! Models rarely return bare JSON: the object is usually wrapped in markdown
//! fences or surrounded by prose. Extraction is a single validation pass:
//! locate the JSON span (fence contents first, then the outermost balanced
//! object), then parse it once into the expected typed schema. Any failure is
//! one [`ExtractionError`] classifying the cause; extraction never panics and
//! never falls back to string surgery on the payload.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Responses longer than this are classified as too large when they fail to
/// parse, mirroring the user-facing "response too large" failure cause.
pub const MAX_RESPONSE_LENGTH: usize = 50_000;

/// Errors that can occur while extracting a typed value from a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The response contains no JSON object at all.
    #[error("no JSON object found in response")]
    NoJsonFound,

    /// The response exceeds the size limit and did not parse.
    #[error("response too large: {actual} bytes exceeds {max} bytes")]
    TooLarge { max: usize, actual: usize },

    /// A JSON span was found but did not parse into the expected schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Extracts a typed value from a chat-completion response.
///
/// Steps:
/// 1. Trim the response and strip a markdown code fence if one wraps it.
/// 2. Locate the outermost balanced `{...}` span (string/escape aware).
/// 3. Parse that span once with serde into `T`.
///
/// # Errors
///
/// - [`ExtractionError::NoJsonFound`] when no `{` opens an object span.
/// - [`ExtractionError::TooLarge`] when an over-limit response fails to parse.
/// - [`ExtractionError::Malformed`] for any other parse or schema failure.
pub fn extract_json<T: DeserializeOwned>(response: &str) -> Result<T, ExtractionError> {
    let span = locate_json_span(response)?;

    serde_json::from_str(span).map_err(|e| {
        if response.len() > MAX_RESPONSE_LENGTH {
            ExtractionError::TooLarge {
                max: MAX_RESPONSE_LENGTH,
                actual: response.len(),
            }
        } else {
            ExtractionError::Malformed(e.to_string())
        }
    })
}

/// Locates the JSON object span within a response.
fn locate_json_span(response: &str) -> Result<&str, ExtractionError> {
    let trimmed = response.trim();

    let candidate = strip_code_fence(trimmed).unwrap_or(trimmed);

    let start = candidate.find('{').ok_or(ExtractionError::NoJsonFound)?;
    match balanced_object(candidate, start) {
        Some(span) => Ok(span),
        // Unbalanced braces: hand the tail to the parser so the error
        // message reflects the actual syntax problem.
        None => Ok(&candidate[start..]),
    }
}

/// Returns the contents of a ```json / ``` fence when one wraps the response.
fn strip_code_fence(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("```")?;
    // Skip an optional language tag on the fence line.
    let body_start = rest.find('\n')?;
    let body = &rest[body_start + 1..];
    let end = body.rfind("```")?;
    Some(body[..end].trim())
}

/// Finds the balanced `{...}` span starting at `start`, skipping brace
/// characters inside string literals.
fn balanced_object(s: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&s[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

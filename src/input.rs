//! Parsing of comma-separated size lists.
//!
//! Two policies:
//! - [`parse_sizes`] is strict: one malformed token rejects the whole
//!   list, and the error names every malformed token.
//! - [`parse_sizes_lenient`] keeps well-formed tokens and silently drops
//!   the rest, the way a forgiving form field behaves.
//!
//! A well-formed token is a run of ASCII digits (surrounding whitespace
//! allowed) whose value fits in a `u64`. Signs, decimals and blanks are
//! malformed.

use crate::error::SimError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a strict size list.
///
/// Blank input yields an empty list.
///
/// # Errors
/// `InvalidInput` (kind `MalformedToken`) listing every bad token.
///
/// ```
/// use os_sim::input::parse_sizes;
///
/// assert_eq!(parse_sizes("100, 500 ,200").unwrap(), vec![100, 500, 200]);
/// assert!(parse_sizes("100, -5").is_err());
/// ```
pub fn parse_sizes(input: &str) -> Result<Vec<u64>, SimError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut sizes = Vec::new();
    let mut errors = Vec::new();
    for (position, token) in input.split(',').enumerate() {
        match parse_token(token) {
            Some(size) => sizes.push(size),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedToken,
                format!("Malformed size '{}' at position {}", token.trim(), position + 1),
            )),
        }
    }

    if errors.is_empty() {
        Ok(sizes)
    } else {
        Err(SimError::InvalidInput(errors))
    }
}

/// Parses a size list, dropping malformed tokens.
///
/// ```
/// use os_sim::input::parse_sizes_lenient;
///
/// assert_eq!(parse_sizes_lenient("212, abc, 417,, -3, 112"), vec![212, 417, 112]);
/// ```
pub fn parse_sizes_lenient(input: &str) -> Vec<u64> {
    input.split(',').filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<u64> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_ok() {
        assert_eq!(
            parse_sizes("100, 500, 200, 300, 600").unwrap(),
            vec![100, 500, 200, 300, 600]
        );
        assert_eq!(parse_sizes("0").unwrap(), vec![0]);
        assert_eq!(parse_sizes("  7 ").unwrap(), vec![7]);
    }

    #[test]
    fn test_strict_blank() {
        assert!(parse_sizes("").unwrap().is_empty());
        assert!(parse_sizes("   ").unwrap().is_empty());
    }

    #[test]
    fn test_strict_reports_every_bad_token() {
        let err = parse_sizes("10, x, 20,, +4, 1.5").unwrap_err();
        assert_eq!(err.errors().len(), 4);
        assert!(err
            .errors()
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MalformedToken));
        assert_eq!(err.errors()[0].message, "Malformed size 'x' at position 2");
    }

    #[test]
    fn test_strict_overflow() {
        assert!(parse_sizes("18446744073709551616").is_err());
        assert_eq!(
            parse_sizes("18446744073709551615").unwrap(),
            vec![u64::MAX]
        );
    }

    #[test]
    fn test_lenient() {
        assert_eq!(parse_sizes_lenient("212, 417, 112, 426"), vec![212, 417, 112, 426]);
        assert_eq!(parse_sizes_lenient("1, two, 3"), vec![1, 3]);
        assert_eq!(parse_sizes_lenient("-1, 2.0, ,"), Vec::<u64>::new());
        assert!(parse_sizes_lenient("").is_empty());
    }
}

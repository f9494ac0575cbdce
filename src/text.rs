//! The sentinel/shape contract on the input text.
//!
//! `T[0] = T[N-1] = 0`, every interior byte is non-zero. Callers that need to
//! inject the sentinels or standardise an alphabet containing zero bytes do
//! so themselves — that step is an external collaborator.

use crate::config::check_capacity;
use crate::error::XssError;

/// Validate that `text` already satisfies the sentinel contract.
pub fn validate(text: &[u8]) -> Result<(), XssError> {
    let n = text.len();
    if n < 3 {
        return Err(XssError::TooShort);
    }
    if text[0] != 0 || text[n - 1] != 0 {
        return Err(XssError::MissingSentinel);
    }
    if text[1..n - 1].iter().any(|&b| b == 0) {
        return Err(XssError::InteriorSentinel);
    }
    check_capacity(n);
    Ok(())
}

/// Wrap `data` with a leading and trailing sentinel byte (`0`), the shape
/// every operation in this crate expects. `data` must not itself contain a
/// zero byte — callers with a zero-containing alphabet must standardise it
/// first.
pub fn sentinel_wrap(data: &[u8]) -> Vec<u8> {
    let mut text = Vec::with_capacity(data.len() + 2);
    text.push(0);
    text.extend_from_slice(data);
    text.push(0);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_with_sentinels() {
        let t = sentinel_wrap(b"banana");
        assert_eq!(t.first(), Some(&0));
        assert_eq!(t.last(), Some(&0));
        assert_eq!(t.len(), 8);
        assert!(validate(&t).is_ok());
    }

    #[test]
    fn rejects_too_short() {
        assert_eq!(validate(&[0, 0]), Err(XssError::TooShort));
    }

    #[test]
    fn rejects_missing_sentinel() {
        assert_eq!(validate(&[1, 2, 0]), Err(XssError::MissingSentinel));
        assert_eq!(validate(&[0, 2, 1]), Err(XssError::MissingSentinel));
    }

    #[test]
    fn rejects_interior_sentinel() {
        assert_eq!(validate(&[0, 1, 0, 2, 0]), Err(XssError::InteriorSentinel));
    }
}

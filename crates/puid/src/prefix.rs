use crate::{Error, Result};

/// Number of letters in a non-empty prefix.
pub const PREFIX_LEN: usize = 3;

/// Returns true if `s` is exactly three lowercase ASCII letters.
#[must_use]
pub fn is_prefix(s: &str) -> bool {
    s.len() == PREFIX_LEN && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Checks that `prefix` is either empty or exactly three lowercase `a-z`
/// letters. The empty prefix opts out of prefixing.
///
/// # Errors
///
/// Returns [`Error::InvalidPrefix`] for any other value.
///
/// # Example
///
/// ```
/// use puid::validate_prefix;
///
/// assert!(validate_prefix("acc").is_ok());
/// assert!(validate_prefix("").is_ok());
/// assert!(validate_prefix("Acc").is_err());
/// ```
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || is_prefix(prefix) {
        Ok(())
    } else {
        Err(Error::InvalidPrefix {
            prefix: prefix.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_lowercase_letters_or_empty() {
        assert!(validate_prefix("abc").is_ok());
        assert!(validate_prefix("zzz").is_ok());
        assert!(validate_prefix("").is_ok());
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["ABC", "ab1", "abcd", "ab", "a-c", "ab ", "äbc", "invalidPrefix123"] {
            assert_eq!(
                validate_prefix(bad).unwrap_err(),
                Error::InvalidPrefix {
                    prefix: bad.to_owned()
                },
                "{bad:?}"
            );
        }
    }

    #[test]
    fn is_prefix_excludes_the_empty_sentinel() {
        assert!(is_prefix("tst"));
        assert!(!is_prefix(""));
    }
}

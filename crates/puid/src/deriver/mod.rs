//! Deterministic assignment of unique 3-letter prefixes to model names.
//!
//! Run once per schema: the same batch in the same order always yields the
//! same map.

mod heuristics;

#[cfg(test)]
mod tests;

pub use heuristics::{HEURISTICS, Heuristic};

use crate::{Error, PREFIX_LEN, Result, is_prefix};
use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Longest accepted model name.
pub const MAX_MODEL_NAME_LEN: usize = 100;

/// Prefix to model name, as returned by [`derive_prefixes`].
pub type PrefixMap = BTreeMap<String, String>;

/// Returns true if `name` is 1 to 100 lowercase `a-z` letters.
#[must_use]
pub fn is_model_name(name: &str) -> bool {
    (1..=MAX_MODEL_NAME_LEN).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_lowercase())
}

/// Assigns a unique prefix to every model name, in input order.
///
/// The whole batch is checked before anything is derived, so a caller sees
/// every bad name at once: invalid names first, then repeated ones.
///
/// # Errors
///
/// - [`Error::InvalidModelNames`] listing every name that is not 1-100
///   lowercase letters
/// - [`Error::DuplicateModelNames`] listing every repeated occurrence
/// - [`Error::ModelNameTooShort`], [`Error::HeuristicInvariantViolation`] or
///   [`Error::PrefixExhausted`] from [`derive_prefix`]
///
/// No partial map is ever returned.
///
/// # Example
///
/// ```
/// let prefixes = puid::derive_prefixes(&["account", "invoice", "invite", "session"]).unwrap();
/// assert_eq!(prefixes["acc"], "account");
/// assert_eq!(prefixes["inv"], "invoice");
/// assert_eq!(prefixes["ivt"], "invite");
/// assert_eq!(prefixes["ssn"], "session");
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(models = names.len()), err)
)]
pub fn derive_prefixes<S: AsRef<str>>(names: &[S]) -> Result<PrefixMap> {
    check_batch(names)?;

    let mut assigned = PrefixMap::new();
    for name in names {
        let name = name.as_ref();
        let prefix = derive_prefix(name, &assigned)?;
        assigned.insert(prefix, name.to_owned());
    }
    Ok(assigned)
}

fn check_batch<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut invalid = Vec::new();
    let mut duplicates = Vec::new();

    for name in names.iter().map(AsRef::as_ref) {
        if !is_model_name(name) {
            invalid.push(name.to_owned());
        } else if !seen.insert(name) {
            duplicates.push(name.to_owned());
        }
    }

    if !invalid.is_empty() {
        return Err(Error::InvalidModelNames { names: invalid });
    }
    if !duplicates.is_empty() {
        return Err(Error::DuplicateModelNames { names: duplicates });
    }
    Ok(())
}

/// Derives one prefix for `name` that is not yet a key of `assigned`.
///
/// Heuristics run in [`HEURISTICS`] order; a candidate that is already taken
/// falls through to the next one. Use this to extend an existing assignment
/// without re-deriving it.
///
/// # Errors
///
/// - [`Error::InvalidModelNames`] if `name` is not 1-100 lowercase letters
/// - [`Error::ModelNameTooShort`] if `name` has fewer than three letters
/// - [`Error::HeuristicInvariantViolation`] if a heuristic returns a
///   non-empty candidate that is not three lowercase letters
/// - [`Error::PrefixExhausted`] if every candidate is taken
pub fn derive_prefix(name: &str, assigned: &PrefixMap) -> Result<String> {
    if !is_model_name(name) {
        return Err(Error::InvalidModelNames {
            names: vec![name.to_owned()],
        });
    }
    if name.len() < PREFIX_LEN {
        return Err(Error::ModelNameTooShort {
            name: name.to_owned(),
        });
    }

    let chars = name.as_bytes();
    for (slot, heuristic) in HEURISTICS.iter().enumerate() {
        let Some(candidate) = heuristic(chars).filter(|c| !c.is_empty()) else {
            continue;
        };
        if !is_prefix(&candidate) {
            return Err(Error::HeuristicInvariantViolation {
                name: name.to_owned(),
                prefix: candidate,
                heuristic: slot + 1,
            });
        }
        if assigned.contains_key(&candidate) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                name,
                candidate = candidate.as_str(),
                heuristic = slot + 1,
                "prefix already assigned, trying next heuristic"
            );
            continue;
        }
        return Ok(candidate);
    }

    Err(Error::PrefixExhausted {
        name: name.to_owned(),
    })
}

//! The ordered prefix candidates tried for each model name.
//!
//! Every heuristic sees the name as lowercase ASCII bytes and may decline by
//! returning `None`. Order runs from most pronounceable to most mechanical;
//! the last one always yields three characters for names of length 3 or more.

use crate::PREFIX_LEN;

/// A single prefix heuristic.
pub type Heuristic = fn(&[u8]) -> Option<String>;

/// Heuristics in priority order. Slots 4 and 5 are identical on purpose: both
/// count toward the attempts made before a name is exhausted.
pub const HEURISTICS: [Heuristic; 6] = [
    exact_length,
    sparse_after_first,
    sparse_after_second,
    leading_consonants,
    leading_consonants,
    first_three,
];

const VOWELS: &[u8] = b"aeiou";

fn is_consonant(c: u8) -> bool {
    !VOWELS.contains(&c)
}

fn to_prefix(chars: impl IntoIterator<Item = u8>) -> String {
    chars.into_iter().map(char::from).collect()
}

/// `mfa` -> `mfa`. Any other length declines.
fn exact_length(chars: &[u8]) -> Option<String> {
    (chars.len() == PREFIX_LEN).then(|| to_prefix(chars.iter().copied()))
}

/// First letter plus consonants from `offset` on. The n-th consonant is
/// dropped when it equals the name's letter at index n-1, which removes
/// doubled letters near the start of the name (`session` -> `ssn`). One
/// survivor is doubled, none declines.
fn sparse_consonants(chars: &[u8], offset: usize) -> Option<String> {
    let &first = chars.first()?;
    let mut survivors = chars
        .get(offset..)?
        .iter()
        .copied()
        .filter(|&c| is_consonant(c))
        .enumerate()
        .filter(|&(n, c)| n == 0 || chars[n - 1] != c)
        .map(|(_, c)| c);

    let second = survivors.next()?;
    let third = survivors.next().unwrap_or(second);
    Some(to_prefix([first, second, third]))
}

/// `setup` -> `stp`, `invoice` -> `inv`.
fn sparse_after_first(chars: &[u8]) -> Option<String> {
    sparse_consonants(chars, 1)
}

/// Skips the second letter, for names of four or more: `invite` -> `ivt`.
fn sparse_after_second(chars: &[u8]) -> Option<String> {
    if chars.len() < PREFIX_LEN + 1 {
        return None;
    }
    sparse_consonants(chars, 2)
}

/// First letter plus the next two consonants, without repeat filtering. May
/// come up short when the name has fewer than two consonants after the first
/// letter.
fn leading_consonants(chars: &[u8]) -> Option<String> {
    let (&first, rest) = chars.split_first()?;
    let tail = rest.iter().copied().filter(|&c| is_consonant(c)).take(2);
    Some(to_prefix(core::iter::once(first).chain(tail)))
}

/// The first three letters verbatim: `setting` -> `set`.
fn first_three(chars: &[u8]) -> Option<String> {
    chars.get(..PREFIX_LEN).map(|c| to_prefix(c.iter().copied()))
}

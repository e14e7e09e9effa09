//! Alphabet presets, prefix-free hint generation, and hint assignment.
//!
//! Hints are short strings over a chosen alphabet. The generator minimizes
//! the maximum hint length and, within that, uses as many short hints as
//! possible. No hint is ever a prefix of another: the trailing length-(L-1)
//! sequences that would collide are withheld from the short set and used
//! exclusively as prefixes for the long set.

use indexmap::IndexMap;

use crate::group::ContentGroups;

/// Preset used when an unknown preset name is requested.
pub const DEFAULT_ALPHABET: &str = "vim-movement";

/// Named alphabet presets. Order within each preset is significant: earlier
/// characters are handed out first.
pub const ALPHABETS: &[(&str, &str)] = &[
    ("numeric", "1234567890"),
    ("abcd", "abcd"),
    ("qwerty", "asdfqwerzxcvjklmiuopghtybn"),
    ("qwerty-homerow", "asdfjklgh"),
    ("qwerty-left-hand", "asdfqwerzcxv"),
    ("qwerty-right-hand", "jkluiopmyhn"),
    ("dvorak", "aoeuqjkxpyhtnsgcrlmwvzfidb"),
    ("dvorak-homerow", "aoeuhtnsid"),
    ("colemak", "arstqwfpzxcvneioluymdhgjbk"),
    ("colemak-homerow", "arstneiodh"),
    ("vim-movement", "hjklwbef"),
    ("vim-homerow", "hjklasdfg"),
];

/// Distinct matched text mapped to its assigned hint, in group order.
pub type HintAssignments = IndexMap<String, String>;

/// Look up a preset's character sequence.
///
/// Unknown names fall back to [`DEFAULT_ALPHABET`]; the caller asked for
/// hints, not an error.
pub fn alphabet_chars(name: &str) -> &'static str {
    lookup(name).or_else(|| lookup(DEFAULT_ALPHABET)).unwrap_or("")
}

fn lookup(name: &str) -> Option<&'static str> {
    ALPHABETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, chars)| *chars)
}

/// Generate `count` distinct, prefix-free hints over `alphabet`.
///
/// Deterministic in (count, alphabet). Returns an empty vec for a
/// non-positive count or an empty alphabet; callers that care can detect the
/// length mismatch.
///
/// With `a` alphabet characters and minimal `L` such that `a^L >= count`,
/// the result holds `n_short = (a^L - count) / (a - 1)` hints of length
/// `L - 1` followed by `count - n_short` hints of length `L`. Sequences are
/// enumerated by index in base-`a`, so generation needs no resumable
/// iterator state.
pub fn generate_hints(count: usize, alphabet: &str) -> Vec<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    let a = chars.len();
    if count == 0 || a == 0 {
        return Vec::new();
    }
    if a == 1 {
        // a single letter cannot form a prefix-free set larger than one
        return if count == 1 {
            vec![chars[0].to_string()]
        } else {
            Vec::new()
        };
    }

    let mut len = 1usize;
    let mut capacity = a as u128;
    while capacity < count as u128 {
        capacity *= a as u128;
        len += 1;
    }

    if len == 1 {
        return chars.iter().take(count).map(char::to_string).collect();
    }

    let n_short = ((capacity - count as u128) / (a as u128 - 1)) as usize;
    let n_long = count - n_short;

    let mut hints = Vec::with_capacity(count);
    for index in 0..n_short {
        hints.push(sequence(&chars, index, len - 1));
    }

    // the length-(L-1) sequences not used above become prefixes; no prefix is
    // ever also a hint, which is exactly the prefix-free guarantee
    let mut prefix_index = n_short;
    let mut produced = 0;
    'prefixes: loop {
        let prefix = sequence(&chars, prefix_index, len - 1);
        for c in &chars {
            let mut hint = prefix.clone();
            hint.push(*c);
            hints.push(hint);
            produced += 1;
            if produced == n_long {
                break 'prefixes;
            }
        }
        prefix_index += 1;
    }

    hints
}

/// The `index`-th length-`len` sequence over `chars` in lexicographic
/// (alphabet-order) enumeration, by base-`a` radix conversion.
fn sequence(chars: &[char], index: usize, len: usize) -> String {
    let a = chars.len();
    let mut out = vec![chars[0]; len];
    let mut rest = index;
    for slot in out.iter_mut().rev() {
        *slot = chars[rest % a];
        rest /= a;
    }
    out.into_iter().collect()
}

/// Assign one hint per content group, in group insertion order.
///
/// `alphabet` is the raw character sequence (see [`alphabet_chars`] for
/// preset lookup). Identical text already shares a group, so identical text
/// always receives the same hint.
pub fn assign_hints(groups: &ContentGroups, alphabet: &str) -> HintAssignments {
    let hints = generate_hints(groups.len(), alphabet);
    groups
        .keys()
        .zip(hints)
        .map(|(text, hint)| (text.clone(), hint))
        .collect()
}

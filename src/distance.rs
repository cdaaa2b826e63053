//! Edit distance and closest-match selection for typo suggestions.
//!
//! Distance is classic Levenshtein (single-character insertions, deletions,
//! substitutions) computed over Unicode code points, case-sensitive. Command
//! names are short, so the two-row dynamic-programming form is plenty.

use crate::error::DispatchError;

/// Levenshtein distance between `a` and `b`, counting each code point as one
/// unit. Total over all inputs: `distance("", s)` is `s.chars().count()`.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    // Rolling two-row buffer; prev_row[j] holds the distance between the
    // first i characters of `a` and the first j characters of `b`.
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0usize; n + 1];

    for (i, a_ch) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// The candidate minimizing [`distance`] to `target`.
///
/// Ties break to the earliest candidate, so suggestions are reproducible for
/// a given registration order. An empty `candidates` slice is a caller bug
/// and yields [`DispatchError::EmptyCandidateSet`]; the router never calls
/// this without checking first.
pub fn closest_match<'a>(
    target: &str,
    candidates: &'a [String],
) -> Result<&'a str, DispatchError> {
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let d = distance(target, candidate);
        // Strict less-than keeps the first of equally distant candidates.
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((candidate.as_str(), d));
        }
    }

    best.map(|(c, _)| c).ok_or(DispatchError::EmptyCandidateSet)
}

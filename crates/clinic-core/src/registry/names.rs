//! Owner name normalization.
//!
//! Handles:
//! - Trimming surrounding whitespace
//! - Title casing (first letter of every word upper, the rest lower)
//! - Near-duplicate detection for registration hints

/// Minimum Jaro-Winkler similarity for two normalized names to count as "similar".
pub const SIMILAR_NAME_THRESHOLD: f64 = 0.92;

/// Normalize an owner name into its dedup key.
///
/// A letter is upper-cased when it follows a non-letter (or starts the string)
/// and lower-cased otherwise, so `"  o'BRIEN ana"` becomes `"O'Brien Ana"`.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Similarity between two already-normalized names, in `0.0..=1.0`.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(&a.to_lowercase(), &b.to_lowercase())
}

/// Whether two distinct normalized names are close enough to warrant a hint.
pub fn is_similar_name(a: &str, b: &str) -> bool {
    a != b && name_similarity(a, b) >= SIMILAR_NAME_THRESHOLD
}

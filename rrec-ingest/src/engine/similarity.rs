//! Fuzzy string similarity
//!
//! Case-insensitive Ratcliff/Obershelp sequence ratio: find the longest
//! common contiguous block, recurse on both flanks, and report twice the
//! matched character count over the combined length. Bounded to [0,1] and
//! symmetric in its arguments.

/// Similarity ratio between two strings, in [0,1]
///
/// Identical strings (case-insensitively) score 1.0, including two empty
/// strings; a single empty side scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let combined = a.len() + b.len();
    if combined == 0 {
        return 1.0;
    }

    let matched = matching_chars(&a, &b);
    (2.0 * matched as f64) / combined as f64
}

/// Total characters covered by recursively chosen longest common blocks
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + size..], &b[b_start + size..])
}

/// Longest common contiguous block, earliest occurrence on ties
///
/// Returns (start in a, start in b, length). Rolling-row DP, O(|a|*|b|)
/// time and O(|b|) space.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut row = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        let mut prev = 0;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            if ac == bc {
                let run = prev + 1;
                row[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                row[j + 1] = 0;
            }
            prev = above;
        }
    }

    best
}

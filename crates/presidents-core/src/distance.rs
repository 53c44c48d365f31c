//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the DP table are enough
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("washington", "washingtn"), 1);
        assert_eq!(edit_distance("republicann", "republican"), 1);
        assert_eq!(edit_distance("lincon", "lincoln"), 1);
    }

    #[test]
    fn zero_iff_equal() {
        let words = ["", "a", "adams", "george washington", "whig", "whigg"];
        for a in words {
            for b in words {
                assert_eq!(edit_distance(a, b) == 0, a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn symmetric_and_triangle() {
        let words = ["polk", "pierce", "pierece", "taylor", "tyler", "", "fillmore"];
        for a in words {
            for b in words {
                assert_eq!(edit_distance(a, b), edit_distance(b, a));
                for c in words {
                    assert!(edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c));
                }
            }
        }
    }
}

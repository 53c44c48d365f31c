//! Free-text canonicalisation for answer comparison.

/// Lower-case `input`, turn every character outside `a-z` into a space,
/// collapse runs of whitespace and trim.
///
/// Total and idempotent: the output only ever contains lowercase ASCII
/// letters separated by single spaces.
pub fn normalize(input: &str) -> String {
    let letters: String = input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();
    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonicalise a party answer.
///
/// Removes the word "party", normalises the rest and folds the common
/// spellings of each party onto its canonical token. Anything that matches
/// no rule is returned normalised but otherwise untouched.
pub fn normalize_party(input: &str) -> String {
    let s = normalize(&input.to_lowercase().replace("party", ""));
    if s.is_empty() {
        return s;
    }

    if s == "none" || s == "independent" {
        "none".into()
    } else if s.starts_with("federal") {
        "federalist".into()
    } else if s.starts_with("democratic republican") || s == "democraticrepublican" {
        "democratic-republican".into()
    } else if s.contains("national") && s.contains("union") {
        "national union".into()
    } else if s.starts_with("whig") {
        "whig".into()
    } else if s.starts_with("democrat") {
        // "democratic" is covered by the same prefix
        "democrat".into()
    } else if s.ends_with("republican") {
        "republican".into()
    } else {
        s
    }
}

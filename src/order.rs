//! Ordering rules for manifest entries.
//!
//! Every category's image list is sorted on two levels:
//!
//! 1. **Featured score** — filenames matching the featured pattern
//!    (cover/hero names, or a zero-padded leading number like `0012.jpg`)
//!    sort before everything else. Galleries use this to pin a lead image
//!    to the front of a category without renaming the rest.
//! 2. **Natural path order** — digit runs compare as numbers, so `img2`
//!    sorts before `img10`; other text compares case-insensitively.
//!
//! The featured pattern is a plain regex carried in the config, so sites
//! with their own lead-image convention can override it per run.

use regex::Regex;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Default featured-name pattern.
///
/// Case-insensitive: the word `cover` or `hero` delimited by
/// non-alphanumerics, or one to three leading zeros followed by another
/// digit. Underscores and dashes count as delimiters, so `b_cover.jpg`
/// is featured while `discovery.jpg` is not.
pub const DEFAULT_FEATURED_PATTERN: &str =
    r"(?i)(^|[^0-9a-z])(cover|hero)([^0-9a-z]|$)|^0{1,3}[0-9]";

/// Compiled featured-name matcher plus the natural tiebreak.
#[derive(Debug, Clone)]
pub struct FeaturedMatcher {
    pattern: Regex,
}

impl FeaturedMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Score a relative path: 0 = featured, 1 = normal.
    ///
    /// Only the final path segment is inspected — a category or
    /// subdirectory named `covers/` does not feature its contents.
    pub fn score(&self, rel_path: &str) -> u8 {
        let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
        if self.pattern.is_match(name) { 0 } else { 1 }
    }

    /// Full manifest entry ordering: featured class first, then natural
    /// order on the whole relative path.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.score(a)
            .cmp(&self.score(b))
            .then_with(|| natural_cmp(a, b))
    }
}

/// Compare two strings naturally.
///
/// Digit runs compare by numeric value (`img2` < `img10`), everything
/// else per-character after ASCII lowercasing. Numerically equal runs
/// with different spellings (`01` vs `1`) and case-only differences fall
/// through to a raw comparison at the end, keeping the order total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut x = a.chars().peekable();
    let mut y = b.chars().peekable();

    loop {
        match (x.peek().copied(), y.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(cx), Some(cy)) => {
                if cx.is_ascii_digit() && cy.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut x, &mut y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let lx = cx.to_ascii_lowercase();
                    let ly = cy.to_ascii_lowercase();
                    if lx != ly {
                        return lx.cmp(&ly);
                    }
                    x.next();
                    y.next();
                }
            }
        }
    }
}

/// Consume the digit run at the front of both iterators and compare the
/// runs as numbers: more significant digits win, then digit-wise.
fn compare_digit_runs(x: &mut Peekable<Chars<'_>>, y: &mut Peekable<Chars<'_>>) -> Ordering {
    let rx = take_digits(x);
    let ry = take_digits(y);
    let sx = rx.trim_start_matches('0');
    let sy = ry.trim_start_matches('0');
    sx.len().cmp(&sy.len()).then_with(|| sx.cmp(sy))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FeaturedMatcher {
        FeaturedMatcher::new(DEFAULT_FEATURED_PATTERN).unwrap()
    }

    // =========================================================================
    // Featured pattern tests
    // =========================================================================

    #[test]
    fn cover_word_is_featured() {
        assert_eq!(matcher().score("Events/cover.jpg"), 0);
    }

    #[test]
    fn cover_after_underscore_is_featured() {
        assert_eq!(matcher().score("Events/b_cover.jpg"), 0);
    }

    #[test]
    fn cover_after_dash_is_featured() {
        assert_eq!(matcher().score("Events/summer-cover.webp"), 0);
    }

    #[test]
    fn cover_inside_word_is_not_featured() {
        assert_eq!(matcher().score("Events/discovery.jpg"), 1);
    }

    #[test]
    fn hero_is_featured_case_insensitive() {
        assert_eq!(matcher().score("Fashion/Hero.png"), 0);
        assert_eq!(matcher().score("Fashion/HERO-shot.png"), 0);
    }

    #[test]
    fn zero_padded_number_is_featured() {
        assert_eq!(matcher().score("Events/0012.jpg"), 0);
        assert_eq!(matcher().score("Events/0001.png"), 0);
        assert_eq!(matcher().score("Events/01.gif"), 0);
    }

    #[test]
    fn unpadded_number_is_not_featured() {
        assert_eq!(matcher().score("Events/12.jpg"), 1);
        assert_eq!(matcher().score("Events/1.jpg"), 1);
    }

    #[test]
    fn plain_name_is_not_featured() {
        assert_eq!(matcher().score("Events/a_mid.jpg"), 1);
    }

    #[test]
    fn directory_names_do_not_feature_files() {
        // Only the filename is scored, not intermediate segments.
        assert_eq!(matcher().score("Events/covers/plain.jpg"), 1);
    }

    #[test]
    fn custom_pattern_overrides_default() {
        let m = FeaturedMatcher::new(r"(?i)^lead").unwrap();
        assert_eq!(m.score("Events/lead-shot.jpg"), 0);
        assert_eq!(m.score("Events/cover.jpg"), 1);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(FeaturedMatcher::new("(unclosed").is_err());
    }

    // =========================================================================
    // Natural comparison tests
    // =========================================================================

    #[test]
    fn numeric_runs_compare_as_numbers() {
        assert_eq!(natural_cmp("img2.jpg", "img10.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("img10.jpg", "img2.jpg"), Ordering::Greater);
    }

    #[test]
    fn equal_strings_are_equal() {
        assert_eq!(natural_cmp("a.jpg", "a.jpg"), Ordering::Equal);
    }

    #[test]
    fn case_is_ignored_until_tiebreak() {
        assert_eq!(natural_cmp("Alpha.jpg", "beta.jpg"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(natural_cmp("0001.png", "b_cover.jpg"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_tie_broken_by_raw_text() {
        // 01 and 1 are numerically equal; the raw comparison keeps the
        // order total and deterministic.
        assert_eq!(natural_cmp("img01.jpg", "img1.jpg"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("img.jpg", "img.jpg.bak"), Ordering::Less);
    }

    #[test]
    fn full_sort_matches_expected_order() {
        let m = matcher();
        let mut files = vec![
            "Events/b_cover.jpg".to_string(),
            "Events/a_mid.jpg".to_string(),
            "Events/0001.png".to_string(),
        ];
        files.sort_by(|a, b| m.compare(a, b));
        assert_eq!(
            files,
            vec!["Events/0001.png", "Events/b_cover.jpg", "Events/a_mid.jpg"]
        );
    }

    #[test]
    fn natural_sort_within_unfeatured_class() {
        let m = matcher();
        let mut files = vec![
            "Cat/img2.jpg".to_string(),
            "Cat/img10.jpg".to_string(),
            "Cat/img1.jpg".to_string(),
        ];
        files.sort_by(|a, b| m.compare(a, b));
        assert_eq!(files, vec!["Cat/img1.jpg", "Cat/img2.jpg", "Cat/img10.jpg"]);
    }
}

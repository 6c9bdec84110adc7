//! Rule-based password strength scoring.
//!
//! Scoring is deterministic:
//!
//! - +1 each for length >= 8, >= 12 and >= 16
//! - +1 when at least three of lowercase, uppercase, digit and
//!   non-alphanumeric characters are present
//! - -1 (floored at 0) when a common weak substring appears, case-insensitively
//!
//! Length and repeated runs are measured in UTF-16 code units, so a character
//! outside the Basic Multilingual Plane counts twice and its surrogate halves
//! never form a run. Line terminators never take part in a run.
//!
//! The result is clamped to `0..=MAX_SCORE` and indexes the label and color
//! vocabularies.

use log::trace;

pub const MAX_SCORE: u8 = 4;

pub const LABELS: [&str; 5] = ["very weak", "weak", "okay", "strong", "very strong"];

pub const FEEDBACK_LENGTH: &str = "Use at least 8 characters";
pub const FEEDBACK_VARIETY: &str = "Mix upper and lower case letters, digits and symbols";
pub const FEEDBACK_COMMON: &str = "Avoid common patterns";
pub const FEEDBACK_REPEATED: &str = "Avoid repeated characters";
pub const FEEDBACK_GOOD: &str = "Good password!";

/// Substrings that mark a password as following a common pattern.
const DENYLIST: [&str; 5] = ["123", "abc", "qwerty", "password", "admin"];

const MIN_VARIETY: usize = 3;
const MAX_RUN: usize = 3;

/// Meter color for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
}

pub const COLORS: [Color; 5] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Lime,
    Color::Green,
];

impl Color {
    /// 256-color ANSI foreground escape.
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Red => "\x1b[38;5;196m",
            Color::Orange => "\x1b[38;5;208m",
            Color::Yellow => "\x1b[38;5;226m",
            Color::Lime => "\x1b[38;5;154m",
            Color::Green => "\x1b[38;5;46m",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    /// Score in `0..=MAX_SCORE`.
    pub score: u8,
    pub label: &'static str,
    pub color: Color,
    /// Never empty.
    pub feedback: Vec<&'static str>,
}

impl StrengthResult {
    fn new(score: u8, feedback: Vec<&'static str>) -> Self {
        let score = score.min(MAX_SCORE);
        let feedback = if feedback.is_empty() {
            vec![FEEDBACK_GOOD]
        } else {
            feedback
        };
        Self {
            score,
            label: LABELS[score as usize],
            color: COLORS[score as usize],
            feedback,
        }
    }

    /// Most important piece of advice, if the password is not already at the
    /// top score.
    pub fn hint(&self) -> Option<&'static str> {
        if self.score < MAX_SCORE {
            self.feedback.first().copied()
        } else {
            None
        }
    }

    /// Filled share of a strength meter, `(score + 1) / 5`.
    pub fn meter_fraction(&self) -> f64 {
        f64::from(self.score + 1) / f64::from(MAX_SCORE + 1)
    }
}

/// Score `candidate` and collect feedback. Total over all strings.
pub fn analyze(candidate: &str) -> StrengthResult {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();
    let length = candidate.encode_utf16().count();

    for threshold in [8, 12, 16] {
        if length >= threshold {
            score += 1;
        }
    }
    if length < 8 {
        feedback.push(FEEDBACK_LENGTH);
    }

    if variety(candidate) >= MIN_VARIETY {
        score += 1;
    } else {
        feedback.push(FEEDBACK_VARIETY);
    }

    if has_common_pattern(candidate) {
        score = score.saturating_sub(1);
        feedback.push(FEEDBACK_COMMON);
    }

    if has_run(candidate, MAX_RUN) {
        feedback.push(FEEDBACK_REPEATED);
    }

    trace!("scored {} code units at {}", length, score);
    StrengthResult::new(score, feedback)
}

/// Number of character categories present: lowercase, uppercase, digit and
/// anything outside ASCII alphanumerics.
fn variety(s: &str) -> usize {
    let (mut lower, mut upper, mut digit, mut other) = (false, false, false, false);
    for c in s.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => other = true,
        }
    }
    [lower, upper, digit, other].into_iter().filter(|b| *b).count()
}

/// ASCII-case-insensitive denylist match.
fn has_common_pattern(s: &str) -> bool {
    let folded = s.to_ascii_lowercase();
    DENYLIST.iter().any(|p| folded.contains(p))
}

/// `\n`, `\r`, U+2028 and U+2029.
fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x0a | 0x0d | 0x2028 | 0x2029)
}

/// True when some UTF-16 code unit other than a line terminator repeats
/// `min` or more times in a row.
fn has_run(s: &str, min: usize) -> bool {
    let mut prev = None;
    let mut run = 0;
    for unit in s.encode_utf16() {
        if is_line_terminator(unit) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(unit) {
            run += 1;
        } else {
            prev = Some(unit);
            run = 1;
        }
        if run >= min {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn empty_string() {
        let r = analyze("");
        assert_eq!(r.score, 0);
        assert_eq!(r.label, "very weak");
        assert_eq!(r.color, Color::Red);
        assert_eq!(r.feedback, vec![FEEDBACK_LENGTH, FEEDBACK_VARIETY]);
    }

    #[test]
    fn strong_sixteen_chars() {
        let r = analyze("Tr0ub4dor&3xyzPQ");
        assert_eq!(r.score, 4);
        assert_eq!(r.label, "very strong");
        assert_eq!(r.color, Color::Green);
        assert_eq!(r.feedback, vec![FEEDBACK_GOOD]);
        assert_eq!(r.hint(), None);
        assert_eq!(r.meter_fraction(), 1.0);
    }

    #[test]
    fn length_rules_stack() {
        // Same variety, no denylist hits, only length differs.
        assert_eq!(analyze("Xk7#mnp").score, 1);
        assert_eq!(analyze("Xk7#mnpq").score, 2);
        assert_eq!(analyze("Xk7#mnpqrstv").score, 3);
        assert_eq!(analyze("Xk7#mnpqrstvwyzd").score, 4);
        assert_eq!(analyze("Xk7#mnpqrstvwyzdXk7#mnpqrstvwyzd").score, 4);
    }

    #[test]
    fn denylist_penalty() {
        let bad = analyze("password123");
        let control = analyze("pxsswxrd947");
        assert_eq!(control.score, 1);
        assert_eq!(bad.score, control.score - 1);
        assert_eq!(bad.feedback, vec![FEEDBACK_VARIETY, FEEDBACK_COMMON]);
        assert_eq!(bad.hint(), Some(FEEDBACK_VARIETY));
    }

    #[test]
    fn denylist_is_case_insensitive() {
        let r = analyze("QWERTYuiop9!");
        assert!(r.feedback.contains(&FEEDBACK_COMMON));
        assert_eq!(r.score, 2);

        assert!(analyze("xAdMiNx").feedback.contains(&FEEDBACK_COMMON));
        assert!(analyze("zzABCzz").feedback.contains(&FEEDBACK_COMMON));
    }

    #[test]
    fn penalty_floors_at_zero() {
        let r = analyze("123");
        assert_eq!(r.score, 0);
        assert_eq!(
            r.feedback,
            vec![FEEDBACK_LENGTH, FEEDBACK_VARIETY, FEEDBACK_COMMON]
        );
    }

    #[test]
    fn repeated_runs() {
        let r = analyze("aaaAAA111");
        assert_eq!(r.score, 2);
        assert_eq!(r.label, "okay");
        assert_eq!(r.feedback, vec![FEEDBACK_REPEATED]);

        assert!(!analyze("aabbaabb").feedback.contains(&FEEDBACK_REPEATED));
        assert!(analyze("ab!!!cd").feedback.contains(&FEEDBACK_REPEATED));
    }

    #[test]
    fn feedback_order() {
        let r = analyze("aaa12");
        assert_eq!(
            r.feedback,
            vec![FEEDBACK_LENGTH, FEEDBACK_VARIETY, FEEDBACK_REPEATED]
        );
        let r = analyze("abc111");
        assert_eq!(
            r.feedback,
            vec![
                FEEDBACK_LENGTH,
                FEEDBACK_VARIETY,
                FEEDBACK_COMMON,
                FEEDBACK_REPEATED
            ]
        );
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        let r = analyze("Blåbærgrød7");
        assert_eq!(r.score, 2);
        assert_eq!(r.feedback, vec![FEEDBACK_GOOD]);
        assert_eq!(analyze("æøåÆØÅæø").score, 1);
    }

    #[test]
    fn line_terminators_never_repeat() {
        let r = analyze("Ab1!\n\n\nxyz");
        assert_eq!(r.feedback, vec![FEEDBACK_GOOD]);
        assert_eq!(r.score, 2);

        for run in ["\r\r\r", "\u{2028}\u{2028}\u{2028}", "\u{2029}\u{2029}\u{2029}"] {
            assert!(!analyze(run).feedback.contains(&FEEDBACK_REPEATED));
        }
        // A terminator splits a run.
        assert!(!analyze("xx\nx").feedback.contains(&FEEDBACK_REPEATED));
        assert!(analyze("\nxxx").feedback.contains(&FEEDBACK_REPEATED));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let r = analyze("😀😀😀😀");
        assert_eq!(r.score, 1);
        assert_eq!(r.feedback, vec![FEEDBACK_VARIETY]);

        let r = analyze("😀😀😀");
        assert_eq!(r.feedback, vec![FEEDBACK_LENGTH, FEEDBACK_VARIETY]);

        // 4 BMP letters are still too short.
        assert_eq!(analyze("æøåÆ").feedback[0], FEEDBACK_LENGTH);
    }

    #[test]
    fn pathological_inputs_stay_in_range() {
        let long = "a".repeat(100_000);
        let r = analyze(&long);
        assert_eq!(r.score, 3);
        assert_eq!(r.feedback, vec![FEEDBACK_VARIETY, FEEDBACK_REPEATED]);

        let symbols = analyze("!@#$%^&*()_+-=[]");
        assert_eq!(symbols.score, 3);

        let mut rng = StdRng::seed_from_u64(0x7374);
        for _ in 0..500 {
            let len = rng.random_range(0..80);
            let s: String = (0..len).map(|_| rng.random::<char>()).collect();
            let r = analyze(&s);
            assert!(r.score <= MAX_SCORE);
            assert!(!r.feedback.is_empty());
            assert_eq!(r.label, LABELS[r.score as usize]);
        }
    }

    #[test]
    fn analyze_is_idempotent() {
        for s in ["", "password123", "Tr0ub4dor&3xyzPQ", "aaaAAA111", "æøå"] {
            assert_eq!(analyze(s), analyze(s));
        }
    }

    #[test]
    fn meter_fraction_tracks_score() {
        assert!((analyze("").meter_fraction() - 0.2).abs() < 1e-9);
        assert!((analyze("aaaAAA111").meter_fraction() - 0.6).abs() < 1e-9);
    }
}

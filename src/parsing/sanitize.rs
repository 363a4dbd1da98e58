//! Line normalization applied before segmentation.
//!
//! Exports from different phones and locales disagree on whitespace, on how
//! AM/PM is spelled and on whether a comma follows the date. Each line is
//! rewritten into one neutral shape: `D/M/Y H:M[ AM|PM] - rest`.

use std::sync::LazyLock;

use regex::Regex;

/// Comma directly after the date at the start of a line (`1/2/23, 10:30`).
static DATE_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4}[/-]\d{1,2}[/-]\d{2}(?:\d{2})?),").expect("date comma pattern")
});

/// Locale AM/PM spellings after the header time (`a. m.`, `p.m.`, `pm`).
static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4}[/-]\d{1,2}[/-]\d{1,4} \d{1,2}:\d{2}(?::\d{2})?)\s?([aApP])\.?\s?[mM](?:\.|\b)")
        .expect("meridiem pattern")
});

/// Characters some locales use where a plain space is meant.
const SPACE_LIKE: [char; 3] = ['\u{00a0}', '\u{202f}', '\u{2007}'];

/// Direction marks that iOS exports put in front of lines.
const INVISIBLE: [char; 2] = ['\u{200e}', '\u{200f}'];

/// Normalizes one raw transcript line.
///
/// - non-breaking spaces become spaces, direction marks are removed
/// - a comma right after a two- or four-digit year is removed
/// - `a. m.` / `p. m.` and friends after the time become `AM` / `PM`
/// - leading and trailing whitespace is trimmed
///
/// # Example
///
/// ```rust
/// use whatstat::parsing::sanitize_line;
///
/// assert_eq!(
///     sanitize_line("1/2/23, 10:30 - Alice: hello, world"),
///     "1/2/23 10:30 - Alice: hello, world"
/// );
/// assert_eq!(
///     sanitize_line("25/12/2023, 8:05\u{a0}p.\u{a0}m. - Ana: hola"),
///     "25/12/2023 8:05 PM - Ana: hola"
/// );
/// ```
pub fn sanitize_line(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .filter(|c| !INVISIBLE.contains(c))
        .map(|c| if SPACE_LIKE.contains(&c) { ' ' } else { c })
        .collect();
    let trimmed = cleaned.trim();

    let without_comma = DATE_COMMA.replace(trimmed, "$1");
    MERIDIEM
        .replace(&without_comma, |caps: &regex::Captures<'_>| {
            format!("{} {}M", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

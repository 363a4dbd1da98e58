//! Splits sanitized lines into message headers.
//!
//! A header is a line starting with a date and a time:
//!
//! ```text
//! 1-4 digits, / or -, 1-2 digits, / or -, 1-4 digits, space, H:M ...
//! ```
//!
//! Everything else (continuations of multi-line messages, blank lines,
//! export banners) is discarded unless orphan joining is enabled.

use std::sync::LazyLock;

use regex::Regex;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,4}[/-]\d{1,2}[/-]\d{1,4} \d{1,2}:\d{1,2}").expect("header pattern")
});

/// Separator between the timestamp and the rest of a header line.
const HEADER_SEPARATOR: &str = " - ";

/// A sanitized line tagged with whether it opens a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub text: &'a str,
    pub is_header: bool,
}

impl<'a> RawLine<'a> {
    pub fn classify(text: &'a str) -> Self {
        Self {
            text,
            is_header: HEADER.is_match(text),
        }
    }
}

/// A header split into its timestamp and everything after ` - `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Timestamp with each date component padded to two digits.
    pub date_string: String,
    /// `Author: body`, or a system notice without an author.
    pub rest: String,
}

/// Returns `true` if the line starts with a date and time.
pub fn is_header(line: &str) -> bool {
    HEADER.is_match(line)
}

/// Segments sanitized lines into `(date_string, rest)` pairs in file order.
///
/// Headers that do not contain ` - ` are malformed and dropped. Non-header
/// lines are dropped too, or appended to the previous segment on a new line
/// when `join_orphans` is set.
///
/// # Example
///
/// ```rust
/// use whatstat::parsing::segment_lines;
///
/// let lines = ["1/2/23 10:30 - Alice: hello", "and more", "garbage"];
/// let segments = segment_lines(&lines, false);
///
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].date_string, "01/02/23 10:30");
/// assert_eq!(segments[0].rest, "Alice: hello");
/// ```
pub fn segment_lines<S: AsRef<str>>(lines: &[S], join_orphans: bool) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for line in lines {
        let raw = RawLine::classify(line.as_ref());

        if raw.is_header {
            if let Some((date, rest)) = raw.text.split_once(HEADER_SEPARATOR) {
                segments.push(Segment {
                    date_string: pad_date(date),
                    rest: rest.to_string(),
                });
            } else {
                tracing::debug!(line = raw.text, "dropping header without separator");
            }
        } else if join_orphans && !raw.text.is_empty() {
            if let Some(last) = segments.last_mut() {
                last.rest.push('\n');
                last.rest.push_str(raw.text);
            }
        }
    }

    segments
}

/// Pads every numeric date component to width two.
///
/// Only the date part (before the first space) is touched; the time is kept
/// as written. `1/2/23 9:05` becomes `01/02/23 9:05`.
pub fn pad_date(date_string: &str) -> String {
    let (date, time) = date_string
        .split_once(' ')
        .map_or((date_string, None), |(d, t)| (d, Some(t)));

    let mut padded = String::with_capacity(date_string.len() + 3);
    for piece in date.split_inclusive(['/', '-']) {
        let (digits, separator) = match piece.chars().last() {
            Some(c @ ('/' | '-')) => (&piece[..piece.len() - 1], Some(c)),
            _ => (piece, None),
        };
        for _ in digits.len()..2 {
            padded.push('0');
        }
        padded.push_str(digits);
        if let Some(separator) = separator {
            padded.push(separator);
        }
    }

    if let Some(time) = time {
        padded.push(' ');
        padded.push_str(time);
    }
    padded
}

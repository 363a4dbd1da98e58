//! Separates `Author: body` and drops unattributable segments.

use crate::config::AnalyzerConfig;
use crate::message::RawMessage;
use crate::parsing::segment::Segment;

/// Splits one segment into author and body.
///
/// Returns `None` for system notices (joins, leaves, encryption banners) that
/// carry no `": "` after the author. Only the first `": "` splits, so bodies
/// keep their own colons.
///
/// # Example
///
/// ```rust
/// use whatstat::parsing::{Segment, split_author};
///
/// let segment = Segment {
///     date_string: "01/02/23 10:30".into(),
///     rest: "Alice: note: bring snacks".into(),
/// };
/// let message = split_author(&segment).unwrap();
/// assert_eq!(message.author, "Alice");
/// assert_eq!(message.body, "note: bring snacks");
/// ```
pub fn split_author(segment: &Segment) -> Option<RawMessage> {
    if !segment.rest.contains(':') {
        return None;
    }
    let (author, body) = segment.rest.split_once(": ")?;
    Some(RawMessage::new(segment.date_string.as_str(), author, body))
}

/// Splits every segment, applying the configured author aliases.
pub fn split_authors(segments: &[Segment], config: &AnalyzerConfig) -> Vec<RawMessage> {
    let messages: Vec<RawMessage> = segments
        .iter()
        .filter_map(split_author)
        .map(|mut message| {
            if let Some(canonical) = config.author_aliases.get(&message.author) {
                message.author.clone_from(canonical);
            }
            message
        })
        .collect();

    tracing::debug!(
        kept = messages.len(),
        dropped = segments.len() - messages.len(),
        "split authors"
    );
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(rest: &str) -> Segment {
        Segment {
            date_string: "01/02/23 10:30".into(),
            rest: rest.into(),
        }
    }

    #[test]
    fn test_split_basic() {
        let msg = split_author(&segment("Alice: hello, world")).unwrap();
        assert_eq!(msg.author, "Alice");
        assert_eq!(msg.body, "hello, world");
        assert_eq!(msg.date_string, "01/02/23 10:30");
    }

    #[test]
    fn test_system_notice_dropped() {
        assert!(split_author(&segment("Alice added Bob")).is_none());
        assert!(split_author(&segment("Messages and calls are end-to-end encrypted.")).is_none());
    }

    #[test]
    fn test_colon_without_space_dropped() {
        assert!(split_author(&segment("Alice changed the time to 10:45")).is_none());
    }

    #[test]
    fn test_empty_body_kept() {
        let msg = split_author(&segment("Alice: ")).unwrap();
        assert_eq!(msg.body, "");
    }

    #[test]
    fn test_aliases_applied() {
        let config = AnalyzerConfig::new().with_alias("+54 9 11 5555-0000", "Eric");
        let segments = vec![
            segment("+54 9 11 5555-0000: hola"),
            segment("Alice: hi"),
            segment("Alice left"),
        ];
        let messages = split_authors(&segments, &config);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, "Eric");
        assert_eq!(messages[1].author, "Alice");
    }
}

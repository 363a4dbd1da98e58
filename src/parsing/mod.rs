//! Transcript parsing stages.
//!
//! Each stage is a pure function over the output of the previous one:
//!
//! 1. [`sanitize_line`] - neutralize locale punctuation and AM/PM spellings
//! 2. [`segment_lines`] - keep header lines, split `date - rest`
//! 3. [`split_authors`] - split `Author: body`, drop system notices
//! 4. [`infer_date_format`] - sample the dates and pick one layout for the file
//!
//! The date strings are only parsed once the format is known; see
//! [`pipeline`](crate::pipeline) for the full chain.

pub mod author;
pub mod date_format;
pub mod sanitize;
pub mod segment;

pub use author::{split_author, split_authors};
pub use date_format::{
    Clock, DateFormat, DateOrder, YearWidth, infer_date_format, infer_from_sample,
};
pub use sanitize::sanitize_line;
pub use segment::{RawLine, Segment, is_header, pad_date, segment_lines};

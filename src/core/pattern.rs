//! Prefix pattern compilation and rendering
//!
//! A prefix format string such as `"%d %l %f:%n: "` is compiled once into an
//! ordered list of segments, then replayed against each log event to build
//! the line prefix. Selectors:
//!
//! | selector | expands to |
//! |----------|------------|
//! | `%d` | timestamp, `YYYY-MM-DD HH:MM:SS.uuuuuu` |
//! | `%l` | level name, left-justified to 5 columns |
//! | `%f` | source file name |
//! | `%n` | source line number |
//!
//! Any other `%<c>` pair is kept in the output as literal text; a `%` with
//! nothing after it fails compilation.

use super::error::{LoggerError, Result};
use super::log_event::LogEvent;

/// Timestamp layout used by `%d`: local wall-clock seconds with zero-padded
/// six-digit microseconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Column width `%l` pads level names to.
const LEVEL_NAME_WIDTH: usize = 5;

/// A dynamic field a pattern segment resolves from a [`LogEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    LevelName,
    SourceFile,
    SourceLine,
}

/// One compiled unit of a prefix pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Raw characters emitted verbatim
    Literal(String),
    /// A field resolved from the event, optionally left-justified to a
    /// minimum width
    Dynamic {
        field: Field,
        min_width: Option<usize>,
    },
}

/// An immutable, compiled prefix plan.
///
/// Compiled once when a logger is initialized and shared read-only across
/// all subsequent calls; rendering never mutates the plan, so concurrent
/// readers need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixPattern {
    segments: Vec<Segment>,
}

impl PrefixPattern {
    /// Compile a format string into an ordered segment plan.
    ///
    /// A single left-to-right pass; the scanner state lives entirely on this
    /// stack frame. An empty pattern compiles to an empty plan that renders
    /// as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidPattern`] when the pattern ends with a
    /// bare `%` (no selector character follows).
    pub fn compile(pattern: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }

            match chars.next() {
                Some('d') => Self::push_dynamic(&mut segments, &mut literal, Field::Timestamp, None),
                Some('l') => Self::push_dynamic(
                    &mut segments,
                    &mut literal,
                    Field::LevelName,
                    Some(LEVEL_NAME_WIDTH),
                ),
                Some('f') => {
                    Self::push_dynamic(&mut segments, &mut literal, Field::SourceFile, None)
                }
                Some('n') => {
                    Self::push_dynamic(&mut segments, &mut literal, Field::SourceLine, None)
                }
                Some(other) => {
                    // Unknown selectors stay in the output as-is
                    literal.push('%');
                    literal.push(other);
                }
                None => {
                    return Err(LoggerError::InvalidPattern {
                        message: format!("pattern '{pattern}' ends with a bare '%'"),
                    });
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    fn push_dynamic(
        segments: &mut Vec<Segment>,
        literal: &mut String,
        field: Field,
        min_width: Option<usize>,
    ) {
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(literal)));
        }
        segments.push(Segment::Dynamic { field, min_width });
    }

    /// Replay the plan against one event, producing the prefix text.
    ///
    /// Pure function of its inputs; no trailing separator is added.
    #[must_use]
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Dynamic { field, min_width } => {
                    let value = match field {
                        Field::Timestamp => event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                        Field::LevelName => event.level.to_str().to_string(),
                        Field::SourceFile => event.file.to_string(),
                        Field::SourceLine => event.line.to_string(),
                    };
                    match *min_width {
                        Some(width) => out.push_str(&format!("{value:<width$}")),
                        None => out.push_str(&value),
                    }
                }
            }
        }
        out
    }

    /// The compiled segments, in source order of the pattern string.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub context_lines: ContextLines,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            ignore_case: false,
            context_lines: ContextLines::default(),
        }
    }
}

impl DiffOptions {
    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_context_lines(mut self, context_lines: ContextLines) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Reads options from their camelCase JSON form. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// How many unchanged lines to keep around each change.
///
/// Encoded as a plain integer in serialized options: `-1` (or any negative
/// value) is [`ContextLines::All`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ContextLines {
    All,
    Lines(usize),
}

impl Default for ContextLines {
    fn default() -> Self {
        ContextLines::Lines(3)
    }
}

impl From<i64> for ContextLines {
    fn from(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(lines) => ContextLines::Lines(lines),
            Err(_) if value < 0 => ContextLines::All,
            Err(_) => ContextLines::Lines(usize::MAX),
        }
    }
}

impl From<ContextLines> for i64 {
    fn from(value: ContextLines) -> Self {
        match value {
            ContextLines::All => -1,
            ContextLines::Lines(lines) => i64::try_from(lines).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    /// Synthetic marker standing in for a run of collapsed lines.
    Context,
}

impl LineKind {
    pub fn is_change(self) -> bool {
        matches!(self, LineKind::Added | LineKind::Removed)
    }
}

/// One row of a diff. Fields are private so every record goes through a
/// per-kind constructor or the checked decoding of [`RawLineRecord`], and
/// carries exactly the line numbers its kind allows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLineRecord")]
pub struct LineRecord {
    kind: LineKind,
    content: String,
    original_line_number: Option<usize>,
    modified_line_number: Option<usize>,
}

impl LineRecord {
    pub fn unchanged(
        content: impl Into<String>,
        original_line_number: usize,
        modified_line_number: usize,
    ) -> Self {
        Self {
            kind: LineKind::Unchanged,
            content: content.into(),
            original_line_number: Some(original_line_number),
            modified_line_number: Some(modified_line_number),
        }
    }

    pub fn removed(content: impl Into<String>, original_line_number: usize) -> Self {
        Self {
            kind: LineKind::Removed,
            content: content.into(),
            original_line_number: Some(original_line_number),
            modified_line_number: None,
        }
    }

    pub fn added(content: impl Into<String>, modified_line_number: usize) -> Self {
        Self {
            kind: LineKind::Added,
            content: content.into(),
            original_line_number: None,
            modified_line_number: Some(modified_line_number),
        }
    }

    pub fn skipped(count: usize) -> Self {
        Self {
            kind: LineKind::Context,
            content: format!("... {count} lines skipped ..."),
            original_line_number: None,
            modified_line_number: None,
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 1-based line number in the original text.
    pub fn original_line_number(&self) -> Option<usize> {
        self.original_line_number
    }

    /// 1-based line number in the modified text.
    pub fn modified_line_number(&self) -> Option<usize> {
        self.modified_line_number
    }
}

/// Wire form of a [`LineRecord`] before its line numbers are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLineRecord {
    kind: LineKind,
    content: String,
    #[serde(default)]
    original_line_number: Option<usize>,
    #[serde(default)]
    modified_line_number: Option<usize>,
}

impl TryFrom<RawLineRecord> for LineRecord {
    type Error = DiffError;

    fn try_from(raw: RawLineRecord) -> Result<Self> {
        let record = match (raw.kind, raw.original_line_number, raw.modified_line_number) {
            (LineKind::Unchanged, Some(original), Some(modified)) => {
                LineRecord::unchanged(raw.content, original, modified)
            }
            (LineKind::Removed, Some(original), None) => LineRecord::removed(raw.content, original),
            (LineKind::Added, None, Some(modified)) => LineRecord::added(raw.content, modified),
            (LineKind::Context, None, None) => LineRecord {
                kind: LineKind::Context,
                content: raw.content,
                original_line_number: None,
                modified_line_number: None,
            },
            (kind, original, modified) => {
                return Err(DiffError::LineNumberMismatch {
                    kind,
                    original,
                    modified,
                });
            }
        };
        Ok(record)
    }
}

impl fmt::Display for LineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Unchanged => write!(f, " {}", self.content),
            LineKind::Added => write!(f, "+{}", self.content),
            LineKind::Removed => write!(f, "-{}", self.content),
            LineKind::Context => f.write_str(&self.content),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStatistics {
    pub additions: usize,
    pub deletions: usize,
    pub total_lines: usize,
    pub changed_lines: usize,
}

impl DiffStatistics {
    pub fn from_records(records: &[LineRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.kind() {
                LineKind::Added => stats.additions += 1,
                LineKind::Removed => stats.deletions += 1,
                LineKind::Unchanged => {}
                LineKind::Context => continue,
            }
            stats.total_lines += 1;
        }
        stats.changed_lines = stats.additions + stats.deletions;
        stats
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOutput {
    /// The edit script, reduced to the requested context window.
    pub records: Vec<LineRecord>,
    /// Counts over the full edit script, independent of windowing.
    pub statistics: DiffStatistics,
}

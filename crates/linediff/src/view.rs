use std::ops::Range;

use similar::{DiffTag, TextDiff};

use crate::model::{LineKind, LineRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

/// The records one side of a split view shows, in script order.
pub fn side_view(records: &[LineRecord], side: Side) -> Vec<&LineRecord> {
    records
        .iter()
        .filter(|record| match (side, record.kind()) {
            (_, LineKind::Unchanged | LineKind::Context) => true,
            (Side::Original, LineKind::Removed) => true,
            (Side::Modified, LineKind::Added) => true,
            _ => false,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitRow {
    Lines {
        original: Option<SideLine>,
        modified: Option<SideLine>,
    },
    Skipped(String),
}

impl SplitRow {
    pub fn kind(&self) -> RowKind {
        match self {
            SplitRow::Skipped(_) => RowKind::Skipped,
            SplitRow::Lines {
                original: Some(original),
                modified: Some(modified),
            } => {
                if original.is_unchanged() && modified.is_unchanged() {
                    RowKind::Unchanged
                } else {
                    RowKind::Modified
                }
            }
            SplitRow::Lines {
                original: Some(_),
                modified: None,
            } => RowKind::Removed,
            SplitRow::Lines {
                original: None,
                modified: Some(_),
            } => RowKind::Added,
            SplitRow::Lines {
                original: None,
                modified: None,
            } => RowKind::Unchanged,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Unchanged,
    Added,
    Removed,
    Modified,
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideLine {
    /// 1-based line number on this side.
    pub line_number: usize,
    pub text: String,
    pub segments: Vec<Segment>,
}

impl SideLine {
    fn whole(line_number: usize, text: &str, kind: SegmentKind) -> Self {
        Self {
            line_number,
            text: text.to_string(),
            segments: vec![Segment {
                kind,
                text: text.to_string(),
            }],
        }
    }

    fn is_unchanged(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind == SegmentKind::Unchanged)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// Lays an edit script out side by side.
///
/// A run of removals directly followed by a run of additions is paired row
/// by row and the paired lines get character-level segments.
pub fn split_rows(records: &[LineRecord]) -> Vec<SplitRow> {
    let mut rows = Vec::with_capacity(records.len());
    let mut index = 0;

    while index < records.len() {
        let record = &records[index];
        match record.kind() {
            LineKind::Context => {
                rows.push(SplitRow::Skipped(record.content().to_string()));
                index += 1;
            }
            LineKind::Unchanged => {
                rows.push(SplitRow::Lines {
                    original: record.original_line_number().map(|number| {
                        SideLine::whole(number, record.content(), SegmentKind::Unchanged)
                    }),
                    modified: record.modified_line_number().map(|number| {
                        SideLine::whole(number, record.content(), SegmentKind::Unchanged)
                    }),
                });
                index += 1;
            }
            LineKind::Removed | LineKind::Added => {
                let removed_end = run_end(records, index, LineKind::Removed);
                let added_end = run_end(records, removed_end, LineKind::Added);
                rows.extend(paired_rows(
                    &records[index..removed_end],
                    &records[removed_end..added_end],
                ));
                index = added_end;
            }
        }
    }

    rows
}

fn run_end(records: &[LineRecord], start: usize, kind: LineKind) -> usize {
    records[start..]
        .iter()
        .position(|record| record.kind() != kind)
        .map_or(records.len(), |offset| start + offset)
}

fn paired_rows(removed: &[LineRecord], added: &[LineRecord]) -> Vec<SplitRow> {
    let row_len = removed.len().max(added.len());
    let mut rows = Vec::with_capacity(row_len);

    for offset in 0..row_len {
        let old = removed.get(offset);
        let new = added.get(offset);

        let (original, modified) = match (old, new) {
            (Some(old), Some(new)) => {
                let (old_segments, new_segments) =
                    intraline_segments(old.content(), new.content());
                (
                    old.original_line_number().map(|line_number| SideLine {
                        line_number,
                        text: old.content().to_string(),
                        segments: old_segments,
                    }),
                    new.modified_line_number().map(|line_number| SideLine {
                        line_number,
                        text: new.content().to_string(),
                        segments: new_segments,
                    }),
                )
            }
            (Some(old), None) => (
                old.original_line_number().map(|number| {
                    SideLine::whole(number, old.content(), SegmentKind::Removed)
                }),
                None,
            ),
            (None, Some(new)) => (
                None,
                new.modified_line_number()
                    .map(|number| SideLine::whole(number, new.content(), SegmentKind::Added)),
            ),
            (None, None) => (None, None),
        };

        rows.push(SplitRow::Lines { original, modified });
    }

    rows
}

/// Character-level segments for a removed line and the added line paired
/// with it.
pub fn intraline_segments(old_text: &str, new_text: &str) -> (Vec<Segment>, Vec<Segment>) {
    let diff = TextDiff::from_chars(old_text, new_text);
    let mut old_side = SideSegments::new(old_text);
    let mut new_side = SideSegments::new(new_text);

    for op in diff.ops() {
        let (tag, old_chars, new_chars) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                old_side.extend(SegmentKind::Unchanged, old_chars);
                new_side.extend(SegmentKind::Unchanged, new_chars);
            }
            DiffTag::Delete => old_side.extend(SegmentKind::Removed, old_chars),
            DiffTag::Insert => new_side.extend(SegmentKind::Added, new_chars),
            DiffTag::Replace => {
                old_side.extend(SegmentKind::Removed, old_chars);
                new_side.extend(SegmentKind::Added, new_chars);
            }
        }
    }

    (
        old_side.finish(SegmentKind::Removed),
        new_side.finish(SegmentKind::Added),
    )
}

/// Segments of one line, addressed by char index ranges from the diff.
struct SideSegments<'a> {
    text: &'a str,
    /// Byte offset of every char start, plus the text length.
    char_starts: Vec<usize>,
    segments: Vec<Segment>,
}

impl<'a> SideSegments<'a> {
    fn new(text: &'a str) -> Self {
        let char_starts = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            char_starts,
            segments: Vec::new(),
        }
    }

    fn extend(&mut self, kind: SegmentKind, chars: Range<usize>) {
        let piece = &self.text[self.char_starts[chars.start]..self.char_starts[chars.end]];
        if piece.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(piece),
            _ => self.segments.push(Segment {
                kind,
                text: piece.to_owned(),
            }),
        }
    }

    /// An empty line still renders as one segment of `kind`.
    fn finish(mut self, kind: SegmentKind) -> Vec<Segment> {
        if self.segments.is_empty() {
            self.segments.push(Segment {
                kind,
                text: self.text.to_owned(),
            });
        }
        self.segments
    }
}

pub mod compare;
pub mod document;
pub mod error;
pub mod lcs;
pub mod model;
pub mod render;
pub mod script;
pub mod view;
pub mod window;

pub use compare::LineComparator;
pub use document::Document;
pub use error::{DiffError, Result};
pub use model::{ContextLines, DiffOptions, DiffOutput, DiffStatistics, LineKind, LineRecord};
pub use render::render_unified;
pub use script::edit_script;
pub use view::{RowKind, Segment, SegmentKind, Side, SideLine, SplitRow, side_view, split_rows};
pub use window::context_window;

/// Diffs two texts line by line.
pub fn diff(original: &str, modified: &str, options: &DiffOptions) -> DiffOutput {
    diff_documents(
        &Document::from_str(original),
        &Document::from_str(modified),
        options,
    )
}

pub fn diff_documents(
    original: &Document,
    modified: &Document,
    options: &DiffOptions,
) -> DiffOutput {
    let original_lines = original.lines();
    let modified_lines = modified.lines();

    let comparator = LineComparator::new(options);
    let script = edit_script(&original_lines, &modified_lines, &comparator);
    let statistics = DiffStatistics::from_records(&script);

    log::debug!(
        "diffed {} against {} lines: +{} -{}",
        original_lines.len(),
        modified_lines.len(),
        statistics.additions,
        statistics.deletions
    );

    let records = match options.context_lines {
        ContextLines::All => script,
        context => context_window(&script, context),
    };

    DiffOutput {
        records,
        statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(output: &DiffOutput) -> Vec<(LineKind, &str)> {
        output
            .records
            .iter()
            .map(|record| (record.kind(), record.content()))
            .collect()
    }

    fn full() -> DiffOptions {
        DiffOptions::default().with_context_lines(ContextLines::All)
    }

    #[test]
    fn identical_texts() {
        let output = diff("a\nb\nc", "a\nb\nc", &full());
        assert_eq!(
            kinds(&output),
            vec![
                (LineKind::Unchanged, "a"),
                (LineKind::Unchanged, "b"),
                (LineKind::Unchanged, "c"),
            ]
        );
        assert_eq!(
            output.statistics,
            DiffStatistics {
                additions: 0,
                deletions: 0,
                total_lines: 3,
                changed_lines: 0,
            }
        );
    }

    #[test]
    fn single_line_replacement() {
        let output = diff("a\nb\nc", "a\nx\nc", &DiffOptions::default());
        assert_eq!(
            kinds(&output),
            vec![
                (LineKind::Unchanged, "a"),
                (LineKind::Removed, "b"),
                (LineKind::Added, "x"),
                (LineKind::Unchanged, "c"),
            ]
        );
        assert_eq!(
            output.statistics,
            DiffStatistics {
                additions: 1,
                deletions: 1,
                total_lines: 4,
                changed_lines: 2,
            }
        );
    }

    #[test]
    fn both_empty() {
        let output = diff("", "", &DiffOptions::default());
        assert!(output.records.is_empty());
        assert_eq!(output.statistics, DiffStatistics::default());
    }

    #[test]
    fn trailing_addition() {
        let output = diff("a\nb", "a\nb\nc", &DiffOptions::default());
        assert_eq!(
            kinds(&output),
            vec![
                (LineKind::Unchanged, "a"),
                (LineKind::Unchanged, "b"),
                (LineKind::Added, "c"),
            ]
        );
        assert_eq!(output.records[2].modified_line_number(), Some(3));
        assert_eq!(
            output.statistics,
            DiffStatistics {
                additions: 1,
                deletions: 0,
                total_lines: 3,
                changed_lines: 1,
            }
        );
    }

    #[test]
    fn identical_texts_window_to_nothing_but_keep_counts() {
        let output = diff("a\nb\nc", "a\nb\nc", &DiffOptions::default());
        assert!(output.records.is_empty());
        assert_eq!(output.statistics.total_lines, 3);
    }

    #[test]
    fn case_and_whitespace_folding() {
        let output = diff("Hello", "hello", &full().with_ignore_case(true));
        assert_eq!(kinds(&output), vec![(LineKind::Unchanged, "Hello")]);

        let output = diff("a   b", "a b", &full().with_ignore_whitespace(true));
        assert_eq!(kinds(&output), vec![(LineKind::Unchanged, "a   b")]);

        let output = diff("Hello", "hello", &full());
        assert_eq!(output.statistics.changed_lines, 2);
    }

    #[test]
    fn statistics_come_from_the_full_script() {
        let original: Vec<String> = (1..=30).map(|n| n.to_string()).collect();
        let mut modified = original.clone();
        modified[14] = "changed".to_string();

        let windowed = diff(
            &original.join("\n"),
            &modified.join("\n"),
            &DiffOptions::default().with_context_lines(ContextLines::Lines(1)),
        );
        assert_eq!(windowed.records.len(), 4);
        assert_eq!(windowed.statistics.total_lines, 31);
        assert_eq!(windowed.statistics.changed_lines, 2);
    }

    #[test]
    fn whitespace_and_newline_only_inputs() {
        let output = diff("\n\n", "  \n", &full());
        assert_eq!(output.statistics.deletions, 2);
        assert_eq!(output.statistics.additions, 1);

        let output = diff("\n\n", "  \n", &full().with_ignore_whitespace(true));
        assert_eq!(output.statistics.changed_lines, 1);
    }
}

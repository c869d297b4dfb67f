use linediff::{
    ContextLines, DiffOptions, Document, RowKind, Segment, SegmentKind, diff_documents,
    render_unified, split_rows,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let old = r#"fn main() {
    let x = 1;
    println!("x = {}", x);
}
"#;

    let new = r#"fn main() {
    let   x = 2;
    println!( "x = {}", x);
    println!("done");
}
"#;

    let old_doc = Document::from_str(old);
    let new_doc = Document::from_str(new);

    for ignore_whitespace in [false, true] {
        let options = DiffOptions::default()
            .with_ignore_whitespace(ignore_whitespace)
            .with_context_lines(ContextLines::Lines(1));
        let output = diff_documents(&old_doc, &new_doc, &options);

        println!("== {} ==", options.to_json()?);
        println!(
            "+{} -{} ({} of {} lines changed)",
            output.statistics.additions,
            output.statistics.deletions,
            output.statistics.changed_lines,
            output.statistics.total_lines
        );
        println!("{}", render_unified(&output.records));
        println!();

        for row in split_rows(&output.records) {
            let marker = match row.kind() {
                RowKind::Unchanged => ' ',
                RowKind::Added => '+',
                RowKind::Removed => '-',
                RowKind::Modified => '~',
                RowKind::Skipped => '.',
            };

            let linediff::SplitRow::Lines { original, modified } = row else {
                println!("{marker}");
                continue;
            };

            let old_no = original
                .as_ref()
                .map(|l| l.line_number.to_string())
                .unwrap_or_default();
            let new_no = modified
                .as_ref()
                .map(|l| l.line_number.to_string())
                .unwrap_or_default();
            let left = original
                .as_ref()
                .map(|l| render_segments(&l.segments))
                .unwrap_or_default();
            let right = modified
                .as_ref()
                .map(|l| render_segments(&l.segments))
                .unwrap_or_default();

            println!("{marker} {old_no:>4} | {new_no:>4} | {left} || {right}");
        }
        println!();
    }

    Ok(())
}

fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg.kind {
            SegmentKind::Unchanged => out.push_str(&seg.text),
            SegmentKind::Added => {
                out.push_str("{+");
                out.push_str(&seg.text);
                out.push_str("+}");
            }
            SegmentKind::Removed => {
                out.push_str("[-");
                out.push_str(&seg.text);
                out.push_str("-]");
            }
        }
    }
    out
}

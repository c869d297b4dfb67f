use crate::model::LineRecord;

/// Plain-text listing of a diff, one line per record.
///
/// Unchanged lines are prefixed with a space, removals with `-` and
/// additions with `+`; skip markers are written as they are.
pub fn render_unified(records: &[LineRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&record.to_string());
    }
    out
}

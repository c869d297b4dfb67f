use crate::model::{ContextLines, LineRecord};

/// Reduces an edit script to the records within `context` lines of a change.
///
/// Each omitted run between two kept records is replaced by one
/// [`LineRecord::skipped`] marker. Runs before the first or after the last
/// kept record are dropped without a marker, and a script without changes
/// windows to nothing.
pub fn context_window(records: &[LineRecord], context: ContextLines) -> Vec<LineRecord> {
    let radius = match context {
        ContextLines::All => return records.to_vec(),
        ContextLines::Lines(radius) => radius,
    };

    let mut keep = vec![false; records.len()];
    for (index, _) in records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.kind().is_change())
    {
        let start = index.saturating_sub(radius);
        let end = index.saturating_add(radius).min(records.len() - 1);
        keep[start..=end].fill(true);
    }

    let mut windowed = Vec::new();
    let mut previous: Option<usize> = None;
    for (index, record) in records.iter().enumerate() {
        if !keep[index] {
            continue;
        }
        if let Some(previous) = previous
            && index - previous > 1
        {
            windowed.push(LineRecord::skipped(index - previous - 1));
        }
        windowed.push(record.clone());
        previous = Some(index);
    }

    log::trace!(
        "context window of {radius} kept {} of {} records",
        windowed.len(),
        records.len()
    );

    windowed
}

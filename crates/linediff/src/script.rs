use crate::compare::LineComparator;
use crate::lcs::longest_common_subsequence;
use crate::model::LineRecord;

/// Builds the full edit script turning `original` into `modified`.
///
/// The walk keeps one cursor per side plus one over the common subsequence.
/// When both sides hold a line outside the subsequence, the removal is
/// emitted first, so reordered blocks show as removals followed by additions.
pub fn edit_script(
    original: &[String],
    modified: &[String],
    comparator: &LineComparator,
) -> Vec<LineRecord> {
    let original_keys = comparator.keys(original);
    let modified_keys = comparator.keys(modified);
    let common = longest_common_subsequence(&original_keys, &modified_keys);

    let (m, n) = (original.len(), modified.len());
    let mut records = Vec::with_capacity(m + n - common.len());
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < m || j < n {
        let next = common.get(k).copied();

        if let Some(line) = next
            && i < m
            && j < n
            && original_keys[i] == *line
            && modified_keys[j] == *line
        {
            records.push(LineRecord::unchanged(original[i].as_str(), i + 1, j + 1));
            i += 1;
            j += 1;
            k += 1;
        } else if i < m && next.is_none_or(|line| original_keys[i] != *line) {
            records.push(LineRecord::removed(original[i].as_str(), i + 1));
            i += 1;
        } else if j < n {
            records.push(LineRecord::added(modified[j].as_str(), j + 1));
            j += 1;
        } else {
            break;
        }
    }

    records
}

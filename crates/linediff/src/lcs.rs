//! Longest common subsequence by dynamic programming.
//!
//! The table holds `(m + 1) * (n + 1)` cells in a single allocation, where
//! cell `(i, j)` is the LCS length of `a[..i]` and `b[..j]`. Time and memory
//! are both `O(m * n)`, which is fine for interactive-sized texts only.

pub struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let cols = b.len() + 1;
        let mut cells = vec![0usize; (a.len() + 1) * cols];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        log::trace!(
            "lcs table {}x{}, common length {}",
            a.len() + 1,
            cols,
            cells.last().copied().unwrap_or(0)
        );

        Self { cols, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub(crate) fn len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Reconstructs the subsequence walking from `(m, n)` back to the origin.
    ///
    /// On a tie between dropping from `a` or from `b`, `b` is stepped back.
    /// `a` and `b` must be the slices the table was built from.
    pub fn walk_back<'a, T: PartialEq>(&self, a: &'a [T], b: &[T]) -> Vec<&'a T> {
        let mut common = Vec::with_capacity(self.len());
        let mut i = a.len();
        let mut j = b.len();

        while i > 0 && j > 0 {
            if a[i - 1] == b[j - 1] {
                common.push(&a[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) > self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        common.reverse();
        common
    }
}

pub fn longest_common_subsequence<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> Vec<&'a T> {
    LcsTable::build(a, b).walk_back(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(longest_common_subsequence(&empty, &empty).is_empty());
        assert!(longest_common_subsequence(&["a"], &empty).is_empty());
        assert!(longest_common_subsequence(&empty, &["a"]).is_empty());
        assert_eq!(LcsTable::build(&empty, &empty).len(), 0);
    }

    #[test]
    fn classic_sequences() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.len(), 4);
        let common: Vec<char> = table.walk_back(&a, &b).into_iter().copied().collect();
        assert_eq!(common.len(), 4);
        assert!(is_subsequence(&common, &a));
        assert!(is_subsequence(&common, &b));
    }

    fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|c| rest.any(|h| h == c))
    }

    #[test]
    fn table_cells_follow_recurrence() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.get(1, 1), 1);
        assert_eq!(table.get(2, 2), 1);
        assert_eq!(table.get(3, 3), 2);
        assert_eq!(longest_common_subsequence(&a, &b), vec![&"a", &"c"]);
    }

    #[test]
    fn tie_steps_back_in_second_sequence() {
        // Both "a" and "b" are a valid LCS; the tie-break keeps "b".
        let a = ["a", "b"];
        let b = ["b", "a"];
        assert_eq!(longest_common_subsequence(&a, &b), vec![&"b"]);
    }

    #[test]
    fn identical_sequences_match_fully() {
        let a = ["x", "y", "z", "y"];
        assert_eq!(longest_common_subsequence(&a, &a).len(), 4);
    }
}

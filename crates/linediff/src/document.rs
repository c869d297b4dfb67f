use ropey::LineType;
use ropey::Rope;

/// Text being diffed, split into lines on `'\n'` only.
///
/// A trailing newline produces a trailing empty line and `'\r'` stays part of
/// the line content. The empty text has no lines at all.
#[derive(Clone, Debug)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.rope.len_lines(LineType::LF)
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|index| self.line_text(index))
            .collect()
    }

    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn line_text(&self, index: usize) -> String {
        let slice = self.rope.line(index, LineType::LF);
        let mut text: String = match slice.as_str() {
            Some(text) => text.to_owned(),
            None => slice.chunks().collect(),
        };
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_lines() {
        let doc = Document::from_str("");
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
        assert!(doc.lines().is_empty());
    }

    #[test]
    fn splits_on_newline_only() {
        let doc = Document::from_str("a\nb\r\nc");
        assert_eq!(doc.lines(), vec!["a", "b\r", "c"]);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let doc = Document::from_str("a\nb\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines(), vec!["a", "b", ""]);
    }

    #[test]
    fn newline_only_text() {
        let doc = Document::from_str("\n\n");
        assert_eq!(doc.lines(), vec!["", "", ""]);
    }

    #[test]
    fn long_text_round_trips_through_lines() {
        let text = (0..2_000)
            .map(|n| format!("line number {n} with some padding to span rope chunks"))
            .collect::<Vec<_>>()
            .join("\n");
        let doc = Document::from_str(&text);
        assert_eq!(doc.lines().join("\n"), text);
        assert_eq!(doc.to_string(), text);
    }
}

use std::borrow::Cow;

use crate::model::DiffOptions;

/// Line equality under the comparison policy of [`DiffOptions`].
///
/// Folding only affects comparison keys; record content keeps the original
/// text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineComparator {
    ignore_whitespace: bool,
    ignore_case: bool,
}

impl LineComparator {
    pub fn new(options: &DiffOptions) -> Self {
        Self {
            ignore_whitespace: options.ignore_whitespace,
            ignore_case: options.ignore_case,
        }
    }

    pub fn key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut key = Cow::Borrowed(line);
        if self.ignore_whitespace {
            key = Cow::Owned(collapse_whitespace(&key));
        }
        if self.ignore_case {
            key = Cow::Owned(key.to_lowercase());
        }
        key
    }

    pub fn keys<'a>(&self, lines: &'a [String]) -> Vec<Cow<'a, str>> {
        lines.iter().map(|line| self.key(line)).collect()
    }

    #[cfg(test)]
    fn lines_equal(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }
}

/// The `\s` class of ECMAScript regular expressions: Unicode `White_Space`
/// without NEXT LINE (U+0085), plus ZERO WIDTH NO-BREAK SPACE (U+FEFF).
fn is_collapsible_whitespace(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => ch.is_whitespace(),
    }
}

fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for word in line
        .split(is_collapsible_whitespace)
        .filter(|word| !word.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

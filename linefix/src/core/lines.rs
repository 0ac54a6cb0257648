//! Splitting file contents into numbered lines and rendering them back.

/// Terminator that ended a line in the original contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Lf,
    CrLf,
    Cr,
}

impl Terminator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// One line of the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the file.
    pub number: usize,
    /// Line text without its terminator.
    pub text: String,
    /// `None` only for a final line with no trailing terminator.
    pub terminator: Option<Terminator>,
}

impl Line {
    /// Exact original content, terminator included.
    pub fn original(&self) -> String {
        let mut out = self.text.clone();
        if let Some(terminator) = self.terminator {
            out.push_str(terminator.as_str());
        }
        out
    }
}

/// Split `contents` into lines, recognising `\n`, `\r\n` and lone `\r`.
///
/// Empty input yields no lines. A trailing terminator does not produce an
/// extra empty line.
pub fn split_lines(contents: &str) -> Vec<Line> {
    let bytes = contents.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let found = match bytes[idx] {
            b'\n' => Some((Terminator::Lf, 1)),
            b'\r' if bytes.get(idx + 1) == Some(&b'\n') => Some((Terminator::CrLf, 2)),
            b'\r' => Some((Terminator::Cr, 1)),
            _ => None,
        };
        match found {
            Some((terminator, width)) => {
                lines.push(Line {
                    number: lines.len() + 1,
                    text: contents[start..idx].to_string(),
                    terminator: Some(terminator),
                });
                idx += width;
                start = idx;
            }
            None => idx += 1,
        }
    }

    if start < bytes.len() {
        lines.push(Line {
            number: lines.len() + 1,
            text: contents[start..].to_string(),
            terminator: None,
        });
    }

    lines
}

/// Join lines back into file contents, writing every terminator as `\n`.
///
/// A line that had no terminator (the last line of a file without a trailing
/// newline) stays unterminated.
pub fn render_lines(lines: &[Line]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|line| line.text.len() + 1).sum());
    for line in lines {
        out.push_str(&line.text);
        if line.terminator.is_some() {
            out.push('\n');
        }
    }
    out
}

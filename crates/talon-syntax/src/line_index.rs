//! Line table over a source text.
//!
//! Lines are split on `\n`; a trailing `\r` belongs to the terminator, not the content.
//! Text ending in a newline has a final empty line, matching how editors number lines.

use rowan::TextSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    start: usize,
    /// End of the content, before any `\r\n` or `\n`.
    content_end: usize,
    /// Start of the next line, or the text length for the last line.
    end: usize,
}

#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    lines: Vec<LineSpan>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (pos, _) in text.match_indices('\n') {
            let content_end = if text[start..pos].ends_with('\r') {
                pos - 1
            } else {
                pos
            };
            lines.push(LineSpan {
                start,
                content_end,
                end: pos + 1,
            });
            start = pos + 1;
        }
        lines.push(LineSpan {
            start,
            content_end: text.len(),
            end: text.len(),
        });
        Self { text, lines }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Always at least one: empty text has a single empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content without its terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        self.lines
            .get(line)
            .map(|l| &self.text[l.start..l.content_end])
    }

    /// Line terminator (`"\n"`, `"\r\n"` or `""` for the last line).
    pub fn terminator(&self, line: usize) -> Option<&'a str> {
        self.lines
            .get(line)
            .map(|l| &self.text[l.content_end..l.end])
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().map(|l| &self.text[l.start..l.content_end])
    }

    /// Offset just past the line's content, before the terminator.
    pub fn line_end(&self, line: usize) -> Option<TextSize> {
        self.lines.get(line).map(|l| to_size(l.content_end))
    }

    /// Line containing `offset`; offsets past the end map to the last line.
    pub fn line_of_offset(&self, offset: TextSize) -> usize {
        let offset = usize::from(offset);
        self.lines
            .partition_point(|l| l.end <= offset)
            .min(self.lines.len() - 1)
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

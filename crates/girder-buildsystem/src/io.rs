//! Line-oriented indenting writer used by build renderers.

use std::io::{self, Write};

const INDENT_UNIT: &str = "    ";

/// Writes text one line at a time with a tracked indentation level.
pub struct IndentingWriter<'a> {
    out: &'a mut dyn Write,
    level: usize,
}

impl<'a> IndentingWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, level: 0 }
    }

    /// Write one line at the current indentation level.
    pub fn println(&mut self, line: &str) -> io::Result<()> {
        for _ in 0..self.level {
            self.out.write_all(INDENT_UNIT.as_bytes())?;
        }
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    /// Run `body` with the indentation level raised by one.
    pub fn indented(
        &mut self,
        body: impl FnOnce(&mut Self) -> io::Result<()>,
    ) -> io::Result<()> {
        self.level += 1;
        let result = body(self);
        self.level -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nesting_tracks_indentation() {
        let mut buf = Vec::new();
        let mut writer = IndentingWriter::new(&mut buf);
        writer.println("<a>").unwrap();
        writer
            .indented(|w| {
                w.println("<b/>")?;
                w.indented(|w| w.println("deep"))
            })
            .unwrap();
        writer.println("</a>").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "<a>\n    <b/>\n        deep\n</a>\n");
    }
}

//! Line-oriented output with indentation scopes
//!
//! [`LineWriter`] wraps any [`std::io::Write`] sink and writes exactly one
//! line terminator per call. Indentation is a stack: every [`IndentGuard`]
//! restores the depth it started from when dropped.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use tracing::trace;

/// Whitespace trimming applied to every line before it is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrimMode {
    /// Strip trailing whitespace only
    #[default]
    Trailing,
    /// Strip leading and trailing whitespace
    Both,
    /// Write lines untouched
    None,
}

impl TrimMode {
    pub fn apply<'a>(&self, line: &'a str) -> &'a str {
        match self {
            TrimMode::Trailing => line.trim_end(),
            TrimMode::Both => line.trim(),
            TrimMode::None => line,
        }
    }
}

/// Writes lines to a sink, applying trimming and the current indentation
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    sink: W,
    trim: TrimMode,
    indents: Vec<usize>,
    prefix: String,
}

impl<W: Write> LineWriter<W> {
    /// Create a writer that trims trailing whitespace
    pub fn new(sink: W) -> Self {
        Self::with_trim(sink, TrimMode::default())
    }

    pub fn with_trim(sink: W, trim: TrimMode) -> Self {
        Self {
            sink,
            trim,
            indents: Vec::new(),
            prefix: String::new(),
        }
    }

    pub fn trim_mode(&self) -> TrimMode {
        self.trim
    }

    /// Write a single line followed by `\n`
    ///
    /// The indentation prefix is applied to every non-blank line of `line`;
    /// blank lines are written without a prefix.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        let line = self.trim.apply(line);
        let mut out = String::with_capacity(line.len() + self.prefix.len() + 1);
        for (i, part) in line.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !part.trim().is_empty() {
                out.push_str(&self.prefix);
            }
            out.push_str(part);
        }
        out.push('\n');

        trace!(line = %out.trim_end_matches('\n'), "Writing line");
        self.sink.write_all(out.as_bytes())
    }

    /// Write each line in order, stopping at the first error
    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Indent every line written while the returned guard is alive
    ///
    /// # Example
    /// ```
    /// use plantuml_sequence::core::LineWriter;
    ///
    /// let mut writer = LineWriter::new(Vec::new());
    /// {
    ///     let mut inner = writer.indent(2);
    ///     inner.write_line("indented").unwrap();
    /// }
    /// writer.write_line("flush").unwrap();
    /// assert_eq!(writer.into_inner(), b"  indented\nflush\n");
    /// ```
    pub fn indent(&mut self, width: usize) -> IndentGuard<'_, W> {
        let depth = self.push_indent(width);
        IndentGuard {
            writer: self,
            depth,
        }
    }

    /// Push an indentation level, returning the depth to restore later
    pub fn push_indent(&mut self, width: usize) -> usize {
        let depth = self.indents.len();
        self.indents.push(width);
        self.prefix.extend(std::iter::repeat(' ').take(width));
        depth
    }

    /// Drop every indentation level pushed at or above `depth`
    pub fn restore_indent(&mut self, depth: usize) {
        while self.indents.len() > depth {
            if let Some(width) = self.indents.pop() {
                let len = self.prefix.len() - width;
                self.prefix.truncate(len);
            }
        }
    }

    /// Current indentation width in spaces
    pub fn indent_width(&self) -> usize {
        self.prefix.len()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Scope guard returned by [`LineWriter::indent`]
pub struct IndentGuard<'a, W: Write> {
    writer: &'a mut LineWriter<W>,
    depth: usize,
}

impl<'a, W: Write> Deref for IndentGuard<'a, W> {
    type Target = LineWriter<W>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<'a, W: Write> DerefMut for IndentGuard<'a, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<'a, W: Write> Drop for IndentGuard<'a, W> {
    fn drop(&mut self) {
        self.writer.restore_indent(self.depth);
    }
}

//! Source text input and indented code output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A source file loaded into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceText {
    file: Option<PathBuf>,
    text: String,
}

#[allow(dead_code)]
impl SourceText {
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            file: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn from_str(string: &str) -> Self {
        Self {
            file: None,
            text: string.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Iterate over the lines of the text with their 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, l)| (i + 1, l))
    }
}

const INDENT: &str = "    ";

/// Builder for generated source text. Lines are written at the current
/// indentation level, which is controlled with [CodeWriter::indent] and
/// [CodeWriter::dedent].
#[derive(Debug)]
pub struct CodeWriter {
    buffer: String,
    level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            level: 0,
        }
    }

    /// Write a single line at the current indentation level.
    pub fn line(&mut self, line: &str) {
        for _ in 0..self.level {
            self.buffer += INDENT;
        }
        self.buffer += line;
        self.buffer += "\n";
    }

    /// Write an empty line. Empty lines are never indented.
    pub fn blank(&mut self) {
        self.buffer += "\n";
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

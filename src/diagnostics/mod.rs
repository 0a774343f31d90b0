//! Diagnostics reporting and printing.
//!
//! The generator has no recoverable-error pathway: everything reported here
//! is a warning about input the generator worked around. Warnings are
//! accumulated during the run and printed at the end; they never abort
//! generation.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Reference to the [DiagnosticsBag] allowing interior mutability.
pub type DiagnosticsBagRef = Rc<RefCell<DiagnosticsBag>>;

/// A visigen diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    General {
        message: String,
    },
    Localized {
        message: String,
        file: PathBuf,
        line: usize,
    },
}

/// A bag holding all the diagnostics with utility functions for reporting and
/// printing warnings.
#[derive(Debug, Default)]
pub struct DiagnosticsBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsBag {
    pub fn new() -> Self {
        Self {
            diagnostics: vec![],
        }
    }

    pub fn new_ref() -> DiagnosticsBagRef {
        Rc::new(RefCell::new(Self::new()))
    }

    #[cfg(test)]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Report a warning without a source location.
    pub fn report_warning<S>(&mut self, message: S)
    where
        S: ToString,
    {
        self.diagnostics.push(Diagnostic::General {
            message: message.to_string(),
        })
    }

    /// Report a warning tied to a line in a scanned source file.
    pub fn report_localized<S>(&mut self, message: S, file: Option<&Path>, line: usize)
    where
        S: ToString,
    {
        let diagnostic = match file {
            Some(file) => Diagnostic::Localized {
                message: message.to_string(),
                file: file.to_path_buf(),
                line,
            },
            None => Diagnostic::General {
                message: message.to_string(),
            },
        };
        self.diagnostics.push(diagnostic)
    }

    /// Report that a type was recorded under two different parents.
    pub fn report_reparented(&mut self, name: &str, old_parent: &str, new_parent: &str) {
        self.report_warning(format!(
            "Type `{}` is declared under both `{}` and `{}`. Keeping `{}`.",
            name, old_parent, new_parent, new_parent
        ))
    }

    /// Report a declaration that tried to give the hierarchy root a parent.
    pub fn report_root_declared(&mut self, root: &str, parent: &str) {
        self.report_warning(format!(
            "Ignoring declaration of root type `{}` under `{}`. The root has no parent.",
            root, parent
        ))
    }

    /// Report a declared type which is not reachable from the hierarchy root.
    pub fn report_unreachable(&mut self, name: &str) {
        self.report_warning(format!(
            "Type `{}` is not reachable from the hierarchy root and was left out of the generated visitors.",
            name
        ))
    }

    /// Print the accumulated diagnostics.
    pub fn print(&self) {
        for diagnostic in &self.diagnostics {
            match diagnostic {
                Diagnostic::General { message } => eprintln!("warning: {}", message),
                Diagnostic::Localized {
                    message,
                    file,
                    line,
                } => eprintln!("warning: {}:{}: {}", file.display(), line, message),
            }
        }
    }
}

#[cfg(test)]
impl DiagnosticsBag {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.clone()
    }
}

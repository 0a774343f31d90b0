//! Discovery of source files and extraction of node class declarations.
//!
//! The extractor is deliberately not a parser. A declaration is a single line
//! containing a standalone `class` keyword, a class name, and a supertype
//! after a top-level `:`. Files are scanned line by line; whatever the
//! scanner cannot read is simply not a declaration. Whether a recorded
//! declaration actually belongs to the node hierarchy is decided later by
//! reachability from the root, not here.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::diagnostics::DiagnosticsBagRef;
use crate::hierarchy::TypeDeclaration;
use crate::text::SourceText;
use crate::utils::GenerationError;

/// Extension of the source files scanned for declarations.
const SOURCE_EXTENSION: &str = "kt";

/// Collect every source file under `root`, in path-sorted order so a scan of
/// the same tree always produces the same declaration sequence.
pub fn find_source_files(root: &Path) -> Result<Vec<PathBuf>, GenerationError> {
    if !root.is_dir() {
        return Err(GenerationError::MissingInputRoot(root.to_path_buf()));
    }

    let mut files = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(GenerationError::ReadErr {
                    path,
                    err: err.into(),
                });
            }
        };
        if entry.file_type().is_file()
            && entry.path().extension() == Some(OsStr::new(SOURCE_EXTENSION))
        {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Extract the node class declarations from a single source file.
pub fn scan_source(
    source: &SourceText,
    diagnostics_bag: DiagnosticsBagRef,
) -> Vec<TypeDeclaration> {
    let mut declarations = vec![];
    let mut package = String::new();

    for (line_nr, line) in source.lines() {
        let code = strip_comment(line).trim();

        if let Some(rest) = code.strip_prefix("package ") {
            if package.is_empty() {
                package = rest.trim().trim_end_matches(';').to_string();
            }
            continue;
        }

        let header = match find_keyword(code, "class") {
            Some(after_keyword) => &code[after_keyword..],
            None => continue,
        };
        let (name, rest) = match split_identifier(header) {
            Some(parts) => parts,
            None => continue,
        };
        match find_supertype(rest) {
            SupertypeParse::Found(parent) => {
                declarations.push(TypeDeclaration::new(name, parent, package.as_str()));
            }
            SupertypeParse::NoSupertype => {}
            SupertypeParse::Dangling => {
                diagnostics_bag.borrow_mut().report_localized(
                    format!("Class `{}` has a `:` but no supertype after it.", name),
                    source.file(),
                    line_nr,
                );
            }
        }
    }
    declarations
}

enum SupertypeParse<'a> {
    Found(&'a str),
    NoSupertype,
    Dangling,
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Byte offset right after `keyword`, when it appears as a standalone word
/// followed by whitespace.
fn find_keyword(code: &str, keyword: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(found) = code[search_from..].find(keyword) {
        let start = search_from + found;
        let end = start + keyword.len();
        let standalone_before = code[..start]
            .chars()
            .last()
            .map(|c| !is_identifier_char(c))
            .unwrap_or(true);
        let whitespace_after = code[end..]
            .chars()
            .next()
            .map(char::is_whitespace)
            .unwrap_or(false);
        if standalone_before && whitespace_after {
            return Some(end);
        }
        search_from = end;
    }
    None
}

/// Split off the identifier at the start of `code`, ignoring leading
/// whitespace. Returns the identifier and the rest of the line.
fn split_identifier(code: &str) -> Option<(&str, &str)> {
    let code = code.trim_start();
    if !code.chars().next().map(is_identifier_start).unwrap_or(false) {
        return None;
    }
    let end = code
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(code.len());
    Some((&code[..end], &code[end..]))
}

/// Scan past the primary constructor and type parameters for a top-level `:`
/// and read the supertype behind it. A `{` before any `:` means the class has
/// no supertype at all.
fn find_supertype(rest: &str) -> SupertypeParse {
    let mut depth: usize = 0;
    for (i, c) in rest.char_indices() {
        match c {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth = depth.saturating_sub(1),
            '{' if depth == 0 => return SupertypeParse::NoSupertype,
            ':' if depth == 0 => {
                return match supertype_name(&rest[i + 1..]) {
                    Some(name) => SupertypeParse::Found(name),
                    None => SupertypeParse::Dangling,
                };
            }
            _ => {}
        }
    }
    SupertypeParse::NoSupertype
}

/// The first supertype after the `:`, with any package qualifier dropped.
fn supertype_name(after: &str) -> Option<&str> {
    let mut rest = after;
    loop {
        let (identifier, tail) = split_identifier(rest)?;
        match tail.trim_start().strip_prefix('.') {
            Some(next) => rest = next,
            None => return Some(identifier),
        }
    }
}

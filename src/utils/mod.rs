//! Utilities for visigen.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Fatal errors aborting a generation run. Everything else the generator
/// works around and reports as a warning instead.
#[derive(Debug)]
pub enum GenerationError {
    /// The input root does not exist or is not a directory.
    MissingInputRoot(PathBuf),
    /// A source file or directory could not be read.
    ReadErr { path: PathBuf, err: io::Error },
    /// The output directory or a generated file could not be written.
    WriteErr { path: PathBuf, err: io::Error },
}

/// Directory for a dotted package name below `root`.
pub fn package_dir(root: &Path, package: &str) -> PathBuf {
    let mut dir = root.to_path_buf();
    for part in package.split('.') {
        dir.push(part);
    }
    dir
}

/// Write `contents` to `dir/file_name` as a whole. The buffer goes to a
/// temporary file in the target directory first and is moved over the
/// destination afterwards, so an interrupted run never leaves a half-written
/// file behind. An existing file at the destination is replaced.
pub fn write_atomic(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, GenerationError> {
    fs::create_dir_all(dir).map_err(|err| GenerationError::WriteErr {
        path: dir.to_path_buf(),
        err,
    })?;

    let path = dir.join(file_name);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| GenerationError::WriteErr {
        path: path.clone(),
        err,
    })?;
    tmp.write_all(contents.as_bytes())
        .map_err(|err| GenerationError::WriteErr {
            path: path.clone(),
            err,
        })?;
    tmp.persist(&path).map_err(|err| GenerationError::WriteErr {
        path: path.clone(),
        err: err.error,
    })?;
    Ok(path)
}

//! The visigen cli.

use std::path::PathBuf;

use clap::Parser;
use termion::terminal_size;

/// Command line options for visigen
#[derive(Debug, Parser)]
pub struct Opts {
    /// Directory tree scanned for node class declarations
    pub(crate) input_root: PathBuf,

    /// Directory the generated sources are placed under
    pub(crate) output_root: PathBuf,

    /// Be verbose
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[cfg(test)]
impl Opts {
    pub fn new_test(input_root: PathBuf, output_root: PathBuf) -> Self {
        Self {
            input_root,
            output_root,
            verbose: true,
        }
    }
}

/// Get the size of the current terminal that visigen is running in.
fn get_term_width() -> Option<usize> {
    if let Ok((w, _)) = terminal_size() {
        Some(w as usize)
    } else {
        None
    }
}

/// Print a centered string in the terminal padded by '='.
pub(crate) fn print_label(label: &'static str) {
    match get_term_width() {
        Some(width) => {
            let mut padding = width / 2 - 1 - label.len() / 2;
            let mut odd = (width % 2) == 1;
            if (label.len() % 2) == 1 {
                padding -= 1;
                odd = !odd;
            }
            println!(
                "\n{} {} {}",
                "=".repeat(padding),
                label,
                "=".repeat(padding + odd as usize),
            )
        }
        None => {
            println!("\n{}:", label)
        }
    }
}

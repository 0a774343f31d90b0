use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;

use cli::Opts;
use diagnostics::{DiagnosticsBag, DiagnosticsBagRef};
use generate::{SimpleVisitorGenerator, UnitVisitorGenerator, VisitorConfig, VisitorGenerator};
use hierarchy::HierarchyCollector;
use text::SourceText;
use utils::GenerationError;

mod cli;
mod diagnostics;
mod extract;
mod generate;
mod hierarchy;
mod text;
mod utils;

#[cfg(test)]
mod tests;

/// The hierarchy profile the visitors are generated for. The core modules
/// receive these as values and work for any hierarchy; this binary generates
/// for the `Ast` node family.
fn visitor_config() -> VisitorConfig {
    VisitorConfig {
        root_type: "AstElement".to_string(),
        type_prefix: "Ast".to_string(),
        method_verb: "visit".to_string(),
        element_param: "element".to_string(),
        target_package: "astlib.visitor".to_string(),
        simple_class: "AstVisitor".to_string(),
        unit_class: "AstVisitorVoid".to_string(),
    }
}

/// Run the whole pipeline: scan the input tree for declarations, derive the
/// hierarchy, generate both visitor classes and write them below the output
/// root.
pub fn generate_visitors(
    opts: Rc<Opts>,
    diagnostics_bag: DiagnosticsBagRef,
) -> Result<(), GenerationError> {
    let config = visitor_config();

    let files = extract::find_source_files(&opts.input_root)?;
    let mut collector = HierarchyCollector::new(&config.root_type, diagnostics_bag.clone());
    for path in &files {
        let source = SourceText::from_file(path).map_err(|err| GenerationError::ReadErr {
            path: path.clone(),
            err,
        })?;
        for declaration in extract::scan_source(&source, diagnostics_bag.clone()) {
            collector.record(declaration);
        }
    }
    let snapshot = collector.snapshot();

    for name in snapshot.unreachable_nodes() {
        diagnostics_bag.borrow_mut().report_unreachable(name);
    }

    if opts.verbose {
        cli::print_label("HIERARCHY");
        snapshot.print();
    }

    let simple_text = SimpleVisitorGenerator::new(config.clone()).generate(&snapshot);
    let unit_text = UnitVisitorGenerator::new(config.clone()).generate(&snapshot);

    let out_dir = utils::package_dir(&opts.output_root, &config.target_package);
    let simple_path = utils::write_atomic(
        &out_dir,
        &format!("{}.kt", config.simple_class),
        &simple_text,
    )?;
    let unit_path = utils::write_atomic(&out_dir, &format!("{}.kt", config.unit_class), &unit_text)?;

    if opts.verbose {
        cli::print_label("GENERATED");
        println!("{}", simple_path.display());
        println!("{}", unit_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let opts = Rc::new(Opts::parse());
    let diagnostics_bag = DiagnosticsBag::new_ref();

    let result = generate_visitors(opts, diagnostics_bag.clone());

    diagnostics_bag.borrow().print();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(GenerationError::MissingInputRoot(path)) => {
            eprintln!(
                "Input root `{}` does not exist or is not a directory.",
                path.display()
            );
            ExitCode::FAILURE
        }
        Err(GenerationError::ReadErr { path, err }) => {
            eprintln!("Error reading `{}`: {}", path.display(), err);
            ExitCode::FAILURE
        }
        Err(GenerationError::WriteErr { path, err }) => {
            eprintln!("Error writing `{}`: {}", path.display(), err);
            ExitCode::FAILURE
        }
    }
}

//! End-to-end tests running the whole pipeline over real directories.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::cli::Opts;
use crate::diagnostics::DiagnosticsBag;
use crate::utils::GenerationError;

fn write_source(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

fn run(input_root: &Path, output_root: &Path) -> crate::diagnostics::DiagnosticsBagRef {
    let opts = Rc::new(Opts::new_test(
        input_root.to_path_buf(),
        output_root.to_path_buf(),
    ));
    let bag = DiagnosticsBag::new_ref();
    crate::generate_visitors(opts, bag.clone()).unwrap();
    bag
}

#[test]
fn generates_both_visitor_files() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_source(
        input.path(),
        "expressions.kt",
        "package astlib.nodes

open class AstExpression(val span: Span) : AstElement() {
}

class AstCall : AstExpression(Span.EMPTY) {
}
",
    );
    fs::create_dir(input.path().join("statements")).unwrap();
    write_source(
        &input.path().join("statements"),
        "statements.kt",
        "package astlib.nodes.stmt

open class AstStatement : AstElement() {
}
",
    );
    // Not a source file; must be ignored.
    write_source(input.path(), "notes.txt", "class AstFake : AstElement {");

    run(input.path(), output.path());

    let simple =
        fs::read_to_string(output.path().join("astlib/visitor/AstVisitor.kt")).unwrap();
    assert_eq!(
        simple,
        "\
// Generated by visigen. Do not edit manually.

package astlib.visitor

import astlib.nodes.*
import astlib.nodes.stmt.*

abstract class AstVisitor<R, D> {
    abstract fun visitElement(element: AstElement, data: D): R

    open fun visitExpression(expression: AstExpression, data: D): R {
        return visitElement(expression, data)
    }

    open fun visitCall(call: AstCall, data: D): R {
        return visitExpression(call, data)
    }

    open fun visitStatement(statement: AstStatement, data: D): R {
        return visitElement(statement, data)
    }
}
"
    );

    let unit =
        fs::read_to_string(output.path().join("astlib/visitor/AstVisitorVoid.kt")).unwrap();
    assert_eq!(
        unit,
        "\
// Generated by visigen. Do not edit manually.

package astlib.visitor

import astlib.nodes.*
import astlib.nodes.stmt.*

abstract class AstVisitorVoid : AstVisitor<Unit, Nothing?>() {
    abstract fun visitElement(element: AstElement)

    open fun visitExpression(expression: AstExpression) {
        visitElement(expression)
    }

    open fun visitCall(call: AstCall) {
        visitExpression(call)
    }

    open fun visitStatement(statement: AstStatement) {
        visitElement(statement)
    }

    final override fun visitElement(element: AstElement, data: Nothing?) {
        visitElement(element)
    }

    final override fun visitExpression(expression: AstExpression, data: Nothing?) {
        visitExpression(expression)
    }
}
"
    );
}

#[test]
fn rerunning_overwrites_previous_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_source(
        input.path(),
        "nodes.kt",
        "class AstLiteral : AstElement() {\n",
    );

    let target = output.path().join("astlib/visitor/AstVisitor.kt");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "stale content").unwrap();

    run(input.path(), output.path());

    let generated = fs::read_to_string(&target).unwrap();
    assert!(!generated.contains("stale content"));
    assert!(generated.contains("open fun visitLiteral(literal: AstLiteral, data: D): R {"));
}

#[test]
fn unreachable_declarations_are_reported_and_excluded() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_source(
        input.path(),
        "nodes.kt",
        "class AstLiteral : AstElement() {
class AstStray : SomethingElse() {
",
    );

    let bag = run(input.path(), output.path());

    let simple =
        fs::read_to_string(output.path().join("astlib/visitor/AstVisitor.kt")).unwrap();
    assert!(simple.contains("visitLiteral"));
    assert!(!simple.contains("AstStray"));
    assert_eq!(bag.borrow().warning_count(), 1);
}

#[test]
fn a_missing_input_root_is_fatal() {
    let output = tempfile::tempdir().unwrap();
    let missing = output.path().join("does-not-exist");

    let opts = Rc::new(Opts::new_test(missing.clone(), output.path().to_path_buf()));
    let result = crate::generate_visitors(opts, DiagnosticsBag::new_ref());

    match result {
        Err(GenerationError::MissingInputRoot(path)) => assert_eq!(path, missing),
        other => panic!("Expected MissingInputRoot, got {:?}", other.err()),
    }
}

#[test]
fn an_empty_input_tree_still_generates_the_root_methods() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    run(input.path(), output.path());

    let simple =
        fs::read_to_string(output.path().join("astlib/visitor/AstVisitor.kt")).unwrap();
    assert!(simple.contains("abstract fun visitElement(element: AstElement, data: D): R"));
    // No declarations, no imports, no open methods.
    assert!(!simple.contains("import"));
    assert!(!simple.contains("open fun"));
}

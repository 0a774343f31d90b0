//! Generation of the visitor classes from a hierarchy snapshot.

mod simple;
mod unit;

pub use simple::SimpleVisitorGenerator;
pub use unit::UnitVisitorGenerator;

use fnv::FnvHashSet;
use lazy_static::lazy_static;

use crate::hierarchy::HierarchySnapshot;
use crate::text::CodeWriter;

lazy_static! {
    /// Hard keywords of the emitted language. A parameter name colliding
    /// with one of these is replaced by the configured element parameter.
    static ref RESERVED_WORDS: FnvHashSet<&'static str> = [
        "as", "break", "class", "continue", "do", "else", "false", "for",
        "fun", "if", "in", "interface", "is", "null", "object", "package",
        "return", "super", "this", "throw", "true", "try", "typealias",
        "typeof", "val", "var", "when", "while",
    ]
    .into_iter()
    .collect();
}

const GENERATED_HEADER: &str = "// Generated by visigen. Do not edit manually.";

/// The hierarchy profile the visitors are generated for. Owned by the caller
/// and injected here; the generators themselves know no type names.
#[derive(Debug, Clone)]
pub struct VisitorConfig {
    /// Well-known type at the top of the hierarchy.
    pub root_type: String,
    /// Common prefix shared by all hierarchy type names, stripped when
    /// deriving method names.
    pub type_prefix: String,
    /// Verb prefixed to every dispatch method name.
    pub method_verb: String,
    /// Parameter name used for the root's methods and as the fallback for
    /// parameter names that would collide with a reserved word.
    pub element_param: String,
    /// Package the generated classes are placed in.
    pub target_package: String,
    /// Name of the generic result visitor class.
    pub simple_class: String,
    /// Name of the unit visitor class.
    pub unit_class: String,
}

/// Shared frame of the two generated visitor classes. Implementors provide
/// the class header and the method section; the surrounding file structure
/// and the naming rules are common.
pub trait VisitorGenerator {
    fn config(&self) -> &VisitorConfig;

    /// The class declaration, without the opening brace.
    fn class_header(&self) -> String;

    /// Write the methods making up the class body.
    fn write_methods(&self, writer: &mut CodeWriter, snapshot: &HierarchySnapshot);

    /// Generate the complete source file for this visitor class.
    fn generate(&self, snapshot: &HierarchySnapshot) -> String {
        let mut writer = CodeWriter::new();
        writer.line(GENERATED_HEADER);
        writer.blank();
        writer.line(&format!("package {}", self.config().target_package));
        writer.blank();
        if !snapshot.used_packages().is_empty() {
            for package in snapshot.used_packages() {
                writer.line(&format!("import {}.*", package));
            }
            writer.blank();
        }
        writer.line(&format!("{} {{", self.class_header()));
        writer.indent();
        self.write_methods(&mut writer, snapshot);
        writer.dedent();
        writer.line("}");
        writer.finish()
    }

    /// Dispatch method name for a node type: the configured verb followed by
    /// the type name with the common prefix stripped, casing untouched.
    fn method_name(&self, type_name: &str) -> String {
        let config = self.config();
        let stripped = type_name
            .strip_prefix(&config.type_prefix)
            .unwrap_or(type_name);
        format!("{}{}", config.method_verb, stripped)
    }

    /// Parameter name for a node type. The root always uses the fixed
    /// element parameter; every other type decapitalizes its stripped name,
    /// falling back to the element parameter on a reserved word.
    fn param_name(&self, type_name: &str) -> String {
        let config = self.config();
        if type_name == config.root_type {
            return config.element_param.clone();
        }
        let stripped = type_name
            .strip_prefix(&config.type_prefix)
            .unwrap_or(type_name);
        let name = decapitalize(stripped);
        if RESERVED_WORDS.contains(name.as_str()) {
            return config.element_param.clone();
        }
        name
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> VisitorConfig {
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

/// Profile without a type prefix, for tests exercising bare hierarchies.
#[cfg(test)]
pub(crate) fn bare_test_config() -> VisitorConfig {
    VisitorConfig {
        root_type: "Root".to_string(),
        type_prefix: "".to_string(),
        ..test_config()
    }
}

//! Generator for the generic result visitor.

use super::{VisitorConfig, VisitorGenerator};
use crate::hierarchy::walk::walk;
use crate::hierarchy::HierarchySnapshot;
use crate::text::CodeWriter;

/// Emits the two-parameter visitor class: one method per hierarchy type,
/// taking the node and an opaque context value and returning an opaque
/// result. Only the root's method is abstract; every other method delegates
/// to the method of its immediate parent.
pub struct SimpleVisitorGenerator {
    config: VisitorConfig,
}

impl SimpleVisitorGenerator {
    pub fn new(config: VisitorConfig) -> Self {
        Self { config }
    }
}

impl VisitorGenerator for SimpleVisitorGenerator {
    fn config(&self) -> &VisitorConfig {
        &self.config
    }

    fn class_header(&self) -> String {
        format!("abstract class {}<R, D>", self.config.simple_class)
    }

    fn write_methods(&self, writer: &mut CodeWriter, snapshot: &HierarchySnapshot) {
        let root = snapshot.root();
        writer.line(&format!(
            "abstract fun {}({}: {}, data: D): R",
            self.method_name(root),
            self.config.element_param,
            root
        ));

        walk(snapshot, root, &mut |parent, child| {
            let param = self.param_name(child);
            writer.blank();
            writer.line(&format!(
                "open fun {}({}: {}, data: D): R {{",
                self.method_name(child),
                param,
                child
            ));
            writer.indent();
            writer.line(&format!(
                "return {}({}, data)",
                self.method_name(parent),
                param
            ));
            writer.dedent();
            writer.line("}");
        });
    }
}

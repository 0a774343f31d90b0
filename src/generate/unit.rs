//! Generator for the unit result visitor.

use super::{VisitorConfig, VisitorGenerator};
use crate::hierarchy::walk::{reachable, walk};
use crate::hierarchy::HierarchySnapshot;
use crate::text::CodeWriter;

/// Emits the unit visitor: a subclass of the generic visitor with the result
/// fixed to `Unit` and the context to `Nothing?`. It mirrors every dispatch
/// method with a one-parameter convenience method and bridges the inherited
/// two-parameter methods into them with `final` trampolines.
pub struct UnitVisitorGenerator {
    config: VisitorConfig,
}

impl UnitVisitorGenerator {
    pub fn new(config: VisitorConfig) -> Self {
        Self { config }
    }
}

impl VisitorGenerator for UnitVisitorGenerator {
    fn config(&self) -> &VisitorConfig {
        &self.config
    }

    fn class_header(&self) -> String {
        format!(
            "abstract class {} : {}<Unit, Nothing?>()",
            self.config.unit_class, self.config.simple_class
        )
    }

    fn write_methods(&self, writer: &mut CodeWriter, snapshot: &HierarchySnapshot) {
        let root = snapshot.root();
        writer.line(&format!(
            "abstract fun {}({}: {})",
            self.method_name(root),
            self.config.element_param,
            root
        ));

        walk(snapshot, root, &mut |parent, child| {
            let param = self.param_name(child);
            writer.blank();
            writer.line(&format!(
                "open fun {}({}: {}) {{",
                self.method_name(child),
                param,
                child
            ));
            writer.indent();
            writer.line(&format!("{}({})", self.method_name(parent), param));
            writer.dedent();
            writer.line("}");
        });

        // A trampoline only has to exist, so these are written in the order
        // the children map recorded its keys, not in traversal order.
        let visited = reachable(snapshot);
        for branch in snapshot.branches() {
            if !visited.contains(branch) {
                continue;
            }
            let param = self.param_name(branch);
            writer.blank();
            writer.line(&format!(
                "final override fun {}({}: {}, data: Nothing?) {{",
                self.method_name(branch),
                param,
                branch
            ));
            writer.indent();
            writer.line(&format!("{}({})", self.method_name(branch), param));
            writer.dedent();
            writer.line("}");
        }
    }
}

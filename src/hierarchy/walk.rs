//! Deterministic preorder traversal of the hierarchy.

use fnv::FnvHashSet;

use super::HierarchySnapshot;

/// Walk the hierarchy depth-first from `start`, calling `visit_edge(parent, child)`
/// for every edge *before* descending into the child's own subtree. Children
/// are visited in their recorded order, so the emitted dispatch methods always
/// delegate to a method that has already been written.
///
/// The walk is a pure function of the snapshot and can be restarted at will.
/// Every type reachable from `start` is visited exactly once: a type has a
/// single parent, and the root is never anyone's child, so there is no second
/// path back into a visited subtree.
pub fn walk<'a, F>(snapshot: &'a HierarchySnapshot, start: &'a str, visit_edge: &mut F)
where
    F: FnMut(&'a str, &'a str),
{
    for child in snapshot.children_of(start) {
        visit_edge(start, child);
        walk(snapshot, child, visit_edge);
    }
}

/// The set of types the preorder walk from the root reaches, the root itself
/// included.
pub fn reachable(snapshot: &HierarchySnapshot) -> FnvHashSet<&str> {
    let mut visited = FnvHashSet::default();
    visited.insert(snapshot.root());
    walk(snapshot, snapshot.root(), &mut |_, child| {
        visited.insert(child);
    });
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsBag;
    use crate::hierarchy::{HierarchyCollector, TypeDeclaration};
    use pretty_assertions::assert_eq;

    fn snapshot(declarations: &[(&str, &str)]) -> HierarchySnapshot {
        let bag = DiagnosticsBag::new_ref();
        let mut collector = HierarchyCollector::new("Root", bag);
        for (name, parent) in declarations {
            collector.record(TypeDeclaration::new(*name, *parent, ""));
        }
        collector.snapshot()
    }

    fn edges(snapshot: &HierarchySnapshot) -> Vec<(String, String)> {
        let mut edges = vec![];
        walk(snapshot, snapshot.root(), &mut |parent, child| {
            edges.push((parent.to_string(), child.to_string()));
        });
        edges
    }

    #[test]
    fn walks_in_preorder() {
        let snapshot = snapshot(&[("A", "Root"), ("B", "Root"), ("C", "A")]);
        let expected = vec![
            ("Root".to_string(), "A".to_string()),
            ("A".to_string(), "C".to_string()),
            ("Root".to_string(), "B".to_string()),
        ];
        assert_eq!(edges(&snapshot), expected);
    }

    #[test]
    fn visits_every_reachable_type_once() {
        let snapshot = snapshot(&[
            ("A", "Root"),
            ("B", "Root"),
            ("C", "A"),
            ("D", "C"),
            ("E", "A"),
        ]);
        let mut seen = vec![];
        walk(&snapshot, snapshot.root(), &mut |_, child| {
            seen.push(child.to_string());
        });
        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(seen.len(), 5);
        assert_eq!(seen, deduped);
    }

    #[test]
    fn skips_types_not_reachable_from_the_root() {
        let snapshot = snapshot(&[("A", "Root"), ("Orphan", "Nowhere")]);
        let visited = reachable(&snapshot);
        assert!(visited.contains("Root"));
        assert!(visited.contains("A"));
        assert!(!visited.contains("Orphan"));
    }

    #[test]
    fn walk_is_restartable() {
        let snapshot = snapshot(&[("A", "Root"), ("B", "A"), ("C", "B")]);
        assert_eq!(edges(&snapshot), edges(&snapshot));
    }
}

use crate::term::{Term, TermId};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ── Render context ──

/// Per-pass context supplied by the caller to every `start_node` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderArgs {
    /// Target taxonomy name. Empty resolves to `"category"`.
    #[serde(default)]
    pub taxonomy: String,
    /// Identifiers of currently-selected terms.
    #[serde(default)]
    pub selected: HashSet<TermId>,
    /// Marks the whole control as not-editable.
    #[serde(default)]
    pub disabled: bool,
}

impl RenderArgs {
    pub fn for_taxonomy(taxonomy: &str) -> Self {
        Self {
            taxonomy: taxonomy.to_string(),
            ..Self::default()
        }
    }

    /// Taxonomy name with the empty-string default applied.
    pub fn effective_taxonomy(&self) -> &str {
        if self.taxonomy.is_empty() {
            crate::checklist::DEFAULT_TAXONOMY
        } else {
            &self.taxonomy
        }
    }
}

// ── Visitor seam ──

/// Hooks invoked by [`walk_terms`] in depth-first pre/post order.
///
/// Per visited node the driver calls `start_node`, then (only when the node
/// has children) `start_level`, the child subtrees, `end_level`, and finally
/// `end_node` — so level brackets land *inside* the node's own fragment
/// pair. Level hooks receive the parent node's depth; the children
/// themselves are visited at `depth + 1`.
pub trait TermTreeVisitor {
    fn start_level(&self, out: &mut String, depth: usize) -> Result<()>;
    fn end_level(&self, out: &mut String, depth: usize) -> Result<()>;
    fn start_node(&self, out: &mut String, term: &Term, depth: usize, args: &RenderArgs)
        -> Result<()>;
    fn end_node(&self, out: &mut String, term: &Term, depth: usize) -> Result<()>;
}

// ── Driver ──

/// Walk a parent-linked term list in depth-first pre/post order, invoking
/// the visitor hooks and returning the accumulated buffer.
///
/// Sibling order is the input order. Terms whose parent id does not appear
/// in the list are hoisted to the root level rather than dropped, so the
/// walk is total over any input; structural problems (duplicates, cycles)
/// are reported separately by `validate_terms()`, not here.
pub fn walk_terms(terms: &[Term], visitor: &dyn TermTreeVisitor, args: &RenderArgs) -> Result<String> {
    let known: HashSet<TermId> = terms.iter().map(|t| t.id).collect();

    // Group children by parent, preserving input order
    let mut children: HashMap<TermId, Vec<&Term>> = HashMap::new();
    let mut roots: Vec<&Term> = Vec::new();
    for term in terms {
        match term.parent {
            Some(parent) if known.contains(&parent) && parent != term.id => {
                children.entry(parent).or_default().push(term);
            }
            _ => roots.push(term),
        }
    }

    tracing::trace!(
        terms = terms.len(),
        roots = roots.len(),
        "walking term tree"
    );

    let mut out = String::new();
    for root in roots {
        walk_node(root, 0, &children, visitor, args, &mut out)?;
    }
    Ok(out)
}

fn walk_node(
    term: &Term,
    depth: usize,
    children: &HashMap<TermId, Vec<&Term>>,
    visitor: &dyn TermTreeVisitor,
    args: &RenderArgs,
    out: &mut String,
) -> Result<()> {
    visitor.start_node(out, term, depth, args)?;
    if let Some(kids) = children.get(&term.id) {
        visitor.start_level(out, depth)?;
        for kid in kids {
            walk_node(kid, depth + 1, children, visitor, args, out)?;
        }
        visitor.end_level(out, depth)?;
    }
    visitor.end_node(out, term, depth)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    /// Records the traversal as a bracket string: `5` for start_node,
    /// `.` for end_node, `[`/`]` for level brackets.
    struct Tracer;

    impl TermTreeVisitor for Tracer {
        fn start_level(&self, out: &mut String, _depth: usize) -> Result<()> {
            out.push('[');
            Ok(())
        }
        fn end_level(&self, out: &mut String, _depth: usize) -> Result<()> {
            out.push(']');
            Ok(())
        }
        fn start_node(
            &self,
            out: &mut String,
            term: &Term,
            depth: usize,
            _args: &RenderArgs,
        ) -> Result<()> {
            write!(out, "{}@{}", term.id, depth)?;
            Ok(())
        }
        fn end_node(&self, out: &mut String, _term: &Term, _depth: usize) -> Result<()> {
            out.push('.');
            Ok(())
        }
    }

    fn tree() -> Vec<Term> {
        vec![
            Term::new(1, None, "a", "A"),
            Term::new(2, Some(1), "b", "B"),
            Term::new(3, Some(2), "c", "C"),
            Term::new(4, None, "d", "D"),
        ]
    }

    #[test]
    fn test_pre_post_order_with_level_brackets() {
        let out = walk_terms(&tree(), &Tracer, &RenderArgs::default()).unwrap();
        assert_eq!(out, "1@0[2@1[3@2.].].4@0.");
    }

    #[test]
    fn test_leaf_nodes_get_no_level_brackets() {
        let terms = vec![Term::new(7, None, "solo", "Solo")];
        let out = walk_terms(&terms, &Tracer, &RenderArgs::default()).unwrap();
        assert_eq!(out, "7@0.");
    }

    #[test]
    fn test_orphan_parent_hoisted_to_root() {
        let terms = vec![
            Term::new(1, None, "a", "A"),
            Term::new(2, Some(99), "b", "B"),
        ];
        let out = walk_terms(&terms, &Tracer, &RenderArgs::default()).unwrap();
        assert_eq!(out, "1@0.2@0.");
    }

    #[test]
    fn test_sibling_order_is_input_order() {
        let terms = vec![
            Term::new(1, None, "root", "Root"),
            Term::new(5, Some(1), "z", "Z"),
            Term::new(3, Some(1), "a", "A"),
        ];
        let out = walk_terms(&terms, &Tracer, &RenderArgs::default()).unwrap();
        assert_eq!(out, "1@0[5@1.3@1.].");
    }

    #[test]
    fn test_self_parented_term_treated_as_root() {
        let terms = vec![Term::new(9, Some(9), "loop", "Loop")];
        let out = walk_terms(&terms, &Tracer, &RenderArgs::default()).unwrap();
        assert_eq!(out, "9@0.");
    }

    #[test]
    fn test_effective_taxonomy_default() {
        assert_eq!(RenderArgs::default().effective_taxonomy(), "category");
        assert_eq!(RenderArgs::for_taxonomy("genre").effective_taxonomy(), "genre");
    }
}

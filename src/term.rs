use serde::{Deserialize, Serialize};

// ─── Scalar aliases ───────────────────────────────────────────

/// Term identifier, unique within one taxonomy.
pub type TermId = u32;

// ─── Term ─────────────────────────────────────────────────────

/// A node in a hierarchical classification tree (a category or tag).
///
/// Terms are owned by the host application's term source; the renderer
/// only reads them. `parent = None` marks a root-level term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TermId>,
    pub slug: String,
    pub name: String,
}

impl Term {
    pub fn new(id: TermId, parent: Option<TermId>, slug: &str, name: &str) -> Self {
        Self {
            id,
            parent,
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }
}

//! Hierarchical term checklist rendering for CMS admin forms.
//!
//! Walks a parent-linked set of taxonomy terms in depth-first pre/post
//! order and emits either a nested radio-button checklist (`<ul>`/`<li>`)
//! or a flat, indented `<option>` list, ready for embedding into the
//! surrounding form markup.
//!
//! Modules:
//! - `term`: the `Term` data model
//! - `walker`: generic depth-first driver + `TermTreeVisitor` seam
//! - `checklist`: the radio/select renderer and `render_checklist` entry
//! - `escape`: attribute/text escaping helpers
//! - `validate`: structural checks on term lists (duplicates, cycles)
//! - `load`: YAML/JSON term-list deserialization

pub mod checklist;
pub mod escape;
pub mod load;
pub mod term;
pub mod validate;
pub mod walker;

pub use checklist::{render_checklist, ChecklistRenderer, RenderMode};
pub use term::{Term, TermId};
pub use validate::{validate_terms, TermTreeError};
pub use walker::{walk_terms, RenderArgs, TermTreeVisitor};

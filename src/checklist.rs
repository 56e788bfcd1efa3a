//! Term checklist rendering for admin forms.
//!
//! [`ChecklistRenderer`] implements the [`TermTreeVisitor`] hooks and emits
//! one of two HTML shapes, fixed at construction:
//!
//! - `RenderMode::Radio` — a nested `<ul class="children">` / `<li>` list of
//!   labeled radio inputs. Each `<li>` stays open across its child level so
//!   nested lists land inside it.
//! - `RenderMode::Select` — a flat run of `<option>` elements, hierarchy
//!   conveyed by left-padding labels with `&nbsp;` groups per depth level.
//!
//! Field naming follows the host form conventions: the default `category`
//! taxonomy posts under the fixed `post_category` field, any other taxonomy
//! under `tax_input[<taxonomy>]`, with an `[]` suffix appended in
//! hierarchical mode so the framework collects multiple values per key.

use crate::escape::{esc_attr, esc_html};
use crate::term::Term;
use crate::walker::{walk_terms, RenderArgs, TermTreeVisitor};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_TAXONOMY: &str = "category";
pub const DEFAULT_FIELD: &str = "post_category";

/// Indentation unit prepended per depth level to Select-mode labels.
const LEVEL_PAD: &str = "&nbsp;&nbsp;&nbsp;";

// ── Render mode ──

/// Output shape of one renderer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Radio,
    Select,
}

// ── Renderer ──

/// Label filter applied to raw term names before escaping.
pub type LabelFilter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Renders a term tree as a radio checklist or a flat option list.
///
/// Both construction parameters are immutable for the life of the instance.
/// The renderer holds no per-pass state; the output buffer is owned by the
/// driver and passed into each hook, so one instance can serve any number of
/// sequential passes.
pub struct ChecklistRenderer {
    /// Hierarchical selection model: input values are term ids and the field
    /// name takes the `[]` suffix. Flat model posts term slugs instead.
    hierarchical: bool,
    mode: RenderMode,
    label_filter: Option<LabelFilter>,
}

impl ChecklistRenderer {
    pub fn new(hierarchical: bool, mode: RenderMode) -> Self {
        Self {
            hierarchical,
            mode,
            label_filter: None,
        }
    }

    /// Install a host-defined transformation applied to term display names
    /// before they are escaped and emitted.
    pub fn with_label_filter(mut self, filter: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.label_filter = Some(Box::new(filter));
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn hierarchical(&self) -> bool {
        self.hierarchical
    }

    /// Form field name for the resolved taxonomy.
    fn field_name(&self, taxonomy: &str) -> String {
        let base = if taxonomy == DEFAULT_TAXONOMY {
            DEFAULT_FIELD.to_string()
        } else {
            format!("tax_input[{}]", taxonomy)
        };
        if self.hierarchical {
            format!("{}[]", base)
        } else {
            base
        }
    }

    /// Posted value for one term: id in the hierarchical model, slug in the
    /// flat model.
    fn field_value(&self, term: &Term) -> String {
        if self.hierarchical {
            term.id.to_string()
        } else {
            term.slug.clone()
        }
    }

    fn label_text(&self, term: &Term) -> String {
        let raw = match &self.label_filter {
            Some(filter) => filter(&term.name),
            None => term.name.clone(),
        };
        esc_html(&raw)
    }

    fn radio_item(&self, out: &mut String, term: &Term, args: &RenderArgs) -> Result<()> {
        let taxonomy = esc_attr(args.effective_taxonomy());
        let element_id = format!("{}-{}", taxonomy, term.id);
        let checked = if args.selected.contains(&term.id) {
            r#" checked="checked""#
        } else {
            ""
        };
        let disabled = if args.disabled {
            r#" disabled="disabled""#
        } else {
            ""
        };
        writeln!(
            out,
            r#"<li id="{eid}"><label class="selectit"><input value="{value}" type="radio" name="{name}" id="in-{eid}"{checked}{disabled} /> {label}</label>"#,
            eid = element_id,
            value = esc_attr(&self.field_value(term)),
            name = esc_attr(&self.field_name(args.effective_taxonomy())),
            checked = checked,
            disabled = disabled,
            label = self.label_text(term),
        )?;
        Ok(())
    }

    fn select_option(
        &self,
        out: &mut String,
        term: &Term,
        depth: usize,
        args: &RenderArgs,
    ) -> Result<()> {
        let taxonomy = esc_attr(args.effective_taxonomy());
        let selected = if args.selected.contains(&term.id) {
            r#" selected="selected""#
        } else {
            ""
        };
        let disabled = if args.disabled {
            r#" disabled="disabled""#
        } else {
            ""
        };
        write!(
            out,
            r#"<option id="{tax}-{id}" class="term-option" value="{value}"{selected}{disabled}>{pad}{label}"#,
            tax = taxonomy,
            id = term.id,
            value = esc_attr(&self.field_value(term)),
            selected = selected,
            disabled = disabled,
            pad = LEVEL_PAD.repeat(depth),
            label = self.label_text(term),
        )?;
        Ok(())
    }
}

impl TermTreeVisitor for ChecklistRenderer {
    fn start_level(&self, out: &mut String, depth: usize) -> Result<()> {
        if self.mode == RenderMode::Radio {
            writeln!(out, "{}<ul class=\"children\">", "\t".repeat(depth))?;
        }
        Ok(())
    }

    fn end_level(&self, out: &mut String, depth: usize) -> Result<()> {
        if self.mode == RenderMode::Radio {
            writeln!(out, "{}</ul>", "\t".repeat(depth))?;
        }
        Ok(())
    }

    fn start_node(
        &self,
        out: &mut String,
        term: &Term,
        depth: usize,
        args: &RenderArgs,
    ) -> Result<()> {
        match self.mode {
            RenderMode::Radio => self.radio_item(out, term, args),
            RenderMode::Select => self.select_option(out, term, depth, args),
        }
    }

    fn end_node(&self, out: &mut String, _term: &Term, _depth: usize) -> Result<()> {
        match self.mode {
            RenderMode::Radio => writeln!(out, "</li>")?,
            RenderMode::Select => writeln!(out, "</option>")?,
        }
        Ok(())
    }
}

// ── Entry point ──

/// Render a full term tree with the given renderer and pass context,
/// returning the finished HTML fragment.
pub fn render_checklist(
    terms: &[Term],
    renderer: &ChecklistRenderer,
    args: &RenderArgs,
) -> Result<String> {
    tracing::debug!(
        terms = terms.len(),
        mode = ?renderer.mode(),
        hierarchical = renderer.hierarchical(),
        taxonomy = args.effective_taxonomy(),
        "rendering term checklist"
    );
    walk_terms(terms, renderer, args)
}

use crate::term::{Term, TermId};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Structural problems in a term list. None of these stop the walker —
/// it hoists orphans and never descends into a cycle — but hosts usually
/// want to surface them before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermTreeError {
    #[error("duplicate term id {0}")]
    DuplicateId(TermId),
    #[error("term {id} references missing parent {parent}")]
    MissingParent { id: TermId, parent: TermId },
    #[error("parent cycle involving term {0}")]
    ParentCycle(TermId),
}

/// Validate a term list before walking. Returns all problems found.
pub fn validate_terms(terms: &[Term]) -> Vec<TermTreeError> {
    let mut errors = Vec::new();

    // Duplicate ids
    let mut parents: HashMap<TermId, Option<TermId>> = HashMap::new();
    for term in terms {
        if parents.insert(term.id, term.parent).is_some() {
            errors.push(TermTreeError::DuplicateId(term.id));
        }
    }

    // Dangling parent references
    for term in terms {
        if let Some(parent) = term.parent {
            if !parents.contains_key(&parent) {
                errors.push(TermTreeError::MissingParent {
                    id: term.id,
                    parent,
                });
            }
        }
    }

    // Parent cycles: follow each chain until a root, a known-good term,
    // or a repeat within the current chain
    let mut acyclic: HashSet<TermId> = HashSet::new();
    for term in terms {
        let mut chain: Vec<TermId> = Vec::new();
        let mut seen: HashSet<TermId> = HashSet::new();
        let mut current = term.id;
        loop {
            if acyclic.contains(&current) {
                acyclic.extend(chain);
                break;
            }
            if !seen.insert(current) {
                errors.push(TermTreeError::ParentCycle(current));
                break;
            }
            chain.push(current);
            match parents.get(&current).copied().flatten() {
                Some(parent) if parents.contains_key(&parent) => current = parent,
                _ => {
                    acyclic.extend(chain);
                    break;
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tree_has_no_errors() {
        let terms = vec![
            Term::new(1, None, "a", "A"),
            Term::new(2, Some(1), "b", "B"),
            Term::new(3, Some(1), "c", "C"),
        ];
        assert!(validate_terms(&terms).is_empty());
    }

    #[test]
    fn test_duplicate_id_reported() {
        let terms = vec![
            Term::new(1, None, "a", "A"),
            Term::new(1, None, "b", "B"),
        ];
        assert!(validate_terms(&terms).contains(&TermTreeError::DuplicateId(1)));
    }

    #[test]
    fn test_missing_parent_reported() {
        let terms = vec![Term::new(2, Some(9), "b", "B")];
        let errors = validate_terms(&terms);
        assert!(errors.contains(&TermTreeError::MissingParent { id: 2, parent: 9 }));
    }

    #[test]
    fn test_parent_cycle_reported() {
        let terms = vec![
            Term::new(1, Some(2), "a", "A"),
            Term::new(2, Some(1), "b", "B"),
        ];
        let errors = validate_terms(&terms);
        assert!(errors
            .iter()
            .any(|e| matches!(e, TermTreeError::ParentCycle(_))));
    }

    #[test]
    fn test_error_display() {
        let err = TermTreeError::MissingParent { id: 2, parent: 9 };
        assert_eq!(err.to_string(), "term 2 references missing parent 9");
    }
}

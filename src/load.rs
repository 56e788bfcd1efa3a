use crate::term::Term;
use anyhow::Result;

/// Parse a YAML document into a term list.
///
/// Validation is NOT performed here — call `validate_terms()` before
/// walking if the source is untrusted.
pub fn parse_terms_yaml(yaml_str: &str) -> Result<Vec<Term>> {
    let terms: Vec<Term> = serde_yaml::from_str(yaml_str)?;
    Ok(terms)
}

/// Parse a JSON document into a term list. Same contract as
/// [`parse_terms_yaml`].
pub fn parse_terms_json(json_str: &str) -> Result<Vec<Term>> {
    let terms: Vec<Term> = serde_json::from_str(json_str)?;
    Ok(terms)
}

//! Advisory request-shape validator.
//!
//! Checks, by plain substring presence, that the token of each required
//! field appears in a request body destined for a known endpoint. This is a
//! best-effort lint over body *text* -- it never parses the body as
//! structured data and must not be used as a contract-enforcing gate.

use serde::Serialize;

/// Required field names per known endpoint.
const REQUIRED_FIELDS: &[(&str, &[&str])] = &[
    ("/screener/person/search", &["filters", "page"]),
    ("/search/enrichment", &["email"]),
];

/// Outcome of a best-effort shape check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Best-effort lint for request bodies against the known endpoint table.
pub struct RequestShapeValidator;

impl RequestShapeValidator {
    /// Check `body` for the required field tokens of `endpoint`.
    ///
    /// An endpoint not in the table produces a valid report with no errors:
    /// there is nothing to validate.
    pub fn validate(endpoint: &str, body: &str) -> ValidationReport {
        let mut errors = Vec::new();

        if let Some((_, fields)) = REQUIRED_FIELDS.iter().find(|(name, _)| *name == endpoint) {
            for field in fields.iter() {
                if !body.contains(field) {
                    errors.push(format!(
                        "missing required field '{field}' for endpoint {endpoint}"
                    ));
                }
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Lint a body for every known endpoint it mentions.
    ///
    /// Reports are merged; a body mentioning no known endpoint is valid.
    pub fn lint(body: &str) -> ValidationReport {
        let mut errors = Vec::new();

        for (endpoint, _) in REQUIRED_FIELDS.iter() {
            if body.contains(endpoint) {
                errors.extend(Self::validate(endpoint, body).errors);
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The endpoints this validator knows about.
    pub fn known_endpoints() -> impl Iterator<Item = &'static str> {
        REQUIRED_FIELDS.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_is_reported() {
        let body = r#"curl 'https://api.crustdata.com/screener/person/search' --data '{"filters": []}'"#;
        let report = RequestShapeValidator::lint(body);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("page"));
    }

    #[test]
    fn test_complete_person_search_body_is_valid() {
        let body = r#"{"filters": [{"filter_type": "REGION"}], "page": 1}"#;
        let report = RequestShapeValidator::validate("/screener/person/search", body);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_enrichment_requires_email() {
        let report = RequestShapeValidator::validate("/search/enrichment", r#"{"domain": "x.com"}"#);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("email"));
    }

    #[test]
    fn test_unknown_endpoint_has_nothing_to_validate() {
        let report = RequestShapeValidator::validate("/v2/unknown", "{}");
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_lint_ignores_bodies_without_known_endpoints() {
        let report = RequestShapeValidator::lint("how do I authenticate?");
        assert!(report.is_valid);
    }

    #[test]
    fn test_substring_check_is_textual_not_structural() {
        // The token appearing anywhere in the text satisfies the lint,
        // even outside a JSON field position.
        let body = "see /screener/person/search docs about filters and page numbering";
        let report = RequestShapeValidator::lint(body);
        assert!(report.is_valid);
    }
}

//! HTTP handlers, one module per resource path under `/api`.

pub mod directories;
pub mod news;
pub mod resources;
pub mod services;
pub mod statistics;

use crate::error::AppError;
use crate::model::Id;

/// Parse an `:id` path segment. Anything that is not an integer can never name a stored record,
/// so it is reported as the resource's not-found error.
pub(crate) fn parse_id(raw: &str, label: &'static str) -> Result<Id, AppError> {
    raw.parse().map_err(|_| AppError::NotFound(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("12", "Service").unwrap(), 12);
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        for raw in ["abc", "1.5", "", "99999999999"] {
            let err = parse_id(raw, "Statistic").unwrap_err();
            assert_eq!(err.to_string(), "Statistic not found");
        }
    }
}

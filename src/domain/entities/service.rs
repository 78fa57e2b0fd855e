//! Service entity representing a single dashboard bookmark.

use serde::{Deserialize, Serialize};

/// Lowest display column a service can be assigned to.
pub const COLUMN_MIN: i64 = 0;
/// Highest display column a service can be assigned to.
pub const COLUMN_MAX: i64 = 2;

/// A homelab service bookmark.
///
/// Services have no stable identifier; a service is addressed by its
/// position in the stored ordering. Deleting or reordering entries changes
/// what a given index refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Display column in `[0, 2]`. Defaulted to 0 when absent from the
    /// stored document; only the validated save path clamps it.
    #[serde(default)]
    pub column: i64,
}

impl Service {
    /// Creates a new service with the given name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: String::new(),
            column: 0,
        }
    }
}

/// Unvalidated inbound service record.
///
/// `name` and `url` default to empty strings so that an absent field is
/// reported by the validation layer as a per-record error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub description: Option<String>,
    pub column: Option<i64>,
}

impl ServiceDraft {
    /// Normalizes the draft into a persisted [`Service`].
    ///
    /// Clamps `column` into `[0, 2]` (defaulting to 0) and defaults a
    /// missing `description` to the empty string. Does not trim or reject
    /// anything; field presence checks belong to the caller.
    pub fn normalize(self) -> Service {
        Service {
            name: self.name,
            url: self.url,
            description: self.description.unwrap_or_default(),
            column: self
                .column
                .map(|c| c.clamp(COLUMN_MIN, COLUMN_MAX))
                .unwrap_or(COLUMN_MIN),
        }
    }
}

/// The persisted document: the full service collection plus the time of the
/// last successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDocument {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_normalize_defaults() {
        let draft = ServiceDraft {
            name: "Grafana".to_string(),
            url: "http://grafana.local".to_string(),
            description: None,
            column: None,
        };

        let service = draft.normalize();
        assert_eq!(service.description, "");
        assert_eq!(service.column, 0);
    }

    #[test]
    fn test_draft_normalize_clamps_column() {
        let mut draft = ServiceDraft {
            name: "Pihole".to_string(),
            url: "http://pihole.local".to_string(),
            description: Some("DNS".to_string()),
            column: Some(99),
        };
        assert_eq!(draft.clone().normalize().column, 2);

        draft.column = Some(-5);
        assert_eq!(draft.clone().normalize().column, 0);

        draft.column = Some(1);
        assert_eq!(draft.normalize().column, 1);
    }

    #[test]
    fn test_service_deserialize_defaults_column() {
        let service: Service =
            serde_json::from_str(r#"{"name":"NAS","url":"http://nas.local"}"#).unwrap();
        assert_eq!(service.column, 0);
        assert_eq!(service.description, "");
    }

    #[test]
    fn test_document_deserialize_missing_services() {
        let doc: ServiceDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.services.is_empty());
        assert_eq!(doc.last_updated, "");
    }
}

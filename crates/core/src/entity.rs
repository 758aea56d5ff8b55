//! Short URL entity
//!
//! The service has returned two payload shapes over time: an older one
//! without `modifiedAt`/`managementCode` and a newer one that includes
//! them. Both are modelled as a single type with optional fields, decided
//! per response rather than per deployment.

use serde::{Deserialize, Serialize};

/// One shortened URL record as returned by the service.
///
/// Constructed only from a decoded response body and never mutated; edit
/// operations yield a fresh entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    /// Service-assigned (or caller-supplied) identifier, immutable
    pub code: String,

    /// The original target URL
    pub url: String,

    /// Creation timestamp, as the service formats it
    pub created_at: String,

    /// Last modification timestamp, newer schema only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,

    /// Creation-order position, service-assigned and opaque
    pub pos: u64,

    /// Free-text attribution label
    pub credit: String,

    /// One-time secret authorizing edit/delete. Returned only by an
    /// editable create; it cannot be fetched again later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_code: Option<String>,

    /// The visitable shortened address
    #[serde(rename = "fullURL")]
    pub full_url: String,
}

impl ShortUrl {
    /// Whether a management code was issued for this record.
    ///
    /// A create that returned an already-existing record comes back
    /// without one, which is the only reliable signal for that case.
    pub fn is_editable(&self) -> bool {
        self.management_code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_schema() {
        let body = r#"{
            "code": "abc123",
            "url": "https://example.com/a.jpg",
            "createdAt": "2024-01-01T00:00:00Z",
            "modifiedAt": "2024-01-02T00:00:00Z",
            "pos": 42,
            "credit": "Someone",
            "managementCode": "mgmt-xyz",
            "fullURL": "https://yiff.rocks/abc123"
        }"#;

        let entity: ShortUrl = serde_json::from_str(body).unwrap();
        assert_eq!(entity.code, "abc123");
        assert_eq!(entity.url, "https://example.com/a.jpg");
        assert_eq!(entity.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(entity.modified_at.as_deref(), Some("2024-01-02T00:00:00Z"));
        assert_eq!(entity.pos, 42);
        assert_eq!(entity.management_code.as_deref(), Some("mgmt-xyz"));
        assert_eq!(entity.full_url, "https://yiff.rocks/abc123");
        assert!(entity.is_editable());
    }

    #[test]
    fn test_deserialize_legacy_schema() {
        // Older responses carry neither modifiedAt nor managementCode
        let body = r#"{
            "code": "abc123",
            "url": "https://example.com/a.jpg",
            "createdAt": "2024-01-01T00:00:00Z",
            "pos": 42,
            "credit": "Someone",
            "fullURL": "https://yiff.rocks/abc123"
        }"#;

        let entity: ShortUrl = serde_json::from_str(body).unwrap();
        assert_eq!(entity.modified_at, None);
        assert_eq!(entity.management_code, None);
        assert!(!entity.is_editable());
    }

    #[test]
    fn test_deserialize_null_optionals() {
        let body = r#"{
            "code": "abc123",
            "url": "https://example.com/a.jpg",
            "createdAt": "2024-01-01T00:00:00Z",
            "modifiedAt": null,
            "pos": 42,
            "credit": "Someone",
            "managementCode": null,
            "fullURL": "https://yiff.rocks/abc123"
        }"#;

        let entity: ShortUrl = serde_json::from_str(body).unwrap();
        assert_eq!(entity.modified_at, None);
        assert_eq!(entity.management_code, None);
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let entity = ShortUrl {
            code: "abc123".into(),
            url: "https://example.com".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            modified_at: None,
            pos: 1,
            credit: "Someone".into(),
            management_code: None,
            full_url: "https://yiff.rocks/abc123".into(),
        };

        let json = serde_json::to_value(&entity).unwrap();
        assert!(json.get("modifiedAt").is_none());
        assert!(json.get("managementCode").is_none());
        assert_eq!(json["fullURL"], "https://yiff.rocks/abc123");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
    }
}

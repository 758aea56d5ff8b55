//! Golden tests for output format verification
//!
//! Run with:
//! ```bash
//! cargo test --features golden
//! ```

#![cfg(feature = "golden")]

use yiffrocks_cli::output::entity_details;
use yr_core::ShortUrl;

fn sample_entity() -> ShortUrl {
    ShortUrl {
        code: "abc123".to_string(),
        url: "https://example.com/a.jpg".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        modified_at: Some("2024-01-02T12:30:45Z".to_string()),
        pos: 42,
        credit: "Someone".to_string(),
        management_code: Some("mgmt-xyz".to_string()),
        full_url: "https://yiff.rocks/abc123".to_string(),
    }
}

#[test]
fn golden_entity_details_with_management() {
    insta::assert_snapshot!(entity_details(&sample_entity(), true), @r"
    Code       : abc123
    URL        : https://example.com/a.jpg
    Short URL  : https://yiff.rocks/abc123
    Created    : 2024-01-01 00:00:00 UTC
    Modified   : 2024-01-02 12:30:45 UTC
    Position   : 42
    Credit     : Someone
    Management : mgmt-xyz
    ");
}

#[test]
fn golden_entity_json() {
    insta::assert_json_snapshot!(sample_entity(), @r#"
    {
      "code": "abc123",
      "url": "https://example.com/a.jpg",
      "createdAt": "2024-01-01T00:00:00Z",
      "modifiedAt": "2024-01-02T12:30:45Z",
      "pos": 42,
      "credit": "Someone",
      "managementCode": "mgmt-xyz",
      "fullURL": "https://yiff.rocks/abc123"
    }
    "#);
}

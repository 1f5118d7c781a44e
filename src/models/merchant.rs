//! Merchant data models
//!
//! `Issue` is the raw submission as it arrives from a tracker. `MerchantDetails`
//! is the typed record the loader fills in from it.

use serde::{Deserialize, Serialize};

/// Raw issue submission: a title line and a markdown body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Issue {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Merchant details recovered from an issue
///
/// Every field starts empty (or `false`) and is only ever written by the
/// loader, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDetails {
    /// Merchant name (first quoted segment of the title)
    pub name: String,

    /// Merchant category (second quoted segment of the title)
    pub category: String,

    pub url: String,

    pub image_url: String,

    pub facebook_handle: String,

    pub email_address: String,

    #[serde(rename = "acceptsBTC")]
    pub accepts_btc: bool,

    #[serde(rename = "acceptsBCH")]
    pub accepts_bch: bool,

    pub accepts_other_crypto: bool,

    /// Link to a supporting document
    pub document: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_details_are_empty() {
        let details = MerchantDetails::default();
        assert!(details.name.is_empty());
        assert!(details.url.is_empty());
        assert!(!details.accepts_btc);
        assert!(!details.accepts_bch);
        assert!(!details.accepts_other_crypto);
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let details = MerchantDetails {
            name: "Bob's Cafe".to_string(),
            image_url: "https://img.example/logo.png".to_string(),
            accepts_btc: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["name"], "Bob's Cafe");
        assert_eq!(json["imageUrl"], "https://img.example/logo.png");
        assert_eq!(json["acceptsBTC"], true);
        assert_eq!(json["acceptsBCH"], false);
        assert_eq!(json["acceptsOtherCrypto"], false);
    }

    #[test]
    fn test_issue_body_defaults_to_empty() {
        let issue: Issue = serde_json::from_str(r#"{"title": "Add \"X\" \"Y\""}"#).unwrap();
        assert_eq!(issue.title, "Add \"X\" \"Y\"");
        assert_eq!(issue.body, "");
    }
}

//! Scraped social post record

use serde::{Deserialize, Serialize};

/// A post scraped from a Facebook group feed
///
/// Field names follow the wire contract shared with the web client. The serde
/// derive rejects unknown fields; use [`crate::validation::validate_social_post`]
/// when per-field issues are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialPost {
    pub content: String,
    pub user: String,
    /// Link to the author's profile. Not checked to be a URL.
    #[serde(rename = "userLink")]
    pub user_link: String,
    /// Seconds since the Unix epoch
    pub posted_at: f64,
    #[serde(rename = "estimatedPricing")]
    pub estimated_pricing: f64,
}

impl SocialPost {
    /// Key identifying a post already forwarded by the scraper
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{} {}", self.user, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SocialPost {
        SocialPost {
            content: "Lift to Leeds on Friday".to_string(),
            user: "Jane Rider".to_string(),
            user_link: "https://www.facebook.com/groups/lifts/user/42".to_string(),
            posted_at: 1_700_000_000.0,
            estimated_pricing: 12.5,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "content": "Lift to Leeds on Friday",
                "user": "Jane Rider",
                "userLink": "https://www.facebook.com/groups/lifts/user/42",
                "posted_at": 1_700_000_000.0,
                "estimatedPricing": 12.5
            })
        );
    }

    #[test]
    fn test_unknown_field_rejected_by_serde() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["likes"] = json!(3);
        assert!(serde_json::from_value::<SocialPost>(value).is_err());
    }

    #[test]
    fn test_dedup_key() {
        assert_eq!(sample().dedup_key(), "Jane Rider Lift to Leeds on Friday");
    }
}

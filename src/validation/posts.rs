//! Social post schema
//!
//! A single post needs all five fields with the right JSON types. A collection
//! is all-or-nothing: one bad element fails the whole array, and every issue is
//! reported with the element index in its path.

use serde_json::Value;

use super::core::{
    expect_object, json_type_name, reject_unknown_keys, required_number, required_string,
    FieldPath, IssueCollector, IssueKind, ValidationError,
};
use crate::models::SocialPost;

const POST_FIELDS: &[&str] = &["content", "user", "userLink", "posted_at", "estimatedPricing"];

/// Validate a single post object
///
/// # Errors
///
/// Returns a [`ValidationError`] when the value is not an object, a field is
/// missing or has the wrong type, or an unknown field is present.
pub fn validate_social_post(value: &Value) -> Result<SocialPost, ValidationError> {
    validate_post_at(value, &FieldPath::root())
}

/// Validate an ordered sequence of posts
///
/// # Errors
///
/// Returns a [`ValidationError`] when the value is not an array or when any
/// element fails [`validate_social_post`]. Issues from every failing element
/// are included.
pub fn validate_social_posts(value: &Value) -> Result<Vec<SocialPost>, ValidationError> {
    let root = FieldPath::root();
    let Some(elements) = value.as_array() else {
        let mut issues = IssueCollector::new();
        issues.push(
            root,
            IssueKind::InvalidType {
                expected: "array",
                received: json_type_name(value),
            },
        );
        return Err(issues.into_error());
    };

    let mut issues = IssueCollector::new();
    let mut posts = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        match validate_post_at(element, &root.index(index)) {
            Ok(post) => posts.push(post),
            Err(error) => issues.absorb(&FieldPath::root(), error),
        }
    }

    if !issues.is_empty() {
        log::debug!("Rejected post collection of {} elements", elements.len());
    }
    issues.finish(posts)
}

fn validate_post_at(value: &Value, path: &FieldPath) -> Result<SocialPost, ValidationError> {
    let object = expect_object(value, path)?;
    let mut issues = IssueCollector::new();

    let content = required_string(object, "content", path, &mut issues);
    let user = required_string(object, "user", path, &mut issues);
    let user_link = required_string(object, "userLink", path, &mut issues);
    let posted_at = required_number(object, "posted_at", path, &mut issues);
    let estimated_pricing = required_number(object, "estimatedPricing", path, &mut issues);
    reject_unknown_keys(object, POST_FIELDS, path, &mut issues);

    match (content, user, user_link, posted_at, estimated_pricing) {
        (Some(content), Some(user), Some(user_link), Some(posted_at), Some(estimated_pricing)) => {
            issues.finish(SocialPost {
                content,
                user,
                user_link,
                posted_at,
                estimated_pricing,
            })
        }
        _ => Err(issues.into_error()),
    }
}

//! Validation Module
//!
//! Schema validators for the wire contract shared by the callable functions
//! and the web client.
//!
//! # Modules
//!
//! - [`core`] - Issue paths, issue collection and field extraction helpers
//! - [`auth_result`] - Authentication result schema
//! - [`posts`] - Social post schema (single post and collections)
//!
//! # Usage
//!
//! ```rust
//! use lift_automator::validation::{validate_authentication_result, validate_social_posts};
//! use serde_json::json;
//!
//! assert!(validate_authentication_result(&json!({ "success": true })).is_ok());
//! assert!(validate_social_posts(&json!([{ "user": "x" }])).is_err());
//! ```

pub mod auth_result;
pub mod core;
pub mod posts;

pub use auth_result::validate_authentication_result;
pub use self::core::{FieldPath, IssueKind, PathSegment, ValidationError, ValidationIssue};
pub use posts::{validate_social_post, validate_social_posts};

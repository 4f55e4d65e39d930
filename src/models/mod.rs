//! Value objects shared between the callable functions and their clients

pub mod auth_result;
pub mod post;

pub use auth_result::{AuthenticationFailure, AuthenticationResult, UnknownFailureReason};
pub use post::SocialPost;

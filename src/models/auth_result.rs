//! Facebook authentication outcome
//!
//! The wire shape is a discriminated union keyed on a boolean:
//! `{"success": true}` or `{"success": false, "error": "<reason>"}` where the
//! reason is one of three fixed literals. Values are only ever constructed from
//! the boolean and the enumerated reason, never from field presence alone.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Reason carried by a failed authentication attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationFailure {
    /// The credentials or code were rejected
    AuthenticationFailed,
    /// The backend could not complete the attempt
    ServerError,
    /// Facebook is waiting for a second factor
    TwoFactorRequired,
}

impl AuthenticationFailure {
    /// Every reason, in wire order
    pub const ALL: [Self; 3] = [
        Self::AuthenticationFailed,
        Self::ServerError,
        Self::TwoFactorRequired,
    ];

    /// The literal used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "Authentication failed",
            Self::ServerError => "Server error",
            Self::TwoFactorRequired => "2FA required",
        }
    }
}

impl fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the enumerated failure reasons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFailureReason(pub String);

impl fmt::Display for UnknownFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown authentication failure reason: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFailureReason {}

impl FromStr for AuthenticationFailure {
    type Err = UnknownFailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| UnknownFailureReason(s.to_string()))
    }
}

/// Outcome of a Facebook authentication operation
///
/// A failure here is a normal business answer, not an invocation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationResult {
    Success,
    Failure(AuthenticationFailure),
}

impl AuthenticationResult {
    #[must_use]
    pub const fn failure(reason: AuthenticationFailure) -> Self {
        Self::Failure(reason)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure reason, if any
    #[must_use]
    pub const fn error(&self) -> Option<AuthenticationFailure> {
        match self {
            Self::Success => None,
            Self::Failure(reason) => Some(*reason),
        }
    }
}

impl Serialize for AuthenticationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("success", &true)?;
                map.end()
            }
            Self::Failure(reason) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", reason.as_str())?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AuthenticationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        crate::validation::validate_authentication_result(&value).map_err(serde::de::Error::custom)
    }
}

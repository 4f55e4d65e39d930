//! Callable functions
//!
//! - [`callable`] - Wire protocol: envelopes, identity claim, invocation errors
//! - [`facebook`] - The two Facebook authentication callables and their backend seam
//!
//! A [`FunctionRegistry`] maps callable names to implementations; the HTTP
//! layer resolves `POST /{name}` through it.

pub mod callable;
pub mod facebook;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub use callable::{
    parse_request_body, CallableContext, CallableError, CallableStatus, IdentityClaim,
};
pub use facebook::{
    check_facebook_authentication, submit_2fa_code, CheckFacebookAuthentication,
    FacebookAuthBackend, PlaceholderFacebookBackend, SubmitTwoFactorCode,
};

/// A named remote operation
#[async_trait]
pub trait CallableFunction: Send + Sync {
    /// Name the callable is invoked by
    fn name(&self) -> &'static str;

    /// Run one invocation
    ///
    /// # Errors
    ///
    /// Returns a [`CallableError`] when the invocation is rejected; no result
    /// is produced in that case.
    async fn call(&self, context: &CallableContext) -> Result<Value, CallableError>;
}

/// Callables available to the HTTP layer, keyed by name
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<&'static str, Arc<dyn CallableFunction>>,
}

impl FunctionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry exposing `checkFacebookAuthentication` and `submit2FaCode`
    #[must_use]
    pub fn with_facebook_functions(backend: Arc<dyn FacebookAuthBackend>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CheckFacebookAuthentication::new(Arc::clone(&backend))));
        registry.register(Arc::new(SubmitTwoFactorCode::new(backend)));
        registry
    }

    /// Add a callable, replacing any previous one with the same name
    pub fn register(&mut self, function: Arc<dyn CallableFunction>) {
        if self.functions.insert(function.name(), function).is_some() {
            log::warn!("Replaced an already registered callable");
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn CallableFunction>> {
        self.functions.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.keys().copied().collect()
    }

    /// Resolve and run a callable
    ///
    /// # Errors
    ///
    /// Returns [`CallableError::NotFound`] for unknown names, otherwise whatever
    /// the callable returns.
    pub async fn invoke(
        &self,
        name: &str,
        context: &CallableContext,
    ) -> Result<Value, CallableError> {
        let function = self
            .get(name)
            .ok_or_else(|| CallableError::NotFound(name.to_string()))?;
        function.call(context).await
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FunctionRegistry {
        FunctionRegistry::with_facebook_functions(Arc::new(PlaceholderFacebookBackend))
    }

    #[test]
    fn test_facebook_registry_names() {
        assert_eq!(
            registry().names(),
            vec!["checkFacebookAuthentication", "submit2FaCode"]
        );
        assert!(registry().contains("submit2FaCode"));
        assert!(!registry().contains("scrapeGroups"));
    }

    #[actix_web::test]
    async fn test_invoke_unknown_name() {
        let context = CallableContext::new(IdentityClaim::new("token"), Value::Null);
        let result = registry().invoke("deleteEverything", &context).await;
        assert_eq!(
            result,
            Err(CallableError::NotFound("deleteEverything".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_invoke_known_name() {
        let context = CallableContext::new(IdentityClaim::new("token"), Value::Null);
        let result = registry()
            .invoke("checkFacebookAuthentication", &context)
            .await
            .unwrap();
        assert_eq!(result["error"], "2FA required");
    }
}

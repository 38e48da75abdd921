//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and identity resolver.

use std::sync::Arc;

use geev_common::{AppConfig, JwtService};
use geev_service::ServiceContext;

use crate::extractors::{IdentityResolver, JwtIdentityResolver};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Resolves the caller of authenticated endpoints
    identity_resolver: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// Create a new AppState authenticating callers with JWTs signed by the configured secret
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);
        let resolver = JwtIdentityResolver::new(jwt, config.auth.cookie_name.clone());
        Self::with_identity_resolver(service_context, config, Arc::new(resolver))
    }

    /// Create a new AppState with a custom identity resolver
    pub fn with_identity_resolver(
        service_context: ServiceContext,
        config: AppConfig,
        identity_resolver: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            identity_resolver,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the identity resolver
    pub fn identity_resolver(&self) -> &dyn IdentityResolver {
        self.identity_resolver.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .field("identity_resolver", &"IdentityResolver")
            .finish()
    }
}

//! Initializer resolution
//!
//! Resolution order:
//! 1. `initializer-class-name`, when set, names the initializer. Lookup
//!    failures are returned, never replaced by a default.
//! 2. Otherwise [`JspFacesInitializer`] if `support-jsp` is enabled and the
//!    probe reports [`JSP_CAPABILITY`], else [`FaceletsInitializer`].

use faces_config::{InitParams, configured_initializer, support_jsp_enabled};

use crate::initializer::{FaceletsInitializer, FacesInitializer, JspFacesInitializer};
use crate::probe::{CapabilityProbe, JSP_CAPABILITY};
use crate::registry::TypeRegistry;
use crate::Result;

/// Chooses the initializer for an application at startup.
///
/// Holds no per-call state: each [`resolve`](Self::resolve) reads the
/// parameters and probe afresh and builds a new instance.
#[derive(Debug, Clone, Default)]
pub struct InitializerResolver {
    registry: TypeRegistry,
}

impl InitializerResolver {
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// Resolver backed by a registry holding only the default initializers.
    pub fn with_builtins() -> Self {
        Self::new(TypeRegistry::with_builtins())
    }

    /// Resolve the initializer for `params`.
    pub fn resolve(
        &self,
        params: &dyn InitParams,
        probe: &dyn CapabilityProbe,
    ) -> Result<Box<dyn FacesInitializer>> {
        resolve(params, &self.registry, probe)
    }
}

/// Resolve the initializer for `params` against `registry`.
pub fn resolve(
    params: &dyn InitParams,
    registry: &TypeRegistry,
    probe: &dyn CapabilityProbe,
) -> Result<Box<dyn FacesInitializer>> {
    if let Some(name) = configured_initializer(params) {
        tracing::debug!(name, "Using configured initializer");
        return registry.instantiate(name).inspect_err(|e| {
            tracing::warn!(name, error = %e, "Configured initializer rejected");
        });
    }

    Ok(default_initializer(params, probe))
}

fn default_initializer(
    params: &dyn InitParams,
    probe: &dyn CapabilityProbe,
) -> Box<dyn FacesInitializer> {
    if support_jsp_enabled(params) && probe.capability_available(JSP_CAPABILITY) {
        tracing::debug!("JSP integration available, using JSP initializer");
        return Box::new(JspFacesInitializer::new());
    }

    tracing::debug!("Using Facelets-only initializer");
    Box::new(FaceletsInitializer::new())
}

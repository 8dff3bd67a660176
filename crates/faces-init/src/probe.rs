//! Host capability probing
//!
//! Default selection asks the host whether the optional JSP integration
//! is present. The question goes through [`CapabilityProbe`] so callers
//! and tests can answer it directly.

use std::collections::HashSet;

use crate::registry::TypeRegistry;

/// Capability that marks JSP integration as available.
pub const JSP_CAPABILITY: &str = "javax.servlet.jsp.JspApplicationContext";

/// Reports whether an optional capability exists in the host environment.
pub trait CapabilityProbe {
    fn capability_available(&self, name: &str) -> bool;
}

impl<F> CapabilityProbe for F
where
    F: Fn(&str) -> bool,
{
    fn capability_available(&self, name: &str) -> bool {
        self(name)
    }
}

/// A registered type counts as an available capability.
impl CapabilityProbe for TypeRegistry {
    fn capability_available(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Explicit set of available capabilities.
///
/// # Example
///
/// ```
/// use faces_init::{CapabilityProbe, CapabilitySet, JSP_CAPABILITY};
///
/// let probe = CapabilitySet::new().with(JSP_CAPABILITY);
/// assert!(probe.capability_available(JSP_CAPABILITY));
/// assert!(!CapabilitySet::new().capability_available(JSP_CAPABILITY));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    names: HashSet<String>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability (builder pattern).
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl CapabilityProbe for CapabilitySet {
    fn capability_available(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistration;

    #[test]
    fn test_closure_probe() {
        let probe = |name: &str| name == JSP_CAPABILITY;
        assert!(probe.capability_available(JSP_CAPABILITY));
        assert!(!probe.capability_available("javax.el.ExpressionFactory"));
    }

    #[test]
    fn test_capability_set_from_iter() {
        let set: CapabilitySet = ["a", "b", "a"].into_iter().collect();
        assert!(set.capability_available("a"));
        assert!(set.capability_available("b"));
        assert!(!set.capability_available("c"));
    }

    #[test]
    fn test_registry_probe() {
        let registry = TypeRegistry::new()
            .with(TypeRegistration::other(JSP_CAPABILITY, "JspApplicationContext"));
        assert!(registry.capability_available(JSP_CAPABILITY));
        assert!(!TypeRegistry::with_builtins().capability_available(JSP_CAPABILITY));
    }
}

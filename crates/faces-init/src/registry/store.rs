//! Type registry storage

use std::collections::HashMap;

use super::TypeRegistration;
use crate::initializer::FacesInitializer;
use crate::{Error, Result};

/// Names resolvable by a configured initializer override.
///
/// Plays the role of the application's class path: only names registered
/// here can be instantiated, and presence of a name can be probed.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeRegistration>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the default initializers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            registry.register(reg);
        }
        registry
    }

    /// Register a type, replacing any previous entry with the same name.
    pub fn register(&mut self, reg: TypeRegistration) {
        self.types.insert(reg.name.clone(), reg);
    }

    /// Register a type (builder pattern).
    pub fn with(mut self, reg: TypeRegistration) -> Self {
        self.register(reg);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeRegistration> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// List all registered names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.types.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// List names that resolve to an initializer (sorted).
    pub fn initializers(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .types
            .values()
            .filter(|r| r.is_initializer())
            .map(|r| r.name.as_str())
            .collect();
        names.sort();
        names
    }

    /// Look up `name` and construct a fresh initializer.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn FacesInitializer>> {
        let reg = self.get(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })?;
        reg.instantiate()
    }
}

//! Core types for the type registry

use std::fmt;
use std::sync::Arc;

use crate::initializer::FacesInitializer;
use crate::{BoxError, Error, Result};

/// Shared zero-argument initializer constructor.
pub type Constructor =
    Arc<dyn Fn() -> std::result::Result<Box<dyn FacesInitializer>, BoxError> + Send + Sync>;

/// What a registered name resolves to.
#[derive(Clone)]
pub enum TypeKind {
    /// A constructible initializer
    Initializer(Constructor),
    /// A known type that is not an initializer (e.g. a context listener)
    Other {
        /// Contract the type does implement
        implements: String,
    },
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Initializer(_) => f.write_str("Initializer"),
            TypeKind::Other { implements } => {
                f.debug_struct("Other").field("implements", implements).finish()
            }
        }
    }
}

/// A named entry in the [`TypeRegistry`](super::TypeRegistry).
#[derive(Debug, Clone)]
pub struct TypeRegistration {
    /// Fully qualified name, as written in the descriptor
    pub name: String,
    pub kind: TypeKind,
}

impl TypeRegistration {
    /// Register an initializer built by `constructor`.
    pub fn initializer<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> std::result::Result<Box<dyn FacesInitializer>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            kind: TypeKind::Initializer(Arc::new(constructor)),
        }
    }

    /// Register an initializer built through its `Default` impl.
    pub fn of<T>(name: impl Into<String>) -> Self
    where
        T: FacesInitializer + Default + 'static,
    {
        Self::initializer(name, || Ok(Box::new(T::default())))
    }

    /// Register a known type that does not implement [`FacesInitializer`].
    pub fn other(name: impl Into<String>, implements: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Other {
                implements: implements.into(),
            },
        }
    }

    pub fn is_initializer(&self) -> bool {
        matches!(self.kind, TypeKind::Initializer(_))
    }

    /// Construct a fresh instance.
    ///
    /// Fails with [`Error::WrongCapability`] for non-initializer types and
    /// [`Error::InstantiationFailed`] when the constructor errors.
    pub fn instantiate(&self) -> Result<Box<dyn FacesInitializer>> {
        match &self.kind {
            TypeKind::Initializer(constructor) => {
                constructor().map_err(|source| Error::InstantiationFailed {
                    name: self.name.clone(),
                    source,
                })
            }
            TypeKind::Other { implements } => Err(Error::WrongCapability {
                name: self.name.clone(),
                implements: implements.clone(),
            }),
        }
    }
}

//! Initializer selection for faces web applications.
//!
//! At startup an application needs exactly one [`FacesInitializer`]. It is
//! either named explicitly by the `initializer-class-name` context
//! parameter and looked up in a [`TypeRegistry`], or chosen by default:
//! [`JspFacesInitializer`] when JSP support is enabled and the JSP
//! capability is present, [`FaceletsInitializer`] otherwise.

pub mod error;
pub mod initializer;
pub mod probe;
pub mod registry;
pub mod resolver;

pub use error::{BoxError, Error, Result};
pub use initializer::{FaceletsInitializer, FacesInitializer, JspFacesInitializer, ViewLanguage};
pub use probe::{CapabilityProbe, CapabilitySet, JSP_CAPABILITY};
pub use registry::{Constructor, TypeKind, TypeRegistration, TypeRegistry};
pub use resolver::{InitializerResolver, resolve};

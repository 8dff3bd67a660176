//! Deployment descriptor parameters for the faces initializer.
//!
//! This crate provides the read-only [`InitParams`] accessor the
//! initializer lookup consumes, the recognized parameter keys, and a
//! loader for deployment descriptor files.

pub mod descriptor;
pub mod error;
pub mod params;

pub use descriptor::{Descriptor, DescriptorStore};
pub use error::{Error, Result};
pub use params::{
    ContextParams, INITIALIZER_CLASS_NAME, InitParams, SUPPORT_JSP, configured_initializer,
    is_blank, support_jsp_enabled,
};

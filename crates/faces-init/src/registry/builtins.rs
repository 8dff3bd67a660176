//! Built-in type registrations

use super::TypeRegistration;
use crate::initializer::{FaceletsInitializer, JspFacesInitializer};

/// Number of built-in registrations.
pub const BUILTIN_COUNT: usize = 2;

/// Registrations for the default initializers.
///
/// Both defaults can also be named explicitly in the descriptor.
pub fn builtin_registrations() -> Vec<TypeRegistration> {
    vec![
        TypeRegistration::of::<JspFacesInitializer>(JspFacesInitializer::NAME),
        TypeRegistration::of::<FaceletsInitializer>(FaceletsInitializer::NAME),
    ]
}

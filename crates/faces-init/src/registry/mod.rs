//! Type registry for configured initializer overrides
//!
//! Maps the names accepted by `initializer-class-name` to zero-argument
//! constructors. Names that resolve to something other than an
//! initializer are kept so a misconfiguration is reported precisely.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::TypeRegistry;
pub use types::{Constructor, TypeKind, TypeRegistration};

//! Command implementations for faces-cli

pub mod list;
pub mod resolve;

pub use list::run_list;
pub use resolve::run_resolve;

//! Resolve command

use std::path::Path;

use colored::Colorize;
use faces_config::{DescriptorStore, configured_initializer};
use faces_init::{CapabilitySet, InitializerResolver, JSP_CAPABILITY};
use serde::Serialize;

use crate::error::Result;

/// How the initializer was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Configured,
    Default,
}

/// Outcome of a resolution, as printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub initializer: String,
    pub selection: Selection,
    pub view_languages: Vec<String>,
    pub supports_jsp: bool,
}

/// Resolve the initializer for a descriptor file.
pub fn resolve_report(
    descriptor_path: &Path,
    jsp: bool,
    capabilities: &[String],
) -> Result<ResolveReport> {
    let descriptor = DescriptorStore::new().load(descriptor_path)?;

    let mut probe: CapabilitySet = capabilities.iter().cloned().collect();
    if jsp {
        probe.insert(JSP_CAPABILITY);
    }

    let initializer = InitializerResolver::with_builtins().resolve(&descriptor, &probe)?;
    let selection = if configured_initializer(&descriptor).is_some() {
        Selection::Configured
    } else {
        Selection::Default
    };

    Ok(ResolveReport {
        initializer: initializer.name().to_string(),
        selection,
        view_languages: initializer
            .view_languages()
            .iter()
            .map(ToString::to_string)
            .collect(),
        supports_jsp: initializer.supports_jsp(),
    })
}

/// Run the resolve command
pub fn run_resolve(
    descriptor_path: &Path,
    jsp: bool,
    capabilities: &[String],
    json: bool,
) -> Result<()> {
    let report = resolve_report(descriptor_path, jsp, capabilities)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let selection = match report.selection {
        Selection::Configured => "configured",
        Selection::Default => "default",
    };
    println!(
        "{} {} ({})",
        "Initializer:".bold(),
        report.initializer.green(),
        selection.dimmed()
    );
    println!(
        "{} {}",
        "View languages:".bold(),
        report.view_languages.join(", ")
    );

    Ok(())
}

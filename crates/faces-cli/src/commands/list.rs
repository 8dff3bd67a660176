//! List command

use colored::Colorize;
use faces_init::TypeRegistry;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct ListedType<'a> {
    name: &'a str,
    initializer: bool,
}

/// Run the list command
pub fn run_list(json: bool) -> Result<()> {
    let registry = TypeRegistry::with_builtins();

    if json {
        let types: Vec<_> = registry
            .list()
            .into_iter()
            .filter_map(|name| registry.get(name))
            .map(|reg| ListedType {
                name: &reg.name,
                initializer: reg.is_initializer(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    println!("{}", "Registered Initializers".bold());
    println!();
    for name in registry.initializers() {
        println!("  {}", name.green());
    }
    println!();
    println!(
        "{} {} types registered. Set {} to choose one.",
        "Total:".dimmed(),
        registry.len(),
        faces_config::INITIALIZER_CLASS_NAME.cyan()
    );

    Ok(())
}

use anyhow::Result;
use parley::registry::Registry;

/// Prints the dataset names of `key`, one per line.
///
/// # Errors
/// Returns an error if `key` is not registered.
pub fn list_datasets(registry: &Registry, key: &str) -> Result<()> {
    let datasets = registry.datasets(key)?;

    if datasets.is_empty() {
        eprintln!("'{key}' has no datasets");
    }
    for name in datasets {
        println!("{name}");
    }

    Ok(())
}

use anyhow::{Context, Result};
use parley::domain::config::ShellConfig;
use parley::kernel::params::parse_assignment;
use parley::registry::Registry;

/// Materializes `key`, applies overrides and prints the result.
///
/// Config-file overrides for `key` apply first, then `assignments` in order.
/// Nothing is applied if any override targets an undefined param.
///
/// # Errors
/// Returns an error for unknown keys or datasets, malformed assignments and
/// overrides of undefined params.
pub fn show(
    registry: &Registry,
    config: &ShellConfig,
    key: &str,
    dataset: Option<&str>,
    assignments: &[String],
    json: bool,
) -> Result<()> {
    let mut params = match dataset {
        Some(dataset) => registry.get_for_dataset(key, dataset)?,
        None => registry.get(key)?,
    };

    let overrides = config
        .overrides_for(key)
        .chain(assignments.iter().map(String::as_str))
        .map(parse_assignment)
        .collect::<Result<Vec<_>, _>>()?;
    params
        .apply_overrides(overrides)
        .with_context(|| format!("Failed to override params of '{key}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        print!("{}", params.to_text());
    }

    Ok(())
}

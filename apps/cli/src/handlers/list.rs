use parley::registry::Registry;

/// Prints matching keys, one per line.
pub fn list_keys(registry: &Registry, prefix: Option<&str>) {
    let keys = registry.list_keys(prefix);

    if keys.is_empty() {
        eprintln!("No configurations match '{}'", keys.prefix());
        return;
    }

    for key in &keys {
        println!("{key}");
    }
}

use crate::key::ConfigKey;
use parley_domain::constants::KEY_SEPARATOR;

const MAX_SUGGESTIONS: usize = 5;

/// Registered keys close to `requested`, best matches first.
///
/// Keys in the same namespace come first, then keys with the same last
/// segment (ignoring case), then keys sharing the top-level segment.
pub(crate) fn suggest<'a, I>(requested: &str, known: I) -> Vec<String>
where
    I: Iterator<Item = &'a ConfigKey> + Clone,
{
    let (namespace, name) = match requested.rsplit_once(KEY_SEPARATOR) {
        Some((ns, name)) => (Some(ns), name),
        None => (None, requested),
    };
    let family = requested.split(KEY_SEPARATOR).next().filter(|f| !f.is_empty());

    let mut picked: Vec<String> = Vec::new();
    let mut take = |candidates: &mut dyn Iterator<Item = &'a ConfigKey>| {
        for key in candidates {
            if picked.len() == MAX_SUGGESTIONS {
                return;
            }
            if !picked.iter().any(|p| p == key.as_str()) {
                picked.push(key.as_str().to_owned());
            }
        }
    };

    if namespace.is_some() {
        take(&mut known.clone().filter(|k| k.namespace() == namespace));
    }
    take(&mut known.clone().filter(|k| k.name().eq_ignore_ascii_case(name)));
    if let Some(family) = family {
        take(&mut known.filter(|k| k.as_str().split(KEY_SEPARATOR).next() == Some(family)));
    }
    picked
}

use crate::error::RegistryError;
use parley_domain::constants::{KEY_CRATE_PREFIX, KEY_SEPARATOR, PARAMS_SEGMENT};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::sync::Arc;

/// A validated registry key such as `asr.librispeech.Librispeech960Grapheme`.
///
/// Keys are non-empty, dot-separated paths whose segments contain only ASCII
/// letters, digits and `_`. Ordering is plain byte order of the text, which is
/// the order `list_keys` reports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigKey(Arc<str>);

impl ConfigKey {
    /// # Errors
    /// [`RegistryError::InvalidKey`] if `raw` is empty, has an empty segment, or
    /// contains a character outside `[A-Za-z0-9_.]`.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        validate(raw)?;
        Ok(Self(Arc::from(raw)))
    }

    /// Derives the key of a params type from its module path.
    ///
    /// Types declared under a `params` module at the root of a `parley_*` crate
    /// get the short form: `parley_asr::params::wsj::WsjGrapheme` becomes
    /// `asr.wsj.WsjGrapheme`. Any other path keeps every segment, so
    /// `parley_asr::wsj::WsjGrapheme` becomes `parley_asr.wsj.WsjGrapheme`.
    ///
    /// # Errors
    /// [`RegistryError::InvalidKey`] for generic or otherwise compound types.
    pub fn of<T: ?Sized + 'static>() -> Result<Self, RegistryError> {
        Self::from_type_path(std::any::type_name::<T>())
    }

    /// # Errors
    /// See [`ConfigKey::of`].
    pub fn from_type_path(path: &str) -> Result<Self, RegistryError> {
        if path.contains(|c: char| matches!(c, '<' | '>' | '[' | '(' | '&' | '*' | ' ' | ',')) {
            return Err(invalid(format!("'{path}' is not a plain type path")));
        }

        let segments: Vec<&str> = path.split("::").collect();
        let short = match segments.as_slice() {
            [krate, PARAMS_SEGMENT, rest @ ..] if !rest.is_empty() => {
                krate.strip_prefix(KEY_CRATE_PREFIX).map(|name| {
                    std::iter::once(name).chain(rest.iter().copied()).collect::<Vec<_>>().join(".")
                })
            },
            _ => None,
        };
        let joined = short.unwrap_or_else(|| segments.join("."));

        Self::parse(&joined).map_err(|_| invalid(format!("'{path}' does not map to a valid key")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last segment, if the key has more than one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0.rsplit_once(KEY_SEPARATOR).map(|(ns, _)| ns)
    }

    /// The last segment.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit_once(KEY_SEPARATOR).map_or(&*self.0, |(_, name)| name)
    }
}

fn validate(raw: &str) -> Result<(), RegistryError> {
    if raw.is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    for segment in raw.split(KEY_SEPARATOR) {
        if segment.is_empty() {
            return Err(invalid(format!("'{raw}' has an empty segment")));
        }
        if let Some(bad) = segment.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(invalid(format!("'{raw}' contains illegal character {bad:?}")));
        }
    }
    Ok(())
}

fn invalid(message: impl Into<Cow<'static, str>>) -> RegistryError {
    RegistryError::InvalidKey { message: message.into(), context: None }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = RegistryError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = RegistryError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        validate(&raw)?;
        Ok(Self(Arc::from(raw)))
    }
}

//! # Params
//!
//! The configuration object handed out by the registry: a tree of named,
//! documented hyperparameters. A name must be [`define`](Params::define)d
//! (with a default and a doc string) before it can be [`set`](Params::set), so
//! typos in overrides fail loudly instead of silently adding new knobs.
//!
//! Values are owned. `clone()` is a deep copy, which is what lets every
//! registry lookup return an independently mutable tree.
//!
//! ```rust
//! use parley_kernel::params::{Params, ParamValue};
//!
//! let mut p = Params::new()
//!     .with("learning_rate", 1e-3, "Initial learning rate.")?
//!     .with("encoder", Params::new().with("num_layers", 4, "Stacked layers.")?, "Encoder.")?;
//!
//! p.set("encoder.num_layers", 6)?;
//! assert_eq!(p.get("encoder.num_layers")?, &ParamValue::Int(6));
//! # Ok::<(), parley_kernel::params::ParamsError>(())
//! ```

mod error;
mod value;

pub use error::{ParamsError, ParamsErrorExt};
pub use value::ParamValue;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const PATH_SEPARATOR: char = '.';

#[derive(Debug, Clone)]
struct Param {
    value: ParamValue,
    doc: Cow<'static, str>,
}

/// A nested, documented hyperparameter tree.
///
/// Iteration and text dumps are sorted by name. Equality ignores doc strings.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: BTreeMap<String, Param>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new param with its default value.
    ///
    /// # Errors
    /// [`ParamsError::InvalidName`] if `name` is not `[a-z][a-z0-9_]*`,
    /// [`ParamsError::AlreadyDefined`] if it already exists.
    pub fn define(
        &mut self,
        name: &str,
        default: impl Into<ParamValue>,
        doc: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, ParamsError> {
        validate_name(name)?;
        if self.entries.contains_key(name) {
            return Err(ParamsError::AlreadyDefined { name: name.to_owned(), context: None });
        }
        self.entries.insert(name.to_owned(), Param { value: default.into(), doc: doc.into() });
        Ok(self)
    }

    /// Consuming form of [`Params::define`] for building trees in one expression.
    ///
    /// # Errors
    /// Same as [`Params::define`].
    pub fn with(
        mut self,
        name: &str,
        default: impl Into<ParamValue>,
        doc: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ParamsError> {
        self.define(name, default, doc)?;
        Ok(self)
    }

    /// Replaces the value at a dotted path such as `encoder.num_layers`.
    ///
    /// # Errors
    /// [`ParamsError::Undefined`] if the leaf (or an intermediate node) was never
    /// defined, [`ParamsError::NotNested`] if an intermediate node is a plain value.
    pub fn set(&mut self, path: &str, value: impl Into<ParamValue>) -> Result<(), ParamsError> {
        self.slot_mut(path)?.value = value.into();
        Ok(())
    }

    /// Sets `name` if defined at this level, otherwise defines it with an empty doc.
    ///
    /// # Errors
    /// [`ParamsError::InvalidName`] when `name` has to be defined but is not a valid name.
    pub fn define_or_set(
        &mut self,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<(), ParamsError> {
        match self.entries.get_mut(name) {
            Some(slot) => slot.value = value.into(),
            None => {
                self.define(name, value, "")?;
            },
        }
        Ok(())
    }

    /// # Errors
    /// [`ParamsError::Undefined`] or [`ParamsError::NotNested`], as for [`Params::set`].
    pub fn get(&self, path: &str) -> Result<&ParamValue, ParamsError> {
        Ok(&self.slot(path)?.value)
    }

    /// The nested params at `path`.
    ///
    /// # Errors
    /// [`ParamsError::NotNested`] if the value at `path` is not a params tree.
    pub fn child(&self, path: &str) -> Result<&Params, ParamsError> {
        self.get(path)?
            .as_params()
            .ok_or_else(|| ParamsError::NotNested { path: path.to_owned(), context: None })
    }

    /// # Errors
    /// [`ParamsError::Undefined`] or [`ParamsError::NotNested`], as for [`Params::set`].
    pub fn doc(&self, path: &str) -> Result<&str, ParamsError> {
        Ok(&self.slot(path)?.doc)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.slot(path).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(name, param)| (name.as_str(), &param.value))
    }

    /// Applies `(path, value)` pairs in order.
    ///
    /// Overrides are staged on a copy and committed together, so on error the tree is unchanged
    /// and each override sees the ones before it.
    ///
    /// # Errors
    /// The first [`ParamsError::Undefined`] or [`ParamsError::NotNested`] encountered.
    pub fn apply_overrides<I, K, V>(&mut self, overrides: I) -> Result<(), ParamsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let mut staged = self.clone();
        for (path, value) in overrides {
            staged.set(path.as_ref(), value)?;
        }
        *self = staged;
        Ok(())
    }

    /// Every leaf as `(dotted.path, value)`, sorted by path.
    ///
    /// Nested params are descended into; empty nested params produce no line.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &ParamValue)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    /// One `dotted.path : value` line per leaf.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.flatten().into_iter().fold(String::new(), |mut text, (path, value)| {
            let _ = writeln!(text, "{path} : {value}");
            text
        })
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a ParamValue)>) {
        for (name, param) in &self.entries {
            let path =
                if prefix.is_empty() { name.clone() } else { format!("{prefix}.{name}") };
            match &param.value {
                ParamValue::Params(nested) => nested.flatten_into(&path, out),
                leaf => out.push((path, leaf)),
            }
        }
    }

    fn slot(&self, path: &str) -> Result<&Param, ParamsError> {
        let (parents, leaf) = split_path(path);
        let mut node = self;
        let mut walked = 0;
        for segment in parents {
            walked += segment.len() + 1;
            let param = node.entries.get(segment).ok_or_else(|| undefined(&path[..walked - 1]))?;
            node = param.value.as_params().ok_or_else(|| not_nested(&path[..walked - 1]))?;
        }
        node.entries.get(leaf).ok_or_else(|| undefined(path))
    }

    fn slot_mut(&mut self, path: &str) -> Result<&mut Param, ParamsError> {
        let (parents, leaf) = split_path(path);
        let mut node = self;
        let mut walked = 0;
        for segment in parents {
            walked += segment.len() + 1;
            let param =
                node.entries.get_mut(segment).ok_or_else(|| undefined(&path[..walked - 1]))?;
            node =
                param.value.as_params_mut().ok_or_else(|| not_nested(&path[..walked - 1]))?;
        }
        node.entries.get_mut(leaf).ok_or_else(|| undefined(path))
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ln, lp), (rn, rp))| ln == rn && lp.value == rp.value)
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, ParamValue>::deserialize(deserializer)?;
        let mut params = Self::new();
        for (name, value) in raw {
            params.define(&name, value, "").map_err(D::Error::custom)?;
        }
        Ok(params)
    }
}

/// Anything a registry factory may return.
///
/// Plain [`Params`] for infallible factories, `Result<Params, ParamsError>` for
/// factories built with [`Params::with`].
pub trait IntoParams {
    /// # Errors
    /// Whatever the factory produced.
    fn into_params(self) -> Result<Params, ParamsError>;
}

impl IntoParams for Params {
    fn into_params(self) -> Result<Params, ParamsError> {
        Ok(self)
    }
}

impl IntoParams for Result<Params, ParamsError> {
    fn into_params(self) -> Result<Params, ParamsError> {
        self
    }
}

/// Splits `path=literal` into a path and a parsed [`ParamValue`].
///
/// # Errors
/// [`ParamsError::Assignment`] when there is no `=` or the path is empty.
pub fn parse_assignment(text: &str) -> Result<(String, ParamValue), ParamsError> {
    let malformed = || ParamsError::Assignment { text: text.to_owned(), context: None };
    let (path, literal) = text.split_once('=').ok_or_else(malformed)?;
    let path = path.trim();
    if path.is_empty() {
        return Err(malformed());
    }
    Ok((path.to_owned(), ParamValue::parse_literal(literal)))
}

fn split_path(path: &str) -> (impl Iterator<Item = &str>, &str) {
    match path.rsplit_once(PATH_SEPARATOR) {
        Some((parents, leaf)) => (Some(parents.split(PATH_SEPARATOR)).into_iter().flatten(), leaf),
        None => (None.into_iter().flatten(), path),
    }
}

fn validate_name(name: &str) -> Result<(), ParamsError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ParamsError::InvalidName { name: name.to_owned(), context: None })
    }
}

fn undefined(path: &str) -> ParamsError {
    ParamsError::Undefined { path: path.to_owned(), context: None }
}

fn not_nested(path: &str) -> ParamsError {
    ParamsError::NotNested { path: path.to_owned(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Result<Params, ParamsError> {
        let encoder = Params::new()
            .with("num_layers", 4, "Stacked LSTM layers.")?
            .with("cell_size", 1024, "LSTM cell size.")?;
        Params::new()
            .with("name", "librispeech", "Task name.")?
            .with("learning_rate", 0.001, "Initial learning rate.")?
            .with("encoder", encoder, "Encoder params.")
    }

    #[test]
    fn define_rejects_duplicates_and_bad_names() -> Result<(), ParamsError> {
        let mut p = model()?;
        assert!(matches!(
            p.define("name", "again", ""),
            Err(ParamsError::AlreadyDefined { .. })
        ));
        assert!(matches!(p.define("Name", 1, ""), Err(ParamsError::InvalidName { .. })));
        assert!(matches!(p.define("1st", 1, ""), Err(ParamsError::InvalidName { .. })));
        assert!(matches!(p.define("", 1, ""), Err(ParamsError::InvalidName { .. })));
        assert!(p.define("dropout_2", 0.1, "").is_ok());
        Ok(())
    }

    #[test]
    fn set_walks_dotted_paths() -> Result<(), ParamsError> {
        let mut p = model()?;
        p.set("encoder.num_layers", 6)?;
        assert_eq!(p.get("encoder.num_layers")?.as_i64(), Some(6));
        assert_eq!(p.doc("encoder.num_layers")?, "Stacked LSTM layers.");
        Ok(())
    }

    #[test]
    fn set_reports_the_failing_prefix() -> Result<(), ParamsError> {
        let mut p = model()?;

        let err = p.set("decoder.num_layers", 2).unwrap_err();
        assert!(matches!(&err, ParamsError::Undefined { path, .. } if path == "decoder"));

        let err = p.set("learning_rate.decay", 2).unwrap_err();
        assert!(matches!(&err, ParamsError::NotNested { path, .. } if path == "learning_rate"));

        let err = p.set("encoder.num_heads", 2).unwrap_err();
        assert!(matches!(&err, ParamsError::Undefined { path, .. } if path == "encoder.num_heads"));
        Ok(())
    }

    #[test]
    fn overrides_are_all_or_nothing() -> Result<(), ParamsError> {
        let mut p = model()?;
        let before = p.clone();

        let result = p.apply_overrides([("learning_rate", 0.5), ("encoder.typo", 1.0)]);
        assert!(result.is_err());
        assert_eq!(p, before);

        p.apply_overrides([("learning_rate", 0.5), ("encoder.num_layers", 8.0)])?;
        assert_eq!(p.get("learning_rate")?.as_f64(), Some(0.5));
        Ok(())
    }

    #[test]
    fn overrides_that_reshape_the_tree_roll_back() -> Result<(), ParamsError> {
        let mut p = model()?;
        let before = p.clone();

        let err = p
            .apply_overrides([
                ("learning_rate", ParamValue::Float(0.9)),
                ("encoder", ParamValue::Int(5)),
                ("encoder.num_layers", ParamValue::Int(8)),
            ])
            .unwrap_err();
        assert!(matches!(&err, ParamsError::NotNested { path, .. } if path == "encoder"));
        assert_eq!(p, before);
        Ok(())
    }

    #[test]
    fn later_overrides_see_earlier_ones() -> Result<(), ParamsError> {
        let mut p = model()?;
        let replacement = Params::new().with("x", 1, "")?;

        p.apply_overrides([
            ("encoder", ParamValue::from(replacement)),
            ("encoder.x", ParamValue::Int(2)),
        ])?;
        assert_eq!(p.get("encoder.x")?.as_i64(), Some(2));
        assert!(!p.contains("encoder.num_layers"));
        Ok(())
    }

    #[test]
    fn text_dump_is_sorted_and_flat() -> Result<(), ParamsError> {
        let p = model()?;
        assert_eq!(
            p.to_text(),
            "encoder.cell_size : 1024\n\
             encoder.num_layers : 4\n\
             learning_rate : 0.001\n\
             name : \"librispeech\"\n"
        );
        Ok(())
    }

    #[test]
    fn equality_ignores_docs() -> Result<(), ParamsError> {
        let documented = Params::new().with("dim", 8, "Model dimension.")?;
        let bare = Params::new().with("dim", 8, "")?;
        assert_eq!(documented, bare);
        assert_ne!(documented, Params::new().with("dim", 16, "")?);
        Ok(())
    }

    #[test]
    fn json_roundtrip_keeps_structure() -> Result<(), Box<dyn std::error::Error>> {
        let p = model()?;
        let json = serde_json::to_value(&p)?;
        assert_eq!(json["encoder"]["num_layers"], 4);

        let back: Params = serde_json::from_value(json)?;
        assert_eq!(back, p);
        assert_eq!(back.doc("encoder.num_layers")?, "");
        Ok(())
    }

    #[test]
    fn assignments_parse_paths_and_literals() -> Result<(), ParamsError> {
        let (path, value) = parse_assignment("train.learning_rate = 0.25")?;
        assert_eq!(path, "train.learning_rate");
        assert_eq!(value, ParamValue::Float(0.25));

        let (_, value) = parse_assignment("input.file_pattern=/data/a=b")?;
        assert_eq!(value, ParamValue::from("/data/a=b"));

        assert!(matches!(parse_assignment("no_equals"), Err(ParamsError::Assignment { .. })));
        assert!(matches!(parse_assignment(" =1"), Err(ParamsError::Assignment { .. })));
        Ok(())
    }
}

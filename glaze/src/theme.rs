//! Theme configuration: design-token categories mapped to named entries.
//!
//! A configuration is a two-level map (`category -> entry`) whose entries are
//! either a leaf string or a nested scale of variants, e.g.
//! `colors.primary.50 = "#243d48"` or `fontWeight.bold = "700"`.

use crate::error::{GlazeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Key that maps to the bare entry name when a scale is flattened.
pub const DEFAULT_KEY: &str = "DEFAULT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Value(String),
    Scale(BTreeMap<String, ThemeValue>),
}

impl ThemeValue {
    pub fn scale<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::Scale(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), Self::from(value)))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Scale(_) => None,
        }
    }

    fn from_json(path: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::Value(s.clone())),
            Value::Number(n) => Ok(Self::Value(n.to_string())),
            Value::Object(map) => map
                .iter()
                .map(|(key, child)| {
                    Self::from_json(&format!("{path}.{key}"), child).map(|v| (key.clone(), v))
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Self::Scale),
            Value::Array(_) => Err(GlazeError::invalid_theme(path, "arrays are not supported")),
            Value::Bool(_) => Err(GlazeError::invalid_theme(path, "expected string, found bool")),
            Value::Null => Err(GlazeError::invalid_theme(path, "expected string, found null")),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Value(value) => Value::String(value.clone()),
            Self::Scale(scale) => Value::Object(
                scale
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }

    fn merge(&mut self, overlay: &ThemeValue) {
        match (self, overlay) {
            (ThemeValue::Scale(base), ThemeValue::Scale(overlay)) => {
                for (key, value) in overlay {
                    match base.get_mut(key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
            (slot, overlay) => *slot = overlay.clone(),
        }
    }

    fn flatten_into(&self, name: &str, out: &mut Vec<(String, String)>) {
        match self {
            Self::Value(value) => out.push((name.to_string(), value.clone())),
            Self::Scale(scale) => {
                for (key, value) in scale {
                    let child = match (name.is_empty(), key.as_str()) {
                        (_, DEFAULT_KEY) => name.to_string(),
                        (true, _) => key.clone(),
                        (false, _) => format!("{name}-{key}"),
                    };
                    value.flatten_into(&child, out);
                }
            }
        }
    }

    fn leaves_into(&self, path: &mut Vec<String>, out: &mut Vec<(ThemePath, String)>) {
        match self {
            Self::Value(value) => out.push((ThemePath::from_segments(path.clone()), value.clone())),
            Self::Scale(scale) => {
                for (key, value) in scale {
                    path.push(key.clone());
                    value.leaves_into(path, out);
                    path.pop();
                }
            }
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Dotted address of a leaf value, e.g. `colors.primary.50`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemePath {
    segments: Vec<String>,
}

impl ThemePath {
    fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.len() < 2 || segments.iter().any(String::is_empty) {
            return Err(GlazeError::InvalidPath(segments.join(".")));
        }
        Ok(Self { segments })
    }

    pub fn category(&self) -> &str {
        &self.segments[0]
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, the key the value is stored under.
    pub fn key(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }
}

impl FromStr for ThemePath {
    type Err = GlazeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split('.'))
    }
}

impl Display for ThemePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeConfiguration {
    categories: BTreeMap<String, BTreeMap<String, ThemeValue>>,
}

impl ThemeConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(
        mut self,
        category: &str,
        key: &str,
        value: impl Into<ThemeValue>,
    ) -> Self {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Parses an untyped JSON fragment, rejecting shapes the pipeline cannot use.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(categories) = value else {
            return Err(GlazeError::invalid_theme("extend", "expected an object"));
        };

        let mut parsed = BTreeMap::new();
        for (name, entries) in categories {
            let Value::Object(entries) = entries else {
                return Err(GlazeError::invalid_theme(name, "category must be an object"));
            };
            let entries = entries
                .iter()
                .map(|(key, entry)| {
                    ThemeValue::from_json(&format!("{name}.{key}"), entry)
                        .map(|value| (key.clone(), value))
                })
                .collect::<Result<BTreeMap<_, _>>>()?;
            parsed.insert(name.clone(), entries);
        }

        Ok(Self {
            categories: parsed,
        })
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.categories
                .iter()
                .map(|(name, entries)| {
                    let entries = entries
                        .iter()
                        .map(|(key, value)| (key.clone(), value.to_json()))
                        .collect::<Map<_, _>>();
                    (name.clone(), Value::Object(entries))
                })
                .collect(),
        )
    }

    pub fn get(&self, path: &ThemePath) -> Option<&str> {
        let (category, rest) = path.segments().split_first()?;
        let (first, rest) = rest.split_first()?;
        let mut node = self.categories.get(category)?.get(first)?;
        for segment in rest {
            match node {
                ThemeValue::Scale(scale) => node = scale.get(segment)?,
                ThemeValue::Value(_) => return None,
            }
        }
        node.as_str()
    }

    /// Overwrites an existing leaf; keys are never created or renamed here.
    pub fn set(&mut self, path: &ThemePath, value: impl Into<String>) -> Result<()> {
        let unknown = || GlazeError::UnknownPath(path.to_string());
        let (category, rest) = path.segments().split_first().ok_or_else(unknown)?;
        let (first, rest) = rest.split_first().ok_or_else(unknown)?;
        let mut node = self
            .categories
            .get_mut(category)
            .and_then(|entries| entries.get_mut(first))
            .ok_or_else(unknown)?;
        for segment in rest {
            node = match node {
                ThemeValue::Scale(scale) => scale.get_mut(segment).ok_or_else(unknown)?,
                ThemeValue::Value(_) => return Err(unknown()),
            };
        }
        match node {
            ThemeValue::Value(slot) => {
                *slot = value.into();
                Ok(())
            }
            ThemeValue::Scale(_) => Err(unknown()),
        }
    }

    /// Every leaf in depth-first key order.
    pub fn leaves(&self) -> Vec<(ThemePath, String)> {
        let mut out = Vec::new();
        for (name, entries) in &self.categories {
            let mut path = vec![name.clone()];
            for (key, value) in entries {
                path.push(key.clone());
                value.leaves_into(&mut path, &mut out);
                path.pop();
            }
        }
        out
    }

    /// Deep-merges `fragment` into `self`: fragment leaves win, nothing is removed.
    pub fn extend(&mut self, fragment: &ThemeConfiguration) {
        for (name, entries) in &fragment.categories {
            let target = self.categories.entry(name.clone()).or_default();
            for (key, value) in entries {
                match target.get_mut(key) {
                    Some(existing) => existing.merge(value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
    }

    pub fn extended(&self, fragment: &ThemeConfiguration) -> Self {
        let mut merged = self.clone();
        merged.extend(fragment);
        merged
    }

    /// Flattens a category into utility suffixes: `primary.50` becomes
    /// `primary-50`, and a `DEFAULT` key collapses onto its parent name.
    pub fn flattened(&self, category: &str) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Some(entries) = self.categories.get(category) {
            for (key, value) in entries {
                let name = if key == DEFAULT_KEY { "" } else { key.as_str() };
                value.flatten_into(name, &mut out);
            }
        }
        out
    }
}

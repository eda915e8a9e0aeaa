//! Typed form bindings, one per editable leaf of the theme.

use crate::error::{EditorError, Result};
use crate::store::ThemeStore;
use glaze::{ThemeConfiguration, ThemePath};

pub const FONT_WEIGHT_MIN: u32 = 100;
pub const FONT_WEIGHT_MAX: u32 = 900;
pub const DEFAULT_FONT_SIZE_UNIT: &str = "rem";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Hex color; staged while picking, written on commit.
    Color,
    /// Length shown without its unit; the unit is reattached on commit.
    FontSize,
    /// Numeric weight, written immediately and clamped to 100..=900.
    FontWeight,
    Text,
}

impl FieldKind {
    pub fn for_category(category: &str) -> Self {
        match category {
            "colors" => Self::Color,
            "fontSize" => Self::FontSize,
            "fontWeight" => Self::FontWeight,
            _ => Self::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::Text => "text",
        }
    }

    fn commits_immediately(self) -> bool {
        matches!(self, Self::FontWeight | Self::Text)
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    path: ThemePath,
    kind: FieldKind,
    draft: Option<String>,
}

impl Field {
    pub fn new(path: ThemePath) -> Self {
        let kind = FieldKind::for_category(path.category());
        Self {
            path,
            kind,
            draft: None,
        }
    }

    pub fn path(&self) -> &ThemePath {
        &self.path
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Value as the control shows it.
    pub fn display(&self, theme: &ThemeConfiguration) -> Option<String> {
        let stored = theme.get(&self.path)?;
        Some(match self.kind {
            FieldKind::FontSize => split_unit(stored)
                .map(|(number, _)| number.to_string())
                .unwrap_or_else(|| stored.to_string()),
            _ => stored.to_string(),
        })
    }

    /// Handles one edit: weights and plain text are written straight away,
    /// colors and font sizes wait for [`Field::commit`]. Returns the written value.
    pub fn input(&mut self, store: &mut ThemeStore, raw: &str) -> Result<Option<String>> {
        self.stage(raw);
        if self.kind.commits_immediately() {
            self.commit(store).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn stage(&mut self, raw: &str) {
        self.draft = Some(raw.trim().to_string());
    }

    pub fn commit(&mut self, store: &mut ThemeStore) -> Result<String> {
        let raw = self
            .draft
            .take()
            .ok_or_else(|| EditorError::NothingStaged(self.path.to_string()))?;
        let value = self.normalize(&raw, store.get(&self.path))?;
        store.set(&self.path, value.clone())?;
        Ok(value)
    }

    /// Stages and commits in one step.
    pub fn submit(&mut self, store: &mut ThemeStore, raw: &str) -> Result<String> {
        self.stage(raw);
        self.commit(store)
    }

    fn normalize(&self, raw: &str, current: Option<&str>) -> Result<String> {
        match self.kind {
            FieldKind::Color => {
                if is_hex_color(raw) {
                    Ok(raw.to_ascii_lowercase())
                } else {
                    Err(self.invalid(raw, "expected #rgb or #rrggbb"))
                }
            }
            FieldKind::FontSize => {
                let (number, unit) = split_unit(raw)
                    .ok_or_else(|| self.invalid(raw, "expected a number"))?;
                if number.starts_with('-') {
                    return Err(self.invalid(raw, "font size cannot be negative"));
                }
                let unit = match unit {
                    "" => current
                        .and_then(split_unit)
                        .map(|(_, unit)| unit)
                        .filter(|unit| !unit.is_empty())
                        .unwrap_or(DEFAULT_FONT_SIZE_UNIT),
                    explicit => explicit,
                };
                Ok(format!("{number}{unit}"))
            }
            FieldKind::FontWeight => {
                let weight = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| self.invalid(raw, "expected a number"))?;
                Ok(clamp_weight(weight).to_string())
            }
            FieldKind::Text => Ok(raw.to_string()),
        }
    }

    fn invalid(&self, raw: &str, reason: &str) -> EditorError {
        EditorError::InvalidInput {
            path: self.path.to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub fn clamp_weight(weight: f64) -> u32 {
    (weight.round().clamp(FONT_WEIGHT_MIN as f64, FONT_WEIGHT_MAX as f64)) as u32
}

/// Splits `"1.25rem"` into `("1.25", "rem")`.
pub fn split_unit(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let valid_unit = unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%');
    (number.parse::<f64>().is_ok() && valid_unit).then_some((number, unit))
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// All fields for a theme, in leaf order.
#[derive(Clone, Debug, Default)]
pub struct ThemeForm {
    fields: Vec<Field>,
}

impl ThemeForm {
    pub fn new(theme: &ThemeConfiguration) -> Self {
        Self {
            fields: theme
                .leaves()
                .into_iter()
                .map(|(path, _)| Field::new(path))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, path: &ThemePath) -> Option<&Field> {
        self.fields.iter().find(|field| field.path() == path)
    }

    pub fn field_mut(&mut self, path: &ThemePath) -> Result<&mut Field> {
        self.fields
            .iter_mut()
            .find(|field| field.path() == path)
            .ok_or_else(|| EditorError::UnknownField(path.to_string()))
    }
}

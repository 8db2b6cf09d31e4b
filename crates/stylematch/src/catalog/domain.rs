use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Themes offered by the preference form. Advisory only: queries are not
/// restricted to this list.
pub const SUPPORTED_THEMES: [&str; 7] = [
    "Wedding", "Party", "Festival", "Casual", "Formal", "Beach", "Winter",
];

/// One catalog entry with its categorical tags and inclusive
/// height/weight applicability ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitRecord {
    #[serde(rename = "Outfit")]
    pub outfit: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Body Shape")]
    pub body_shape: String,
    #[serde(rename = "Theme")]
    pub theme: String,
    #[serde(rename = "Height Min")]
    pub height_min: f64,
    #[serde(rename = "Height Max")]
    pub height_max: f64,
    #[serde(rename = "Weight Min")]
    pub weight_min: f64,
    #[serde(rename = "Weight Max")]
    pub weight_max: f64,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Any further catalog columns, keyed by header name.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl OutfitRecord {
    /// All five predicates must hold; none of them is optional.
    pub fn matches(&self, query: &PreferenceQuery) -> bool {
        labels_match(&self.gender, &query.gender)
            && labels_match(&self.body_shape, &query.body_shape)
            && labels_match(&self.theme, &query.theme)
            && within(query.height, self.height_min, self.height_max)
            && within(query.weight, self.weight_min, self.weight_max)
    }
}

fn labels_match(stored: &str, requested: &str) -> bool {
    stored == requested || stored.to_lowercase() == requested.to_lowercase()
}

fn within(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}

/// Raw preference input as the caller collected it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub height: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub weight: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub gender: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub body_shape: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub theme: String,
}

impl PreferenceForm {
    pub fn new(
        height: impl Into<String>,
        weight: impl Into<String>,
        gender: impl Into<String>,
        body_shape: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
            gender: gender.into(),
            body_shape: body_shape.into(),
            theme: theme.into(),
        }
    }

    /// Trims every field, requires all of them and parses the measurements.
    pub fn parse(&self) -> Result<PreferenceQuery, InvalidInput> {
        let fields = [
            ("height", &self.height),
            ("weight", &self.weight),
            ("gender", &self.gender),
            ("body_shape", &self.body_shape),
            ("theme", &self.theme),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(InvalidInput::MissingField(*field));
        }

        Ok(PreferenceQuery {
            height: parse_measurement("height", &self.height)?,
            weight: parse_measurement("weight", &self.weight)?,
            gender: self.gender.trim().to_string(),
            body_shape: self.body_shape.trim().to_string(),
            theme: self.theme.trim().to_string(),
        })
    }
}

fn parse_measurement(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput::NotNumeric {
            field,
            value: trimmed.to_string(),
        }),
    }
}

struct FormText {
    numbers: bool,
}

impl<'de> Visitor<'de> for FormText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.numbers {
            formatter.write_str("a string or a number")
        } else {
            formatter.write_str("a string")
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        self.number(value, de::Unexpected::Signed(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        self.number(value, de::Unexpected::Unsigned(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        self.number(value, de::Unexpected::Float(value))
    }
}

impl FormText {
    fn number<E: de::Error>(
        self,
        value: impl ToString,
        unexpected: de::Unexpected<'_>,
    ) -> Result<String, E> {
        if self.numbers {
            Ok(value.to_string())
        } else {
            Err(E::invalid_type(unexpected, &self))
        }
    }
}

/// Measurements arrive as strings or bare numbers; `null` reads as empty.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FormText { numbers: true })
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FormText { numbers: false })
}

/// Validated query consumed by the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceQuery {
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub body_shape: String,
    pub theme: String,
}

/// Caller-side input problem; the query never reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("please fill in all fields ({0} is missing)")]
    MissingField(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },
    #[error("malformed preference form: {0}")]
    MalformedBody(String),
}

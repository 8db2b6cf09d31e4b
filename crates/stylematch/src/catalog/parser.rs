use std::collections::BTreeMap;

use tracing::warn;

use super::domain::OutfitRecord;
use super::table::{OutfitTable, RejectedRow};
use crate::source::{DataUnavailable, RawRow, RawTable, TableSource};

pub(crate) const OUTFIT: &str = "Outfit";
pub(crate) const GENDER: &str = "Gender";
pub(crate) const BODY_SHAPE: &str = "Body Shape";
pub(crate) const THEME: &str = "Theme";
pub(crate) const HEIGHT_MIN: &str = "Height Min";
pub(crate) const HEIGHT_MAX: &str = "Height Max";
pub(crate) const WEIGHT_MIN: &str = "Weight Min";
pub(crate) const WEIGHT_MAX: &str = "Weight Max";
pub(crate) const IMAGE_URL: &str = "Image URL";
pub(crate) const DESCRIPTION: &str = "Description";

pub(crate) const REQUIRED_COLUMNS: [&str; 10] = [
    OUTFIT,
    GENDER,
    BODY_SHAPE,
    THEME,
    HEIGHT_MIN,
    HEIGHT_MAX,
    WEIGHT_MIN,
    WEIGHT_MAX,
    IMAGE_URL,
    DESCRIPTION,
];

pub(super) fn parse_table(source: &TableSource) -> Result<OutfitTable, DataUnavailable> {
    let raw = source.read_table()?;
    let layout = ColumnLayout::resolve(&raw)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    let mut rejected = Vec::new();

    for row in &raw.rows {
        match layout.record(row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(
                    source = %raw.source_name,
                    line = row.line,
                    outfit = row.get(layout.outfit),
                    %reason,
                    "excluding outfit row with unreadable bounds"
                );
                rejected.push(RejectedRow {
                    line: row.line,
                    outfit: row.get(layout.outfit).to_string(),
                    reason,
                });
            }
        }
    }

    Ok(OutfitTable::new(records, rejected))
}

struct ColumnLayout {
    outfit: usize,
    gender: usize,
    body_shape: usize,
    theme: usize,
    height_min: usize,
    height_max: usize,
    weight_min: usize,
    weight_max: usize,
    image_url: usize,
    description: usize,
    extras: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn resolve(raw: &RawTable) -> Result<Self, DataUnavailable> {
        let [outfit, gender, body_shape, theme, height_min, height_max, weight_min, weight_max, image_url, description] =
            raw.require(&REQUIRED_COLUMNS)?;

        let required = [
            outfit,
            gender,
            body_shape,
            theme,
            height_min,
            height_max,
            weight_min,
            weight_max,
            image_url,
            description,
        ];
        let extras = raw
            .headers
            .iter()
            .enumerate()
            .filter(|(index, name)| {
                !required.contains(index)
                    && !name.is_empty()
                    && !REQUIRED_COLUMNS.contains(&name.as_str())
            })
            .map(|(index, name)| (index, name.clone()))
            .collect();

        Ok(Self {
            outfit,
            gender,
            body_shape,
            theme,
            height_min,
            height_max,
            weight_min,
            weight_max,
            image_url,
            description,
            extras,
        })
    }

    fn record(&self, row: &RawRow) -> Result<OutfitRecord, String> {
        let attributes: BTreeMap<String, String> = self
            .extras
            .iter()
            .map(|(index, name)| (name.clone(), row.get(*index).to_string()))
            .collect();

        Ok(OutfitRecord {
            outfit: row.get(self.outfit).to_string(),
            gender: row.get(self.gender).to_string(),
            body_shape: row.get(self.body_shape).to_string(),
            theme: row.get(self.theme).to_string(),
            height_min: bound(row, self.height_min, HEIGHT_MIN)?,
            height_max: bound(row, self.height_max, HEIGHT_MAX)?,
            weight_min: bound(row, self.weight_min, WEIGHT_MIN)?,
            weight_max: bound(row, self.weight_max, WEIGHT_MAX)?,
            image_url: row.get(self.image_url).to_string(),
            description: row.get(self.description).to_string(),
            attributes,
        })
    }
}

fn bound(row: &RawRow, index: usize, column: &str) -> Result<f64, String> {
    let value = row.get(index).trim();
    if value.is_empty() {
        return Err(format!("{column} is empty"));
    }

    value
        .parse::<f64>()
        .map_err(|_| format!("{column} '{value}' is not a number"))
}

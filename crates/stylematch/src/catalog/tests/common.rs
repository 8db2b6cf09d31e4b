use crate::catalog::{OutfitMatcher, PreferenceForm};
use crate::source::TableSource;

pub(super) const HEADER: &str =
    "Outfit,Gender,Body Shape,Theme,Height Min,Height Max,Weight Min,Weight Max,Image URL,Description";

pub(super) fn catalog_csv() -> String {
    [
        HEADER,
        "A,Female,Pear,Wedding,150,170,45,65,https://img.example/a.jpg,Empire waist gown",
        "B,Male,Rectangle,Party,165,185,60,85,https://img.example/b.jpg,Slim blazer with chinos",
        "C,Female,Pear,Wedding,155,175,50,70,https://img.example/c.jpg,A-line midi dress",
        "D,Female,Hourglass,Beach,150,170,45,65,https://img.example/d.jpg,Wrap sundress",
        "E,Female,Pear,Winter,150,170,45,65,https://img.example/e.jpg,Belted wool coat",
    ]
    .join("\n")
}

pub(super) fn matcher_for(contents: impl Into<String>) -> OutfitMatcher {
    OutfitMatcher::new(TableSource::inline("fits.csv", contents))
}

pub(super) fn catalog_matcher() -> OutfitMatcher {
    matcher_for(catalog_csv())
}

pub(super) fn form(
    height: &str,
    weight: &str,
    gender: &str,
    body_shape: &str,
    theme: &str,
) -> PreferenceForm {
    PreferenceForm::new(height, weight, gender, body_shape, theme)
}

pub(super) fn outfit_names(records: &[crate::catalog::OutfitRecord]) -> Vec<&str> {
    records.iter().map(|record| record.outfit.as_str()).collect()
}

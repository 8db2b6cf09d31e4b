use crate::infra::data_config;
use clap::Args;
use std::path::PathBuf;
use stylematch::accounts::CredentialStore;
use stylematch::catalog::{MatchOutcome, OutfitMatcher, PreferenceForm, SUPPORTED_THEMES};
use stylematch::error::AppError;
use stylematch::TableSource;

#[derive(Args, Debug)]
pub(crate) struct SignInArgs {
    /// Username to check (case-insensitive)
    #[arg(long)]
    pub(crate) username: String,
    /// Password to check (case-sensitive)
    #[arg(long)]
    pub(crate) password: String,
    /// Users table to read instead of the configured one
    #[arg(long)]
    pub(crate) users_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Height, in the same unit as the catalog bounds
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) height: String,
    /// Weight, in the same unit as the catalog bounds
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weight: String,
    #[arg(long)]
    pub(crate) gender: String,
    #[arg(long)]
    pub(crate) body_shape: String,
    #[arg(long)]
    pub(crate) theme: String,
    /// Outfit catalog to read instead of the configured one
    #[arg(long)]
    pub(crate) outfits_csv: Option<PathBuf>,
    /// Print matches as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_signin(args: SignInArgs) -> Result<(), AppError> {
    let SignInArgs {
        username,
        password,
        users_csv,
    } = args;

    let path = match users_csv {
        Some(path) => path,
        None => data_config()?.users_csv,
    };
    let store = CredentialStore::new(TableSource::file(path));
    let outcome = store.verify(&username, &password);

    println!("{}", outcome.message());
    if let stylematch::AuthOutcome::DataUnavailable(err) = &outcome {
        println!("Users table unavailable: {err}");
    }

    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        height,
        weight,
        gender,
        body_shape,
        theme,
        outfits_csv,
        json,
    } = args;

    let path = match outfits_csv {
        Some(path) => path,
        None => data_config()?.outfits_csv,
    };
    let matcher = OutfitMatcher::new(TableSource::file(path));
    let form = PreferenceForm::new(height, weight, gender, body_shape, theme);
    let outcome = matcher.filter(&form);

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.records())?);
    } else {
        render_outcome(&form, &outcome);
    }

    Ok(())
}

pub(crate) fn run_themes() {
    println!("Supported themes");
    for theme in SUPPORTED_THEMES {
        println!("- {theme}");
    }
}

fn render_outcome(form: &PreferenceForm, outcome: &MatchOutcome) {
    println!(
        "Preferences: height {} | weight {} | {} | {} | {}",
        form.height.trim(),
        form.weight.trim(),
        form.gender.trim(),
        form.body_shape.trim(),
        form.theme.trim()
    );

    match outcome {
        MatchOutcome::Matched(records) => {
            println!("\n{} matching outfit(s)", records.len());
            for record in records {
                println!(
                    "- {} ({} / {} / {})",
                    record.outfit, record.gender, record.body_shape, record.theme
                );
                println!(
                    "  height {}-{} | weight {}-{}",
                    record.height_min, record.height_max, record.weight_min, record.weight_max
                );
                if !record.description.is_empty() {
                    println!("  {}", record.description);
                }
                if !record.image_url.is_empty() {
                    println!("  {}", record.image_url);
                }
            }
        }
        MatchOutcome::NoMatch => println!("\nNo outfits match these preferences."),
        MatchOutcome::InvalidInput(err) => println!("\nInvalid preferences: {err}"),
        MatchOutcome::DataUnavailable(err) => println!("\nOutfit catalog unavailable: {err}"),
    }
}

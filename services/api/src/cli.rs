use crate::commands::{run_recommend, run_signin, run_themes, RecommendArgs, SignInArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use stylematch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "stylematch",
    about = "Sign in against the users table and match outfits to body and style preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Check a username and password against the users table
    Signin(SignInArgs),
    /// List outfits matching a set of preferences
    Recommend(RecommendArgs),
    /// Print the themes offered by the preference form
    Themes,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Signin(args) => run_signin(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Themes => {
            run_themes();
            Ok(())
        }
    }
}

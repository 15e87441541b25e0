//! bozza-cli: the composer's command-line surface.
//! One-shot invocations: seed the cache from the remote feed, apply the
//! requested mutation, print the resulting list as JSON.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod context;
mod handlers;
mod print;

use clap::Parser;

use args::{Cli, Commands};
use bozza::infra::telemetry;
use context::{CliError, build_composer, load_settings};
use handlers::{posts, tags};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    telemetry::init(&settings.logging)?;

    match cli.command {
        Commands::Posts(cmd) => {
            let mut composer = build_composer(&settings, cli.sync)?;
            posts::handle(&mut composer, cmd.action).await?;
        }
        Commands::Tags(cmd) => tags::handle(cmd.action)?,
    }

    Ok(())
}

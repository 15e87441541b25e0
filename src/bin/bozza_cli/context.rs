//! Shared construction for the CLI: settings, composer, error type.

#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use thiserror::Error;

use bozza::application::composer::ComposerService;
use bozza::application::report::TracingReporter;
use bozza::application::store::{LocalOnlyStore, PostStore, RemoteError};
use bozza::config::{self, LoadError, Overrides, Settings};
use bozza::infra::api::ApiClient;
use bozza::infra::error::InfraError;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render output: {0}")]
    Output(String),
}

pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let overrides = Overrides {
        api_url: cli.api_url.clone(),
        log_level: cli.log_level.clone(),
        log_json: cli.log_json.then_some(true),
    };
    Ok(config::load(cli.config_file.as_deref(), &overrides)?)
}

/// Wire the composer. `sync` swaps the default local-only store for the
/// HTTP-backed one, making add/edit/delete reach the remote collection.
pub fn build_composer(settings: &Settings, sync: bool) -> Result<ComposerService, CliError> {
    let api = Arc::new(ApiClient::new(&settings.api)?);
    let store: Arc<dyn PostStore> = if sync {
        api.clone()
    } else {
        Arc::new(LocalOnlyStore)
    };
    Ok(ComposerService::new(api, store, Arc::new(TracingReporter)))
}

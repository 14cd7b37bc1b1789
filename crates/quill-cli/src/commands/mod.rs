mod categories;
mod prefs;
mod quote;
mod sources;

use quill_core::{PipelineBuilder, PreferenceStore, ProviderId, QuillConfig, QuillContext};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::envelope::{Envelope, EnvelopeError};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub latency_ms: u64,
    pub source_chain: Vec<ProviderId>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            latency_ms: 0,
            source_chain: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_source_chain(mut self, source_chain: Vec<ProviderId>) -> Self {
        self.source_chain = source_chain;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Quote(args) => {
            let mut context = build_context(cli)?;
            quote::run(args, &mut context).await?
        }
        Command::Categories => {
            let context = build_context(cli)?;
            categories::run(&context).await?
        }
        Command::Sources => {
            let context = build_context(cli)?;
            sources::run(&context)?
        }
        Command::Prefs(args) => {
            let store = PreferenceStore::at_default_location()?;
            prefs::run(args, &store)?
        }
    };

    let CommandResult {
        data,
        warnings,
        errors,
        latency_ms,
        source_chain,
    } = command_result;

    let mut metadata = Metadata::new(source_chain, latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    Ok(Envelope::with_errors(
        metadata.into_envelope_meta(),
        data,
        errors,
    ))
}

fn build_context(cli: &Cli) -> Result<QuillContext, CliError> {
    let config = QuillConfig::load(cli.config.as_deref())?;
    tracing::debug!(
        offline = cli.offline,
        source = ?cli.source,
        "building quote pipeline"
    );

    let mut builder = PipelineBuilder::new().with_config(config);
    if cli.offline {
        builder = builder.with_offline_mode();
    }
    if let Some(provider) = cli.source.provider() {
        builder = builder.with_source(provider);
    }

    Ok(builder.build())
}

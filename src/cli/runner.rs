//! CLI runner - executes commands

use std::path::PathBuf;

use tracing::warn;

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ScanConfig;
use crate::error::Result;
use crate::output::{SchemaWriter, SchemaWriterConfig};
use crate::scan::Scanner;
use crate::store::{DocumentSource, MongoStore};
use crate::types::JsonValue;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Collections => self.collections().await,
            Commands::Scan {
                collections,
                sample,
                stride,
                output,
                stdout,
            } => {
                self.scan(
                    collections.as_deref(),
                    *sample,
                    *stride,
                    output.as_ref(),
                    *stdout,
                )
                .await
            }
        }
    }

    /// Load the config file (if any) and fold the env/CLI layers on top
    fn resolve_config(&self) -> Result<ScanConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ScanConfig::load(path)?,
            None => ScanConfig::default(),
        };

        if let Some(uri) = &self.cli.uri {
            config.store.uri = Some(uri.clone());
        }
        if let Some(host) = &self.cli.host {
            config.store.host = host.clone();
        }
        if let Some(port) = self.cli.port {
            config.store.port = port;
        }
        if let Some(database) = &self.cli.database {
            config.store.database = database.clone();
        }

        Ok(config)
    }

    async fn check(&self) -> Result<()> {
        let config = self.resolve_config()?;
        config.validate()?;

        let store = MongoStore::connect(&config.store).await?;
        store.ping().await?;

        if !store.database_exists().await? {
            warn!(
                database = %store.database_name(),
                "database not found on the server; the name may be misspelled"
            );
        }

        println!("Connection OK: database '{}'", store.database_name());
        Ok(())
    }

    async fn collections(&self) -> Result<()> {
        let config = self.resolve_config()?;
        config.validate()?;

        let store = MongoStore::connect(&config.store).await?;
        let matcher = config.collections.matcher()?;

        let mut names = store.collection_names().await?;
        names.retain(|name| matcher.matches(name));
        names.sort();

        for name in &names {
            println!("{name}");
        }
        Ok(())
    }

    async fn scan(
        &self,
        collections: Option<&str>,
        sample: Option<u64>,
        stride: Option<usize>,
        output: Option<&PathBuf>,
        stdout: bool,
    ) -> Result<()> {
        let mut config = self.resolve_config()?;

        if let Some(names) = collections {
            // Exact-name selection expressed through the same filter the
            // config file uses.
            config.collections.include = names
                .split(',')
                .map(|name| format!("^{}$", regex::escape(name.trim())))
                .collect();
        }
        if let Some(sample) = sample {
            config.sampling.sample_size = sample;
        }
        if let Some(stride) = stride {
            config.sampling.stride = stride;
        }
        if let Some(path) = output {
            config.output.path = path.clone();
        }
        config.validate()?;

        let store = MongoStore::connect(&config.store).await?;
        let report = Scanner::new(&store, &config).scan_database().await?;

        if stdout {
            println!("{}", self.render(&report.schema_json())?);
        } else {
            let writer =
                SchemaWriter::new(SchemaWriterConfig::new().with_pretty(config.output.pretty));
            writer.write_report(&report, &config.output.path)?;
            println!("Schema written to {}", config.output.path.display());
        }

        println!("{}", report.summary());
        Ok(())
    }

    fn render(&self, value: &JsonValue) -> Result<String> {
        let body = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(body)
    }
}

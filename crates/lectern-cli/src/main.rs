// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lectern — desktop tool for checking viewer configuration payloads.
//
// Runs the same translation the bridge runs on `present`, so a payload can be
// validated without a device.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use lectern_config::options::known_keys;
use lectern_config::{ConfigurationTranslator, ResourceTable, Translation};
use lectern_core::error::Result;
use lectern_core::{BridgeSettings, RawConfiguration, ViewerConfiguration};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(version)]
#[command(about = "Translate and validate viewer configuration payloads", long_about = None)]
struct Cli {
    /// Bridge settings file (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a configuration payload and print the typed result
    Translate {
        /// Configuration payload (JSON object)
        file: PathBuf,

        /// Style resource table (JSON object of name -> id)
        #[arg(long)]
        resources: Option<PathBuf>,
    },

    /// List every accepted configuration key
    Keys,
}

/// What `translate` prints. The password itself never leaves the process.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    configuration: ViewerConfiguration,
    password: &'static str,
}

impl From<Translation> for Report {
    fn from(translation: Translation) -> Self {
        Self {
            configuration: translation.configuration,
            password: if translation.password.is_some() {
                "present"
            } else {
                "absent"
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli.settings.as_deref().map(BridgeSettings::load).transpose() {
        Ok(settings) => settings.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: cannot load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let outcome = match cli.command {
        Commands::Translate { file, resources } => {
            translate(&settings, &file, resources.as_deref()).map(|report| {
                println!("{report}");
            })
        }
        Commands::Keys => {
            for key in known_keys(&settings.platform_prefix) {
                println!("{key}");
            }
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), "{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Translate the payload in `file` and render the report as pretty JSON.
fn translate(settings: &BridgeSettings, file: &Path, resources: Option<&Path>) -> Result<String> {
    let resources = match resources {
        Some(path) => load_resources(path)?,
        None => ResourceTable::new(),
    };
    let raw = RawConfiguration::from_json(&std::fs::read_to_string(file)?)?;
    tracing::info!(path = %file.display(), keys = raw.len(), "translating payload");

    let translation = ConfigurationTranslator::from_settings(settings, &resources).translate(&raw)?;
    Ok(serde_json::to_string_pretty(&Report::from(translation))?)
}

fn load_resources(path: &Path) -> Result<ResourceTable> {
    let table: ResourceTable = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "resource table is empty, theme options keep defaults");
    } else {
        tracing::debug!(path = %path.display(), entries = table.len(), "resource table loaded");
    }
    Ok(table)
}

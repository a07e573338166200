use crate::config::GeneratorConfig;
use crate::docs::{build_catalog, build_resource_document, RequestContext};
use crate::linter::{fail_if_errors, lint_definitions, print_lint_issues, LintSeverity};
use crate::schema::load_registry;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line interface for restdoc
#[derive(Parser)]
#[command(name = "restdoc")]
#[command(about = "Swagger 1.1 documentation for declared REST resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resource catalog
    Catalog {
        /// Resource definitions file (YAML or JSON)
        #[arg(short, long)]
        resources: PathBuf,

        /// URL the catalog is served at; its path determines basePath
        #[arg(short, long)]
        url: String,

        /// Generator configuration file (YAML or JSON)
        #[arg(short, long, env = "RESTDOC_CONFIG")]
        config: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the documentation of one resource
    Resource {
        /// Resource definitions file (YAML or JSON)
        #[arg(short, long)]
        resources: PathBuf,

        /// Plural name of the resource
        #[arg(short, long)]
        name: String,

        /// URL the resource documentation is served at
        #[arg(short, long)]
        url: String,

        /// Generator configuration file (YAML or JSON)
        #[arg(short, long, env = "RESTDOC_CONFIG")]
        config: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Lint a resource definitions file
    Lint {
        /// Resource definitions file (YAML or JSON)
        #[arg(short, long)]
        resources: PathBuf,

        /// Exit with an error when error-level issues are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Only report error-level issues
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path),
        None => Ok(GeneratorConfig::from_env()),
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Run one command, writing documents to `out`.
pub fn run_command(command: &Commands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Commands::Catalog {
            resources,
            url,
            config,
            pretty,
        } => {
            let config = load_config(config.as_deref())?;
            let registry = load_registry(resources)?;
            let ctx = RequestContext::parse(url).with_context(|| format!("invalid URL '{url}'"))?;
            let catalog = build_catalog(&registry, &ctx, &config);
            write_json(out, &catalog, *pretty)
        }
        Commands::Resource {
            resources,
            name,
            url,
            config,
            pretty,
        } => {
            let config = load_config(config.as_deref())?;
            let registry = load_registry(resources)?;
            let ctx = RequestContext::parse(url).with_context(|| format!("invalid URL '{url}'"))?;
            let document = build_resource_document(&registry, name, &ctx, &config)?;
            write_json(out, &document, *pretty)
        }
        Commands::Lint {
            resources,
            fail_on_error,
            errors_only,
        } => {
            let mut issues = lint_definitions(resources)?;
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if *fail_on_error {
                fail_if_errors(&issues)?;
            }
            Ok(())
        }
    }
}

/// Run a parsed command line against stdout.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(&cli.command, &mut out)
}

//! Command-line interface.
//!
//! ```text
//! roster serve [--bind ADDR] [--data FILE] [--allow-origin ORIGIN]... [--reload-per-request]
//! roster list  [--data FILE] [--page N] [--per-page N] [--search TEXT] [--sort-by KEY]
//!              [--sort-order DIR] [--application-type T]... [--source S]... [--job-id ID]
//!              [--output json|yaml|csv]
//! ```

use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roster_seeker::{
    query, Pagination, QueryParams, ValidationError, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
use tracing::debug;

use crate::config::{
    LoadMode, ServerConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND, DEFAULT_DATA_FILE,
};
use crate::serialize::{serialize, OutputFormat};
use crate::server;
use crate::source::{JsonFileSource, RecordSource};

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Candidate Management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Run one query against the data file and print the page
    List(ListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// JSON file shaped {"candidates": [...]}
    #[arg(long = "data", env = "ROSTER_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Address to listen on
    #[arg(long, env = "ROSTER_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Origin allowed by CORS (repeat or comma-separate for several)
    #[arg(
        long = "allow-origin",
        env = "ROSTER_ALLOW_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allow_origins: Vec<String>,

    /// Re-read the data file on every request instead of caching it
    #[arg(long, env = "ROSTER_RELOAD")]
    pub reload_per_request: bool,
}

impl ServeArgs {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            data_file: self.data.data_file,
            allowed_origins: self.allow_origins,
            load_mode: if self.reload_per_request {
                LoadMode::PerRequest
            } else {
                LoadMode::Once
            },
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Page number, starting at 1
    #[arg(long, default_value_t = DEFAULT_PAGE as i64, allow_negative_numbers = true)]
    pub page: i64,

    /// Candidates per page (1-50)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE as i64, allow_negative_numbers = true)]
    pub per_page: i64,

    /// Case-insensitive text matched against name, position and company
    #[arg(long)]
    pub search: Option<String>,

    /// last_activity or name; anything else means last_activity
    #[arg(long)]
    pub sort_by: Option<String>,

    /// asc or desc; anything else means desc
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Application type to keep (repeatable, case-insensitive)
    #[arg(long = "application-type")]
    pub application_type: Vec<String>,

    /// Source to keep (repeatable, case-insensitive)
    #[arg(long)]
    pub source: Vec<String>,

    /// Exact job id to keep
    #[arg(long)]
    pub job_id: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl ListArgs {
    /// Validates the flags into pipeline parameters.
    pub fn to_params(&self) -> Result<QueryParams, ValidationError> {
        let mut params = QueryParams::new()
            .pagination(Pagination::new(self.page, self.per_page)?)
            .sort_raw(self.sort_by.as_deref(), self.sort_order.as_deref())
            .application_types(&self.application_type)
            .sources(&self.source);
        params.search = self.search.clone();
        params.job_id = self.job_id.clone();
        Ok(params)
    }
}

/// Runs the parsed command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => server::serve(args.into_config()).await,
        Command::List(args) => {
            let source = JsonFileSource::new(&args.data.data_file);
            let stdout = std::io::stdout();
            run_list(&args, &source, &mut stdout.lock())
        }
    }
}

/// Executes `roster list`, writing the formatted page to `out`.
pub fn run_list(
    args: &ListArgs,
    source: &dyn RecordSource,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let params = args.to_params()?;
    let records = source.load()?;
    let page = query(&records, &params);
    debug!(total = page.total, returned = page.candidates.len(), "query complete");

    let rendered = serialize(&page, args.output)?;

    out.write_all(rendered.as_bytes())
        .and_then(|()| {
            if rendered.ends_with('\n') {
                Ok(())
            } else {
                out.write_all(b"\n")
            }
        })
        .context("failed to write output")
}

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use env_logger::Env;

use cvsearch::api::{self, ApiConfig};
use cvsearch::cli::{self, Invocation, Output};
use cvsearch::configuration::{ApiSettings, FeedSettings};
use cvsearch::present::TerminalRenderer;

fn main() -> Result<ExitCode> {
    let opts = Opts::parse();

    dotenv().ok();

    // Setup logger
    {
        #[cfg(debug_assertions)]
        let default_env_filter = "cvsearch=debug,cve_sources=debug";
        #[cfg(not(debug_assertions))]
        let default_env_filter = if opts.serve { "info" } else { "warn" };

        if opts.serve {
            // Init tracer for web application
            api::init_logger(default_env_filter)
        } else {
            // Init logger for the one-shot lookup
            let env = Env::default().default_filter_or(default_env_filter);
            env_logger::Builder::from_env(env)
                .try_init()
                .map_err(anyhow::Error::from)
        }
        .context("Failed to setup logger")?;
    }

    let feeds = FeedSettings::try_from_env().context("Invalid feed settings")?;

    if opts.serve {
        let ApiSettings { address, port } = ApiSettings::try_from_env()?;

        log::info!("Start listening on {}:{}...", address, port);

        let api_config = ApiConfig {
            address,
            port,
            feeds,
        };

        actix_web::rt::System::new().block_on(async move {
            api::run(api_config)?
                .await
                .context("Server stopped with an error")
        })?;

        return Ok(ExitCode::SUCCESS);
    }

    let output = if opts.json {
        Output::Json
    } else {
        let color = !opts.no_color && std::io::stdout().is_terminal();
        Output::Terminal(TerminalRenderer::new(color))
    };

    let sources = feeds.sources().context("Cannot create http client")?;

    let invocation = Invocation {
        keywords: &opts.keywords,
        output,
        fail_on_error: opts.fail_on_error,
    };

    let code = cli::run(
        &sources,
        invocation,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .context("Cannot write report")?;

    Ok(ExitCode::from(code))
}

#[derive(Parser)]
#[command(author, version, about)]
struct Opts {
    /// Serve the HTTP API instead of running a lookup
    #[arg(long, conflicts_with = "keywords")]
    serve: bool,

    /// Print the JSON body the HTTP API would return
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with a code specific to the failure when the lookup fails
    #[arg(long)]
    fail_on_error: bool,

    /// CVE id (e.g. CVE-2021-44228) or keywords to search for
    keywords: Vec<String>,
}

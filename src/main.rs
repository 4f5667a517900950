#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # kody
//!
//! Command-line entrypoint for the Kody game server. `kody serve` starts
//! the HTTP API; `kody grade` runs the exercise grader once over a file or
//! stdin, which is handy when authoring exercises; `kody info` prints the
//! level catalog.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use kody::{config, constants, grade};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Start the game API server
    Serve(Option<u16>),
    /// Grade a single submission and print the verdict
    Grade(String),
    /// Print the level catalog
    Info,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the optional port override
    fn p() -> impl Parser<Option<u16>> {
        short('p')
            .long("port")
            .help("Port to bind instead of the configured one")
            .argument::<u16>("PORT")
            .optional()
    }

    /// parses the submission path
    fn f() -> impl Parser<String> {
        positional("FILE").help("Path to a submission file, or `-` for stdin")
    }

    let serve = construct!(Cmd::Serve(p()))
        .to_options()
        .command("serve")
        .help("Start the game API server");

    let grade_one = construct!(Cmd::Grade(f()))
        .to_options()
        .command("grade")
        .help("Grade a submission once and print the verdict as JSON");

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Print the level catalog as JSON");

    let cmd = construct!([serve, grade_one, info]);

    cmd.to_options()
        .descr("Game server for the Kody robot-repair adventure")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Serve(port) => {
            let cfg = config::get();
            let port = port.unwrap_or(cfg.port());
            kody::server::serve(cfg.host(), port, cfg.default_player()).await?;
        }
        Cmd::Grade(path) => {
            let code = if path == "-" {
                std::io::read_to_string(std::io::stdin())
                    .context("Could not read submission from stdin")?
            } else {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Could not read submission from {path}"))?
            };
            let verdict = grade::grade(&code);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Cmd::Info => {
            let catalog: Vec<_> = constants::LEVEL_TITLES
                .iter()
                .enumerate()
                .map(|(idx, title)| json_level(idx as i32 + 1, title))
                .collect();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    };

    Ok(())
}

/// One level row of the `info` output.
fn json_level(level: i32, title: &str) -> serde_json::Value {
    serde_json::json!({ "level": level, "title": title })
}

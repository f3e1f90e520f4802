mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use donald_ipsum::{ApiClient, ApiResponse, Endpoint, Error, parse_count};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "donald-ipsum", version, about = "Fetch Donald Ipsum placeholder text")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// TOML file with a `base_url` key
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate paragraphs
    Paragraphs(CountArgs),
    /// Generate sentences
    Sentences(CountArgs),
    /// Generate words
    Words(CountArgs),
}

#[derive(Args, Debug)]
struct CountArgs {
    /// How many units to generate. Anything but a positive integer uses the server default
    #[arg(short, long, allow_hyphen_values = true)]
    count: Option<String>,
}

impl Command {
    fn endpoint(&self) -> Endpoint {
        match self {
            Command::Paragraphs(_) => Endpoint::Paragraphs,
            Command::Sentences(_) => Endpoint::Sentences,
            Command::Words(_) => Endpoint::Words,
        }
    }

    fn count(&self) -> Option<i64> {
        let (Command::Paragraphs(args) | Command::Sentences(args) | Command::Words(args)) = self;
        args.count
            .as_deref()
            .map(parse_count)
            .and_then(|n| i64::try_from(n).ok())
    }
}

fn render(res: &ApiResponse, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(res)?)
    } else {
        Ok(res.content.join("\n"))
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::resolve(cli.base_url, cli.config.as_deref())?;
    let client = ApiClient::with_config(config);

    let endpoint = cli.command.endpoint();
    let count = cli.command.count();
    log::debug!("{endpoint} count={count:?} base_url={}", client.base_url());

    match client.get(endpoint, count).await {
        Ok(res) => {
            println!("{}", render(&res, cli.json)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Api(e)) => {
            if cli.json {
                eprintln!("{}", serde_json::to_string_pretty(&e)?);
            } else {
                eprintln!("{e}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            log::warn!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

use crate::api::server as api_server;
use crate::cli::opts::*;

use anyhow::{anyhow, bail, Context, Result};
use flashgen_core::{parse_response, Flashcard, RequestController, SubmitOutcome};
use flashgen_openai::{ChatClient, ChatConfig};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub async fn run_cli(args: Cli) -> Result<()> {
    match &args.cmd {
        Command::Parse { path } => parse_cmd(path),
        Command::Generate(cmd) => {
            let ctl = open_controller(&args.endpoint)?;
            generate_cmd(ctl, cmd).await
        }
        Command::Api(api) => {
            let ctl = open_controller(&args.endpoint)?;
            let addr: std::net::SocketAddr = api.addr.parse()?;
            api_server::run(ctl, addr).await
        }
        // main routes the TUI directly
        Command::Tui(_) => unreachable!(),
    }
}

pub fn open_controller(opts: &EndpointOpts) -> Result<RequestController> {
    let key = opts
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow!("No API key provided. Set FLASHGEN_API_KEY or pass --api-key <KEY>."))?;
    let config = ChatConfig::new(key)?
        .with_base_url(opts.base_url.as_str())
        .with_model(opts.model.as_str())
        .with_max_tokens(opts.max_tokens)
        .with_temperature(opts.temperature)
        .with_timeout(opts.timeout_secs.map(Duration::from_secs));
    let client = ChatClient::new(config)?;
    Ok(RequestController::new(Arc::new(client)))
}

async fn generate_cmd(ctl: RequestController, cmd: &GenerateCmd) -> Result<()> {
    match ctl.submit(&cmd.topic).await {
        SubmitOutcome::Ignored => bail!("topic is empty; nothing to generate"),
        SubmitOutcome::Busy => bail!("a generation is already running"),
        SubmitOutcome::Failed { notice } => {
            eprintln!("Failed to generate flashcards. Please try again.");
            bail!(notice)
        }
        SubmitOutcome::Generated { cards } => print_cards(&cards, cmd.json),
    }
}

fn parse_cmd(path: &Path) -> Result<()> {
    let text = if path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        s
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    let cards = parse_response(&text);
    print_cards(&cards, false)?;
    println!("parsed {}", cards.len());
    Ok(())
}

fn print_cards(cards: &[Flashcard], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }
    if cards.is_empty() {
        println!("no flashcards in reply");
    }
    for (i, c) in cards.iter().enumerate() {
        println!("[{}]\nQ: {}\nA: {}\n", i + 1, c.question(), c.answer());
    }
    Ok(())
}

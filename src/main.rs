//! The Lean Brief — interactive terminal client.
//! Fetches the digest once at startup, then reads commands from stdin:
//! numbers drill down, `b` goes back, `c` closes a topic, `r` refreshes,
//! `t` asks the backend to rebuild, `q` quits.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write as _;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use lean_brief::command::{parse_command, to_action, Command};
use lean_brief::config::BriefConfig;
use lean_brief::{render, Action, Session, SummaryClient};

#[derive(Parser, Debug)]
#[command(name = "lean-brief", about = "Sector-by-sector market news digest")]
struct Args {
    /// Summarization endpoint (overrides config and BRIEF_ENDPOINT).
    #[arg(long)]
    endpoint: Option<String>,
    /// Config file (default: $BRIEF_CONFIG_PATH, then config/brief.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<BriefConfig> {
    let mut cfg = match &args.config {
        Some(p) => BriefConfig::load_from_file(p)?,
        None => BriefConfig::load_default()?,
    };
    if let Some(ep) = &args.endpoint {
        cfg.endpoint = ep.clone();
    }
    Ok(cfg)
}

fn draw(session: &Session<SummaryClient>) -> Result<()> {
    let screen = render::render(session.store(), session.source().endpoint());
    let mut out = std::io::stdout().lock();
    write!(out, "\n{screen}> ")?;
    out.flush().context("flushing stdout")
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    lean_brief::init_tracing();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    tracing::info!(endpoint = %cfg.endpoint, timeout_secs = cfg.timeout_secs, "starting");

    let mut session = Session::new(SummaryClient::from_config(&cfg));
    session.dispatch(Action::Refresh);
    draw(&session)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::TriggerProcessing) => {
                        match session.source().trigger_processing().await {
                            Ok(msg) => println!("{msg}"),
                            Err(e) => println!("Trigger failed: {e}"),
                        }
                    }
                    Some(cmd) => {
                        if let Some(action) = to_action(cmd, session.store().navigation()) {
                            session.dispatch(action);
                        }
                    }
                    None => println!("Unknown command: {}", line.trim()),
                }
            }
            Some(_) = session.next_completion() => {}
        }
        draw(&session)?;
    }

    Ok(())
}

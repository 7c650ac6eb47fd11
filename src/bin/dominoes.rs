//! Terminal front-end.
//!
//! Usage:
//!   dominoes [--seed N] [--hand-size N] [--json]
//!
//! Then type a hand index to play that tile, `d` to draw, `q` to quit.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use dominoes::adapter::Presenter;
use dominoes::core::{GameConfig, Intent};
use dominoes::rules::Engine;

#[derive(Parser, Debug)]
#[command(name = "dominoes", about = "Double-six dominoes against a first-fit opponent")]
struct Args {
    /// RNG seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles dealt to each side.
    #[arg(long, default_value = "5")]
    hand_size: usize,

    /// Print each frame as a JSON line instead of text.
    #[arg(long)]
    json: bool,
}

enum Command {
    Intent(Intent),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" => Command::Quit,
        "d" | "draw" => Command::Intent(Intent::Draw),
        other => other
            .parse::<usize>()
            .map_or(Command::Unknown, |i| Command::Intent(Intent::PlayTile(i))),
    }
}

fn render(out: &mut impl Write, presenter: &Presenter, json: bool) -> Result<()> {
    let frame = presenter.frame();
    if json {
        let line = serde_json::to_string(&frame).context("failed to encode frame")?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{frame}\n")?;
    }
    out.flush().context("failed to flush stdout")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig {
        hand_size: args.hand_size,
        seed: args.seed,
    };
    let engine = Engine::with_config(config).context("invalid game configuration")?;
    let mut presenter = Presenter::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        let seed = presenter.engine().seed();
        writeln!(out, "Seed {seed}. Enter a tile index, 'd' to draw, 'q' to quit.\n")?;
    }
    render(&mut out, &presenter, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Unknown => {
                if !args.json {
                    writeln!(out, "Unrecognised input {:?}.", line.trim())?;
                }
            }
            Command::Intent(intent) => {
                presenter.handle(intent);
                render(&mut out, &presenter, args.json)?;
            }
        }
    }
    Ok(())
}

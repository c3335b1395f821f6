use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pipeflow::api::{
    draw_network, format_records, parse_records, search, Grid, NetworkCfg, ParseMode,
    ReplayToken, SolveCfg,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "pipeflow")]
#[command(about = "Find the sinks a pipe network's source reaches")]
struct Cmd {
    /// Refuse grids with more than this many cells
    #[arg(long, global = true, default_value_t = SolveCfg::default().max_cells)]
    max_cells: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the reachable sink letters, sorted, each once
    Solve {
        /// Record file (`identifier x y` per line); stdin if omitted or `-`
        input: Option<PathBuf>,
        /// Abort on malformed lines instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Print a JSON report instead of the bare letters
        #[arg(long)]
        json: bool,
        /// Also write the result here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw the grid as text (top row first)
    Show {
        input: Option<PathBuf>,
        #[arg(long)]
        strict: bool,
    },
    /// Write a random network in record format
    Gen {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = NetworkCfg::default().rows)]
        rows: usize,
        #[arg(long, default_value_t = NetworkCfg::default().cols)]
        cols: usize,
        #[arg(long, default_value_t = NetworkCfg::default().pipe_density)]
        density: f64,
        #[arg(long, default_value_t = NetworkCfg::default().sinks)]
        sinks: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON shape of `solve --json`.
#[derive(Debug, Serialize)]
struct SolveReport {
    sinks: String,
    /// `[row, col]` of the source, internal orientation.
    source: Option<[usize; 2]>,
    visited: usize,
    rows: usize,
    cols: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = SolveCfg {
        max_cells: cmd.max_cells,
    };
    match cmd.action {
        Action::Solve {
            input,
            strict,
            json,
            out,
        } => solve(input, strict, json, out, cfg),
        Action::Show { input, strict } => show(input, strict, cfg),
        Action::Gen {
            seed,
            index,
            rows,
            cols,
            density,
            sinks,
            out,
        } => {
            let net = NetworkCfg {
                rows,
                cols,
                pipe_density: density,
                sinks,
            };
            generate(net, ReplayToken::new(seed, index), out)
        }
        Action::Report => report(cfg),
    }
}

fn parse_mode(strict: bool) -> ParseMode {
    if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

/// Read the whole input; `None` or `-` means stdin.
fn read_input(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn load_grid(input: Option<&Path>, strict: bool, cfg: SolveCfg) -> Result<(String, Grid)> {
    let (label, text) = read_input(input)?;
    let records = parse_records(&text, parse_mode(strict))
        .with_context(|| format!("parsing {label}"))?;
    tracing::info!(input = %label, records = records.len(), strict, "loaded records");
    let grid =
        Grid::from_records(&records, cfg).with_context(|| format!("building grid from {label}"))?;
    Ok((label, grid))
}

fn solve(
    input: Option<PathBuf>,
    strict: bool,
    json: bool,
    out: Option<PathBuf>,
    cfg: SolveCfg,
) -> Result<()> {
    let (label, grid) = load_grid(input.as_deref(), strict, cfg)?;
    let reach = search(&grid);
    let sinks = reach.sink_string();
    tracing::info!(
        input = %label,
        sinks = %sinks,
        visited = reach.visited.len(),
        "solve"
    );

    let rendered = if json {
        let report = SolveReport {
            sinks,
            source: reach.source.map(|p| [p.row, p.col]),
            visited: reach.visited.len(),
            rows: grid.rows(),
            cols: grid.cols(),
        };
        serde_json::to_string_pretty(&report)?
    } else {
        sinks
    };
    println!("{rendered}");

    if let Some(out) = out {
        write_output(&out, &format!("{rendered}\n"))?;
        let params = serde_json::json!({
            "input": label,
            "strict": strict,
            "json": json,
            "max_cells": cfg.max_cells,
        });
        let sidecar = provenance::write_sidecar(&out, "solve", params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote result");
    }
    Ok(())
}

fn show(input: Option<PathBuf>, strict: bool, cfg: SolveCfg) -> Result<()> {
    let (label, grid) = load_grid(input.as_deref(), strict, cfg)?;
    tracing::info!(input = %label, rows = grid.rows(), cols = grid.cols(), "show");
    print!("{}", grid.render());
    Ok(())
}

fn generate(net: NetworkCfg, tok: ReplayToken, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(
        seed = tok.seed,
        index = tok.index,
        rows = net.rows,
        cols = net.cols,
        density = net.pipe_density,
        sinks = net.sinks,
        "gen"
    );
    let text = format_records(&draw_network(&net, tok));
    match out {
        Some(out) => write_output(&out, &text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn report(cfg: SolveCfg) -> Result<()> {
    let block = provenance::Provenance::new(
        "report",
        serde_json::json!({ "max_cells": cfg.max_cells }),
    );
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

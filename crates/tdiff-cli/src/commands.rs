use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde::Serialize;
use tdiff_core::{
    lcs_len, render_rows, DiffConfig, DiffEngine, DiffResult, DiffStats, EditScript, LineSequence,
    OpKind,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, config, &cli.format),
        Command::Stats(args) => cmd_stats(args, config, &cli.format),
    }
}

fn cmd_diff(args: DiffArgs, config: DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let engine = engine_for(&args.inputs, config);
    let (old, new) = load_inputs(&args.inputs)?;
    let script = engine
        .diff(old.as_slice(), new.as_slice())
        .context("cannot compare inputs")?;

    match format {
        OutputFormat::Text => {
            let color = colored::control::SHOULD_COLORIZE.should_colorize();
            print!("{}", format_text(&script, args.line_numbers, color));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&DiffReport::new(&script))?);
        }
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs, config: DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let engine = engine_for(&args.inputs, config);
    let (old, new) = load_inputs(&args.inputs)?;
    let stats = stats_for(&engine, &old, &new).context("cannot compare inputs")?;

    match format {
        OutputFormat::Text => print!("{}", format_stats(&stats)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&StatsReport::new(stats))?);
        }
    }
    Ok(())
}

fn engine_for(inputs: &InputArgs, mut config: DiffConfig) -> DiffEngine {
    if let Some(max_lines) = inputs.max_lines {
        config.max_lines = max_lines;
    }
    DiffEngine::new(config)
}

/// Counts only. The rolling LCS never materializes the full table, so only
/// the line limits apply, not the cell budget.
fn stats_for(
    engine: &DiffEngine,
    old: &LineSequence,
    new: &LineSequence,
) -> DiffResult<DiffStats> {
    engine.check_line_limits(old.len(), new.len())?;
    let same = lcs_len(old.as_slice(), new.as_slice());
    Ok(DiffStats {
        same,
        added: new.len() - same,
        deleted: old.len() - same,
    })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    let Some(path) = path else {
        return Ok(DiffConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = DiffConfig::from_toml_str(&text)
        .with_context(|| format!("cannot load config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn load_inputs(inputs: &InputArgs) -> anyhow::Result<(LineSequence, LineSequence)> {
    if is_stdin(&inputs.old) && is_stdin(&inputs.new) {
        bail!("only one input can be read from stdin");
    }
    let old = LineSequence::from_text(&read_input(&inputs.old)?);
    let new = LineSequence::from_text(&read_input(&inputs.new)?);
    tracing::debug!(old = old.len(), new = new.len(), "inputs loaded");
    Ok((old, new))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn format_text(script: &EditScript, line_numbers: bool, color: bool) -> String {
    let mut out = String::new();
    for row in render_rows(script, line_numbers) {
        let text = if color {
            match row.kind {
                OpKind::Same => row.text,
                OpKind::Add => row.text.green().to_string(),
                OpKind::Delete => row.text.red().to_string(),
            }
        } else {
            row.text
        };
        out.push_str(&text);
        out.push('\n');
    }
    out
}

fn format_stats(stats: &DiffStats) -> String {
    format!(
        "same:       {}\nadded:      {}\ndeleted:    {}\nsimilarity: {:.1}%\n",
        stats.same,
        stats.added.to_string().green(),
        stats.deleted.to_string().red(),
        stats.similarity() * 100.0,
    )
}

#[derive(Serialize)]
struct DiffReport<'a> {
    ops: &'a EditScript,
    #[serde(flatten)]
    summary: StatsReport,
}

impl<'a> DiffReport<'a> {
    fn new(script: &'a EditScript) -> Self {
        Self {
            ops: script,
            summary: StatsReport::new(script.stats()),
        }
    }
}

#[derive(Serialize)]
struct StatsReport {
    stats: DiffStats,
    similarity: f64,
}

impl StatsReport {
    fn new(stats: DiffStats) -> Self {
        Self {
            similarity: stats.similarity(),
            stats,
        }
    }
}

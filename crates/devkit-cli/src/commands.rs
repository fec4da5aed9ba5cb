use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context};
use colored::Colorize;
use devkit_diff::{compute_diff, ChangeKind, TextDiff};
use devkit_server::{DevkitServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Diff(args) => {
            let differs = cmd_diff(args, &cli.format)?;
            Ok(if differs { ExitCode::from(1) } else { ExitCode::SUCCESS })
        }
        Command::Serve(args) => cmd_serve(args).map(|()| ExitCode::SUCCESS),
    }
}

/// Print the diff and report whether the inputs differ, so the exit status can
/// follow `diff(1)`.
fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<bool> {
    if !args.inline && args.old == "-" && args.new == "-" {
        bail!("only one input can be read from stdin");
    }
    let old = read_input(&args.old, args.inline)?;
    let new = read_input(&args.new, args.inline)?;

    let result = compute_diff(&old, &new, args.mode);
    match format {
        OutputFormat::Text => {
            let color = colored::control::SHOULD_COLORIZE.should_colorize();
            print!("{}", render_text(&result, color));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(!result.is_identical())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    println!("devkit server on {}", config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(DevkitServer::new(config).serve())?;
    Ok(())
}

/// Resolve a diff operand: literal text, stdin (`-`), or a file path.
pub fn read_input(arg: &str, inline: bool) -> anyhow::Result<String> {
    if inline {
        return Ok(arg.to_string());
    }
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(arg).with_context(|| format!("failed to read {arg}"))
}

/// One line per operation, then a summary line. Inserts are green and
/// deletes red when `color` is set.
pub fn render_text(result: &TextDiff, color: bool) -> String {
    let paint = |text: String, kind: ChangeKind| -> String {
        if !color {
            return text;
        }
        match kind {
            ChangeKind::Insert => text.green().to_string(),
            ChangeKind::Delete => text.red().to_string(),
            ChangeKind::Equal => text,
        }
    };

    let mut out = String::new();
    for change in &result.diff {
        let marker = match change.kind {
            ChangeKind::Insert => '+',
            ChangeKind::Delete => '-',
            ChangeKind::Equal => ' ',
        };
        out.push_str(&paint(format!("{marker}{}", change.value), change.kind));
        out.push('\n');
    }
    let stats = &result.stats;
    out.push_str(&format!(
        "{} additions, {} deletions, {} unchanged\n",
        paint(stats.additions.to_string(), ChangeKind::Insert),
        paint(stats.deletions.to_string(), ChangeKind::Delete),
        stats.unchanged,
    ));
    out
}

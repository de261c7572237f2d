// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::PathBuf;

use console::style;

use crate::config::CmlintConfig;
use crate::error::{CmlintError, Result};
use crate::rules::{RuleEngine, Status, Verdict};

use super::args::{Cli, Commands, InitArgs, LintArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration (fail fast on malformed files)
    let config = if let Some(config_path) = &cli.config {
        CmlintConfig::load_from(config_path)?
    } else {
        CmlintConfig::load()?
    };

    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &config, args),
        Commands::Prompt => run_prompt(),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// One message to lint, with a label for the report.
struct Input {
    label: Option<String>,
    text: String,
}

/// Collect messages from the flag, files, and stdin.
fn collect_inputs(args: &LintArgs) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    if let Some(ref message) = args.message {
        inputs.push(Input {
            label: None,
            text: message.clone(),
        });
    }

    for path in &args.files {
        inputs.push(Input {
            label: Some(path.display().to_string()),
            text: std::fs::read_to_string(path)?,
        });
    }

    if args.stdin {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        inputs.push(Input {
            label: Some("-".to_string()),
            text,
        });
    }

    if inputs.is_empty() {
        return Err(CmlintError::WithContext {
            context: "lint".to_string(),
            message: "no input: pass --message, file paths, or --stdin".to_string(),
        });
    }

    Ok(inputs)
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &CmlintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let engine = RuleEngine::new(config.rule_set()?, config.ignore_predicates());
    let inputs = collect_inputs(&args)?;

    // Each message is evaluated independently; a failing one never stops
    // the rest of the batch.
    let mut failed = 0usize;
    for input in &inputs {
        let mut verdict = engine.evaluate(&input.text);
        verdict.input = input.label.clone();

        let blocking = match verdict.status() {
            Status::Error => true,
            Status::Warning => args.strict,
            Status::Clean => false,
        };
        if blocking {
            failed += 1;
        }

        if !cli.quiet {
            print_verdict(&verdict, cli.format, config.help_url.as_deref());
        }
    }

    if failed > 0 {
        Err(CmlintError::LintFailed { count: failed })
    } else {
        Ok(())
    }
}

fn print_verdict(verdict: &Verdict, format: Option<OutputFormat>, help_url: Option<&str>) {
    match format {
        Some(OutputFormat::Json) => verdict.print_json(),
        _ => verdict.print_text(help_url),
    }
}

/// Run the prompt command.
fn run_prompt() -> Result<()> {
    let schema = crate::prompt::default_prompt_schema();
    let json = serde_json::to_string_pretty(&schema).map_err(|e| CmlintError::WithContext {
        context: "prompt".to_string(),
        message: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    let path = PathBuf::from("cmlint.toml");

    if path.exists() && !args.force {
        return Err(CmlintError::WithContext {
            context: "init".to_string(),
            message: "cmlint.toml already exists (use --force to overwrite)".to_string(),
        });
    }

    std::fs::write(&path, crate::config::example_config())?;
    println!("{} Wrote {}", style("✓").green().bold(), path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmlint {}", crate::version::version_string());
    Ok(())
}

//! `line-select` command-line host.
//!
//! Loads a text file, applies one line selection command to the given selections and prints
//! the resulting selections, the reveal request and the scroll position as JSON.

mod args;

use args::Args;
use clap::Parser;
use line_select::{
    CommandRegistry, LineCommand, LineSelectConfig, LineSelectEditor, RevealRequest, Selection,
};
use serde::Serialize;
use std::{env, fs, process};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct SelectionOutput {
    #[serde(flatten)]
    selection: Selection,
    text: String,
}

#[derive(Debug, Serialize)]
struct Output {
    command: String,
    selections: Vec<SelectionOutput>,
    reveal: Option<RevealRequest>,
    scroll_top: usize,
}

fn init_logging() {
    let filter = env::var("LINE_SELECT_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Accept either a bare command name or a namespaced id.
fn command_id(namespace: &str, command: &str) -> Result<String, String> {
    if command.contains('.') {
        return Ok(command.to_string());
    }
    let command: LineCommand = command.parse().map_err(|e| format!("{}", e))?;
    Ok(format!("{}.{}", namespace, command.name()))
}

fn run(args: Args) -> Result<Output, String> {
    let config = match &args.config {
        Some(path) => LineSelectConfig::load_from_path(path)
            .map_err(|e| e.to_string())?
            .unwrap_or_default(),
        None => LineSelectConfig::default(),
    };

    let text = fs::read_to_string(&args.file)
        .map_err(|e| format!("failed to read {}: {}", args.file.display(), e))?;

    let mut editor = LineSelectEditor::with_config(&text, &config);
    if let Some(height) = args.viewport_height {
        editor.set_viewport_height(height);
    }
    editor
        .try_set_selections(args.initial_selections())
        .map_err(|e| e.to_string())?;

    let mut registry = CommandRegistry::new();
    registry
        .activate_with_config(&config)
        .map_err(|e| e.to_string())?;

    let id = command_id(&config.command_namespace, &args.command)?;
    tracing::info!(%id, repeat = args.repeat, "running command");

    let mut reveal = None;
    for _ in 0..args.repeat {
        reveal = registry
            .execute(&id, &mut editor)
            .map_err(|e| e.to_string())?;
    }
    registry.deactivate();

    let selections = editor
        .selections()
        .iter()
        .map(|selection| SelectionOutput {
            selection: *selection,
            text: editor.line_index().text_in_range(selection.range()),
        })
        .collect();

    Ok(Output {
        command: id,
        selections,
        reveal,
        scroll_top: editor.scroll_top(),
    })
}

fn main() {
    init_logging();

    let args = Args::parse();

    match run(args).and_then(|output| {
        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }) {
        Ok(json) => println!("{}", json),
        Err(message) => {
            eprintln!("error: {}", message);
            process::exit(1);
        }
    }
}

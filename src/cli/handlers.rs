// FILE: src/cli/handlers.rs
use super::{EnhancedCli, OutputFormat, RunSettings};
use crate::{
    convert_with_options, render_classes, render_json, render_text, ConversionResult,
    ConverterError, Result, EXAMPLE_CSS,
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Instant;

const STDIN_INPUT: &str = "-";

// --- CONVERT ---
pub fn handle_convert_command(cli: &EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or(STDIN_INPUT);
    let settings = cli.build_run_settings(matches)?;

    if matches.get_flag("watch") {
        if input_path == STDIN_INPUT {
            return Err(ConverterError::invalid_format("--watch needs an input file, not stdin"));
        }
        watch_and_convert(input_path, &settings)
    } else {
        convert_once(input_path, &settings)
    }
}

fn read_source(input_path: &str) -> Result<String> {
    if input_path == STDIN_INPUT {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    fs::read_to_string(input_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConverterError::FileNotFound {
            path: input_path.to_string(),
        },
        _ => ConverterError::Io(e),
    })
}

pub fn render(result: &ConversionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Classes => Ok(render_classes(result)),
    }
}

fn write_output(rendered: &str, output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered.trim_end()))?;
            log::info!("Result written to {}", path);
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

fn convert_once(input_path: &str, settings: &RunSettings) -> Result<()> {
    let start = Instant::now();
    let source = read_source(input_path)?;
    let result = convert_with_options(&source, &settings.options);
    log::debug!("Converted {} in {}us", input_path, start.elapsed().as_micros());

    let rendered = render(&result, settings.format)?;
    write_output(&rendered, settings.output.as_deref())
}

fn watch_and_convert(input_path: &str, settings: &RunSettings) -> Result<()> {
    eprintln!("👀 Watching {} for changes...", input_path);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if let Err(e) = tx.send(event) {
                    eprintln!("Watch error: {}", e);
                }
            }
        },
        notify::Config::default(),
    )
    .map_err(|e| ConverterError::watch(format!("Failed to create file watcher: {}", e)))?;

    watcher
        .watch(Path::new(input_path), RecursiveMode::NonRecursive)
        .map_err(|e| ConverterError::watch(format!("Failed to watch file: {}", e)))?;

    if let Err(e) = convert_once(input_path, settings) {
        eprintln!("❌ Initial conversion failed: {}", e);
    }

    loop {
        match rx.recv() {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    continue;
                }
                eprintln!("🔄 File changed, converting...");
                if let Err(e) = convert_once(input_path, settings) {
                    eprintln!("❌ Conversion failed: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Watch error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

// --- EXAMPLE ---
pub fn handle_example_command() -> Result<()> {
    print!("{}", EXAMPLE_CSS);
    Ok(())
}

// FILE: src/cli/mod.rs

mod config;
mod handlers;

pub use config::ConfigFile;

use crate::error::{ConverterError, Result};
use crate::ConversionOptions;
use clap::{Arg, ArgAction, Command, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Classes,
}

/// Everything a conversion run needs once flags and config file are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub options: ConversionOptions,
    pub format: OutputFormat,
    pub output: Option<String>,
}

pub struct EnhancedCli {
    config: ConfigFile,
}

impl Default for EnhancedCli {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancedCli {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let matches = self.build_cli().get_matches();

        self.setup_logging(matches.get_count("verbose"))?;

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        match matches.subcommand() {
            Some(("convert", sub_matches)) => handlers::handle_convert_command(self, sub_matches),
            Some(("example", _)) => handlers::handle_example_command(),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    pub fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path (.toml or .json)")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("convert")
                    .about("Convert CSS declarations to Tailwind utility classes")
                    .arg(Arg::new("input").help("Input CSS file, '-' or nothing for stdin").index(1))
                    .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Write the result to a file"))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).help("Output format [default: text]"))
                    .arg(Arg::new("class-name").long("class-name").value_name("NAME").help("Class name used in the @apply snippet"))
                    .arg(Arg::new("layer").long("layer").value_name("LAYER").help("Cascade layer wrapping the @apply snippet"))
                    .arg(Arg::new("watch").short('w').long("watch").help("Watch the input file and convert again on change").action(ArgAction::SetTrue)),
            )
            .subcommand(Command::new("example").about("Print an example stylesheet to convert"))
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .try_init()
            .map_err(|e| ConverterError::invalid_format(format!("Failed to set up logging: {}", e)))
    }

    /// Merge command line flags over the config file. Flags win.
    pub fn build_run_settings(&self, matches: &clap::ArgMatches) -> Result<RunSettings> {
        let mut options = ConversionOptions::default();
        if let Some(class_name) = &self.config.class_name {
            options.class_name = class_name.clone();
        }
        if let Some(layer) = &self.config.layer {
            options.layer = layer.clone();
        }
        if let Some(class_name) = matches.get_one::<String>("class-name") {
            options.class_name = class_name.clone();
        }
        if let Some(layer) = matches.get_one::<String>("layer") {
            options.layer = layer.clone();
        }
        let class_name = options.class_name.trim_start_matches('.');
        if class_name.is_empty() {
            return Err(ConverterError::invalid_format("Class name must not be empty"));
        }
        options.class_name = class_name.to_string();

        let format = match matches.get_one::<OutputFormat>("format") {
            Some(format) => *format,
            None => match &self.config.format {
                Some(name) => OutputFormat::from_str(name, true).map_err(|_| {
                    ConverterError::invalid_format(format!(
                        "Unknown output format '{}' in config. Use text, json or classes.",
                        name
                    ))
                })?,
                None => OutputFormat::Text,
            },
        };

        let output = matches
            .get_one::<String>("output")
            .cloned()
            .or_else(|| self.config.output.clone());

        Ok(RunSettings {
            options,
            format,
            output,
        })
    }
}

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use texlog::{indent_line, LogParser, ParserConfig, Report, Severity};

#[derive(Parser)]
#[command(name = "texlog")]
#[command(about = "Errors and warnings from TeX compilation logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a TeX log file and emit the diagnostics as JSON
    Parse {
        /// Path to the .log file or to the main .tex file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[command(flatten)]
        options: ParserOptions,
    },
    /// Show errors and warnings from the last compilation
    Show {
        /// Path to the .log file or to the main .tex file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Print every log line, indented by the number of open files
        #[arg(long, default_value_t = false)]
        echo: bool,

        #[command(flatten)]
        options: ParserOptions,
    },
}

#[derive(Args)]
struct ParserOptions {
    /// JSON file with parser settings
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Maximum number of lines read for one message
    #[arg(long)]
    lookahead: Option<usize>,

    /// Consecutive blank lines allowed inside an error message
    #[arg(long)]
    error_tolerance: Option<usize>,

    /// Consecutive blank lines allowed inside a package error message
    #[arg(long)]
    package_error_tolerance: Option<usize>,
}

impl ParserOptions {
    fn resolve(&self) -> anyhow::Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::load_from_path(path)?,
            None => ParserConfig::default(),
        };
        if let Some(lines) = self.lookahead {
            config = config.with_lookahead_lines(lines);
        }
        if let Some(tolerance) = self.error_tolerance {
            config = config.with_error_blank_tolerance(tolerance);
        }
        if let Some(tolerance) = self.package_error_tolerance {
            config = config.with_package_error_blank_tolerance(tolerance);
        }
        Ok(config)
    }
}

/// `main.tex` and `main` both point at `main.log`.
fn log_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "log") {
        path.to_path_buf()
    } else {
        path.with_extension("log")
    }
}

fn read_log(path: &Path) -> anyhow::Result<String> {
    let path = log_path(path);
    log::info!("Reading {:?}", path);
    let bytes = fs::read(&path).with_context(|| format!("could not read log file {:?}", path))?;
    // Engines write the log in the document's input encoding, which is not always UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { path, options } => {
            let content = read_log(path)?;
            let parser = LogParser::with_config(options.resolve()?);
            let report = Report::new(parser.parse(&content));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Show {
            path,
            echo,
            options,
        } => {
            let content = read_log(path)?;
            let parser = LogParser::with_config(options.resolve()?);
            let diagnostics = if *echo {
                parser.parse_with_echo(&content, |depth, line| {
                    println!("{}", indent_line(depth, line));
                })
            } else {
                parser.parse(&content)
            };
            if *echo {
                println!();
            }

            let report = Report::new(diagnostics);
            for diagnostic in &report.diagnostics {
                println!("{diagnostic}\n");
            }
            println!(
                "{} error(s), {} warning(s)",
                report.count(Severity::Error),
                report.count(Severity::Warning)
            );
        }
    }
    Ok(())
}

//! pbiforge CLI - Build Power BI project documents from wizard configuration
//!
//! Usage:
//!   pbiforge build <config.json|config.toml> [--output-dir <dir>] [--extension <ext>] [--stdout]
//!   pbiforge preview <config.json|config.toml>
//!   pbiforge catalog
//!
//! Examples:
//!   pbiforge build sales.json --output-dir ./out
//!   pbiforge build sales.toml --stdout
//!   pbiforge preview sales.json

use clap::{ArgAction, Parser, Subcommand};
use pbiforge::compile;
use pbiforge::config::Settings;
use pbiforge::export::{self, suggested_file_name, DirectoryTarget, Exporter};
use pbiforge::model::{DataSource, ProjectConfig, ReportType, Theme, VisualKind};
use pbiforge::preview;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pbiforge")]
#[command(about = "pbiforge - Build Power BI project documents from wizard configuration")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ./pbiforge.toml, then the user config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a project document and save it
    Build {
        /// Path to the configuration snapshot (.json or .toml)
        file: PathBuf,

        /// Directory to save into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File extension of the saved document
        #[arg(short, long)]
        extension: Option<String>,

        /// Print the document instead of saving it
        #[arg(long)]
        stdout: bool,
    },

    /// Show the project summary and the derived structure
    Preview {
        /// Path to the configuration snapshot (.json or .toml)
        file: PathBuf,
    },

    /// List the accepted labels for every choice
    Catalog,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(code) = init_logging(&settings, cli.verbose) {
        return code;
    }

    match cli.command {
        Commands::Build {
            file,
            output_dir,
            extension,
            stdout,
        } => cmd_build(&settings, file, output_dir, extension, stdout),
        Commands::Preview { file } => cmd_preview(file),
        Commands::Catalog => cmd_catalog(),
    }
}

fn init_logging(settings: &Settings, verbose: u8) -> Result<(), ExitCode> {
    let level = match verbose {
        0 => match settings.logging.level() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Error in settings: {}", e);
                return Err(ExitCode::FAILURE);
            }
        },
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_config(file: &Path) -> Result<ProjectConfig, ExitCode> {
    ProjectConfig::load(file).map_err(|e| {
        eprintln!("Error reading config '{}': {}", file.display(), e);
        ExitCode::FAILURE
    })
}

fn cmd_build(
    settings: &Settings,
    file: PathBuf,
    output_dir: Option<PathBuf>,
    extension: Option<String>,
    stdout: bool,
) -> ExitCode {
    let config = match load_config(&file) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let document = compile::build(&config);

    if stdout {
        return match export::to_json(&document, settings.export.pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Export error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let target = match output_dir.or_else(|| settings.export.output_dir.clone()) {
        Some(dir) => DirectoryTarget::new(dir),
        None => match DirectoryTarget::downloads() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Export error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut exporter = Exporter::new(target);
    if !settings.export.pretty {
        exporter = exporter.compact();
    }

    let extension = extension.unwrap_or_else(|| settings.export.extension.clone());
    let file_name = suggested_file_name(&config, &extension);

    match exporter.export(&document, &file_name) {
        Ok(receipt) => {
            println!(
                "Saved {} ({} bytes) to {}",
                receipt.file_name,
                receipt.bytes,
                exporter.target().dir().display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Export error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_preview(file: PathBuf) -> ExitCode {
    let config = match load_config(&file) {
        Ok(c) => c,
        Err(code) => return code,
    };

    println!("{}", preview::render_summary(&config));
    println!("{}", preview::render_structure(&config));
    ExitCode::SUCCESS
}

fn cmd_catalog() -> ExitCode {
    println!("Data sources:");
    for source in DataSource::ALL {
        println!("  - {}", source);
    }
    println!();

    println!("Report types:");
    for report_type in ReportType::ALL {
        println!("  - {}", report_type);
    }
    println!();

    println!("Themes:");
    for theme in Theme::ALL {
        println!("  - {}", theme);
    }
    println!();

    println!("Visualizations:");
    for kind in VisualKind::ALL {
        println!("  - {}", kind);
    }

    ExitCode::SUCCESS
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::Level;

use filesniff::application::dto::ClassifyOptions;
use filesniff::application::ClassifyFilesUseCase;
use filesniff::domain::entities::FileType;
use filesniff::domain::repositories::{FileReader, FileWriter, WriteOptions};
use filesniff::domain::services::{FileTypeDetector, SignatureTable};
use filesniff::infrastructure::persistence::{LocalFileReader, LocalFileWriter};
use filesniff::presentation::cli::{
    parse_file_types, render_report, render_signatures, Cli, Commands,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.command {
        Commands::Classify {
            paths,
            types,
            json,
            sequential,
            size,
        } => {
            let mut options = ClassifyOptions::default()
                .with_types(parse_file_types(types))
                .with_size(size);
            if sequential {
                options = options.sequential();
            }

            let use_case = ClassifyFilesUseCase::new(FileTypeDetector::new(LocalFileReader::new()));
            let report = use_case.execute(&paths, &options);
            print!("{}", render_report(&report, json)?);

            if report.error_count() == report.files.len() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Detect { file_type, path } => {
            let file_type: FileType = file_type.parse().map_err(anyhow::Error::msg)?;
            return run_detect(&path, file_type);
        }
        Commands::Size { path } => {
            let size = LocalFileReader::new()
                .file_size(&path)
                .with_context(|| format!("Failed to stat {}", path.display()))?;
            println!("{size}");
        }
        Commands::Zero {
            path,
            size,
            overwrite,
        } => {
            let options = WriteOptions::default().with_overwrite(overwrite);
            let written = LocalFileWriter::new()
                .write_zeroed(&path, size, &options)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} zero bytes to {}", written, path.display());
        }
        Commands::Copy {
            source,
            destination,
            overwrite,
        } => {
            let data = LocalFileReader::new()
                .read_entire(&source)
                .with_context(|| format!("Failed to read {}", source.display()))?;
            let options = WriteOptions::default().with_overwrite(overwrite);
            let written = LocalFileWriter::new()
                .write_entire(&destination, &data, &options)
                .with_context(|| format!("Failed to write {}", destination.display()))?;
            tracing::info!(
                "Copied {} bytes from {} to {}",
                written,
                source.display(),
                destination.display()
            );
        }
        Commands::ListSignatures => {
            print!("{}", render_signatures(SignatureTable::builtin()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_detect(path: &Path, file_type: FileType) -> Result<ExitCode> {
    let detector = FileTypeDetector::new(LocalFileReader::new());
    let detection = detector
        .identify_as(path, file_type)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    match detection {
        Some(detection) => {
            println!(
                "{}: {} ({})",
                path.display(),
                file_type.name(),
                detection.signature()
            );
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("{}: not {}", path.display(), file_type.name());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

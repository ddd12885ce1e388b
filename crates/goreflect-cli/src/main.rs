//! goreflect - extract package docs, types, functions and methods from Go
//! source files and write each file's document as `<package>.json`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use goreflect_api::{export, DuplicatePolicy, ExtractorConfig, SourceExtractor};
use goreflect_go::GoExtractor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "goreflect",
    version,
    about = "Extract package docs, types, functions and methods from Go source files"
)]
struct Cli {
    /// Go source files to extract
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory to write <package>.json files into
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Print JSON to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Also capture type declarations nested inside function bodies
    #[arg(long)]
    nested: bool,

    /// Let a later declaration replace an earlier one with the same name
    #[arg(long)]
    allow_duplicates: bool,

    /// Leave doc comments out of the output
    #[arg(long)]
    no_docs: bool,

    /// Reject files larger than this many bytes
    #[arg(long)]
    max_file_size: Option<usize>,
}

impl Cli {
    fn config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::default()
            .with_nested(self.nested)
            .with_docs(!self.no_docs);
        if self.allow_duplicates {
            config = config.with_duplicate_policy(DuplicatePolicy::LastWins);
        }
        if let Some(size) = self.max_file_size {
            config = config.with_max_file_size(size);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let extractor = GoExtractor::with_config(cli.config());
    let report = extractor.extract_files(&cli.files);

    for (path, extraction) in &report.files {
        for diagnostic in &extraction.diagnostics {
            eprintln!("warning: {}: {}", path.display(), diagnostic);
        }

        if cli.stdout {
            println!("{}", export::export_json(&extraction.document)?);
        } else {
            let written = export::dump_json(&extraction.document, &cli.output)
                .with_context(|| format!("writing document for {}", path.display()))?;
            eprintln!("{} -> {}", path.display(), written.display());
        }
    }

    for (_, message) in &report.failed_files {
        eprintln!("error: {}", message);
    }

    if !report.failed_files.is_empty() {
        bail!(
            "{} of {} files failed",
            report.failed_files.len(),
            report.total_files()
        );
    }
    Ok(())
}

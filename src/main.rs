use anyhow::Result;
use clap::Parser;
use file_exporter::validation::validate_export;
use file_exporter::{export_manifest, ExportConfig, Manifest};

#[derive(Parser, Debug)]
#[command(name = "file-exporter")]
#[command(about = "Concatenate the built-in file list into output.txt", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let manifest = Manifest::builtin();
    let config = ExportConfig::default();

    log::info!(
        "{} of {} listed file(s) enabled",
        manifest.enabled_count(),
        manifest.len()
    );

    export_manifest(&manifest, &config.output_path)?;

    // Auto-validate after export
    validate_export(&config.output_path, &manifest.enabled_paths())?;
    log::info!("✅ Validation passed!");

    Ok(())
}

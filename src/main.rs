//! Whisper Queue Binary Entry Point

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whisper_queue::cli::Cli;
use whisper_queue::config::ConfigManager;
use whisper_queue::engine::WhisperEngine;
use whisper_queue::models::BatchSummary;
use whisper_queue::pipeline::BatchProcessor;
use whisper_queue::queue::{self, FileEntry};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whisper_queue=info,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("whisper-queue.toml"));
    let mut manager = ConfigManager::new(config_path);
    manager.load_or_create()?;

    let run = cli.resolve(manager.settings())?;

    fs::create_dir_all(&run.output_dir)?;

    tracing::info!(
        "Loading {} model from {}",
        run.model.name(),
        run.models_dir.display()
    );
    let engine = WhisperEngine::load(&run.models_dir, run.model, run.device)?;

    let processor = BatchProcessor::new(&engine, run.language, &run.output_dir);

    let summary: BatchSummary = if run.input.is_file() {
        let entry = FileEntry::from_path(&run.input)?;
        processor.process_batch(&[entry])
    } else {
        let mut entries = queue::scan_directory(&run.input)?;
        queue::sort_entries(&mut entries, run.order);
        tracing::info!("Found {} supported files", entries.len());
        processor.process_batch(&entries)
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    if summary.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

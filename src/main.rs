//! lemmydl - archive posts, comments and media from Lemmy
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lemmydl::cli::Cli;
use lemmydl::settings::Settings;
use lemmydl::{ArchiveWriter, Console, LemmyClient, MediaDownloader, Tone, pipeline};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let console = Console::new(cli.colors());

    // RUST_LOG wins; --verbose otherwise turns on debug output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli, &console).await {
        console.line(Tone::Error, &format!("Error: {e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, console: &Console) -> Result<()> {
    let settings = Settings::load(cli).await?;
    tracing::debug!(?settings, "starting");

    let client = LemmyClient::login(
        &settings.instance,
        &settings.credentials.username,
        &settings.credentials.password,
        settings.request_delay,
    )
    .await?;
    console.line(Tone::Info, "Successfully logged in!");

    let writer = ArchiveWriter::new(
        settings.output_dir.clone(),
        settings.clean_text,
        MediaDownloader::new(),
    );
    let summary = pipeline::run(&client, &settings, &writer, console).await?;

    console.line(
        Tone::Success,
        &format!(
            "Done! Archived {} posts ({} already saved, {} media files, {} failed downloads) to {}",
            summary.archived,
            summary.skipped,
            summary.media_saved,
            summary.media_failed,
            settings.output_dir.display()
        ),
    );
    Ok(())
}

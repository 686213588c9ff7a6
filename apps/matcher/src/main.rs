mod batch;
mod config;
mod document;
mod embedding;
mod errors;
mod matching;
mod pipeline;
mod render;
mod routes;
mod scoring;
mod skills;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::batch::{BatchPaths, DEFAULT_JOB_FILE, DEFAULT_REPORT_FILE, DEFAULT_RESUME_DIR};
use crate::config::Config;
use crate::embedding::{Embedder, FastEmbedder};
use crate::pipeline::MatchOptions;
use crate::routes::build_router;
use crate::skills::SkillDictionary;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match resumes against job descriptions", long_about = None)]
struct Cli {
    /// Defaults to `serve`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web form on 0.0.0.0:$PORT
    Serve,
    /// Score every resume in a folder against one job description and write a CSV report
    Batch {
        /// Folder of .txt / .pdf / .docx resumes
        #[arg(long, env = "RESUME_DIR", default_value = DEFAULT_RESUME_DIR)]
        resumes_dir: PathBuf,
        /// Job description file
        #[arg(long, env = "JOB_DESCRIPTION_FILE", default_value = DEFAULT_JOB_FILE)]
        job_file: PathBuf,
        /// CSV report path
        #[arg(long, env = "REPORT_FILE", default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher v{}", env!("CARGO_PKG_VERSION"));

    let dictionary = Arc::new(SkillDictionary::builtin());
    if dictionary.is_empty() {
        anyhow::bail!("skill dictionary is empty; nothing to match against");
    }
    info!("Skill dictionary loaded ({} skills)", dictionary.len());

    // Model load may download weights; keep it off the async workers.
    let cache_dir = config.embedding_cache_dir.clone();
    let embedder: Arc<dyn Embedder> =
        Arc::new(tokio::task::spawn_blocking(move || FastEmbedder::load(cache_dir.as_deref())).await??);

    let options = MatchOptions::default();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, dictionary, embedder, options).await,
        Commands::Batch {
            resumes_dir,
            job_file,
            output,
        } => {
            let paths = BatchPaths {
                resume_dir: resumes_dir,
                job_file,
                output,
            };
            let summary = tokio::task::spawn_blocking(move || {
                batch::run_batch(&paths, &dictionary, embedder.as_ref(), &options)
            })
            .await??;
            info!(
                "Batch finished: {} processed, {} skipped",
                summary.processed,
                summary.skipped.len()
            );
            Ok(())
        }
    }
}

async fn serve(
    config: &Config,
    dictionary: Arc<SkillDictionary>,
    embedder: Arc<dyn Embedder>,
    options: MatchOptions,
) -> Result<()> {
    let state = AppState {
        dictionary,
        embedder,
        options,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("invalid listen address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

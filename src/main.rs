//! Skillmatch engine entrypoint.
//!
//! Boots the matching stack from environment configuration, runs the startup
//! self-check, and reports what it wired. A broken encoder, vocabulary, or
//! store fails the process here instead of surfacing as degraded scores later.

use std::sync::Arc;

use mimalloc::MiMalloc;

use skillmatch::config::Config;
use skillmatch::encoding::TextEncoder;
use skillmatch::engine::MatchEngine;
use skillmatch::records::InMemoryDirectory;
use skillmatch::store::{FsStore, MatchStore};
use skillmatch::vocabulary::SkillVocabulary;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        store_path = %config.store_path.display(),
        default_limit = config.default_limit,
        "Skillmatch engine starting"
    );

    let vocabulary = match &config.vocabulary_path {
        Some(path) => SkillVocabulary::from_path(path)?,
        None => SkillVocabulary::builtin()?,
    }
    .into_shared();
    tracing::info!(skills = vocabulary.len(), "Skill vocabulary loaded");

    if config.model_dir.is_none() {
        tracing::warn!("No SKILLMATCH_MODEL_DIR configured, running encoder in stub mode");
    }
    let encoder = Arc::new(TextEncoder::load(config.encoder_config())?);
    tracing::info!(
        dim = encoder.embedding_dim(),
        version = encoder.version(),
        "Text encoder ready"
    );

    let store = MatchStore::new(FsStore::new(config.store_path.clone()));
    store.prepare().await?;

    let engine = MatchEngine::new(vocabulary, encoder, InMemoryDirectory::new(), store)?;

    let report = engine.self_check()?;
    tracing::info!(
        encoder_stub = report.encoder_stub,
        embedding_dim = report.embedding_dim,
        vocabulary_size = report.vocabulary_size,
        probe_hybrid = report.probe.score.hybrid_score,
        "Self-check passed"
    );

    Ok(())
}

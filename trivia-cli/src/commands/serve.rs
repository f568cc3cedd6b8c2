//! HTTP server command
//!
//! Runs the trivia API against Postgres (migrating on startup) or against
//! an in-memory store for local front-end work.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::models::NewQuestion;
use trivia_server::{run_server, MemoryQuestionStore, PgQuestionStore, QuestionStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (ignored with --in-memory)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an in-memory store instead of Postgres
    #[arg(long)]
    pub in_memory: bool,

    /// JSON array of questions to preload into the in-memory store
    #[arg(long, value_name = "FILE", requires = "in_memory")]
    pub seed: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn QuestionStore> = if args.in_memory {
        Arc::new(memory_store(args.seed.as_deref())?)
    } else {
        let database_url = args.database_url.context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.trivia/.env (or use --in-memory)",
        )?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgQuestionStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    // Blocks until shutdown
    run_server(store, ServerConfig { bind_addr: args.bind })
        .await
        .context("Server error")?;

    Ok(())
}

fn memory_store(seed: Option<&Path>) -> Result<MemoryQuestionStore> {
    let Some(path) = seed else {
        return Ok(MemoryQuestionStore::new());
    };

    let questions = read_seed(path)?;
    tracing::info!(count = questions.len(), "Loaded seed questions from {}", path.display());
    Ok(MemoryQuestionStore::seeded(questions))
}

/// Parse a seed file: `[{"question", "answer", "difficulty", "category"}, ...]`.
/// Every entry goes through the same validation as `POST /questions`.
fn read_seed(path: &Path) -> Result<Vec<NewQuestion>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_valid_seed() {
        let file = seed_file(
            r#"[
                {"question": "Where is Cape Town", "answer": "South Africa", "difficulty": 2, "category": 3},
                {"question": "Who painted Guernica?", "answer": "Picasso", "difficulty": "3", "category": "2"}
            ]"#,
        );

        let questions = read_seed(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].answer(), "Picasso");
        assert_eq!(questions[1].difficulty(), 3);
    }

    #[test]
    fn rejects_invalid_entry() {
        let file = seed_file(r#"[{"question": "Q", "answer": "A", "difficulty": 0, "category": 1}]"#);
        let err = read_seed(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("difficulty must be between 1 and 5"));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        assert!(read_seed(Path::new("/definitely/not/here.json")).is_err());
    }

    #[tokio::test]
    async fn memory_store_without_seed_has_categories_only() {
        let store = memory_store(None).unwrap();
        assert_eq!(store.list_categories().await.unwrap().len(), 6);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}

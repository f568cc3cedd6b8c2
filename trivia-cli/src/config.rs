//! Environment loading
//!
//! `.env` in the current directory wins over `~/.trivia/.env`; variables
//! already set in the environment win over both.
//!
//! Runs before argument parsing (clap reads `DATABASE_URL` and friends from
//! the environment) and therefore before tracing is initialized, so the
//! caller logs the outcome.

use std::path::PathBuf;

/// Load `.env` files, returning the ones that were applied.
/// Missing or unparsable files are skipped.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        // dotenvy doesn't overwrite existing vars
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// The trivia config directory (~/.trivia)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trivia"))
}

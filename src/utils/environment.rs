use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost/redmine/";

const CONFIG_FILE: &str = "config/projects.json";
const BASE_URL_KEY: &str = "redmine.url";
const FONT_ENV_VAR: &str = "WORDCLOUD_FONT";

/// The API credential. Missing credential is a fatal precondition failure
/// naming the variable, raised before any remote work starts.
pub fn require_api_key() -> Result<String> {
    env::var("REDMINE_API_KEY").context("REDMINE_API_KEY environment variable not set")
}

/// Base URL of the Redmine server, overridable through the `redmine.url`
/// key of `config/projects.json`. A missing config file means the default.
pub fn resolve_base_url() -> String {
    let config_path = Path::new(CONFIG_FILE);
    if let Ok(raw) = fs::read_to_string(config_path) {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(config) => {
                println!("Read the config file: {}", config_path.display());
                if let Some(url) = config.get(BASE_URL_KEY).and_then(|v| v.as_str()) {
                    return url.to_string();
                }
            }
            Err(e) => {
                eprintln!("Warning: ignoring malformed {}: {e}", config_path.display());
            }
        }
    }
    DEFAULT_BASE_URL.to_string()
}

/// Font used for rendering: CLI override, then `WORDCLOUD_FONT`, then a
/// platform default. Existence is checked by the renderer before any
/// project is processed.
pub fn resolve_font_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    if let Ok(path) = env::var(FONT_ENV_VAR) {
        return PathBuf::from(path);
    }

    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Windows\Fonts\YuGothB.ttc")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/System/Library/Fonts/ヒラギノ丸ゴ ProN W4.ttc")
    } else {
        PathBuf::from("/usr/share/fonts/opentype/ipafont-gothic/ipagp.ttf")
    }
}

/// Load the stopword list, one word per line. A missing file is an empty
/// set, not an error.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stopword file: {}", path.display()))?;
    Ok(raw.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
}

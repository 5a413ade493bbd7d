//! Environment and configuration loading.

pub mod environment;

pub use environment::{
    DEFAULT_BASE_URL, load_stopwords, require_api_key, resolve_base_url, resolve_font_path,
};

//! On-disk snapshot storage, partitioned by project identifier.
//!
//! Layout under the data root:
//!
//! - `<identifier>/project.bin` - bincode snapshot of the project record
//! - `<identifier>/project.json` - pretty-printed structured export
//! - `<identifier>/issues/<id>.json` - one file per issue
//! - `<identifier>/issues.bin` - bincode snapshot of the full issue list
//! - `<identifier>/text.txt` - aggregated raw corpus
//! - `<identifier>/words.txt` - space-joined surviving token stream
//! - `<identifier>/words.json` - frequency table, `[token, count]` pairs
//!
//! Rendered images live outside the data root under the image directory,
//! one `<identifier>.png` each. A synchronization run owns the whole data
//! root exclusively: it is reset up front and rebuilt from scratch, so
//! nothing here merges with a previous run's files.

pub mod layout;
pub mod persistence;

pub use layout::StorageLayout;
pub use persistence::{
    load_issues, save_frequency_table, save_issue, save_issues, save_project, save_text,
    save_words,
};

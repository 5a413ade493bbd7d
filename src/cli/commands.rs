use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::analysis::{AnalysisOptions, LexicalAnalyzer};
use crate::client::RedmineClient;
use crate::corpus::{CorpusStats, aggregate};
use crate::render::CloudRenderer;
use crate::storage::{StorageLayout, load_issues, save_frequency_table, save_text, save_words};
use crate::sync::Synchronizer;
use crate::utils::{load_stopwords, require_api_key, resolve_base_url, resolve_font_path};

#[derive(Parser)]
#[command(name = "redmine-wordcloud")]
#[command(version = "0.1.0")]
#[command(about = "Generate word-cloud images from Redmine project issues", long_about = None)]
pub struct Cli {
    /// Root directory for synchronized project data
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Output directory for rendered images
    #[arg(long, global = true, default_value = "image")]
    pub image_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Font file used for rendering (falls back to WORDCLOUD_FONT, then a
    /// platform default)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Stopword list, one word per line
    #[arg(long, default_value = "config/stopwords.txt")]
    pub stopwords: PathBuf,

    /// Collapse numeral tokens to a single canonical digit
    #[arg(long)]
    pub replace_numerics: bool,

    /// Drop single-character kana/Latin/digit tokens
    #[arg(long)]
    pub drop_single_chars: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all projects and their issues into the data directory
    Sync,
    /// Aggregate, analyze and render a word cloud per synchronized project
    Generate(GenerateArgs),
    /// Sync, then generate
    Run(GenerateArgs),
    /// Show statistics about the synchronized corpus
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let layout = StorageLayout::new(&cli.data_dir, &cli.image_dir);

    match cli.command {
        Some(Commands::Sync) => {
            synchronize(&layout)?;
        }
        Some(Commands::Generate(args)) => {
            generate(&layout, &args)?;
        }
        Some(Commands::Run(args)) => {
            synchronize(&layout)?;
            generate(&layout, &args)?;
        }
        Some(Commands::Stats) => {
            show_stats(&layout)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn synchronize(layout: &StorageLayout) -> Result<()> {
    let api_key = require_api_key()?;
    let base_url = resolve_base_url();
    println!("Redmine url: {base_url}");

    let client = RedmineClient::new(&base_url, &api_key)?;
    Synchronizer::new(&client, layout).synchronize()?;
    Ok(())
}

fn generate(layout: &StorageLayout, args: &GenerateArgs) -> Result<()> {
    // Fail on a missing font before touching any project
    let font_path = resolve_font_path(args.font.clone());
    let renderer = CloudRenderer::new(&font_path)?;
    println!("Use font: {}", font_path.display());

    let stopwords = load_stopwords(&args.stopwords)?;
    let analyzer = LexicalAnalyzer::new(AnalysisOptions {
        replace_numerics: args.replace_numerics,
        drop_single_chars: args.drop_single_chars,
    })?;

    let snapshot_dirs = layout.discover_snapshots();
    if snapshot_dirs.is_empty() {
        println!("No synchronized projects under {}", layout.data_dir().display());
        return Ok(());
    }
    layout.create_image_dir()?;

    for dir in snapshot_dirs {
        let identifier = match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let Some(issues) = load_issues(&dir)? else {
            // Discovered by snapshot file, so this only happens on a race
            println!("Skip missing snapshot: {}", dir.display());
            continue;
        };

        let (text, stats) = aggregate(&issues);
        println!(
            "Project {identifier}: {} issues, {} notes, {} comments",
            stats.issues, stats.notes, stats.comments
        );
        save_text(&dir, &text)?;

        let (words, table) = analyzer.analyze(&text)?;
        println!("Total words: {}, unique words: {}", words.len(), table.len());
        save_words(&dir, &words)?;
        save_frequency_table(&dir, &table)?;

        let image_path = layout.image_path(&identifier);
        if renderer.render(&table, &stopwords, &image_path)? {
            println!("Draw image: {}", image_path.display());
        } else {
            println!("Skip empty corpus for project: {identifier}");
        }
    }

    Ok(())
}

fn show_stats(layout: &StorageLayout) -> Result<()> {
    let snapshot_dirs = layout.discover_snapshots();

    let mut totals = CorpusStats::default();
    let mut projects = 0usize;
    for dir in &snapshot_dirs {
        let Some(issues) = load_issues(dir)? else { continue };
        let (_, stats) = aggregate(&issues);
        projects += 1;
        totals.issues += stats.issues;
        totals.notes += stats.notes;
        totals.comments += stats.comments;
    }

    println!("Redmine Corpus Statistics");
    println!("================================");
    println!("Projects: {projects}");
    println!("Total issues: {}", totals.issues);
    println!("  Journal notes: {}", totals.notes);
    println!("  Changeset comments: {}", totals.comments);
    println!();
    println!("Data directory: {}", layout.data_dir().display());

    Ok(())
}

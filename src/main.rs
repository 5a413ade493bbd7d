use anyhow::Result;

fn main() -> Result<()> {
    redmine_wordcloud::cli::run()
}

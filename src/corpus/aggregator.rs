use crate::models::Issue;

/// Structural counts collected while flattening a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub issues: usize,
    pub notes: usize,
    pub comments: usize,
}

/// Flatten an issue snapshot into one newline-delimited text blob.
///
/// For each issue, in snapshot order: subject, description, then the notes
/// of every journal that carries notes, then every changeset's comments.
/// Each field contributes exactly one line; empty subjects and descriptions
/// still contribute their line, while a journal without notes contributes
/// nothing.
pub fn aggregate(issues: &[Issue]) -> (String, CorpusStats) {
    let mut text = String::new();
    let mut stats = CorpusStats { issues: issues.len(), ..CorpusStats::default() };

    for issue in issues {
        text.push_str(&issue.subject);
        text.push('\n');
        text.push_str(issue.description.as_deref().unwrap_or(""));
        text.push('\n');

        for journal in &issue.journals {
            if let Some(notes) = &journal.notes {
                text.push_str(notes);
                text.push('\n');
                stats.notes += 1;
            }
        }
        for changeset in &issue.changesets {
            text.push_str(&changeset.comments);
            text.push('\n');
            stats.comments += 1;
        }
    }

    (text, stats)
}

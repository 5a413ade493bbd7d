use std::collections::HashMap;

/// Count token occurrences into an ordered frequency table.
///
/// Ordering is descending count; ties keep first-occurrence order from the
/// token stream (the sort is stable over insertion order). The counts
/// partition the stream: their sum equals the stream length.
pub fn frequency_table(tokens: &[String]) -> Vec<(String, u64)> {
    let mut table: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                index.insert(token.as_str(), table.len());
                table.push((token.clone(), 1));
            }
        }
    }

    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

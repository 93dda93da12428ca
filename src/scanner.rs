use tracing::debug;

/// Splits source text into whitespace-delimited words.
///
/// Runs of whitespace collapse into one delimiter and leading or trailing
/// whitespace yields no empty words. Quote characters stay part of the word.
pub fn scan(source: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in source.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(&source[s..idx]);
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => (),
        }
    }
    if let Some(s) = start {
        words.push(&source[s..]);
    }

    debug!(words = words.len(), "scanned source");
    words
}

//! Append-only log of submitted queries for one session.

use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct QueryLog {
    entries: Mutex<Vec<String>>,
}

impl QueryLog {
    pub fn new() -> Self { Self::default() }

    /// Appends `query` as-is. The caller trims it and rejects empty input.
    pub fn record(&self, query: impl Into<String>) {
        self.entries.lock().push(query.into());
    }

    pub fn len(&self) -> usize { self.entries.lock().len() }

    pub fn is_empty(&self) -> bool { self.entries.lock().is_empty() }

    /// Snapshot of the log in submission order.
    pub fn entries(&self) -> Vec<String> { self.entries.lock().clone() }

    /// The `top_n` most frequent queries with their counts, highest first.
    /// Equal counts keep the order in which the queries were first seen.
    pub fn top_queries(&self, top_n: usize) -> Vec<(String, usize)> {
        let entries = self.entries.lock();
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for query in entries.iter() {
            match slot.get(query.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    slot.insert(query.as_str(), counts.len());
                    counts.push((query.clone(), 1));
                }
            }
        }
        // sort_by is stable, so ties stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(top_n);
        counts
    }
}

//! Thread-safe nested frequency counter.
//!
//! Maps a subject key to per-category occurrence counts. One exclusive
//! lock guards the whole nested structure; `record`, `query`, and `dump`
//! each hold it for their full duration, so a dump never observes a table
//! mutated mid-iteration and no increment is ever lost.
//!
//! The backing maps are ordered, so dump iteration is sorted by key
//! ascending for subjects and for categories within a subject. Two dumps
//! of the same table state are byte-identical, across runs.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::debug;

/// A process-lifetime table of `(subject, category)` occurrence counts.
///
/// Keys are opaque comparable identifiers. Absence of a pair is
/// equivalent to a count of zero. Instances are explicitly constructed
/// and owned by their consumer; there is no global singleton.
pub struct CounterTable<S, C> {
    inner: Mutex<BTreeMap<S, BTreeMap<C, u64>>>,
}

impl<S: Ord, C: Ord> CounterTable<S, C> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }

    /// Records one occurrence of `(subject, category)`.
    ///
    /// Missing subject and category entries are created at zero before
    /// the increment. Safe to call from any number of threads; the
    /// aggregate effect equals some serialization of all calls.
    pub fn record(&self, subject: S, category: C) {
        let mut table = self.inner.lock();
        *table.entry(subject).or_default().entry(category).or_default() += 1;
    }

    /// Returns the current count for `(subject, category)`, zero if the
    /// pair was never recorded. Pure read; never inserts entries.
    pub fn query(&self, subject: &S, category: &C) -> u64 {
        let table = self.inner.lock();
        table
            .get(subject)
            .and_then(|categories| categories.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Whether any category was ever recorded under `subject`.
    pub fn contains(&self, subject: &S) -> bool {
        self.inner.lock().contains_key(subject)
    }

    /// Whether `(subject, category)` was ever recorded.
    pub fn contains_pair(&self, subject: &S, category: &C) -> bool {
        self.inner
            .lock()
            .get(subject)
            .is_some_and(|categories| categories.contains_key(category))
    }

    /// Number of distinct subjects recorded so far.
    pub fn subject_count(&self) -> usize {
        self.inner.lock().len()
    }
}

impl<S: Ord + Display, C: Ord + Display> CounterTable<S, C> {
    /// Writes a human-readable snapshot of the whole table to `sink`.
    ///
    /// Format, consumed by external log scrapers (bit-exact):
    ///
    /// ```text
    /// = <subject>:
    /// \t<category> (<count>)
    /// ```
    ///
    /// Subjects and categories are emitted in ascending key order. Write
    /// failures propagate to the caller; the table is left untouched.
    pub fn dump(&self, sink: &mut impl Write) -> io::Result<()> {
        let table = self.inner.lock();
        for (subject, categories) in table.iter() {
            writeln!(sink, "= {subject}:")?;
            for (category, count) in categories {
                writeln!(sink, "\t{category} ({count})")?;
            }
        }
        debug!(subjects = table.len(), "counter table dumped");
        Ok(())
    }

    /// Like [`dump`](Self::dump), followed by the trailing summary line
    /// for callers that keep a separate running event total.
    pub fn dump_with_total(&self, sink: &mut impl Write, total: u64) -> io::Result<()> {
        self.dump(sink)?;
        write!(sink, "\n\nThere have been {total} virtual calls.\n")
    }
}

impl<S: Ord, C: Ord> Default for CounterTable<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_query_counts_exact_occurrences() {
        let table = CounterTable::new();
        for _ in 0..3 {
            table.record(1, 1);
        }
        table.record(1, 2);
        table.record(2, 1);
        table.record(2, 1);

        assert_eq!(table.query(&1, &1), 3);
        assert_eq!(table.query(&1, &2), 1);
        assert_eq!(table.query(&2, &1), 2);
        assert_eq!(table.query(&2, &2), 0);
    }

    #[test]
    fn test_query_never_inserts() {
        let table: CounterTable<u32, u32> = CounterTable::new();
        assert_eq!(table.query(&7, &7), 0);
        assert!(!table.contains(&7));
        assert_eq!(table.subject_count(), 0);
    }

    #[test]
    fn test_membership_probes() {
        let table = CounterTable::new();
        table.record("call", 3);

        assert!(table.contains(&"call"));
        assert!(table.contains_pair(&"call", &3));
        assert!(!table.contains_pair(&"call", &4));
        assert!(!table.contains(&"load"));
    }

    #[test]
    fn test_dump_format_is_bit_exact() {
        let table = CounterTable::new();
        for _ in 0..3 {
            table.record(1, 1);
        }
        table.record(1, 2);
        table.record(2, 1);
        table.record(2, 1);

        let mut out = Vec::new();
        table.dump(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "= 1:\n\t1 (3)\n\t2 (1)\n= 2:\n\t1 (2)\n"
        );
    }

    #[test]
    fn test_dump_with_total_appends_summary() {
        let table = CounterTable::new();
        table.record(5, 9);

        let mut out = Vec::new();
        table.dump_with_total(&mut out, 42).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "= 5:\n\t9 (1)\n\n\nThere have been 42 virtual calls.\n"
        );
    }

    #[test]
    fn test_dump_of_empty_table_is_empty() {
        let table: CounterTable<u32, u32> = CounterTable::new();
        let mut out = Vec::new();
        table.dump(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_concurrent_recording_loses_no_updates() {
        const THREADS: usize = 1000;
        const RECORDS_PER_THREAD: u64 = 1000;

        let table = Arc::new(CounterTable::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    for _ in 0..RECORDS_PER_THREAD {
                        table.record(1u32, 1u32);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.query(&1, &1), THREADS as u64 * RECORDS_PER_THREAD);
    }

    #[test]
    fn test_concurrent_recording_across_distinct_pairs() {
        const RECORDS_PER_THREAD: u64 = 1000;

        let table = Arc::new(CounterTable::new());
        let handles: Vec<_> = (0..8u32)
            .map(|subject| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    for i in 0..RECORDS_PER_THREAD {
                        table.record(subject, (i % 2) as u32);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for subject in 0..8u32 {
            assert_eq!(table.query(&subject, &0), RECORDS_PER_THREAD / 2);
            assert_eq!(table.query(&subject, &1), RECORDS_PER_THREAD / 2);
        }
    }

    proptest! {
        #[test]
        fn prop_counts_match_manual_tally(pairs in proptest::collection::vec((0u8..8, 0u8..8), 0..256)) {
            let table = CounterTable::new();
            let mut expected = std::collections::HashMap::new();
            for &(s, c) in &pairs {
                table.record(s, c);
                *expected.entry((s, c)).or_insert(0u64) += 1;
            }
            for s in 0..8u8 {
                for c in 0..8u8 {
                    prop_assert_eq!(
                        table.query(&s, &c),
                        expected.get(&(s, c)).copied().unwrap_or(0)
                    );
                }
            }
        }

        #[test]
        fn prop_dump_is_deterministic(pairs in proptest::collection::vec((0u8..8, 0u8..8), 0..256)) {
            let table = CounterTable::new();
            for &(s, c) in &pairs {
                table.record(s, c);
            }
            let mut first = Vec::new();
            let mut second = Vec::new();
            table.dump(&mut first).unwrap();
            table.dump(&mut second).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_dump_lists_each_recorded_pair_once(pairs in proptest::collection::vec((0u8..8, 0u8..8), 1..256)) {
            let table = CounterTable::new();
            for &(s, c) in &pairs {
                table.record(s, c);
            }
            let mut out = Vec::new();
            table.dump(&mut out).unwrap();
            let text = String::from_utf8(out).unwrap();

            for &(s, c) in &pairs {
                let count = table.query(&s, &c);
                let line = format!("\t{c} ({count})\n");
                let block_start = text.find(&format!("= {s}:\n")).expect("subject block");
                let block_end = text[block_start + 1..]
                    .find("= ")
                    .map_or(text.len(), |i| block_start + 1 + i);
                let block = &text[block_start..block_end];
                prop_assert_eq!(block.matches(&line).count(), 1);
            }
        }
    }
}

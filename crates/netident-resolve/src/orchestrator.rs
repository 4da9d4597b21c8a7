//! Bounded-concurrency fan-out over the entry list.
//!
//! Every entry is spawned as its own task; a shared semaphore caps how
//! many probes run at once. Results are collected by awaiting the join
//! handles in submission order, so the output order always equals the
//! input order no matter how the probes interleave.

use crate::resolver::Resolve;
use netident_core::{Entry, ResolutionOutcome, ResultRecord};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Default concurrency cap for a resolution run
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Resolve all entries under a concurrency cap.
///
/// Returns one record per entry, in input order. A failing entry only
/// ever produces a failed record for itself; nothing cancels the other
/// probes and no global timeout is applied.
pub async fn resolve_all<R>(
    resolver: Arc<R>,
    entries: &[Entry],
    max_workers: usize,
) -> Vec<ResultRecord>
where
    R: Resolve + 'static,
{
    // A zero-permit pool would never start.
    let cap = max_workers.max(1);
    let semaphore = Arc::new(Semaphore::new(cap));

    debug!(entries = entries.len(), cap, "dispatching resolution batch");

    let mut handles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().cloned().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let resolver = Arc::clone(&resolver);

        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_) => {
                    return ResultRecord::new(
                        index,
                        entry,
                        ResolutionOutcome::Failed("worker pool closed".to_string()),
                    );
                }
            };

            let outcome = resolver.resolve(&entry).await;
            ResultRecord::new(index, entry, outcome)
        }));
    }

    let mut records = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(record) => records.push(record),
            // A panicked probe is still only that entry's failure.
            Err(e) => records.push(ResultRecord::new(
                index,
                entries[index].clone(),
                ResolutionOutcome::Failed(format!("resolution task failed: {e}")),
            )),
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Deterministic resolver: per-entry delays and injected failures,
    /// plus a high-water mark of concurrent probes.
    #[derive(Default)]
    struct ScriptedResolver {
        delays_ms: HashMap<String, u64>,
        fail: HashSet<String>,
        active: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl Resolve for ScriptedResolver {
        async fn resolve(&self, entry: &Entry) -> ResolutionOutcome {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            let delay = self.delays_ms.get(entry.as_str()).copied().unwrap_or(2);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            self.active.fetch_sub(1, Ordering::SeqCst);

            if self.fail.contains(entry.as_str()) {
                ResolutionOutcome::RegistryFailed(format!("injected failure for {entry}"))
            } else {
                ResolutionOutcome::DnsName(format!("host-{entry}"))
            }
        }
    }

    fn entries(tokens: &[&str]) -> Vec<Entry> {
        tokens.iter().copied().map(Entry::new).collect()
    }

    #[tokio::test]
    async fn test_emits_one_record_per_entry_in_input_order() {
        let input = entries(&["a", "b", "c", "d", "e"]);
        // Earlier entries finish last.
        let delays_ms = [("a", 50), ("b", 40), ("c", 30), ("d", 20), ("e", 10)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let resolver = Arc::new(ScriptedResolver {
            delays_ms,
            ..ScriptedResolver::default()
        });

        let records = resolve_all(resolver, &input, 5).await;

        assert_eq!(records.len(), input.len());
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.index, index);
            assert_eq!(record.entry, input[index]);
        }
    }

    #[tokio::test]
    async fn test_output_is_invariant_to_the_cap() {
        let input = entries(&["w", "x", "y", "z"]);
        let mut baseline = None;

        for cap in [1, 3, 10] {
            let resolver = Arc::new(ScriptedResolver::default());
            let records = resolve_all(resolver, &input, cap).await;
            let rendered: Vec<String> = records.iter().map(ToString::to_string).collect();

            match &baseline {
                None => baseline = Some(rendered),
                Some(expected) => assert_eq!(&rendered, expected, "cap {cap} changed the output"),
            }
        }
    }

    #[tokio::test]
    async fn test_one_failure_does_not_touch_the_others() {
        let input = entries(&["good-1", "bad", "good-2"]);
        let resolver = Arc::new(ScriptedResolver {
            fail: HashSet::from(["bad".to_string()]),
            ..ScriptedResolver::default()
        });

        let records = resolve_all(resolver, &input, 2).await;

        assert_eq!(
            records[0].outcome,
            ResolutionOutcome::DnsName("host-good-1".to_string())
        );
        assert_eq!(
            records[2].outcome,
            ResolutionOutcome::DnsName("host-good-2".to_string())
        );
        match &records[1].outcome {
            ResolutionOutcome::RegistryFailed(message) => assert!(!message.is_empty()),
            other => panic!("expected RegistryFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_in_flight_probes_never_exceed_the_cap() {
        let tokens: Vec<String> = (0..12).map(|i| format!("entry-{i}")).collect();
        let input: Vec<Entry> = tokens.iter().map(Entry::new).collect();
        let delays_ms = tokens.iter().map(|t| (t.clone(), 20)).collect();

        let resolver = Arc::new(ScriptedResolver {
            delays_ms,
            ..ScriptedResolver::default()
        });
        let records = resolve_all(Arc::clone(&resolver), &input, 3).await;

        assert_eq!(records.len(), 12);
        assert!(resolver.peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_empty_batch_produces_no_records() {
        let resolver = Arc::new(ScriptedResolver::default());
        let records = resolve_all(resolver, &[], 10).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_zero_cap_is_clamped_to_one() {
        let input = entries(&["only"]);
        let resolver = Arc::new(ScriptedResolver::default());
        let records = resolve_all(resolver, &input, 0).await;
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].outcome,
            ResolutionOutcome::DnsName("host-only".to_string())
        );
    }
}

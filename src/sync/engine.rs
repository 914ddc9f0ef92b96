//! Sync cycle orchestration
//!
//! One cycle: fetch a remote batch, reconcile it into the repository, push
//! every local quote, and persist if the reconciliation changed anything.
//! The fetch is split from the apply step so callers can avoid holding a
//! borrow of the repository across the network round trip.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::quotes::QuoteRepository;
use crate::storage::quotes::save_quotes;
use crate::storage::LocalStore;
use crate::sync::reconcile::{reconcile, SyncReport};
use crate::sync::remote::RemoteSource;
use crate::sync::SyncError;
use crate::types::quote::Quote;

/// Result of applying a remote batch
pub struct CycleOutcome {
    pub report: SyncReport,
    /// One handle per pushed quote; dropping them detaches the pushes
    pub pushes: Vec<JoinHandle<()>>,
}

pub struct SyncEngine {
    remote: Arc<dyn RemoteSource>,
    store: LocalStore,
}

impl SyncEngine {
    pub fn new(remote: Arc<dyn RemoteSource>, store: LocalStore) -> Self {
        Self { remote, store }
    }

    /// Fetch the next remote batch
    pub async fn fetch(&self) -> Result<Vec<Quote>, SyncError> {
        self.remote.fetch_quotes().await
    }

    /// Reconcile `batch` into `repo`, push everything, persist on change
    ///
    /// An empty batch does nothing at all. Must be called from within a tokio
    /// runtime since pushes are spawned as tasks.
    pub fn apply(&self, repo: &mut QuoteRepository, batch: Vec<Quote>) -> CycleOutcome {
        if batch.is_empty() {
            tracing::debug!("Remote batch empty, nothing to sync");
            return CycleOutcome {
                report: SyncReport::default(),
                pushes: Vec::new(),
            };
        }

        let report = reconcile(repo, batch);
        let pushes = self.push_all(repo.quotes());

        if report.has_changes() {
            if let Err(e) = save_quotes(&self.store, repo) {
                tracing::error!("Failed to save quotes after sync: {}", e);
            }
            tracing::info!(
                "Sync applied: {} new, {} conflicts resolved",
                report.new_quotes,
                report.conflicts_resolved
            );
        }

        CycleOutcome { report, pushes }
    }

    /// Push every quote independently; failures are logged and dropped
    pub fn push_all(&self, quotes: &[Quote]) -> Vec<JoinHandle<()>> {
        quotes
            .iter()
            .cloned()
            .map(|quote| {
                let remote = Arc::clone(&self.remote);
                tokio::spawn(async move {
                    if let Err(e) = remote.push_quote(&quote).await {
                        tracing::warn!("Failed to push quote {:?}: {}", quote.text, e);
                    }
                })
            })
            .collect()
    }

    /// Run a full cycle against `repo`
    ///
    /// A fetch failure aborts the cycle before anything is touched.
    pub async fn run_cycle(&self, repo: &mut QuoteRepository) -> Result<CycleOutcome, SyncError> {
        let batch = self.fetch().await?;
        Ok(self.apply(repo, batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::quotes::{load_quotes, QUOTES_KEY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeRemote {
        batch: Option<Vec<Quote>>,
        fail_pushes: bool,
        pushed: Mutex<Vec<Quote>>,
    }

    impl FakeRemote {
        fn serving(batch: Vec<Quote>) -> Self {
            Self {
                batch: Some(batch),
                fail_pushes: false,
                pushed: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                batch: None,
                fail_pushes: false,
                pushed: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RemoteSource for FakeRemote {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
            self.batch
                .clone()
                .ok_or_else(|| SyncError::InvalidResponse("unreachable".into()))
        }

        async fn push_quote(&self, quote: &Quote) -> Result<(), SyncError> {
            self.pushed.lock().unwrap().push(quote.clone());
            if self.fail_pushes {
                Err(SyncError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    async fn join_all(handles: Vec<JoinHandle<()>>) {
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_cycle_merges_pushes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let remote = Arc::new(FakeRemote::serving(vec![
            Quote::new("A", "Y"),
            Quote::new("B", "Server"),
        ]));
        let engine = SyncEngine::new(remote.clone(), store.clone());
        let mut repo = QuoteRepository::from_quotes(vec![Quote::new("A", "X")]);

        let outcome = engine.run_cycle(&mut repo).await.unwrap();
        assert_eq!(outcome.report.new_quotes, 1);
        assert_eq!(outcome.report.conflicts_resolved, 1);
        join_all(outcome.pushes).await;

        let expected = vec![Quote::new("A", "Y"), Quote::new("B", "Server")];
        assert_eq!(repo.quotes(), expected.as_slice());

        let mut pushed = remote.pushed.lock().unwrap().clone();
        pushed.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(pushed, expected);

        assert_eq!(load_quotes(&store).quotes(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_empty_batch_does_not_persist_or_push() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let remote = Arc::new(FakeRemote::serving(Vec::new()));
        let engine = SyncEngine::new(remote.clone(), store.clone());
        let mut repo = QuoteRepository::from_quotes(vec![Quote::new("A", "X")]);

        let outcome = engine.run_cycle(&mut repo).await.unwrap();
        assert!(!outcome.report.has_changes());
        assert!(outcome.pushes.is_empty());
        assert_eq!(repo.len(), 1);
        assert!(store.get(QUOTES_KEY).unwrap().is_none());
        assert!(remote.pushed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unchanged_batch_pushes_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let remote = Arc::new(FakeRemote::serving(vec![Quote::new("A", "X")]));
        let engine = SyncEngine::new(remote.clone(), store.clone());
        let mut repo = QuoteRepository::from_quotes(vec![
            Quote::new("A", "X"),
            Quote::new("Local only", "Mine"),
        ]);

        let outcome = engine.run_cycle(&mut repo).await.unwrap();
        assert!(!outcome.report.has_changes());
        join_all(outcome.pushes).await;

        assert_eq!(remote.pushed.lock().unwrap().len(), 2);
        assert!(store.get(QUOTES_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let remote = Arc::new(FakeRemote::unreachable());
        let engine = SyncEngine::new(remote.clone(), store.clone());
        let mut repo = QuoteRepository::from_quotes(vec![Quote::new("A", "X")]);

        assert!(engine.run_cycle(&mut repo).await.is_err());
        assert_eq!(repo.len(), 1);
        assert!(remote.pushed.lock().unwrap().is_empty());
        assert!(store.get(QUOTES_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_push_failures_do_not_affect_local_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let mut fake = FakeRemote::serving(vec![Quote::new("B", "Server")]);
        fake.fail_pushes = true;
        let remote = Arc::new(fake);
        let engine = SyncEngine::new(remote.clone(), store.clone());
        let mut repo = QuoteRepository::from_quotes(vec![Quote::new("A", "X")]);

        let outcome = engine.run_cycle(&mut repo).await.unwrap();
        join_all(outcome.pushes).await;

        assert_eq!(remote.pushed.lock().unwrap().len(), 2);
        assert_eq!(repo.len(), 2);
        assert_eq!(load_quotes(&store), repo);
    }

    #[tokio::test]
    async fn test_second_identical_cycle_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let remote = Arc::new(FakeRemote::serving(vec![Quote::new("B", "Server")]));
        let engine = SyncEngine::new(remote, store);
        let mut repo = QuoteRepository::new();

        let first = engine.run_cycle(&mut repo).await.unwrap();
        join_all(first.pushes).await;
        let snapshot = repo.clone();

        let second = engine.run_cycle(&mut repo).await.unwrap();
        join_all(second.pushes).await;

        assert_eq!(second.report, SyncReport::default());
        assert_eq!(repo, snapshot);
    }
}

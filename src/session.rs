// src/session.rs
//! Runs store effects. Fetches execute on tokio tasks; their results are fed
//! back through a channel and applied on the caller's task, so the store is
//! only ever touched from one place.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::fetch::DigestSource;
use crate::store::{Action, BriefStore, Effect};

pub struct Session<S> {
    store: BriefStore,
    source: Arc<S>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl<S: DigestSource + 'static> Session<S> {
    pub fn new(source: S) -> Self {
        Self::with_shared(Arc::new(source))
    }

    pub fn with_shared(source: Arc<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store: BriefStore::new(),
            source,
            tx,
            rx,
        }
    }

    pub fn store(&self) -> &BriefStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Must be called inside a tokio runtime: fetch effects are spawned.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.store.dispatch(action) {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Fetch { generation } => {
                let source = Arc::clone(&self.source);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tracing::debug!(generation, source = source.name(), "fetch task started");
                    let result = source.fetch().await;
                    // Receiver gone means the session ended; nothing to apply.
                    let _ = tx.send(Action::FetchCompleted { generation, result });
                });
            }
        }
    }

    /// Wait for the next fetch to finish and apply it. Returns the
    /// completion's generation (applied or discarded as stale).
    pub async fn next_completion(&mut self) -> Option<u64> {
        let action = self.rx.recv().await?;
        let generation = match &action {
            Action::FetchCompleted { generation, .. } => Some(*generation),
            _ => None,
        };
        self.dispatch(action);
        generation
    }
}

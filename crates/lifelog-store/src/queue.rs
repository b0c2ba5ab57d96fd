//! Store writer queue - serialized units of work over one fact store.
//!
//! Every mutation (add or remove) plus its durable save is one unit of work.
//! Units enter a single FIFO command queue; one consumer task applies them
//! strictly in arrival order and acknowledges each caller only after the
//! save has completed, successfully or not. Reads do not join the queue:
//! they are served from the shared in-memory state, so a read concurrent
//! with a mutation may observe either the pre- or post-mutation store.
//!
//! A dequeued unit always runs to completion; there is no cancellation and
//! no internal retry. Retry policy, if any, belongs to the caller.

use crate::file::StoreFile;
use lifelog_core::{Error, FactId, FactStore, Modifier, Result};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{error, info};

enum Command {
    Add {
        subject: String,
        verb: String,
        mods: Vec<Modifier>,
        ack: oneshot::Sender<Result<FactId>>,
    },
    Remove {
        id: FactId,
        ack: oneshot::Sender<Result<()>>,
    },
}

/// Cloneable handle to the store writer task.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<Command>,
    state: Arc<RwLock<FactStore>>,
}

impl StoreHandle {
    /// Record a fact. Resolves with the new fact's id once the store has
    /// been durably saved, or with `SaveFailed` if the write didn't reach
    /// disk. On `SaveFailed` the in-memory store has already changed:
    /// persistence may be behind memory, and the caller must be told so.
    pub async fn add(
        &self,
        subject: impl Into<String>,
        verb: impl Into<String>,
        mods: Vec<Modifier>,
    ) -> Result<FactId> {
        let (ack, rx) = oneshot::channel();
        self.tx
            .send(Command::Add {
                subject: subject.into(),
                verb: verb.into(),
                mods,
                ack,
            })
            .await
            .map_err(|_| Error::internal("store writer stopped"))?;
        rx.await
            .map_err(|_| Error::internal("store writer dropped the request"))?
    }

    /// Remove a fact by id. An unknown id is a no-op that still runs its
    /// unit of work and resolves ok after the save.
    pub async fn remove(&self, id: FactId) -> Result<()> {
        let (ack, rx) = oneshot::channel();
        self.tx
            .send(Command::Remove { id, ack })
            .await
            .map_err(|_| Error::internal("store writer stopped"))?;
        rx.await
            .map_err(|_| Error::internal("store writer dropped the request"))?
    }

    /// Snapshot of the current in-memory store, without joining the queue.
    pub async fn snapshot(&self) -> FactStore {
        self.state.read().await.clone()
    }

    /// Current fact count, without joining the queue.
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }
}

/// Spawn the writer task that owns the mutation discipline for `file`.
///
/// The returned handle is the only way to mutate the store; there is no
/// ambient global state.
pub fn spawn_writer(initial: FactStore, file: StoreFile) -> StoreHandle {
    let (tx, rx) = mpsc::channel(256);
    let state = Arc::new(RwLock::new(initial));
    let writer = StoreWriter {
        rx,
        file,
        state: state.clone(),
    };
    tokio::spawn(writer.run());
    StoreHandle { tx, state }
}

struct StoreWriter {
    rx: mpsc::Receiver<Command>,
    file: StoreFile,
    state: Arc<RwLock<FactStore>>,
}

impl StoreWriter {
    async fn run(mut self) {
        info!("store writer started for {}", self.file.path().display());
        while let Some(command) = self.rx.recv().await {
            match command {
                Command::Add {
                    subject,
                    verb,
                    mods,
                    ack,
                } => {
                    let (id, snapshot) = {
                        let mut store = self.state.write().await;
                        let id = store.add(subject, verb, mods);
                        (id, store.clone())
                    };
                    let _ = ack.send(self.save(&snapshot).map(|_| id));
                }
                Command::Remove { id, ack } => {
                    let snapshot = {
                        let mut store = self.state.write().await;
                        store.remove(&id);
                        store.clone()
                    };
                    let _ = ack.send(self.save(&snapshot));
                }
            }
        }
        info!("store writer stopped");
    }

    fn save(&self, store: &FactStore) -> Result<()> {
        let result = self.file.save(store);
        if let Err(err) = &result {
            error!("{}", err);
        }
        result
    }
}

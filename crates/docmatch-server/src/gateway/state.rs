use std::sync::Arc;

use docmatch_core::batch::SnapshotWriter;
use docmatch_core::client::CompareBackend;

/// Shared handler state, generic over the comparison backend so tests can
/// substitute a scripted one.
pub struct HandlerState<C: CompareBackend> {
    pub backend: Arc<C>,
    pub snapshots: SnapshotWriter,
}

impl<C: CompareBackend> HandlerState<C> {
    pub fn new(backend: Arc<C>, snapshots: SnapshotWriter) -> Self {
        Self { backend, snapshots }
    }
}

impl<C: CompareBackend> Clone for HandlerState<C> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            snapshots: self.snapshots.clone(),
        }
    }
}

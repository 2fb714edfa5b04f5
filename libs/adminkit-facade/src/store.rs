use crate::result::OperationResult;
use crate::snapshot::{FacadeState, Snapshot};
use adminkit_http::TransportError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Part of the snapshot an operation writes to.
///
/// Requests targeting the same slot race; only the latest one may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Items,
    Selected,
    /// Named side-channel entry (e.g. `"usage-statistics"`)
    Side(&'static str),
}

/// Static description of a facade operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    /// Slot written on success; `None` for mutations that leave the snapshot alone
    pub slot: Option<Slot>,
    /// Message used when the failure carries no displayable text
    pub fallback: &'static str,
}

impl Operation {
    #[must_use]
    pub const fn fetch(name: &'static str, slot: Slot, fallback: &'static str) -> Self {
        Self {
            name,
            slot: Some(slot),
            fallback,
        }
    }

    #[must_use]
    pub const fn mutation(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            slot: None,
            fallback,
        }
    }
}

/// Shared, observable state cell of one facade.
///
/// Cloning yields another handle to the same state. The lock is never held
/// across an `.await`; operations only touch it when they start and finish.
pub struct FacadeStore<T, S = ()> {
    inner: Arc<Inner<T, S>>,
}

impl<T, S> Clone for FacadeStore<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, S> std::fmt::Debug for FacadeStore<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacadeStore")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}

struct Inner<T, S> {
    name: &'static str,
    cell: RwLock<Cell<T, S>>,
    changes: watch::Sender<u64>,
}

struct Cell<T, S> {
    state: FacadeState<T, S>,
    in_flight: usize,
    epoch: u64,
    next_token: u64,
    latest: HashMap<Slot, u64>,
}

struct Ticket {
    epoch: u64,
    token: Option<(Slot, u64)>,
}

impl<T, S> FacadeStore<T, S>
where
    T: Clone,
    S: Clone + Default,
{
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                name,
                cell: RwLock::new(Cell {
                    state: FacadeState::default(),
                    in_flight: 0,
                    epoch: 0,
                    next_token: 0,
                    latest: HashMap::new(),
                }),
                changes,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> FacadeState<T, S> {
        self.inner.cell.read().state.clone()
    }

    /// Read the state without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&FacadeState<T, S>) -> R) -> R {
        f(&self.inner.cell.read().state)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.cell.read().state.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.cell.read().state.error.clone()
    }

    /// Receiver whose value changes after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    /// Write to the snapshot directly, outside of any operation.
    pub fn write(&self, f: impl FnOnce(&mut Snapshot<T, S>)) {
        f(&mut self.inner.cell.write().state.snapshot);
        self.notify();
    }

    /// Set the selected record explicitly.
    ///
    /// Counts as the latest write to [`Slot::Selected`], so a fetch of a
    /// single record that is still in flight will not overwrite it.
    pub fn select(&self, selected: Option<T>) {
        {
            let mut cell = self.inner.cell.write();
            cell.next_token += 1;
            let token = cell.next_token;
            cell.latest.insert(Slot::Selected, token);
            cell.state.snapshot.selected = selected;
        }
        self.notify();
    }

    /// Restore construction-time defaults.
    ///
    /// Responses of requests started before the reset are discarded.
    pub fn reset(&self) {
        {
            let mut cell = self.inner.cell.write();
            cell.state = FacadeState::default();
            cell.in_flight = 0;
            cell.epoch += 1;
            cell.latest.clear();
        }
        tracing::debug!(facade = self.inner.name, "facade state reset");
        self.notify();
    }

    /// Run one operation under the loading/error discipline.
    ///
    /// Raises the loading flag and clears the error, awaits `call`, then on
    /// success lets `apply` write the value into the snapshot, or on failure
    /// records the failure's message (`op.fallback` when it has none). If a
    /// newer request for the same slot started meanwhile, or the store was
    /// reset, the outcome is returned to the caller but not recorded.
    pub async fn run<R, F, A>(&self, op: Operation, call: F, apply: A) -> OperationResult<R>
    where
        F: Future<Output = Result<R, TransportError>>,
        A: FnOnce(&mut Snapshot<T, S>, &R),
    {
        let ticket = self.begin(op);
        let mut pending = PendingGuard {
            inner: &self.inner,
            operation: op.name,
            epoch: ticket.epoch,
            armed: true,
        };
        let outcome = call.await;
        pending.armed = false;
        self.finish(op, &ticket, outcome, apply)
    }

    fn begin(&self, op: Operation) -> Ticket {
        let ticket = {
            let mut cell = self.inner.cell.write();
            cell.in_flight += 1;
            cell.state.is_loading = true;
            cell.state.error = None;
            let token = op.slot.map(|slot| {
                cell.next_token += 1;
                let token = cell.next_token;
                cell.latest.insert(slot, token);
                (slot, token)
            });
            Ticket {
                epoch: cell.epoch,
                token,
            }
        };
        tracing::debug!(
            facade = self.inner.name,
            operation = op.name,
            "operation started"
        );
        self.notify();
        ticket
    }

    fn finish<R, A>(
        &self,
        op: Operation,
        ticket: &Ticket,
        outcome: Result<R, TransportError>,
        apply: A,
    ) -> OperationResult<R>
    where
        A: FnOnce(&mut Snapshot<T, S>, &R),
    {
        let result = match outcome {
            Ok(value) => Ok(value),
            Err(err) => Err(err
                .user_message()
                .unwrap_or_else(|| op.fallback.to_owned())),
        };

        let recorded = {
            let mut cell = self.inner.cell.write();
            if cell.epoch == ticket.epoch {
                cell.in_flight = cell.in_flight.saturating_sub(1);
                cell.state.is_loading = cell.in_flight > 0;
                let current = ticket
                    .token
                    .is_none_or(|(slot, token)| cell.latest.get(&slot) == Some(&token));
                if current {
                    match &result {
                        Ok(value) => apply(&mut cell.state.snapshot, value),
                        Err(message) => cell.state.error = Some(message.clone()),
                    }
                }
                Some(current)
            } else {
                None
            }
        };

        match recorded {
            None => {
                tracing::debug!(
                    facade = self.inner.name,
                    operation = op.name,
                    "discarding response of a request started before reset"
                );
                // Nothing changed, observers are not notified.
                return into_operation_result(result);
            }
            Some(false) => tracing::debug!(
                facade = self.inner.name,
                operation = op.name,
                "discarding stale response; a newer request owns the slot"
            ),
            Some(true) => {}
        }

        match &result {
            Ok(_) => tracing::debug!(
                facade = self.inner.name,
                operation = op.name,
                "operation succeeded"
            ),
            Err(message) => tracing::warn!(
                facade = self.inner.name,
                operation = op.name,
                error = %message,
                "operation failed"
            ),
        }

        self.notify();
        into_operation_result(result)
    }

    fn notify(&self) {
        self.inner.notify();
    }
}

impl<T, S> Inner<T, S> {
    fn notify(&self) {
        self.changes.send_modify(|version| *version = version.wrapping_add(1));
    }
}

/// Releases the in-flight slot of an operation whose future was dropped
/// before the call resolved.
struct PendingGuard<'a, T, S> {
    inner: &'a Inner<T, S>,
    operation: &'static str,
    epoch: u64,
    armed: bool,
}

impl<T, S> Drop for PendingGuard<'_, T, S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        {
            let mut cell = self.inner.cell.write();
            if cell.epoch != self.epoch {
                return;
            }
            cell.in_flight = cell.in_flight.saturating_sub(1);
            cell.state.is_loading = cell.in_flight > 0;
        }
        tracing::debug!(
            facade = self.inner.name,
            operation = self.operation,
            "operation cancelled before completion"
        );
        self.inner.notify();
    }
}

fn into_operation_result<R>(result: Result<R, String>) -> OperationResult<R> {
    match result {
        Ok(value) => OperationResult::Success(value),
        Err(message) => OperationResult::Failure(message),
    }
}

// src/services/form.rs

//! Form state holder and submission session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SubmissionError;
use crate::models::IntakeForm;
use crate::services::submit::{ApiClient, ServerAck};
use crate::services::validator::validate;
use crate::utils::Transport;

/// Holds the current snapshot of a form record.
///
/// Every update publishes a fresh snapshot; snapshots handed out earlier
/// never change.
#[derive(Debug, Clone, Default)]
pub struct FormState<F> {
    snapshot: Arc<F>,
}

impl<F: IntakeForm> FormState<F> {
    pub fn new(record: F) -> Self {
        Self {
            snapshot: Arc::new(record),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<F> {
        Arc::clone(&self.snapshot)
    }

    /// Replace one field.
    pub fn set(&mut self, field: F::Field) {
        let mut next = F::clone(&self.snapshot);
        next.set(field);
        self.snapshot = Arc::new(next);
    }

    /// Back to the empty record.
    pub fn reset(&mut self) {
        self.snapshot = Arc::new(F::default());
    }
}

/// Status line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// What a submit call did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the record; the form was cleared.
    Accepted(ServerAck),
    /// Validation or the request failed; the record was kept for retry.
    Failed(SubmissionError),
    /// Another submission was still in flight; nothing was sent.
    Busy,
}

/// Single-slot in-flight flag.
#[derive(Debug, Default)]
struct SubmitGate {
    pending: AtomicBool,
}

impl SubmitGate {
    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { gate: self })
    }
}

/// Clears the gate when the submission finishes, however it finishes.
struct InFlight<'a> {
    gate: &'a SubmitGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}

#[derive(Debug, Default)]
struct SessionState<F> {
    form: FormState<F>,
    notice: Option<Notice>,
}

/// One intake form together with its display state.
///
/// Edits and submits go through `&self`; at most one submission is in
/// flight at a time.
#[derive(Debug, Default)]
pub struct FormSession<F> {
    state: Mutex<SessionState<F>>,
    gate: SubmitGate,
}

impl<F: IntakeForm> FormSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState<F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Arc<F> {
        self.lock().form.snapshot()
    }

    pub fn set(&self, field: F::Field) {
        self.lock().form.set(field);
    }

    pub fn notice(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.pending.load(Ordering::Acquire)
    }

    /// Validate the current snapshot and send it.
    ///
    /// Success clears the form; any failure keeps it and leaves an error
    /// notice. A call made while another is pending returns
    /// [`SubmitOutcome::Busy`] without touching anything.
    pub async fn submit<T: Transport>(&self, client: &ApiClient<T>) -> SubmitOutcome {
        let Some(_in_flight) = self.gate.try_begin() else {
            log::debug!("{} already in flight, ignoring submit", F::KIND);
            return SubmitOutcome::Busy;
        };

        let record = {
            let mut state = self.lock();
            state.notice = None;
            state.form.snapshot()
        };

        if let Err(e) = validate(record.as_ref()) {
            self.lock().notice = Some(Notice::Error(e.user_message()));
            return SubmitOutcome::Failed(e);
        }

        match client.submit(record.as_ref()).await {
            Ok(ack) => {
                let mut state = self.lock();
                state.form.reset();
                state.notice = Some(Notice::Success(F::SUCCESS_MESSAGE.to_string()));
                SubmitOutcome::Accepted(ack)
            }
            Err(e) => {
                log::warn!("{} submission failed: {}", F::KIND, e);
                self.lock().notice = Some(Notice::Error(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::actions::InventoryAction;
use super::client::{ApiResponse, InventoryClient};
use super::request::InventoryRequest;
use super::results::ResultsTable;
use super::state::{InventoryState, DELETED_MESSAGE, SERVER_ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::config::ApiConfig;
use crate::http_client::{ApiError, Result};
use crate::wasm_utils;

/// A finished request waiting to be applied to the form.
#[derive(Debug, Clone)]
pub struct Completion {
    pub action: InventoryAction,
    pub target: String,
    pub outcome: std::result::Result<ApiResponse, ApiError>,
}

/// How a single action ended, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Applied locally or the server accepted it.
    Succeeded,
    /// Client-side validation failed; nothing was sent.
    Rejected,
    /// The request failed or its response could not be used.
    Failed,
    /// Sent; the result arrives through `update_from_async`.
    Pending,
}

// The queue stays valid after a panic elsewhere; keep draining it so
// `in_flight` reaches zero.
fn lock_inbox(inbox: &Mutex<VecDeque<Completion>>) -> MutexGuard<'_, VecDeque<Completion>> {
    inbox.lock().unwrap_or_else(|poisoned| {
        log::warn!("Completion inbox poisoned; recovering");
        PoisonError::into_inner(poisoned)
    })
}

enum Step {
    Done(ActionOutcome),
    Send(InventoryRequest),
}

pub struct InventoryController {
    // Current state - single source of truth
    state: InventoryState,

    client: InventoryClient,

    // Completed requests, filled by spawned tasks and drained each frame
    inbox: Arc<Mutex<VecDeque<Completion>>>,

    in_flight: usize,
}

impl InventoryController {
    pub fn new(client: InventoryClient) -> Self {
        Self {
            state: InventoryState::default(),
            client,
            inbox: Arc::new(Mutex::new(VecDeque::new())),
            in_flight: 0,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(InventoryClient::new(config)?))
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Text fields bind directly to the form.
    pub fn form_mut(&mut self) -> &mut super::form::FormFields {
        &mut self.state.form
    }

    /// Requests sent but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn has_pending_requests(&self) -> bool {
        self.in_flight > 0
    }

    /// Button handler: validates synchronously and, if a request is needed,
    /// sends it in the background. Requests are never serialized against
    /// each other; whichever completes last wins the form.
    pub fn dispatch(&mut self, action: InventoryAction) -> ActionOutcome {
        log::debug!("Dispatching action: {}", action.description());

        let request = match self.begin(action) {
            Step::Done(outcome) => return outcome,
            Step::Send(request) => request,
        };

        self.in_flight += 1;
        let client = self.client.clone();
        let inbox = Arc::clone(&self.inbox);

        wasm_utils::spawn_async(async move {
            let outcome = client.send(&request).await;
            let completion = Completion {
                action,
                target: request.target(),
                outcome,
            };

            lock_inbox(&inbox).push_back(completion);
        });

        ActionOutcome::Pending
    }

    /// Call this each frame - applies every completion that has arrived, in
    /// arrival order. Returns how many were applied.
    pub fn update_from_async(&mut self) -> usize {
        let completions: Vec<Completion> = lock_inbox(&self.inbox).drain(..).collect();

        let applied = completions.len();
        for completion in completions {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(completion);
        }
        applied
    }

    /// Runs one action to completion on the caller's task.
    pub async fn run(&mut self, action: InventoryAction) -> ActionOutcome {
        log::debug!("Running action: {}", action.description());

        let request = match self.begin(action) {
            Step::Done(outcome) => return outcome,
            Step::Send(request) => request,
        };

        let outcome = self.client.send(&request).await;
        self.apply(Completion {
            action,
            target: request.target(),
            outcome,
        })
    }

    fn begin(&mut self, action: InventoryAction) -> Step {
        let snapshot = self.state.form.read();

        match self.client.endpoint().prepare(action, &snapshot) {
            Ok(Some(request)) => {
                log::info!("{}: {}", action.description(), request.target());
                Step::Send(request)
            }
            Ok(None) => {
                self.state.form.clear();
                log::info!("Form cleared");
                Step::Done(ActionOutcome::Succeeded)
            }
            Err(failure) => {
                log::info!("{} rejected by validation", action.label());
                self.state.show_message(failure.message);
                Step::Done(ActionOutcome::Rejected)
            }
        }
    }

    /// Applies one completion to the form, message area and results table.
    pub fn apply(&mut self, completion: Completion) -> ActionOutcome {
        let Completion { action, target, outcome } = completion;

        match (action, outcome) {
            (InventoryAction::Delete, Ok(_)) => {
                self.state.form.clear();
                self.state.show_message(DELETED_MESSAGE);
                log::info!("Deleted via {}", target);
                ActionOutcome::Succeeded
            }
            (InventoryAction::Delete, Err(error)) => {
                log::warn!("{} failed: {}", target, error);
                self.state.show_message(SERVER_ERROR_MESSAGE);
                ActionOutcome::Failed
            }
            (InventoryAction::Search, Ok(ApiResponse::Records(records))) => {
                log::info!("{} returned {} records", target, records.len());
                let table = ResultsTable::new(records);
                if let Some(first) = table.first() {
                    self.state.form.write(first);
                }
                self.state.show_results(table);
                self.state.show_message(SUCCESS_MESSAGE);
                ActionOutcome::Succeeded
            }
            (_, Ok(ApiResponse::Record(record))) => {
                log::info!("{} succeeded", target);
                self.state.form.write(&record);
                self.state.show_message(SUCCESS_MESSAGE);
                ActionOutcome::Succeeded
            }
            (_, Ok(other)) => {
                log::warn!("{} returned an unexpected body: {:?}", target, other);
                self.state.show_message(SERVER_ERROR_MESSAGE);
                ActionOutcome::Failed
            }
            (action, Err(error)) => {
                log::warn!("{} failed: {}", target, error);
                if action == InventoryAction::Retrieve {
                    self.state.form.clear();
                }
                let message = error.server_message().unwrap_or(SERVER_ERROR_MESSAGE).to_string();
                self.state.show_message(&message);
                ActionOutcome::Failed
            }
        }
    }
}

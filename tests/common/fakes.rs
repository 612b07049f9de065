//! In-process stand-ins for the remote client and the notification sink.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use rosterdesk::controller::Notifier;
use rosterdesk::roster::{
    Draft, Operation, RecordId, RosterApi, RosterError, StudentRecord,
};
use std::collections::VecDeque;
use std::sync::Arc;

/// A call made against [`FakeRoster`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(Draft),
    Update(RecordId, Draft),
    Delete(RecordId),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    list: VecDeque<Result<Vec<StudentRecord>, RosterError>>,
    create: VecDeque<Result<StudentRecord, RosterError>>,
    update: VecDeque<Result<StudentRecord, RosterError>>,
    delete: VecDeque<Result<(), RosterError>>,
}

/// Scripted [`RosterApi`]. Each operation pops its next queued result; an
/// empty queue answers with a transport error.
#[derive(Clone, Default)]
pub struct FakeRoster {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<StudentRecord>, RosterError>) {
        self.state.lock().list.push_back(result);
    }

    pub fn push_create(&self, result: Result<StudentRecord, RosterError>) {
        self.state.lock().create.push_back(result);
    }

    pub fn push_update(&self, result: Result<StudentRecord, RosterError>) {
        self.state.lock().update.push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), RosterError>) {
        self.state.lock().delete.push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }
}

fn unscripted(operation: Operation, target: Option<&RecordId>) -> RosterError {
    RosterError::Transport {
        operation,
        target: target.cloned(),
        message: "no scripted response".to_string(),
    }
}

#[async_trait]
impl RosterApi for FakeRoster {
    async fn list(&self) -> Result<Vec<StudentRecord>, RosterError> {
        let mut state = self.state.lock();
        state.calls.push(Call::List);
        state
            .list
            .pop_front()
            .unwrap_or_else(|| Err(unscripted(Operation::List, None)))
    }

    async fn create(&self, draft: &Draft) -> Result<StudentRecord, RosterError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Create(draft.clone()));
        state
            .create
            .pop_front()
            .unwrap_or_else(|| Err(unscripted(Operation::Create, None)))
    }

    async fn update(&self, id: &RecordId, draft: &Draft) -> Result<StudentRecord, RosterError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Update(id.clone(), draft.clone()));
        state
            .update
            .pop_front()
            .unwrap_or_else(|| Err(unscripted(Operation::Update, Some(id))))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), RosterError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Delete(id.clone()));
        state
            .delete
            .pop_front()
            .unwrap_or_else(|| Err(unscripted(Operation::Delete, Some(id))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// [`Notifier`] that remembers every message.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().clone()
    }

    pub fn last(&self) -> Option<(Level, String)> {
        self.messages.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().push((Level::Success, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.messages.lock().push((Level::Warning, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().push((Level::Error, message.to_string()));
    }
}

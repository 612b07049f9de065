//! Local cache of persisted records.
//!
//! The store only changes in response to confirmed server results. All
//! mutation goes through [`RosterReducer`], which wraps the mutation
//! points: `initialize`, `upsert`, `replace` and `remove`.

use crate::ui::mvi::{Intent, Reducer, UiState};

use super::record::{RecordId, StudentRecord};

/// Ordered sequence of persisted students.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
}

impl UiState for RosterStore {}

impl RosterStore {
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&StudentRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    fn initialize(&mut self, records: Vec<StudentRecord>) {
        self.records = records;
    }

    fn upsert(&mut self, record: StudentRecord) {
        match self.position(&record.id) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Overwrite the slot held by `target`, whatever id `record` carries.
    /// Any other entry already holding `record.id` is dropped so ids stay
    /// unique. Falls back to `upsert` when `target` is gone.
    fn replace(&mut self, target: &RecordId, record: StudentRecord) {
        let Some(index) = self.position(target) else {
            self.upsert(record);
            return;
        };
        let id = record.id.clone();
        self.records[index] = record;
        let mut position = 0;
        self.records.retain(|existing| {
            let keep = position == index || existing.id != id;
            position += 1;
            keep
        });
    }

    fn remove(&mut self, id: &RecordId) {
        if let Some(index) = self.position(id) {
            self.records.remove(index);
        }
    }
}

/// Confirmed server results applied to the store.
#[derive(Debug, Clone)]
pub enum RosterIntent {
    /// Replace the whole sequence after a successful `list()`.
    Initialize { records: Vec<StudentRecord> },
    /// Replace in place by id, or append.
    Upsert { record: StudentRecord },
    /// Put an updated record in the slot of the record it was saved from.
    Replace {
        target: RecordId,
        record: StudentRecord,
    },
    /// Drop the record with this id; no-op if absent.
    Remove { id: RecordId },
}

impl Intent for RosterIntent {}

pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterStore;
    type Intent = RosterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::Initialize { records } => state.initialize(records),
            RosterIntent::Upsert { record } => state.upsert(record),
            RosterIntent::Replace { target, record } => state.replace(&target, record),
            RosterIntent::Remove { id } => state.remove(&id),
        }
        state
    }
}

//! Error taxonomy for roster operations.
//!
//! Every failure carries the operation kind and, where one exists, the
//! target identifier so it can be logged and surfaced to the user.

use std::fmt;
use thiserror::Error;

use super::record::RecordId;

/// The four remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Toast text shown when this operation fails remotely.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to load students from the server.",
            Operation::Create => "Error adding student.",
            Operation::Update => "Error saving changes.",
            Operation::Delete => "Error deleting student.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while synchronizing the roster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Required draft fields are empty. Raised before any network call.
    #[error("Missing required fields: {}", missing.join(", "))]
    Validation {
        operation: Operation,
        target: Option<RecordId>,
        missing: Vec<&'static str>,
    },

    /// The request could not be sent or no response arrived.
    #[error("{operation} request failed: {message}")]
    Transport {
        operation: Operation,
        target: Option<RecordId>,
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{operation} rejected by server: {status} - {message}")]
    Server {
        operation: Operation,
        target: Option<RecordId>,
        status: u16,
        message: String,
    },

    /// The response body does not match the student schema.
    #[error("Malformed {operation} response: {reason}")]
    Malformed {
        operation: Operation,
        target: Option<RecordId>,
        reason: String,
    },
}

impl RosterError {
    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::Validation { .. } => "validation_error",
            RosterError::Transport { .. } => "transport_error",
            RosterError::Server { .. } => "server_error",
            RosterError::Malformed { .. } => "malformed_response",
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            RosterError::Validation { operation, .. }
            | RosterError::Transport { operation, .. }
            | RosterError::Server { operation, .. }
            | RosterError::Malformed { operation, .. } => *operation,
        }
    }

    pub fn target(&self) -> Option<&RecordId> {
        match self {
            RosterError::Validation { target, .. }
            | RosterError::Transport { target, .. }
            | RosterError::Server { target, .. }
            | RosterError::Malformed { target, .. } => target.as_ref(),
        }
    }

    /// Validation failures are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, RosterError::Validation { .. })
    }

    /// Human-readable message for the notification sink.
    pub fn user_message(&self) -> &'static str {
        if self.is_warning() {
            return "Please fill in all fields.";
        }
        self.operation().failure_message()
    }
}

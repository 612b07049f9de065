//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fakes;
pub mod mock_server;

use rosterdesk::roster::{RecordId, StudentRecord};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn student(id: i64, name: &str, course: &str, registration: &str) -> StudentRecord {
    StudentRecord {
        id: RecordId::Int(id),
        name: name.to_string(),
        course: course.to_string(),
        registration_number: registration.to_string(),
    }
}

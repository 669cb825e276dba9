#![allow(dead_code)]

use herald::{BoxError, CancellationToken, Signal, SignalHandler};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Signal Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TestNote {
    pub text: String,
}

impl Signal for TestNote {}

#[derive(Clone, Debug)]
pub struct OtherNote;

impl Signal for OtherNote {}

// ============================================================================
// Test Handlers
// ============================================================================

// Distinct const IDs are distinct handler types, so registration
// deduplication never collapses two steps of the same test.

pub struct StepHandler<const ID: usize> {
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl<const ID: usize> SignalHandler<TestNote> for StepHandler<ID> {
    async fn handle(&self, _signal: &TestNote, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(ID);
        Ok(())
    }
}

pub struct FailStep<const ID: usize> {
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl<const ID: usize> SignalHandler<TestNote> for FailStep<ID> {
    async fn handle(&self, _signal: &TestNote, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(ID);
        Err(format!("handler {ID} failed").into())
    }
}

pub fn note(text: &str) -> TestNote {
    TestNote {
        text: text.to_string(),
    }
}

//! Single-flight guard — at most one in-flight invocation per logical operation.
//!
//! `begin` hands out a `FlightToken`; the operation stays marked as running
//! until the token is dropped, on success and failure alike.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::AppError;

/// Logical operations that must not run twice at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    GenerateResume,
    LocateUser,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Login => "Login",
            Operation::Register => "Registration",
            Operation::GenerateResume => "Resume generation",
            Operation::LocateUser => "Location lookup",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    running: Arc<Mutex<HashSet<Operation>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `op` as running, or fails with `AppError::Busy` if it already is.
    pub fn begin(&self, op: Operation) -> Result<FlightToken, AppError> {
        let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        if !running.insert(op) {
            return Err(AppError::Busy(op));
        }
        Ok(FlightToken {
            op,
            running: Arc::clone(&self.running),
        })
    }

    pub fn is_running(&self, op: Operation) -> bool {
        self.running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&op)
    }
}

/// Proof that an operation is in flight. Dropping it releases the operation.
#[derive(Debug)]
pub struct FlightToken {
    op: Operation,
    running: Arc<Mutex<HashSet<Operation>>>,
}

impl FlightToken {
    pub fn operation(&self) -> Operation {
        self.op
    }
}

impl Drop for FlightToken {
    fn drop(&mut self) {
        self.running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.op);
    }
}

//! Scripted `AnalysisClient` for exercising the analysis flow offline.

use serde_json::Value;
use std::cell::{Cell, RefCell};
use tirescan_runtime::{AnalysisClient, AnalyzeRequest, ApiResponse, TransportError};

/// Replies with a fixed response (or transport failure) and records every request.
pub struct ScriptedClient {
    reply: Result<ApiResponse, TransportError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<AnalyzeRequest>>,
}

impl ScriptedClient {
    pub fn json(body: Value) -> Self {
        Self::raw(200, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Ok(ApiResponse {
            status,
            body: body.into(),
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(TransportError::new(message)))
    }

    pub fn timing_out(secs: u64) -> Self {
        Self::with_reply(Err(TransportError {
            message: format!("request timed out after {}s (operation timed out)", secs),
            timed_out: true,
        }))
    }

    fn with_reply(reply: Result<ApiResponse, TransportError>) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_request(&self) -> Option<AnalyzeRequest> {
        self.last_request.borrow().clone()
    }
}

impl AnalysisClient for ScriptedClient {
    fn analyze(&self, request: &AnalyzeRequest) -> Result<ApiResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.reply.clone()
    }
}

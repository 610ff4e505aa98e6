//! In-process doubles for every collaborator trait.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::collaborators::{
    CallInitiator, CallRequest, DeliveryGateway, DeliveryReceipt, GatewayError, ProfileGateway,
    RemoteProfile,
};
use crate::errors::AppError;
use crate::interview::question::QuestionGenerator;
use crate::state::AppState;
use crate::store::InMemorySessionStore;

pub fn profile(job_description: &str, job_resume: &str) -> RemoteProfile {
    RemoteProfile {
        job_description: job_description.to_string(),
        job_resume: job_resume.to_string(),
        phone_number: "+15550100".to_string(),
    }
}

/// Serves one fixed profile, or answers every lookup with `status`.
pub enum FakeProfiles {
    Serve(RemoteProfile),
    Fail { status: u16 },
}

#[async_trait]
impl ProfileGateway for FakeProfiles {
    async fn fetch_profile(&self, _session_id: &str) -> Result<RemoteProfile, GatewayError> {
        match self {
            FakeProfiles::Serve(p) => Ok(p.clone()),
            FakeProfiles::Fail { status } => Err(GatewayError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

#[derive(Default)]
pub struct FakeGenerator {
    pub question: String,
    pub calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn answering(question: &str) -> Self {
        Self {
            question: question.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionGenerator for FakeGenerator {
    async fn first_question(
        &self,
        _job_description: &str,
        _job_resume: &str,
    ) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.question.clone())
    }
}

/// Answers every delivery with a fixed receipt and records what was sent.
pub struct FakeDelivery {
    pub receipt: DeliveryReceipt,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl FakeDelivery {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            receipt: DeliveryReceipt {
                status,
                body: body.to_string(),
            },
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryGateway for FakeDelivery {
    async fn deliver(
        &self,
        session_id: &str,
        question: &str,
    ) -> Result<DeliveryReceipt, GatewayError> {
        self.sent
            .lock()
            .unwrap()
            .push((session_id.to_string(), question.to_string()));
        Ok(self.receipt.clone())
    }
}

pub enum FakeCalls {
    Mint(String),
    MissingId(&'static str),
    Fail { status: u16, body: String },
}

#[async_trait]
impl CallInitiator for FakeCalls {
    async fn start_call(&self, _request: &CallRequest) -> Result<String, GatewayError> {
        match self {
            FakeCalls::Mint(id) => Ok(id.clone()),
            FakeCalls::MissingId(field) => Err(GatewayError::MissingSessionId(field.to_string())),
            FakeCalls::Fail { status, body } => Err(GatewayError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// State wired entirely with doubles; the store is returned for direct inspection.
pub fn fake_state(
    profiles: FakeProfiles,
    generator: FakeGenerator,
    delivery: FakeDelivery,
    calls: FakeCalls,
) -> (AppState, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let state = AppState {
        store: store.clone(),
        profiles: Arc::new(profiles),
        questions: Arc::new(generator),
        delivery: Arc::new(delivery),
        calls: Arc::new(calls),
    };
    (state, store)
}

//! Test doubles for the session holder's collaborators and a log capture.
//!
//! Each double is a cheap `Rc` handle: hand one clone to the holder and keep
//! another to inspect what happened.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Once;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::error::AuthError;
use crate::net::api::ApiClient;
use crate::net::types::BearerToken;
use crate::util::cookie::{CookieOptions, CookieStore};
use crate::util::navigate::Navigator;

// =============================================================
// Log capture
// =============================================================

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Start capturing log records for the current test thread.
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn logs_at(level: log::Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

pub fn error_logs() -> Vec<String> {
    logs_at(log::Level::Error)
}

// =============================================================
// API doubles
// =============================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub path: String,
    pub body: Value,
    pub bearer: Option<String>,
}

/// Answers queued responses in order and records every call.
#[derive(Clone, Default)]
pub struct RecordingApi {
    responses: Rc<RefCell<VecDeque<Result<Value, AuthError>>>>,
    calls: Rc<RefCell<Vec<ApiCall>>>,
}

impl RecordingApi {
    pub fn respond(&self, response: Result<Value, AuthError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ApiClient for RecordingApi {
    async fn post(&self, path: &str, body: Value, bearer: Option<&BearerToken>) -> Result<Value, AuthError> {
        self.calls.borrow_mut().push(ApiCall {
            path: path.to_owned(),
            body,
            bearer: bearer.map(|b| b.as_str().to_owned()),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Request("no response queued".to_owned())))
    }
}

/// Each call waits on the next queued oneshot, so tests decide which
/// overlapping request resolves first.
#[derive(Clone, Default)]
pub struct GatedApi {
    gates: Rc<RefCell<VecDeque<oneshot::Receiver<Result<Value, AuthError>>>>>,
}

impl GatedApi {
    pub fn gate(&self) -> oneshot::Sender<Result<Value, AuthError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl ApiClient for GatedApi {
    async fn post(&self, _path: &str, _body: Value, _bearer: Option<&BearerToken>) -> Result<Value, AuthError> {
        let Some(rx) = self.gates.borrow_mut().pop_front() else {
            return Err(AuthError::Request("no gate queued".to_owned()));
        };
        rx.await
            .unwrap_or_else(|_| Err(AuthError::Request("gate dropped".to_owned())))
    }
}

// =============================================================
// Cookie jar
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CookieOp {
    Set(String),
    Destroy(String),
}

#[derive(Clone, Default)]
pub struct CookieJar {
    values: Rc<RefCell<HashMap<String, (String, CookieOptions)>>>,
    ops: Rc<RefCell<Vec<CookieOp>>>,
    fail_set: Rc<Cell<bool>>,
    fail_destroy: Rc<Cell<bool>>,
}

impl CookieJar {
    pub fn fail_set(&self) {
        self.fail_set.set(true);
    }

    pub fn fail_destroy(&self) {
        self.fail_destroy.set(true);
    }

    pub fn options(&self, name: &str) -> Option<CookieOptions> {
        self.values.borrow().get(name).map(|(_, opts)| opts.clone())
    }

    pub fn ops(&self) -> Vec<CookieOp> {
        self.ops.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn seed(&self, name: &str, value: &str) {
        let opts = CookieOptions { max_age_secs: 60, path: "/".to_owned() };
        self.values.borrow_mut().insert(name.to_owned(), (value.to_owned(), opts));
    }
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).map(|(v, _)| v.clone())
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), AuthError> {
        self.ops.borrow_mut().push(CookieOp::Set(name.to_owned()));
        if self.fail_set.get() {
            return Err(AuthError::Cookie("set rejected".to_owned()));
        }
        self.values
            .borrow_mut()
            .insert(name.to_owned(), (value.to_owned(), options.clone()));
        Ok(())
    }

    fn destroy(&self, name: &str, _path: &str) -> Result<(), AuthError> {
        self.ops.borrow_mut().push(CookieOp::Destroy(name.to_owned()));
        if self.fail_destroy.get() {
            return Err(AuthError::Cookie("destroy rejected".to_owned()));
        }
        self.values.borrow_mut().remove(name);
        Ok(())
    }
}

// =============================================================
// Navigator
// =============================================================

#[derive(Clone, Default)]
pub struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn pushed(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

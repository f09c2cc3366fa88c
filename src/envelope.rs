//! The two envelope records and their builders.
//!
//! Every response a kuvert-equipped handler sends is one of two fixed shapes:
//!
//! ```text
//! Success: { "this": "succeeded", "by": <verb>, "the": <resource>, "with": <payload> }
//! Failure: { "this": "failed",    "with": <code>, "because": <reason> }
//! ```
//!
//! The field names are part of the wire contract — existing consumers match
//! on them verbatim — so they are pinned here with serde renames and never
//! derived from Rust identifiers. An envelope carries exactly these fields
//! and no others.
//!
//! Both builders are total: every input is echoed as-is, nothing is
//! validated, nothing can fail.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::verb::Verb;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// The `this` field: whether the operation succeeded or failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Succeeded,
    Failed,
}

// ── Action ────────────────────────────────────────────────────────────────────

/// The `by` field of a success envelope.
///
/// Built from a [`Verb`] in the common case, which maps through the closed
/// display table. A plain string passes through unchanged: the convention is
/// permissive about labels outside the canonical four and never rejects one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Action(Cow<'static, str>);

impl Action {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Verb> for Action {
    fn from(verb: Verb) -> Self {
        Self(Cow::Borrowed(verb.as_str()))
    }
}

impl From<&str> for Action {
    fn from(raw: &str) -> Self {
        Self(Cow::Owned(raw.to_owned()))
    }
}

impl From<String> for Action {
    fn from(raw: String) -> Self {
        Self(Cow::Owned(raw))
    }
}

// ── Code ──────────────────────────────────────────────────────────────────────

/// The `with` field of a failure envelope.
///
/// An application may report failures with its own codes (numeric or string,
/// e.g. `"E_VALIDATION"`) or lean on transport-level numerics. Either kind
/// serializes bare, with no tagging.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Code {
    Num(u16),
    Text(String),
}

impl From<u16> for Code {
    fn from(code: u16) -> Self {
        Self::Num(code)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self::Text(code.to_owned())
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

// ── Success ───────────────────────────────────────────────────────────────────

/// A success envelope.
///
/// # Example
///
/// ```rust
/// use kuvert::{Success, Verb};
/// use serde_json::json;
///
/// let done = Success::new(Verb::Get, "user", json!({"id": 1}));
/// assert_eq!(
///     serde_json::to_value(&done).unwrap(),
///     json!({"this": "succeeded", "by": "getting", "the": "user", "with": {"id": 1}}),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Success {
    #[serde(rename = "this")]
    outcome: Outcome,
    #[serde(rename = "by")]
    verb: Action,
    #[serde(rename = "the")]
    resource: String,
    #[serde(rename = "with")]
    payload: Value,
}

impl Success {
    /// Builds a success envelope.
    ///
    /// Pass [`Value::Null`] when the operation has no payload to report.
    pub fn new(
        verb: impl Into<Action>,
        resource: impl Into<String>,
        payload: impl Into<Value>,
    ) -> Self {
        Self {
            outcome: Outcome::Succeeded,
            verb: verb.into(),
            resource: resource.into(),
            payload: payload.into(),
        }
    }

    pub fn verb(&self) -> &str {
        self.verb.as_str()
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

// ── Failure ───────────────────────────────────────────────────────────────────

/// A failure envelope.
///
/// The `with` code resolves in a fixed fallback order: application code if
/// one was set, otherwise the transport status, otherwise `500`.
///
/// # Example
///
/// ```rust
/// use kuvert::Failure;
/// use serde_json::json;
///
/// let failed = Failure::new("missing field").status(400).code("E_VALIDATION");
/// assert_eq!(
///     serde_json::to_value(&failed).unwrap(),
///     json!({"this": "failed", "with": "E_VALIDATION", "because": "missing field"}),
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Failure {
    #[serde(rename = "this")]
    outcome: Outcome,
    #[serde(rename = "with")]
    code: Code,
    #[serde(rename = "because")]
    reason: String,
    // Tracks whether an application code was set, so the fallback order holds
    // no matter which builder method ran first. Never serialized.
    #[serde(skip)]
    app_coded: bool,
}

impl Failure {
    /// Builds a failure envelope. The code defaults to `500` until
    /// [`status`](Failure::status) or [`code`](Failure::code) replaces it.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failed,
            code: Code::Num(500),
            reason: reason.into(),
            app_coded: false,
        }
    }

    /// The canned not-found failure: `404`, `"we couldn't find this"`.
    pub fn not_found() -> Self {
        Self::new("we couldn't find this").status(404).code(404u16)
    }

    /// Sets the transport-level status code. A no-op once an application code
    /// is present — application codes always win.
    pub fn status(mut self, status: u16) -> Self {
        if !self.app_coded {
            self.code = Code::Num(status);
        }
        self
    }

    /// Sets the application-defined code, which takes precedence over any
    /// transport status.
    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.code = code.into();
        self.app_coded = true;
        self
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

// ── Envelope ──────────────────────────────────────────────────────────────────

/// Either envelope, as handed to the send capability.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success(Success),
    Failure(Failure),
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl From<Success> for Envelope {
    fn from(success: Success) -> Self {
        Self::Success(success)
    }
}

impl From<Failure> for Envelope {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

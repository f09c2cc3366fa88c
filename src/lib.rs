//! # kuvert
//!
//! Uniform success/failure response envelopes for HTTP services.
//! One shape for success, one for failure. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your framework handles transport, routing, and serialization. kuvert does
//! not — by design. The framework does framework things; kuvert owns the one
//! part that otherwise drifts between handlers: the shape of what goes back
//! to the caller.
//!
//! What the framework already owns — kuvert intentionally ignores:
//!
//! - **Sockets and TLS** — the transport under the response
//! - **Routing and body parsing** — how a request reaches a handler
//! - **Wire framing** — turning the finished envelope into bytes
//!
//! What's left for kuvert:
//!
//! - **Two fixed wire shapes** — field names pinned verbatim, for every consumer
//! - **Three send helpers** — [`send_success`](Reply::send_success),
//!   [`send_failure`](Reply::send_failure), [`send_not_found`](Reply::send_not_found)
//! - **One hook** — [`middleware::envelope`] wraps the response once per
//!   request, then gets out of the way
//!
//! ## The wire shapes
//!
//! ```text
//! { "this": "succeeded", "by": "getting", "the": "user", "with": { "id": 1 } }
//! { "this": "failed", "with": "E_VALIDATION", "because": "missing field" }
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use kuvert::{Envelope, Transmit, Verb, middleware};
//! use serde_json::json;
//!
//! // The send capability your framework already has. kuvert only asks that
//! // it can take one envelope.
//! struct Out(Vec<Envelope>);
//!
//! impl Transmit for Out {
//!     type Error = std::convert::Infallible;
//!     fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error> {
//!         self.0.push(envelope);
//!         Ok(())
//!     }
//! }
//!
//! // Per request, the framework runs the hook; the handler gets a `Reply`.
//! let hook = middleware::envelope();
//! hook("GET /users/1", Out(Vec::new()), |_req, mut reply| {
//!     reply.send_success(Verb::Get, "user", json!({"id": 1}))
//! })
//! .unwrap();
//! ```
//!
//! Handlers that hit a business failure pick the other helpers:
//!
//! ```rust,ignore
//! reply.send_failure(Failure::new("missing field").status(400).code("E_VALIDATION"))?;
//! reply.send_not_found()?;
//! ```

mod envelope;
mod reply;
mod verb;

pub mod middleware;

pub use envelope::{Action, Code, Envelope, Failure, Outcome, Success};
pub use reply::{Reply, Transmit};
pub use verb::Verb;

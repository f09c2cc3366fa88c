//! The send seam and the response decorator.
//!
//! The enclosing framework owns serialization and transport; kuvert only ever
//! talks to it through [`Transmit`]. [`Reply`] wraps whatever implements that
//! trait and adds the three send helpers handlers actually call.

use serde_json::Value;
use tracing::trace;

use crate::envelope::{Action, Envelope, Failure, Success};

// ── Transmit ──────────────────────────────────────────────────────────────────

/// The underlying send capability, supplied by the enclosing framework.
///
/// kuvert places no constraints on what `send` does with the envelope.
/// Serialization and wire framing stay on the framework's side of the line,
/// and so do errors: a failed `send` surfaces to the caller as the
/// framework's own error type, never caught, wrapped, or retried here.
pub trait Transmit {
    type Error;

    /// Transmits one finished envelope.
    fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error>;
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    type Error = T::Error;

    fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error> {
        (**self).send(envelope)
    }
}

// ── Reply ─────────────────────────────────────────────────────────────────────

/// An outgoing response equipped with the envelope helpers.
///
/// [`middleware::envelope`](crate::middleware::envelope) builds one of these
/// per request and hands it to your handler in place of the raw send
/// capability. Each helper builds its envelope and forwards it with exactly
/// one `send` call.
///
/// ```rust
/// use kuvert::{Envelope, Reply, Transmit, Verb};
/// use serde_json::json;
///
/// struct Collect(Vec<Envelope>);
///
/// impl Transmit for Collect {
///     type Error = std::convert::Infallible;
///     fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error> {
///         self.0.push(envelope);
///         Ok(())
///     }
/// }
///
/// let mut reply = Reply::new(Collect(Vec::new()));
/// reply.send_success(Verb::Get, "user", json!({"id": 1})).unwrap();
/// assert!(reply.into_inner().0[0].is_success());
/// ```
pub struct Reply<T> {
    transport: T,
}

impl<T> Reply<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying send capability.
    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl<T: Transmit> Reply<T> {
    /// Builds and sends a success envelope.
    pub fn send_success(
        &mut self,
        verb: impl Into<Action>,
        resource: impl Into<String>,
        payload: impl Into<Value>,
    ) -> Result<(), T::Error> {
        let envelope = Success::new(verb, resource, payload);
        trace!(resource = %envelope.resource(), "sending success envelope");
        self.transport.send(envelope.into())
    }

    /// Sends a finished failure envelope.
    pub fn send_failure(&mut self, failure: Failure) -> Result<(), T::Error> {
        trace!(reason = %failure.reason(), "sending failure envelope");
        self.transport.send(failure.into())
    }

    /// Shorthand for [`Failure::not_found`]: a `404` with the canned
    /// `"we couldn't find this"` reason.
    pub fn send_not_found(&mut self) -> Result<(), T::Error> {
        self.send_failure(Failure::not_found())
    }
}

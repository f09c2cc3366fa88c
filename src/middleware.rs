//! Middleware layer.
//!
//! Middleware runs once per inbound request, before the application's own
//! handler logic. kuvert ships exactly one: [`envelope`], which equips the
//! outgoing response with the three send helpers and immediately yields to
//! the rest of the chain.

use crate::reply::{Reply, Transmit};

/// Builds the envelope hook.
///
/// The hook is invocable as `(request, transport, next)` and does two things,
/// synchronously and unconditionally:
///
/// 1. wraps `transport` in a [`Reply`];
/// 2. invokes `next` exactly once, with the untouched request and the
///    wrapped response.
///
/// It never inspects the request, never intercepts an error, and has no
/// failure modes of its own. Whatever `next` returns is the hook's return
/// value, so a handler's `Result` travels back to the framework unchanged.
///
/// # Example
///
/// ```rust
/// use kuvert::{Envelope, Transmit, Verb, middleware};
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
/// let hook = middleware::envelope();
/// let sent = hook("GET /users/1", Collect(Vec::new()), |_req, mut reply| {
///     reply.send_success(Verb::Get, "user", json!({"id": 1})).unwrap();
///     reply.into_inner().0
/// });
/// assert!(sent[0].is_success());
/// ```
pub fn envelope<Req, T, Next, Out>() -> impl FnOnce(Req, T, Next) -> Out
where
    T: Transmit,
    Next: FnOnce(Req, Reply<T>) -> Out,
{
    |request, transport, next| next(request, Reply::new(transport))
}

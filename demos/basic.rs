//! Minimal kuvert example — one handler per send helper.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example basic
//!
//! Prints the exact value a framework would serialize onto the wire for each
//! of the three helpers:
//!   {"this":"succeeded","by":"getting","the":"user","with":{"id":"42","name":"alice"}}
//!   {"this":"failed","with":"E_VALIDATION","because":"missing field"}
//!   {"this":"failed","with":404,"because":"we couldn't find this"}

use kuvert::{Envelope, Failure, Reply, Transmit, Verb, middleware};
use serde_json::json;

/// Stand-in for a framework's send capability: serializes each envelope and
/// writes it to stdout.
struct Stdout;

impl Transmit for Stdout {
    type Error = serde_json::Error;

    fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error> {
        println!("{}", serde_json::to_string(&envelope)?);
        Ok(())
    }
}

/// Stand-in for a framework's dispatch chain: runs the hook, which wraps the
/// response and yields to the handler.
fn dispatch<H>(request: &'static str, handler: H) -> Result<(), serde_json::Error>
where
    H: FnOnce(&'static str, Reply<Stdout>) -> Result<(), serde_json::Error>,
{
    let hook = middleware::envelope();
    hook(request, Stdout, handler)
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt::init();

    dispatch("GET /users/42", get_user)?;
    dispatch("POST /users", create_user)?;
    dispatch("DELETE /users/404", delete_user)?;

    Ok(())
}

// GET /users/42 — the happy path: verb, resource, payload.
fn get_user(_req: &str, mut reply: Reply<Stdout>) -> Result<(), serde_json::Error> {
    reply.send_success(Verb::Get, "user", json!({"id": "42", "name": "alice"}))
}

// POST /users — body failed validation: transport status plus an
// application code, and the application code wins on the wire.
fn create_user(_req: &str, mut reply: Reply<Stdout>) -> Result<(), serde_json::Error> {
    reply.send_failure(Failure::new("missing field").status(400).code("E_VALIDATION"))
}

// DELETE /users/404 — nothing there. The canned 404.
fn delete_user(_req: &str, mut reply: Reply<Stdout>) -> Result<(), serde_json::Error> {
    reply.send_not_found()
}

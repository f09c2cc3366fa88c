//! End-to-end contract tests: hook installation, continuation, and the three
//! send helpers against a recording transport.

use kuvert::{Envelope, Failure, Transmit, Verb, middleware};
use serde_json::{Value, json};

/// Records every envelope the helpers hand to the framework.
#[derive(Default)]
struct Recorder {
    sent: Vec<Envelope>,
}

impl Transmit for Recorder {
    type Error = std::convert::Infallible;

    fn send(&mut self, envelope: Envelope) -> Result<(), Self::Error> {
        self.sent.push(envelope);
        Ok(())
    }
}

fn wire(envelope: &Envelope) -> Value {
    serde_json::to_value(envelope).expect("envelope serializes")
}

#[test]
fn the_hook_invokes_the_continuation_exactly_once() {
    let mut calls = 0;
    let hook = middleware::envelope();
    hook((), Recorder::default(), |_req, _reply| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn the_hook_passes_the_request_through_untouched() {
    let hook = middleware::envelope();
    let seen = hook("GET /users/1", Recorder::default(), |req, _reply| req);
    assert_eq!(seen, "GET /users/1");
}

#[test]
fn send_success_forwards_one_success_envelope() {
    let hook = middleware::envelope();
    let recorder = hook((), Recorder::default(), |_req, mut reply| {
        reply.send_success(Verb::Get, "user", json!({"id": 1})).unwrap();
        reply.into_inner()
    });

    assert_eq!(recorder.sent.len(), 1);
    assert_eq!(
        wire(&recorder.sent[0]),
        json!({"this": "succeeded", "by": "getting", "the": "user", "with": {"id": 1}}),
    );
}

#[test]
fn send_failure_forwards_one_failure_envelope() {
    let hook = middleware::envelope();
    let recorder = hook((), Recorder::default(), |_req, mut reply| {
        reply
            .send_failure(Failure::new("missing field").status(400).code("E_VALIDATION"))
            .unwrap();
        reply.into_inner()
    });

    assert_eq!(recorder.sent.len(), 1);
    assert_eq!(
        wire(&recorder.sent[0]),
        json!({"this": "failed", "with": "E_VALIDATION", "because": "missing field"}),
    );
}

#[test]
fn send_not_found_matches_the_spelled_out_failure() {
    let hook = middleware::envelope();
    let canned = hook((), Recorder::default(), |_req, mut reply| {
        reply.send_not_found().unwrap();
        reply.into_inner()
    });

    let hook = middleware::envelope();
    let spelled_out = hook((), Recorder::default(), |_req, mut reply| {
        reply
            .send_failure(Failure::new("we couldn't find this").status(404).code(404u16))
            .unwrap();
        reply.into_inner()
    });

    assert_eq!(canned.sent, spelled_out.sent);
    assert_eq!(
        wire(&canned.sent[0]),
        json!({"this": "failed", "with": 404, "because": "we couldn't find this"}),
    );
}

#[test]
fn each_helper_sends_exactly_once() {
    let hook = middleware::envelope();
    let recorder = hook((), Recorder::default(), |_req, mut reply| {
        reply.send_success(Verb::Create, "user", json!({"id": 7})).unwrap();
        reply.send_failure(Failure::new("oops")).unwrap();
        reply.send_not_found().unwrap();
        reply.into_inner()
    });

    assert_eq!(recorder.sent.len(), 3);
    assert!(recorder.sent[0].is_success());
    assert!(recorder.sent[1].is_failure());
    assert!(recorder.sent[2].is_failure());
}

#[test]
fn a_borrowed_transport_keeps_ownership_with_the_framework() {
    let mut recorder = Recorder::default();

    let hook = middleware::envelope();
    hook((), &mut recorder, |_req, mut reply| {
        reply.send_success(Verb::Delete, "session", Value::Null).unwrap();
    });

    assert_eq!(recorder.sent.len(), 1);
    assert_eq!(wire(&recorder.sent[0])["by"], json!("deleting"));
}

#[test]
fn transport_errors_surface_unwrapped() {
    struct Refuse;

    impl Transmit for Refuse {
        type Error = &'static str;

        fn send(&mut self, _envelope: Envelope) -> Result<(), Self::Error> {
            Err("socket closed")
        }
    }

    let hook = middleware::envelope();
    let result = hook((), Refuse, |_req, mut reply| reply.send_not_found());
    assert_eq!(result, Err("socket closed"));
}

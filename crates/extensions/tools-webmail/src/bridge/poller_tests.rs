use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Deserialize;

use crate::testing::FakeRunner;

const NOT_READY: &str = r#"{"ready":false,"message":"No message rows detected"}"#;

fn settings() -> PollSettings {
    PollSettings::new(Duration::from_secs(10), Duration::from_millis(500))
}

#[derive(Debug, Deserialize, PartialEq)]
struct Count {
    rows: u32,
}

#[test]
fn test_observe_empty_is_pending() {
    assert!(matches!(observe::<()>("").unwrap(), PollState::Pending(None)));
    assert!(matches!(observe::<()>("  \n").unwrap(), PollState::Pending(None)));
}

#[test]
fn test_observe_garbage_is_pending() {
    assert!(matches!(observe::<()>("undefined").unwrap(), PollState::Pending(None)));
    assert!(matches!(observe::<()>("{\"ready\":").unwrap(), PollState::Pending(None)));
}

#[test]
fn test_observe_keeps_message() {
    match observe::<()>(NOT_READY).unwrap() {
        PollState::Pending(Some(msg)) => assert_eq!(msg, "No message rows detected"),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn test_observe_ready_without_data() {
    assert!(matches!(observe::<()>(r#"{"ready":true}"#).unwrap(), PollState::Ready(())));
}

#[test]
fn test_observe_ready_with_data() {
    match observe::<Count>(r#"{"ready":true,"data":{"rows":4}}"#).unwrap() {
        PollState::Ready(count) => assert_eq!(count, Count { rows: 4 }),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn test_observe_ready_with_wrong_shape() {
    let err = observe::<Count>(r#"{"ready":true,"data":{"rows":"many"}}"#).unwrap_err();
    assert!(matches!(err, BridgeError::MalformedResult(_)));
}

#[tokio::test(start_paused = true)]
async fn test_never_ready_times_out_after_expected_attempts() {
    let runner = FakeRunner::constant(NOT_READY);
    let bridge = ChromeBridge::new(runner.clone());

    let err = bridge
        .wait_for::<()>("probe()", settings(), "Webmail inbox not ready")
        .await
        .unwrap_err();

    match err {
        BridgeError::Timeout(msg) => assert_eq!(msg, "No message rows detected"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(runner.calls(), 20);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_without_message_uses_fallback() {
    let runner = FakeRunner::constant("");
    let bridge = ChromeBridge::new(runner.clone());

    let err = bridge
        .wait_for::<()>("probe()", PollSettings::new(Duration::from_secs(1), Duration::from_millis(250)), "fallback")
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Timeout(msg) if msg == "fallback"));
    assert_eq!(runner.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_ready_on_third_attempt() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let runner = FakeRunner::new(move |_| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        Ok(match n {
            0 => String::new(),
            1 => NOT_READY.to_string(),
            _ => r#"{"ready":true,"data":{"rows":7}}"#.to_string(),
        })
    });
    let bridge = ChromeBridge::new(runner.clone());

    let start = Instant::now();
    let count: Count = bridge.wait_for("probe()", settings(), "x").await.unwrap();

    assert_eq!(count, Count { rows: 7 });
    assert_eq!(runner.calls(), 3);
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_malformed_ready_data_aborts_immediately() {
    let runner = FakeRunner::constant(r#"{"ready":true,"data":[1,2]}"#);
    let bridge = ChromeBridge::new(runner.clone());

    let err = bridge.wait_for::<Count>("probe()", settings(), "x").await.unwrap_err();
    assert!(matches!(err, BridgeError::MalformedResult(_)));
    assert_eq!(runner.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_bridge_error_aborts_immediately() {
    let runner = FakeRunner::new(|_| Err(BridgeError::ExecutionFailed("osascript crashed".into())));
    let bridge = ChromeBridge::new(runner.clone());

    let err = bridge.wait_for::<()>("probe()", settings(), "x").await.unwrap_err();
    assert!(matches!(err, BridgeError::ExecutionFailed(_)));
    assert_eq!(runner.calls(), 1);
}

#[test]
fn test_observe_ignores_data_when_not_ready() {
    match observe::<Count>(r#"{"ready":false,"data":{"rows":1},"message":"m"}"#).unwrap() {
        PollState::Pending(Some(msg)) => assert_eq!(msg, "m"),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_pending_data_is_never_returned() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let runner = FakeRunner::new(move |_| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        Ok(if n < 2 {
            r#"{"ready":false,"data":{"rows":1},"message":"m"}"#.to_string()
        } else {
            r#"{"ready":true,"data":{"rows":9}}"#.to_string()
        })
    });
    let bridge = ChromeBridge::new(runner.clone());

    let count: Count = bridge.wait_for("probe()", settings(), "x").await.unwrap();

    assert_eq!(count, Count { rows: 9 });
    assert_eq!(runner.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_pending_with_data_still_times_out() {
    let runner = FakeRunner::constant(r#"{"ready":false,"data":{"rows":1},"message":"m"}"#);
    let bridge = ChromeBridge::new(runner.clone());

    let err = bridge
        .wait_for::<Count>("probe()", PollSettings::new(Duration::from_secs(1), Duration::from_millis(500)), "fallback")
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Timeout(msg) if msg == "m"));
    assert_eq!(runner.calls(), 2);
}

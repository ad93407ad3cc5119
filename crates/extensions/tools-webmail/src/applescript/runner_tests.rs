use super::*;

#[test]
fn test_success_output_is_trimmed() {
    let out = interpret_output(true, b"  [{\"a\":1}]\n", b"").unwrap();
    assert_eq!(out, "[{\"a\":1}]");
}

#[test]
fn test_failure_carries_stderr() {
    let err = interpret_output(false, b"", b"execution error: boom (-2700)\n").unwrap_err();
    match err {
        BridgeError::ExecutionFailed(msg) => assert_eq!(msg, "execution error: boom (-2700)"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_failure_falls_back_to_stdout() {
    let err = interpret_output(false, b"something odd", b"").unwrap_err();
    assert!(matches!(err, BridgeError::ExecutionFailed(msg) if msg == "something odd"));
}

#[test]
fn test_silent_failure() {
    let err = interpret_output(false, b"", b"  ").unwrap_err();
    assert!(matches!(err, BridgeError::ExecutionFailed(msg) if msg == "unknown error"));
}

#[test]
fn test_permission_denial_is_classified() {
    let stderr = b"execution error: Google Chrome got an error: Executing JavaScript through \
AppleScript is turned off. To turn it on, from the menu bar, go to View > Developer > \
Allow JavaScript from Apple Events. (12)";
    let err = interpret_output(false, b"", stderr).unwrap_err();
    match err {
        BridgeError::PermissionDenied(msg) => {
            assert!(msg.contains(PERMISSION_DENIAL_MARKER));
            assert!(msg.contains(PERMISSION_HINT));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_configured_binary() {
    let runner = OsascriptRunner::with_binary("/definitely/not/here/osascript");
    let err = runner.run("return 1", None).await.unwrap_err();
    assert!(matches!(err, BridgeError::BridgeUnavailable));
}

#[cfg(unix)]
mod process {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Write a shell script that stands in for `osascript`.
    fn fake_osascript(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("osascript");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[tokio::test]
    async fn test_passes_script_with_dash_e() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_osascript(dir.path(), r#"printf '  %s|%s  \n' "$1" "$2""#);
        let runner = OsascriptRunner::with_binary(binary);

        let out = runner.run("return \"hi\"", None).await.unwrap();
        assert_eq!(out, "-e|return \"hi\"");
    }

    #[tokio::test]
    async fn test_nonzero_exit_with_permission_text() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_osascript(
            dir.path(),
            "echo 'turned off: Allow JavaScript from Apple Events' >&2\nexit 1",
        );
        let runner = OsascriptRunner::with_binary(binary);

        let err = runner.run("x", None).await.unwrap_err();
        assert!(matches!(err, BridgeError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_invocation_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_osascript(dir.path(), "sleep 5");
        let runner = OsascriptRunner::with_binary(binary);

        let err = runner
            .run("x", Some(Duration::from_millis(100)))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::ExecutionFailed(msg) if msg.contains("100ms")));
    }
}

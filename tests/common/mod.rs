#![allow(dead_code)]
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Keys deliberately out of alphabetical order, at both levels.
pub const UNSORTED_BODY: &str = r#"{"zeta":1,"alpha":2,"inner":{"b":true,"a":[3,1]}}"#;

pub const CREDENTIAL_VARS: [&str; 3] = ["API_TOKEN", "FACEBOOK_ACCESS_TOKEN", "API_KEY"];

/// The built binary with credentials scrubbed from its environment.
pub fn callapi_cmd() -> Command {
    callapi_cmd_at(Path::new(env!("CARGO_BIN_EXE_callapi")))
}

pub fn callapi_cmd_at(exe: &Path) -> Command {
    let mut cmd = Command::new(exe);
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn callapi");

    // The process may exit before reading stdin (e.g. argument errors).
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for callapi")
}

pub fn run(args: &[&str], stdin: &str) -> Output {
    let mut cmd = callapi_cmd();
    cmd.args(args);
    run_with_stdin(cmd, stdin)
}

pub fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}):\n{stdout}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Writes `content` to a fresh `.env` file unique to `name`.
pub fn write_env_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("callapi-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(".env");
    std::fs::write(&path, content).expect("Failed to write .env");
    path
}

/// Links the built binary into a private directory next to it, so a `.env`
/// written beside the link is only seen by runs of that link.
pub fn isolated_executable(name: &str) -> PathBuf {
    let built = Path::new(env!("CARGO_BIN_EXE_callapi"));
    let dir = built
        .parent()
        .expect("Binary has no parent directory")
        .join(format!("callapi-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create binary dir");
    let exe = dir.join(built.file_name().expect("Binary has no file name"));
    let _ = std::fs::remove_file(&exe);
    // Same filesystem as the build output, so a hard link normally works.
    if std::fs::hard_link(built, &exe).is_err() {
        std::fs::copy(built, &exe).expect("Failed to copy binary");
    }
    exe
}

/// A URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/unreachable")
}

/// Serves `body` byte-for-byte on GET `route`.
pub async fn raw_body_server(route: &str, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&mock_server)
        .await;
    mock_server
}

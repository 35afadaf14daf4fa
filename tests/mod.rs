//! End-to-end tests driving the `token-counter` binary.
//!
//! Each test runs the binary with an isolated config file so the user's own
//! configuration never leaks in; network tests point `api_url` at a wiremock
//! server.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIN: &str = env!("CARGO_BIN_EXE_token-counter");
const COUNT_PATH: &str = "/v1/messages/count_tokens";

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn with_api_url(url: &str) -> Self {
        let env = Self::new();
        fs::write(env.config_path(), format!("api_url = \"{}\"\n", url)).unwrap();
        env
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn command(&self, api_key: Option<&str>) -> Command {
        let mut command = Command::new(BIN);
        command
            .env("TOKEN_COUNTER_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .env_remove("ANTHROPIC_API_KEY");
        if let Some(key) = api_key {
            command.env("ANTHROPIC_API_KEY", key);
        }
        command
    }

    fn run(&self, api_key: Option<&str>, args: &[&str], stdin: Option<&str>) -> Output {
        let mut command = self.command(api_key);
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() });

        let mut child = command.spawn().unwrap();
        if let Some(input) = stdin {
            let mut pipe = child.stdin.take().unwrap();
            // The binary may exit before reading stdin, closing the pipe.
            let _ = pipe.write_all(input.as_bytes());
        }
        child.wait_with_output().unwrap()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Runs the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(
    env: TestEnv,
    api_key: Option<&'static str>,
    args: Vec<String>,
    stdin: Option<&'static str>,
) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        env.run(api_key, &args, stdin)
    })
    .await
    .unwrap()
}

fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn test_missing_api_key_fails_before_reading_input() {
    let env = TestEnv::new();
    let output = env.run(None, &["/nonexistent/input.txt"], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim(),
        "Error: Missing Anthropic API key. Set ANTHROPIC_API_KEY environment variable."
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_empty_input_is_an_error() {
    let env = TestEnv::new();
    let output = env.run(Some("test-key"), &[], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim(),
        "Error: No input provided. Pipe text via stdin and/or provide file paths"
    );
}

#[test]
fn test_missing_file_is_reported_by_path() {
    let env = TestEnv::new();
    let missing = env.dir.path().join("missing.txt");
    let output = env.run(Some("test-key"), &[missing.to_str().unwrap()], Some("piped"));

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.starts_with("Error: error reading file "));
    assert!(message.contains("missing.txt"));
    assert_eq!(message.lines().count(), 1);
}

#[test]
fn test_malformed_config_is_fatal() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "verbose = \"yes please\"\n").unwrap();
    let output = env.run(Some("test-key"), &[], Some("text"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Configuration file error at "));
}

#[tokio::test]
async fn test_counts_piped_and_file_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COUNT_PATH))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_json(json!({
            "model": "claude-3-sonnet-20240229",
            "messages": [{"role": "user", "content": "Hello world"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"input_tokens": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::with_api_url(&format!("{}{}", server.uri(), COUNT_PATH));
    let file = path_arg(&env.file("world.txt", "world"));
    let output = run_blocking(env, Some("test-key"), vec![file], Some("Hello ")).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Token count: 42\n");
}

#[tokio::test]
async fn test_verbose_output_and_model_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COUNT_PATH))
        .and(body_json(json!({
            "model": "claude-3-haiku-20240307",
            "messages": [{"role": "user", "content": "alpha\nbeta"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"input_tokens": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::with_api_url(&format!("{}{}", server.uri(), COUNT_PATH));
    let args = vec![
        "--verbose".to_string(),
        "--model".to_string(),
        "claude-3-haiku-20240307".to_string(),
        path_arg(&env.file("a.txt", "alpha")),
        path_arg(&env.file("b.txt", "beta")),
    ];
    let output = run_blocking(env, Some("test-key"), args, None).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Model: claude-3-haiku-20240307\nInput length: 10 characters\nToken count: 5\n"
    );
}

#[tokio::test]
async fn test_api_error_message_is_printed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "error",
            "error": {"type": "invalid_request_error", "message": "invalid model"}
        })))
        .mount(&server)
        .await;

    let env = TestEnv::with_api_url(&format!("{}{}", server.uri(), COUNT_PATH));
    let args = vec!["--model".to_string(), "nope".to_string()];
    let output = run_blocking(env, Some("test-key"), args, Some("some text")).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim(), "Error: API error: invalid model");
    assert!(stdout(&output).is_empty());
}

use reqwest::Client;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStderr, Command};
use tokio::time::{sleep, timeout};
use webservice::BOUND_PORT_MARKER;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A webservice child process listening on a port it picked itself.
///
/// The process is killed when this value is dropped.
pub struct TestServerInstance {
    _child: Child,
    port: u16,
}

impl TestServerInstance {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

fn parse_bound_port(line: &str) -> Option<u16> {
    line.split_once(BOUND_PORT_MARKER)?.1.trim().parse().ok()
}

/// Reads stderr until the bound-port line shows up, then keeps draining the
/// rest in the background so the child never blocks on a full pipe.
async fn read_bound_port(mut lines: Lines<BufReader<ChildStderr>>) -> Option<u16> {
    while let Ok(Some(line)) = lines.next_line().await {
        if let Some(port) = parse_bound_port(&line) {
            tokio::spawn(async move { while let Ok(Some(_)) = lines.next_line().await {} });
            return Some(port);
        }
        eprintln!("[webservice] {line}");
    }
    None
}

async fn is_healthy(client: &Client, port: u16) -> bool {
    let url = format!("http://127.0.0.1:{port}/health");
    for _ in 0..50 {
        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => return true,
            _ => sleep(Duration::from_millis(100)).await,
        }
    }
    false
}

/// Spawns the webservice binary on a random loopback port.
pub async fn spawn_test_server() -> Result<TestServerInstance, String> {
    spawn_test_server_with_args(&["--bind-addr", "127.0.0.1:0"]).await
}

/// Spawns the webservice binary with explicit arguments.
///
/// The arguments must make the server bind port 0 on loopback, either
/// directly or through a config file.
pub async fn spawn_test_server_with_args(args: &[&str]) -> Result<TestServerInstance, String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_webservice"))
        .args(args)
        .env("RUST_LOG", "info")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("Failed to spawn webservice: {e}"))?;

    let stderr = child
        .stderr
        .take()
        .ok_or("webservice stderr was not captured")?;

    let port = timeout(STARTUP_TIMEOUT, read_bound_port(BufReader::new(stderr).lines()))
        .await
        .ok()
        .flatten()
        .ok_or("webservice did not report its bound port")?;

    let instance = TestServerInstance {
        _child: child,
        port,
    };
    if !is_healthy(&Client::new(), port).await {
        return Err(format!("webservice on port {port} never became healthy"));
    }
    Ok(instance)
}

#[test]
fn test_parse_bound_port() {
    assert_eq!(parse_bound_port("WEBSERVICE_BOUND_PORT=41234"), Some(41234));
    assert_eq!(parse_bound_port("  WEBSERVICE_BOUND_PORT=80 \r"), Some(80));
    assert_eq!(parse_bound_port("INFO webservice: listening"), None);
    assert_eq!(parse_bound_port("WEBSERVICE_BOUND_PORT=abc"), None);
}

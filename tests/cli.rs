use assert_cmd::Command;
use predicates::str::contains;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

const PASSPORT_BODY: &str = r#"{"passport":{"id":7,"score":85,"verified":true,"human_check":false},"credentials":[{"id":"c1","source":"github","type":"social","name":"GitHub"}]}"#;

/// Serve one canned HTTP response on a loopback port and return the base URL.
fn spawn_stub(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("talent-badge").unwrap();
    cmd.env_remove("TALENT_API_URL").env_remove("TALENT_API_KEY");
    cmd
}

#[test]
fn json_output_contains_record() {
    let base = spawn_stub("200 OK", PASSPORT_BODY);
    cmd()
        .args(["--base-url", base.as_str(), "--api-key", "k", "--json", "0xabc"])
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("\"score\": 85"))
        .stdout(contains("\"tier\": \"Elite\""))
        .stdout(contains("\"theme\": \"gold\""))
        .stdout(contains("\"isHuman\": true"))
        .stdout(contains("Code Architect"));
}

#[test]
fn card_output_shows_tier_and_badges() {
    let base = spawn_stub("200 OK", PASSPORT_BODY);
    cmd()
        .args([
            "--base-url",
            base.as_str(),
            "--api-key",
            "k",
            "--no-color",
            "--username",
            "alice",
            "0xabc",
        ])
        .assert()
        .success()
        .stdout(contains("@alice  85"))
        .stdout(contains("Elite Builder"))
        .stdout(contains("Code Architect"))
        .stdout(contains("Verified Human"));
}

#[test]
fn upstream_failure_renders_fallback() {
    let base = spawn_stub("404 Not Found", "{}");
    cmd()
        .args(["--base-url", base.as_str(), "--username", "alice", "0xabc"])
        .assert()
        .success()
        .stdout(contains("@alice (No Score)"));
}

#[test]
fn upstream_failure_json_is_null() {
    let base = spawn_stub("500 Internal Server Error", "{}");
    cmd()
        .args(["--base-url", base.as_str(), "--json", "0xabc"])
        .assert()
        .success()
        .stdout(contains("\"data\": null"));
}

#[test]
fn empty_address_renders_fallback_without_lookup() {
    // Discard-port base URL: an attempted request would fail loudly, but the
    // empty address short-circuits before any connection.
    cmd()
        .args(["--base-url", "http://127.0.0.1:9", "--username", "alice", ""])
        .assert()
        .success()
        .stdout(contains("@alice (No Score)"));
}

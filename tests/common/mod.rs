#![allow(dead_code, unused_imports, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{
    env,
    path::PathBuf,
    process::{Command, Output},
};

pub use dbprobe::probe::{BANNER, CONNECTED, CONNECTING, FAILED, SKIPPED};

/// Credentials of the local test container
pub const POSTGRES_ENV: [(&str, &str); 4] = [
    ("DB_HOST", "localhost"),
    ("DB_NAME", "testdb"),
    ("DB_USER", "admin"),
    ("DB_PASSWORD", "secret"),
];

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

pub fn pick_free_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}

pub fn dbprobe_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dbprobe"))
}

/// Environment pointing at a port nothing listens on
pub fn unreachable_env(port: u16) -> Vec<(&'static str, String)> {
    vec![
        ("DB_HOST", format!("127.0.0.1:{port}")),
        ("DB_NAME", "testdb".to_string()),
        ("DB_USER", "admin".to_string()),
        ("DB_PASSWORD", "secret".to_string()),
    ]
}

/// Run the binary with a clean environment plus `vars`
pub fn run_probe<K, V>(vars: &[(K, V)], args: &[&str]) -> Output
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut cmd = Command::new(dbprobe_binary_path());
    cmd.env_clear().args(args);
    for (key, value) in vars {
        cmd.env(key.as_ref(), value.as_ref());
    }
    cmd.output().expect("failed to run dbprobe")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

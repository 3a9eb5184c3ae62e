//! Exit status and diagnostics of the binary for configuration errors.
//! None of these reach the database.

use std::env;
use std::process::{Command, Output};

fn run(args: &[&str], database_url: &str) -> Output {
    // An empty DATABASE_URL is treated as unset. A `.env` file does not
    // override a variable that is already present.
    Command::new(env!("CARGO_BIN_EXE_seed_advocates"))
        .args(args)
        .env("DATABASE_URL", database_url)
        .env("RUST_LOG", "off")
        .current_dir(env::temp_dir())
        .output()
        .expect("failed to run seed_advocates")
}

#[test]
fn missing_database_url_exits_with_diagnostic() {
    let output = run(&["10"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("DATABASE_URL"));
    assert!(output.stdout.is_empty());
}

#[test]
fn non_integer_count_prints_usage() {
    let output = run(&["abc"], "postgres://postgres@localhost/advocates");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: seed_advocates [count]"));
    assert!(output.stdout.is_empty());
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Records the version of the compiler building the crate for the `User-Agent`.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");
    let version = rustc_version().unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=LISTMONK_RUSTC_VERSION={version}");
}

/// `1.86.0` out of `rustc 1.86.0 (05f9846f8 2025-03-31)`
fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| String::from("rustc"));
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    stdout.split_whitespace().nth(1).map(String::from)
}

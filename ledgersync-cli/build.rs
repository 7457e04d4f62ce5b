use std::path::Path;
use std::process::Command;

/// Embed the short git revision into `--version`.
fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace = Path::new(&manifest_dir).join("..");

    let git_head = workspace.join(".git").join("HEAD");
    if git_head.exists() {
        println!("cargo:rerun-if-changed={}", git_head.display());
    }

    let output = Command::new("git")
        .arg("-C")
        .arg(&workspace)
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let revision = match output {
        Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
        _ => String::new(),
    };
    let revision = if revision.is_empty() { "unknown".to_string() } else { revision };

    println!("cargo:rustc-env=LEDGERSYNC_BUILD_SHA={revision}");
}

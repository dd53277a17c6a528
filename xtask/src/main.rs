//! Custom cargo commands for fixedseq.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask fuzz      - Run every fuzz target briefly (needs cargo-fuzz)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under `fuzz/fuzz_targets`.
const FUZZ_TARGETS: &[&str] = &["index_resolution", "partitioning", "set_algebra"];

/// Each runtime contract check in `src/verify/contracts.rs` carries this prefix.
const CONTRACT_MARKER: &str = "Contract violation:";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contract markers, tests in debug and release, clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  fuzz      Run every fuzz target for 30 seconds
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fixedseq Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    let markers = check_contract_markers()?;
    println!("✓ {} contract checks present\n", markers);

    // Debug builds run every contract check on every operator call.
    println!("[2/5] Running tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[3/5] Running tests (release, contracts compiled out)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/5] Running tests with serde...");
    run_cargo(&["test", "--quiet", "--features", "serde"])?;
    println!("✓ serde tests passed\n");

    println!("[5/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let time_limit = "-max_total_time=30";
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", time_limit])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    println!("\n✓ All fuzz targets survived");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<usize> {
    let root = project_root()?;
    let contracts = root.join("src/verify/contracts.rs");
    let source = std::fs::read_to_string(&contracts)
        .with_context(|| format!("Failed to read {}", contracts.display()))?;

    let count = source.matches(CONTRACT_MARKER).count();
    if count < 5 {
        bail!(
            "Expected at least 5 contract checks in {}, found {}. Someone may have removed them!",
            contracts.display(),
            count
        );
    }

    Ok(count)
}

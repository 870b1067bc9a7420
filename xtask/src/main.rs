use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "instance_stop_lambda";
const LAMBDA_BINARY: &str = "stop_instance";
const DIST_DIR: &str = "dist";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the instance stop workspace",
    long_about = "Builds, checks, and packages the instance stop Lambda function."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and package the Lambda artifact as a `bootstrap` zip
    ServerlessPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Workspace tests
    Test,
    /// Lint + test
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn run_cargo(args: &[&str]) {
    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_lambda(target: &str, profile: BuildProfile) {
    if let Some(installed) = installed_targets() {
        if !installed.lines().any(|line| line.trim() == target) {
            panic!("rust target `{target}` is missing; run `rustup target add {target}` first");
        }
    }

    step("Build lambda binary");
    let mut cargo_args = vec!["build", "-p", LAMBDA_PACKAGE, "--bin", LAMBDA_BINARY];
    cargo_args.extend(["--target", target]);
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(LAMBDA_BINARY);
    let binary = fs::read(&binary_path)
        .unwrap_or_else(|error| panic!("cannot read '{}': {error}", binary_path.display()));

    fs::create_dir_all(DIST_DIR).expect("failed to create dist directory");
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BINARY}.zip"));
    write_bootstrap_zip(&binary, &zip_path);

    eprintln!("\nPackaged {}", zip_path.display());
}

// None when rustup is unavailable; the build then reports a missing target itself.
fn installed_targets() -> Option<String> {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

fn write_bootstrap_zip(binary: &[u8], zip_path: &Path) {
    let file = fs::File::create(zip_path).expect("failed to create lambda zip");
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .expect("failed to start bootstrap entry");
    zip.write_all(binary).expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test instance_stop_core");
    run_cargo(&["test", "-p", "instance_stop_core"]);

    step("Test instance_stop_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage { target, profile } => {
            package_lambda(&target, profile);
        }
    }
}

//! Integration test infrastructure.
//!
//! Runs the `redis_pagination` test suite with the `redis` feature against a
//! real Redis server started in a Docker/Podman container.
//!
//! # Usage
//!
//! ```bash
//! # Start Redis, run the tests, stop Redis
//! cargo xtask integration
//!
//! # Skip container management (assumes Redis is already running)
//! cargo xtask integration --no-docker
//! ```

pub mod containers;
pub mod error;

pub use error::{IntegrationError, Result};

use std::time::Duration;

use containers::{
    detect_runtime, is_running, redis_url, start_container, stop_container, test_environment,
    wait_for_redis, REDIS_SPEC,
};

use crate::prelude::*;

/// Integration test command.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Run integration tests against a real Redis server.

This command starts a Redis container, runs the redis_pagination test suite
with the `redis` feature enabled, and stops the container afterward.

Environment variables:
  REDIS_URL           - Override Redis URL (default: redis://localhost:6379)")]
pub struct IntegrationCommand {
    /// Skip Docker container management (assume Redis is already running).
    #[arg(long)]
    pub no_docker: bool,

    /// Keep the container running after tests complete.
    #[arg(long)]
    pub keep_containers: bool,

    /// Timeout in seconds for container health checks.
    #[arg(long, default_value = "30")]
    pub health_timeout: u64,
}

/// Main entry point for integration command.
pub async fn run(command: IntegrationCommand, global: crate::Global) -> Result<()> {
    if !global.is_silent() {
        aprintln!("{}", p_b("Redis Integration Tests"));
        aprintln!();
    }

    let runtime = if command.no_docker {
        if !global.is_silent() {
            aprintln!(
                "{} {}",
                p_y("⚠️"),
                "Skipping Redis container management (--no-docker)"
            );
        }
        None
    } else {
        Some(detect_runtime().await?)
    };

    let mut redis_started = false;
    if let Some(rt) = runtime {
        if is_running(rt, &REDIS_SPEC).await? {
            if !global.is_silent() {
                aprintln!("{} {}", p_y("⚠️"), "Redis container already running");
            }
        } else {
            if !global.is_silent() {
                aprintln!("{} {}", p_b("🐳"), "Starting Redis container...");
            }
            start_container(rt, &REDIS_SPEC).await?;
            redis_started = true;
        }
    }

    // From here on the container must be stopped whatever the outcome.
    let outcome = async {
        if let (Some(rt), true) = (runtime, redis_started) {
            if !global.is_silent() {
                aprintln!(
                    "{} {}",
                    p_b("⏳"),
                    format!(
                        "Waiting for Redis health (max {}s)...",
                        command.health_timeout
                    )
                );
            }
            wait_for_redis(rt, &REDIS_SPEC, Duration::from_secs(command.health_timeout)).await?;

            if !global.is_silent() {
                aprintln!("{} {}", p_g("✅"), "Redis is ready");
            }
        }

        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| redis_url(&REDIS_SPEC));
        run_redis_tests(&url, &global).await
    }
    .await;

    if let Some(rt) = runtime {
        if should_stop_container(redis_started, command.keep_containers) {
            if !global.is_silent() {
                aprintln!("{} {}", p_b("🐳"), "Stopping Redis container...");
            }
            stop_container(rt, REDIS_SPEC.name).await;
        } else if redis_started && !global.is_silent() {
            aprintln!(
                "{} {}",
                p_y("⚠️"),
                "Container left running (--keep-containers)"
            );
        }
    }

    let passed = outcome?;

    aprintln!();
    if passed {
        aprintln!("{} {}", p_g("✅"), p_g("All integration tests passed!"));
        Ok(())
    } else {
        aprintln!("{} {}", p_r("❌"), p_r("Some integration tests failed"));
        Err(IntegrationError::TestFailed(
            "redis_pagination tests failed".to_string(),
        ))
    }
}

/// Runs `cargo test -p redis_pagination --features redis` against `url`.
///
/// Redis is marked as required, so an unreachable server fails the run
/// instead of skipping the Redis tests.
async fn run_redis_tests(url: &str, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} Running with REDIS_URL={}", p_b("  →"), p_y(url));
    }

    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args(["test", "-p", "redis_pagination", "--features", "redis"]);

    if !global.is_verbose() {
        cmd.arg("--quiet");
    }

    let status = cmd.envs(test_environment(url)).status().await?;

    Ok(status.success())
}

/// Returns true if the run must stop the Redis container it started.
///
/// Applies on every exit path once the container has started.
fn should_stop_container(redis_started: bool, keep_containers: bool) -> bool {
    redis_started && !keep_containers
}

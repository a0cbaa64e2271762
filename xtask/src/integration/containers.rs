//! Container management for the Redis test dependency.
//!
//! Pure functions build the container command line; the async functions
//! run the container runtime and poll its health.

use std::time::Duration;

use tokio::process::Command;

use super::error::{IntegrationError, Result};

/// Container runtime (Docker or Podman).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerRuntime {
    #[default]
    Docker,
    Podman,
}

/// Specification for a container.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    pub name: &'static str,
    pub image: &'static str,
    pub port: u16,
    pub command: Option<&'static str>,
}

/// Redis container specification. Data is not persisted between runs.
pub const REDIS_SPEC: ContainerSpec = ContainerSpec {
    name: "redis-pagination-redis",
    image: "redis:7-alpine",
    port: 6379,
    command: Some("redis-server --appendonly no"),
};

/// Builds arguments for `docker run` / `podman run`.
pub fn container_run_args(spec: &ContainerSpec) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--name".to_string(),
        spec.name.to_string(),
        "-d".to_string(),
        "--rm".to_string(),
        "-p".to_string(),
        format!("{}:{}", spec.port, spec.port),
        spec.image.to_string(),
    ];

    if let Some(cmd) = spec.command {
        args.extend(cmd.split_whitespace().map(String::from));
    }

    args
}

/// Returns the Redis URL tests should use for a container spec.
pub fn redis_url(spec: &ContainerSpec) -> String {
    format!("redis://localhost:{}", spec.port)
}

/// Makes the Redis tests fail instead of skipping when Redis is unreachable.
pub const REQUIRE_REDIS_VAR: &str = "REDIS_PAGINATION_REQUIRE_REDIS";

/// Returns the environment variables for a Redis test run.
pub fn test_environment(url: &str) -> Vec<(&'static str, String)> {
    vec![
        ("REDIS_URL", url.to_string()),
        (REQUIRE_REDIS_VAR, "1".to_string()),
    ]
}

/// Returns the command name for the container runtime.
pub fn runtime_command(runtime: ContainerRuntime) -> &'static str {
    match runtime {
        ContainerRuntime::Docker => "docker",
        ContainerRuntime::Podman => "podman",
    }
}

/// Detects which container runtime is available, Docker first.
pub async fn detect_runtime() -> Result<ContainerRuntime> {
    for runtime in [ContainerRuntime::Docker, ContainerRuntime::Podman] {
        let output = Command::new(runtime_command(runtime))
            .arg("--version")
            .output()
            .await;

        if let Ok(output) = output {
            if output.status.success() {
                return Ok(runtime);
            }
        }
    }

    Err(IntegrationError::RuntimeNotFound(
        "Neither docker nor podman found in PATH".to_string(),
    ))
}

/// Returns true if a container with the spec's name is running.
pub async fn is_running(runtime: ContainerRuntime, spec: &ContainerSpec) -> Result<bool> {
    let output = Command::new(runtime_command(runtime))
        .args(["ps", "-q", "-f", &format!("name={}", spec.name)])
        .output()
        .await?;

    Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
}

/// Stops a container. Errors are ignored since it might not exist.
pub async fn stop_container(runtime: ContainerRuntime, name: &str) {
    let _ = Command::new(runtime_command(runtime))
        .args(["stop", name])
        .output()
        .await;
}

/// Starts a container, replacing any stopped container with the same name.
pub async fn start_container(runtime: ContainerRuntime, spec: &ContainerSpec) -> Result<()> {
    let cmd = runtime_command(runtime);

    let _ = Command::new(cmd).args(["rm", "-f", spec.name]).output().await;

    let output = Command::new(cmd)
        .args(container_run_args(spec))
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IntegrationError::ContainerFailed(format!(
            "Failed to start container '{}': {}",
            spec.name, stderr
        )));
    }

    Ok(())
}

/// Polls `redis-cli ping` inside the container until it answers or the timeout passes.
pub async fn wait_for_redis(
    runtime: ContainerRuntime,
    spec: &ContainerSpec,
    timeout: Duration,
) -> Result<()> {
    let start = std::time::Instant::now();
    let poll_interval = Duration::from_millis(500);

    while start.elapsed() < timeout {
        if check_redis_health(runtime, spec.name).await {
            return Ok(());
        }

        tokio::time::sleep(poll_interval).await;
    }

    Err(IntegrationError::ContainerNotHealthy {
        name: spec.name.to_string(),
        timeout_secs: timeout.as_secs(),
    })
}

async fn check_redis_health(runtime: ContainerRuntime, name: &str) -> bool {
    let output = Command::new(runtime_command(runtime))
        .args(["exec", name, "redis-cli", "ping"])
        .output()
        .await;

    match output {
        Ok(output) => {
            output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "PONG"
        }
        Err(_) => false,
    }
}

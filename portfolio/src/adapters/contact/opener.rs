use crate::ports::contact::UrlOpenerPort;
use anyhow::Context;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Launches the platform URL handler (`open`, `xdg-open`, `start`) without
/// waiting for it; the mail client reports nothing back.
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "macos")]
    fn command(uri: &str) -> anyhow::Result<Command> {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        Ok(cmd)
    }

    #[cfg(windows)]
    fn command(uri: &str) -> anyhow::Result<Command> {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(uri);
        Ok(cmd)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(uri: &str) -> anyhow::Result<Command> {
        let program = which::which("xdg-open").context("xdg-open not found on PATH")?;
        let mut cmd = Command::new(program);
        cmd.arg(uri);
        Ok(cmd)
    }
}

impl Default for SystemUrlOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlOpenerPort for SystemUrlOpener {
    fn open(&self, uri: &str) -> anyhow::Result<()> {
        let mut command = Self::command(uri)?;
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to launch URL handler")?;
        debug!(pid = ?child.id(), "url handler launched");
        Ok(())
    }
}

/// Prints the URI instead of opening it. Used for dry runs and headless hosts.
pub struct EchoUrlOpener;

impl UrlOpenerPort for EchoUrlOpener {
    fn open(&self, uri: &str) -> anyhow::Result<()> {
        info!("mail handoff (dry run)");
        println!("{uri}");
        Ok(())
    }
}

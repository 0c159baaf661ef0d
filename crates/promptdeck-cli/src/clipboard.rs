//! System clipboard via platform copy tools
//!
//! The first tool found on PATH (and whose display server is reachable)
//! receives the text on stdin.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use promptdeck::{ClipboardService, DomainError};

#[derive(Debug, Clone, Copy)]
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
    /// Environment variable that must be set for the tool to work
    requires_env: Option<&'static str>,
}

const CANDIDATES: &[ClipboardTool] = &[
    ClipboardTool { program: "pbcopy", args: &[], requires_env: None },
    ClipboardTool { program: "wl-copy", args: &[], requires_env: Some("WAYLAND_DISPLAY") },
    ClipboardTool { program: "xclip", args: &["-selection", "clipboard"], requires_env: Some("DISPLAY") },
    ClipboardTool { program: "xsel", args: &["--clipboard", "--input"], requires_env: Some("DISPLAY") },
    ClipboardTool { program: "clip.exe", args: &[], requires_env: None },
];

/// Clipboard backed by an external copy command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tool: Option<ClipboardTool>,
}

impl SystemClipboard {
    /// Pick the first usable tool for this session
    pub fn detect() -> Self {
        let tool = CANDIDATES.iter().copied().find(|tool| {
            tool.requires_env.map_or(true, |var| std::env::var_os(var).is_some())
                && on_path(tool.program)
        });

        match tool {
            Some(tool) => tracing::debug!("Using clipboard tool: {}", tool.program),
            None => tracing::debug!("No clipboard tool found"),
        }

        Self { tool }
    }

    /// A clipboard that reports itself unavailable
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { tool: None }
    }

    #[cfg(test)]
    fn with_program(program: &'static str) -> Self {
        Self::with_command(program, &[])
    }

    #[cfg(test)]
    fn with_command(program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            tool: Some(ClipboardTool { program, args, requires_env: None }),
        }
    }

    pub fn tool_name(&self) -> Option<&'static str> {
        self.tool.map(|t| t.program)
    }
}

fn on_path(program: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| is_file(&dir.join(program))))
        .unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    path.is_file()
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    fn is_available(&self) -> bool {
        self.tool.is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), DomainError> {
        let tool = self.tool.ok_or(DomainError::ClipboardUnavailable)?;

        // Forked selection owners may keep inherited stdio open; wait on exit status only
        let mut child = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DomainError::Clipboard(format!("failed to start {}: {}", tool.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| DomainError::Clipboard(format!("failed to write to {}: {}", tool.program, e)))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| DomainError::Clipboard(format!("{} did not finish: {}", tool.program, e)))?;

        if !status.success() {
            return Err(DomainError::Clipboard(format!("{} exited with {}", tool.program, status)));
        }

        Ok(())
    }
}

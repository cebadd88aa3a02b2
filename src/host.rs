use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Why a probe contributed nothing. Never shown to the user.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}: command not found")]
    NotFound(String),

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status:  String,
        stderr:  String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source:  io::Error,
    },
}

/// Everything an entry is allowed to ask of the machine it runs on.
pub trait Host {
    /// Run `program` with `args` and return its stdout.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProbeError>;

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError>;

    fn env_var(&self, key: &str) -> Option<String>;

    fn uid(&self) -> u32;
}

/// The real machine: external tools run with `LANG=C` so their text output is stable.
pub struct SystemHost;

impl Host for SystemHost {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProbeError> {
        let out = Command::new(program)
            .args(args)
            .env("LANG", "C")
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ProbeError::NotFound(program.to_string()),
                _ => ProbeError::Io { context: format!("spawning {}", program), source: e },
            })?;

        if !out.status.success() {
            return Err(ProbeError::Failed {
                program: program.to_string(),
                status:  out.status.to_string(),
                stderr:  String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError> {
        std::fs::read_to_string(path).map_err(|e| ProbeError::Io {
            context: path.display().to_string(),
            source:  e,
        })
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn uid(&self) -> u32 {
        nix::unistd::getuid().as_raw()
    }
}

/// Run a probe, logging (not propagating) the reason it produced nothing.
pub fn probe(host: &dyn Host, program: &str, args: &[&str]) -> Option<String> {
    match host.run(program, args) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!(tool = program, error = %e, "probe unavailable");
            None
        }
    }
}

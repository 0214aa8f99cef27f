// Telemetry extraction from the Linux process-information filesystem.
//
// Every operation is synchronous and re-reads its sources; the engine holds no
// mutable state and can be shared freely across threads.

mod enumerate;
mod net;
mod parse;
mod process;
mod system;
pub mod units;

pub(crate) use enumerate::parse_pid;
pub use enumerate::ProcessIter;
pub use net::NetDevIter;
pub use process::estimate_cpu_usage;

use crate::config::ProcfsConfig;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Procfs {
    root: PathBuf,
    ticks_per_second: u64,
    debug: bool,
}

impl Default for Procfs {
    fn default() -> Self {
        Self::new(&ProcfsConfig::default())
    }
}

impl Procfs {
    pub fn new(config: &ProcfsConfig) -> Self {
        let ticks_per_second = config
            .clock_ticks_per_sec
            .filter(|hz| *hz > 0)
            .unwrap_or_else(units::clock_ticks_per_second);
        Self {
            root: config.root.clone(),
            ticks_per_second,
            debug: config.debug,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }

    fn source(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn pid_source(&self, pid: u32, name: &str) -> PathBuf {
        self.root.join(pid.to_string()).join(name)
    }

    /// Absorb a failed read or parse into `None`, reporting it when debug is on.
    fn degrade<T, E: Display>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.note_default(&e);
                None
            }
        }
    }

    fn note_default(&self, what: &dyn Display) {
        if self.debug {
            tracing::debug!(reason = %what, "field defaulted");
        }
    }
}

// Per-process snapshot model

use serde::{Deserialize, Serialize};

/// Command reported when the command-line source is unreadable or empty.
pub const UNKNOWN_COMMAND: &str = "Unknown";

/// One process's metrics, read independently from its stat/status/io/cmdline sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub command: String,
    /// Kernel scheduling state (R, S, D, Z, ...); `None` when the stat line did not parse.
    pub state: Option<char>,
    pub resident_memory_mb: f64,
    pub virtual_memory_mb: f64,
    pub swap_mb: f64,
    pub user_ticks: u64,
    pub system_ticks: u64,
    pub cpu_usage_percent: f64,
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub voluntary_context_switches: u64,
    pub involuntary_context_switches: u64,
    pub thread_count: u64,
}

impl ProcessSnapshot {
    /// Snapshot with every field at its documented default.
    pub fn empty(pid: u32) -> Self {
        Self {
            pid,
            command: UNKNOWN_COMMAND.to_string(),
            state: None,
            resident_memory_mb: 0.0,
            virtual_memory_mb: 0.0,
            swap_mb: 0.0,
            user_ticks: 0,
            system_ticks: 0,
            cpu_usage_percent: 0.0,
            read_bytes: 0,
            write_bytes: 0,
            voluntary_context_switches: 0,
            involuntary_context_switches: 0,
            thread_count: 0,
        }
    }
}

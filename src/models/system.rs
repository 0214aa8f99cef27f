// Swap, load average and CPU frequency models

use serde::{Deserialize, Serialize};

use crate::procfs::units::kb_to_mb;

/// Swap totals from meminfo, in kilobytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub total_kb: f64,
    pub used_kb: f64,
    pub free_kb: f64,
}

/// Swap totals in megabytes, as served to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapUsage {
    pub total_mb: f64,
    pub used_mb: f64,
    pub free_mb: f64,
}

impl From<SwapInfo> for SwapUsage {
    fn from(s: SwapInfo) -> Self {
        SwapUsage {
            total_mb: kb_to_mb(s.total_kb),
            used_mb: kb_to_mb(s.used_kb),
            free_mb: kb_to_mb(s.free_kb),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInfo {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
    pub running_processes: u32,
    pub total_processes: u32,
    pub last_pid: u32,
    pub cpu_core_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreFrequency {
    pub core_id: u32,
    #[serde(rename = "frequencyMHz")]
    pub frequency_mhz: f64,
}

// System-wide readers: swap (meminfo), load average (loadavg) and cores (cpuinfo)

use super::Procfs;
use super::parse::{FixedLine, first_line, key_values, read_source, sanitized_number, value_field};
use crate::error::{Defaulted, ProcfsError};
use crate::models::{CoreFrequency, LoadInfo, SwapInfo};
use std::path::Path;

pub(crate) fn parse_swap(source: &Path, text: &str) -> (SwapInfo, Vec<Defaulted>) {
    let mut info = SwapInfo::default();
    let mut defaulted = Vec::new();
    for (key, value) in key_values(text) {
        let outcome = match key {
            "SwapTotal" => value_field(source, key, value).map(|kb| info.total_kb = kb),
            "SwapFree" => value_field(source, key, value).map(|kb| info.free_kb = kb),
            _ => continue,
        };
        if let Err(d) = outcome {
            defaulted.push(d);
        }
    }
    info.used_kb = info.total_kb - info.free_kb;
    (info, defaulted)
}

/// Parsed load-average line, before the core count is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LoadAverage {
    pub(crate) load1: f64,
    pub(crate) load5: f64,
    pub(crate) load15: f64,
    pub(crate) running: u32,
    pub(crate) total: u32,
    pub(crate) last_pid: u32,
}

/// `load1 load5 load15 running/total lastPid`; every field is required.
pub(crate) fn parse_loadavg(source: &Path, text: &str) -> Result<LoadAverage, Defaulted> {
    let line = FixedLine::whitespace(source, first_line(source, text)?);
    line.require(5)?;
    let (running, total) = line.split_field(3, '/')?;
    Ok(LoadAverage {
        load1: line.field(0)?,
        load5: line.field(1)?,
        load15: line.field(2)?,
        running,
        total,
        last_pid: line.field(4)?,
    })
}

fn is_processor_line(line: &str) -> bool {
    line.starts_with("processor")
}

pub(crate) fn count_processors(text: &str) -> usize {
    text.lines().filter(|l| is_processor_line(l)).count()
}

fn line_value(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("")
}

/// One record per `processor` line, closed by the `cpu MHz` line that follows
/// it. A processor with no MHz line reports 0.0; an unparsable id falls back to
/// the ordinal position.
pub(crate) fn parse_core_frequencies(text: &str) -> Vec<CoreFrequency> {
    let core_count = count_processors(text);
    let mut cores = Vec::with_capacity(core_count);
    let mut open: Option<u32> = None;
    for line in text.lines() {
        if is_processor_line(line) {
            if let Some(core_id) = open.take() {
                cores.push(CoreFrequency {
                    core_id,
                    frequency_mhz: 0.0,
                });
            }
            let ordinal = cores.len() as u32;
            open = Some(line_value(line).parse().unwrap_or(ordinal));
        } else if line.starts_with("cpu MHz")
            && let Some(core_id) = open.take()
        {
            let raw = line_value(line).split_whitespace().next().unwrap_or("");
            cores.push(CoreFrequency {
                core_id,
                frequency_mhz: sanitized_number(raw),
            });
        }
    }
    if let Some(core_id) = open {
        cores.push(CoreFrequency {
            core_id,
            frequency_mhz: 0.0,
        });
    }
    debug_assert_eq!(cores.len(), core_count);
    cores
}

impl Procfs {
    /// Swap totals in kilobytes. Never fails; a missing meminfo reads as all zeros.
    pub fn read_swap_info(&self) -> SwapInfo {
        let path = self.source("meminfo");
        let Some(text) = self.degrade(read_source(&path)) else {
            return SwapInfo::default();
        };
        let (info, defaulted) = parse_swap(&path, &text);
        defaulted.iter().for_each(|d| self.note_default(d));
        info
    }

    /// Number of `processor` entries in cpuinfo.
    pub fn cpu_core_count(&self) -> Result<u32, ProcfsError> {
        let text = read_source(&self.source("cpuinfo"))?;
        Ok(count_processors(&text) as u32)
    }

    /// Load averages, process counts and core count. Fails if loadavg or
    /// cpuinfo cannot be read, or the load line is short or non-numeric.
    pub fn read_load_info(&self) -> Result<LoadInfo, ProcfsError> {
        let cpu_core_count = self.cpu_core_count()?;
        let path = self.source("loadavg");
        let text = read_source(&path)?;
        let avg = parse_loadavg(&path, &text)?;
        Ok(LoadInfo {
            load1: avg.load1,
            load5: avg.load5,
            load15: avg.load15,
            running_processes: avg.running,
            total_processes: avg.total,
            last_pid: avg.last_pid,
            cpu_core_count,
        })
    }

    /// Per-core clock frequency, one record per processor. Fails only if
    /// cpuinfo cannot be read.
    pub fn enumerate_core_frequencies(&self) -> Result<Vec<CoreFrequency>, ProcfsError> {
        let text = read_source(&self.source("cpuinfo"))?;
        Ok(parse_core_frequencies(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_swap_computes_used() {
        let text = "MemTotal:       16303428 kB\nSwapCached:            0 kB\nSwapTotal:          2048 kB\nSwapFree:            512 kB\n";
        let (info, defaulted) = parse_swap(Path::new("meminfo"), text);
        assert!(defaulted.is_empty());
        assert_eq!(info.total_kb, 2048.0);
        assert_eq!(info.free_kb, 512.0);
        assert_eq!(info.used_kb, 1536.0);
    }

    #[test]
    fn parse_swap_without_swap_lines_is_zero() {
        let (info, _) = parse_swap(Path::new("meminfo"), "MemTotal: 1 kB\n");
        assert_eq!(info, SwapInfo::default());
    }

    #[test]
    fn parse_loadavg_reads_six_fields() {
        let avg = parse_loadavg(Path::new("loadavg"), "0.50 0.40 0.30 1/120 9999\n").unwrap();
        assert_eq!(avg.load1, 0.50);
        assert_eq!(avg.load5, 0.40);
        assert_eq!(avg.load15, 0.30);
        assert_eq!(avg.running, 1);
        assert_eq!(avg.total, 120);
        assert_eq!(avg.last_pid, 9999);
    }

    #[test]
    fn parse_loadavg_rejects_missing_fields() {
        let p = Path::new("loadavg");
        assert!(parse_loadavg(p, "0.50 0.40 0.30 1/120\n").is_err());
        assert!(parse_loadavg(p, "0.50 0.40 0.30 1 9999\n").is_err());
        assert!(parse_loadavg(p, "0.50 x 0.30 1/120 9999\n").is_err());
        assert!(parse_loadavg(p, "").is_err());
    }

    #[test]
    fn parse_core_frequencies_pairs_processor_and_mhz() {
        let text = "processor\t: 0\nvendor_id\t: GenuineIntel\ncpu MHz\t\t: 2400.000\n\nprocessor\t: 1\ncpu MHz\t\t: 3100.512\n";
        let cores = parse_core_frequencies(text);
        assert_eq!(
            cores,
            vec![
                CoreFrequency {
                    core_id: 0,
                    frequency_mhz: 2400.0
                },
                CoreFrequency {
                    core_id: 1,
                    frequency_mhz: 3100.512
                },
            ]
        );
    }

    #[test]
    fn parse_core_frequencies_without_mhz_still_counts_cores() {
        let text = "processor\t: 0\nBogoMIPS\t: 48.00\n\nprocessor\t: 1\nBogoMIPS\t: 48.00\n";
        let cores = parse_core_frequencies(text);
        assert_eq!(cores.len(), 2);
        assert_eq!(cores[1].core_id, 1);
        assert!(cores.iter().all(|c| c.frequency_mhz == 0.0));
    }

    #[test]
    fn parse_core_frequencies_bad_mhz_is_zero() {
        let cores = parse_core_frequencies("processor : 0\ncpu MHz : unknown\n");
        assert_eq!(cores.len(), 1);
        assert_eq!(cores[0].frequency_mhz, 0.0);
    }

    #[test]
    fn count_processors_counts_prefix_lines() {
        assert_eq!(count_processors("processor : 0\nprocessor : 1\nmodel name : x\n"), 2);
        assert_eq!(count_processors(""), 0);
    }
}

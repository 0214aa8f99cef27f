// Per-process snapshot: /proc/<pid>/{stat,status,io,cmdline} plus /proc/uptime

use super::Procfs;
use super::parse::{FixedLine, first_line, key_values, read_source, value_field};
use super::units::{kb_to_mb, seconds_to_ticks, ticks_to_seconds};
use crate::error::{Defaulted, ProcfsError};
use crate::models::{ProcessSnapshot, UNKNOWN_COMMAND};
use std::path::Path;

// 0-based token positions in the stat line (split on whitespace, comm included).
const STAT_STATE: usize = 2;
const STAT_UTIME: usize = 13;
const STAT_STIME: usize = 14;
const STAT_STARTTIME: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatFields {
    pub(crate) state: char,
    pub(crate) user_ticks: u64,
    pub(crate) system_ticks: u64,
    pub(crate) start_ticks: u64,
}

/// Parse the scheduling line. All four values parse or none are returned.
///
/// Tokens are split on whitespace, so a command name containing spaces shifts
/// the later fields and usually fails the parse.
pub(crate) fn parse_stat(source: &Path, text: &str) -> Result<StatFields, Defaulted> {
    let line = FixedLine::whitespace(source, first_line(source, text)?);
    line.require(STAT_STARTTIME + 1)?;
    let state_tok = line.token(STAT_STATE)?;
    let mut chars = state_tok.chars();
    let state = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(Defaulted::new(
                source,
                format!("state is not a single character: {:?}", state_tok),
            ));
        }
    };
    Ok(StatFields {
        state,
        user_ticks: line.field(STAT_UTIME)?,
        system_ticks: line.field(STAT_STIME)?,
        start_ticks: line.field(STAT_STARTTIME)?,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct StatusFields {
    pub(crate) virtual_memory_mb: f64,
    pub(crate) resident_memory_mb: f64,
    pub(crate) swap_mb: f64,
    pub(crate) voluntary_context_switches: u64,
    pub(crate) involuntary_context_switches: u64,
    pub(crate) thread_count: u64,
}

/// Parse the status block. Unparsable recognized keys are returned alongside
/// the fields, which keep their defaults.
pub(crate) fn parse_status(source: &Path, text: &str) -> (StatusFields, Vec<Defaulted>) {
    let mut f = StatusFields::default();
    let mut defaulted = Vec::new();
    for (key, value) in key_values(text) {
        let outcome = match key {
            "VmSize" => value_field(source, key, value).map(|kb| f.virtual_memory_mb = kb_to_mb(kb)),
            "VmRSS" => value_field(source, key, value).map(|kb| f.resident_memory_mb = kb_to_mb(kb)),
            "VmSwap" => value_field(source, key, value).map(|kb| f.swap_mb = kb_to_mb(kb)),
            "voluntary_ctxt_switches" => {
                value_field(source, key, value).map(|n| f.voluntary_context_switches = n)
            }
            "nonvoluntary_ctxt_switches" => {
                value_field(source, key, value).map(|n| f.involuntary_context_switches = n)
            }
            "Threads" => value_field(source, key, value).map(|n| f.thread_count = n),
            _ => continue,
        };
        if let Err(d) = outcome {
            defaulted.push(d);
        }
    }
    (f, defaulted)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IoFields {
    pub(crate) read_bytes: u64,
    pub(crate) write_bytes: u64,
}

pub(crate) fn parse_io(source: &Path, text: &str) -> (IoFields, Vec<Defaulted>) {
    let mut f = IoFields::default();
    let mut defaulted = Vec::new();
    for (key, value) in key_values(text) {
        let outcome = match key {
            "read_bytes" => value_field(source, key, value).map(|n| f.read_bytes = n),
            "write_bytes" => value_field(source, key, value).map(|n| f.write_bytes = n),
            _ => continue,
        };
        if let Err(d) = outcome {
            defaulted.push(d);
        }
    }
    (f, defaulted)
}

/// Program name from the NUL-separated command line; `None` when empty.
pub(crate) fn parse_cmdline(raw: &[u8]) -> Option<String> {
    let first = raw.split(|b| *b == 0).next().unwrap_or_default();
    if first.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(first).into_owned())
}

/// Whole seconds since boot: integer part of the first field of the uptime source.
pub(crate) fn parse_uptime_seconds(source: &Path, text: &str) -> Result<u64, Defaulted> {
    let line = FixedLine::whitespace(source, first_line(source, text)?);
    let tok = line.token(0)?;
    let whole = tok.split_once('.').map_or(tok, |(whole, _)| whole);
    whole
        .parse()
        .map_err(|_| Defaulted::new(source, format!("uptime is not numeric: {:?}", tok)))
}

/// CPU utilization of a process over its whole lifetime, in percent.
///
/// Returns 0.0 when the process has not been alive for a positive amount of
/// time (uptime at or before its start tick) or the tick rate is zero.
pub fn estimate_cpu_usage(
    user_ticks: u64,
    system_ticks: u64,
    start_ticks: u64,
    uptime_ticks: u64,
    ticks_per_second: u64,
) -> f64 {
    if ticks_per_second == 0 {
        return 0.0;
    }
    let elapsed_seconds = (uptime_ticks as f64 - start_ticks as f64) / ticks_per_second as f64;
    if elapsed_seconds <= 0.0 {
        return 0.0;
    }
    let busy_seconds = ticks_to_seconds(user_ticks.saturating_add(system_ticks), ticks_per_second);
    busy_seconds / elapsed_seconds * 100.0
}

impl Procfs {
    /// Snapshot one process. Never fails: unreadable or malformed sources
    /// leave their fields at the defaults of [`ProcessSnapshot::empty`].
    pub fn read_process_snapshot(&self, pid: u32) -> ProcessSnapshot {
        let mut snap = ProcessSnapshot::empty(pid);

        let stat_path = self.pid_source(pid, "stat");
        let stat = read_source(&stat_path)
            .and_then(|text| parse_stat(&stat_path, &text).map_err(ProcfsError::from));
        let mut start_ticks = 0;
        if let Some(stat) = self.degrade(stat) {
            snap.state = Some(stat.state);
            snap.user_ticks = stat.user_ticks;
            snap.system_ticks = stat.system_ticks;
            start_ticks = stat.start_ticks;
        }

        let status_path = self.pid_source(pid, "status");
        if let Some(text) = self.degrade(read_source(&status_path)) {
            let (status, defaulted) = parse_status(&status_path, &text);
            defaulted.iter().for_each(|d| self.note_default(d));
            snap.virtual_memory_mb = status.virtual_memory_mb;
            snap.resident_memory_mb = status.resident_memory_mb;
            snap.swap_mb = status.swap_mb;
            snap.voluntary_context_switches = status.voluntary_context_switches;
            snap.involuntary_context_switches = status.involuntary_context_switches;
            snap.thread_count = status.thread_count;
        }

        let io_path = self.pid_source(pid, "io");
        if let Some(text) = self.degrade(read_source(&io_path)) {
            let (io, defaulted) = parse_io(&io_path, &text);
            defaulted.iter().for_each(|d| self.note_default(d));
            snap.read_bytes = io.read_bytes;
            snap.write_bytes = io.write_bytes;
        }

        let cmdline_path = self.pid_source(pid, "cmdline");
        let cmdline = std::fs::read(&cmdline_path).map_err(|e| ProcfsError::io(&cmdline_path, e));
        snap.command = self
            .degrade(cmdline)
            .and_then(|raw| parse_cmdline(&raw))
            .unwrap_or_else(|| UNKNOWN_COMMAND.to_string());

        snap.cpu_usage_percent = estimate_cpu_usage(
            snap.user_ticks,
            snap.system_ticks,
            start_ticks,
            self.read_uptime_ticks(),
            self.ticks_per_second,
        );
        snap
    }

    /// System uptime in clock ticks; 0 when the uptime source is unreadable.
    pub fn read_uptime_ticks(&self) -> u64 {
        let path = self.source("uptime");
        let seconds = read_source(&path)
            .and_then(|text| parse_uptime_seconds(&path, &text).map_err(ProcfsError::from));
        self.degrade(seconds)
            .map(|s| seconds_to_ticks(s, self.ticks_per_second))
            .unwrap_or(0)
    }
}

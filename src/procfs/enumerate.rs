// Lazy walk over the numeric directories of the process-information root

use super::Procfs;
use crate::error::ProcfsError;
use crate::models::ProcessSnapshot;
use std::fs::{DirEntry, ReadDir};

/// Single-pass sequence of snapshots, one per process directory, in directory
/// order. Each `next` reads one process; a process that exits in between
/// yields a defaulted snapshot rather than ending the walk.
pub struct ProcessIter<'a> {
    procfs: &'a Procfs,
    entries: ReadDir,
}

impl Iterator for ProcessIter<'_> {
    type Item = ProcessSnapshot;

    fn next(&mut self) -> Option<ProcessSnapshot> {
        for entry in self.entries.by_ref() {
            let Some(entry) = self.procfs.degrade(entry) else {
                continue;
            };
            if let Some(pid) = process_dir_pid(&entry) {
                return Some(self.procfs.read_process_snapshot(pid));
            }
        }
        None
    }
}

/// Pid of a directory entry named by a positive integer.
fn process_dir_pid(entry: &DirEntry) -> Option<u32> {
    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
    if !is_dir {
        return None;
    }
    parse_pid(entry.file_name().to_str()?)
}

/// Canonical decimal pid: ASCII digits only, no sign, no leading zero.
pub(crate) fn parse_pid(name: &str) -> Option<u32> {
    if name.starts_with('0') || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok()
}

impl Procfs {
    /// Start a walk over every process visible right now.
    /// Fails only if the root directory itself cannot be listed.
    pub fn enumerate_processes(&self) -> Result<ProcessIter<'_>, ProcfsError> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| ProcfsError::io(&self.root, e))?;
        Ok(ProcessIter {
            procfs: self,
            entries,
        })
    }
}

// Shared test helpers: a synthetic process-information tree in a temp dir

#![allow(dead_code)]

use procwatch::config::ProcfsConfig;
use procwatch::procfs::Procfs;
use std::path::Path;
use tempfile::TempDir;

pub const TICKS: u64 = 100;

pub const NET_DEV_HEADER: &str = "Inter-|   Receive                                                |  Transmit\n face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n";

pub struct FakeProc {
    dir: TempDir,
}

impl FakeProc {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `rel` under the root, creating parent directories.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
        self
    }

    pub fn mkdir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    /// A process directory with all four sources populated.
    pub fn add_process(&self, pid: u32, comm: &str, cmdline: &[u8]) -> &Self {
        self.write(
            &format!("{pid}/stat"),
            stat_line(pid, comm, 'S', 150, 50, 1000),
        )
        .write(
            &format!("{pid}/status"),
            "Name:\tproc\nState:\tS (sleeping)\nVmSize:\t   20480 kB\nVmRSS:\t    5120 kB\nVmSwap:\t    1024 kB\nThreads:\t4\nvoluntary_ctxt_switches:\t42\nnonvoluntary_ctxt_switches:\t7\n",
        )
        .write(
            &format!("{pid}/io"),
            "rchar: 1\nwchar: 2\nread_bytes: 4096\nwrite_bytes: 8192\ncancelled_write_bytes: 0\n",
        )
        .write(&format!("{pid}/cmdline"), cmdline)
    }

    pub fn procfs(&self) -> Procfs {
        Procfs::new(&ProcfsConfig {
            root: self.dir.path().to_path_buf(),
            clock_ticks_per_sec: Some(TICKS),
            debug: true,
        })
    }
}

/// A stat line with the given state, user/system ticks and start tick.
pub fn stat_line(pid: u32, comm: &str, state: char, utime: u64, stime: u64, start: u64) -> String {
    format!(
        "{pid} ({comm}) {state} 1 {pid} {pid} 0 -1 4194560 500 0 0 0 {utime} {stime} 0 0 20 0 1 0 {start} 12345678 300 18446744073709551615 1 1 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0\n"
    )
}

// Network device counters: /proc/net/dev

use super::Procfs;
use super::parse::FixedLine;
use crate::error::{Defaulted, ProcfsError};
use crate::models::NetworkInterfaceStats;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

const HEADER_LINES: usize = 2;
/// Longest interface name accepted on a data line.
pub const MAX_INTERFACE_NAME: usize = 31;
// Counter columns after the name: 4 receive, 4 skipped, 4 transmit.
const COUNTER_FIELDS: usize = 12;
const SKIPPED_FIELDS: std::ops::Range<usize> = 4..8;

/// `name: rxBytes rxPackets rxErrs rxDrop <4 skipped> txBytes txPackets txErrs txDrop ...`
pub(crate) fn parse_netdev_line(source: &Path, line: &str) -> Result<NetworkInterfaceStats, Defaulted> {
    let (name, counters) = line
        .split_once(':')
        .ok_or_else(|| Defaulted::new(source, format!("no interface name in {:?}", line)))?;
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_INTERFACE_NAME {
        return Err(Defaulted::new(
            source,
            format!("bad interface name {:?}", name),
        ));
    }
    let f = FixedLine::whitespace(source, counters);
    f.require(COUNTER_FIELDS)?;
    for i in SKIPPED_FIELDS {
        f.field::<u64>(i)?;
    }
    Ok(NetworkInterfaceStats {
        name: name.to_string(),
        receive_bytes: f.field(0)?,
        receive_packets: f.field(1)?,
        receive_errors: f.field(2)?,
        receive_drops: f.field(3)?,
        transmit_bytes: f.field(8)?,
        transmit_packets: f.field(9)?,
        transmit_errors: f.field(10)?,
        transmit_drops: f.field(11)?,
    })
}

/// Single-pass sequence of interface records, read one line per `next`.
/// The first line that does not have the interface shape ends the sequence.
pub struct NetDevIter<'a> {
    procfs: &'a Procfs,
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    done: bool,
}

impl Iterator for NetDevIter<'_> {
    type Item = NetworkInterfaceStats;

    fn next(&mut self) -> Option<NetworkInterfaceStats> {
        if self.done {
            return None;
        }
        let next = match self.lines.next() {
            Some(Ok(line)) => self.procfs.degrade(parse_netdev_line(&self.path, &line)),
            Some(Err(e)) => self.procfs.degrade::<NetworkInterfaceStats, _>(Err(e)),
            None => None,
        };
        if next.is_none() {
            self.done = true;
        }
        next
    }
}

impl FusedIterator for NetDevIter<'_> {}

impl Procfs {
    /// Open the device table and skip its headers. Fails only if it cannot be opened.
    pub fn enumerate_network_interfaces(&self) -> Result<NetDevIter<'_>, ProcfsError> {
        let path = self.source("net/dev");
        let file = File::open(&path).map_err(|e| ProcfsError::io(&path, e))?;
        let mut lines = BufReader::new(file).lines();
        for _ in 0..HEADER_LINES {
            lines.next();
        }
        Ok(NetDevIter {
            procfs: self,
            path,
            lines,
            done: false,
        })
    }
}

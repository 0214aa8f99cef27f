// Swap, load average and CPU frequency readers against a synthetic tree

mod common;

use common::FakeProc;
use procwatch::error::ProcfsError;
use procwatch::models::{CoreFrequency, SwapInfo, SwapUsage};

const CPUINFO: &str = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Test CPU\ncpu MHz\t\t: 2400.000\ncache size\t: 8192 KB\n\nprocessor\t: 1\nvendor_id\t: GenuineIntel\nmodel name\t: Test CPU\ncpu MHz\t\t: 3100.5\ncache size\t: 8192 KB\n\n";

#[test]
fn swap_info_reports_kilobytes() {
    let fake = FakeProc::new();
    fake.write(
        "meminfo",
        "MemTotal:       16303428 kB\nMemFree:         1234567 kB\nSwapCached:            0 kB\nSwapTotal:          2048 kB\nSwapFree:            512 kB\n",
    );
    let swap = fake.procfs().read_swap_info();
    assert_eq!(swap.total_kb, 2048.0);
    assert_eq!(swap.free_kb, 512.0);
    assert_eq!(swap.used_kb, 1536.0);

    let mb = SwapUsage::from(swap);
    assert_eq!(mb.total_mb, 2.0);
    assert_eq!(mb.used_mb, 1.5);
    assert_eq!(mb.free_mb, 0.5);
}

#[test]
fn swap_info_without_meminfo_is_zero() {
    let fake = FakeProc::new();
    assert_eq!(fake.procfs().read_swap_info(), SwapInfo::default());
}

#[test]
fn swap_info_with_malformed_value_keeps_other_fields() {
    let fake = FakeProc::new();
    fake.write("meminfo", "SwapTotal:   lots kB\nSwapFree:   512 kB\n");
    let swap = fake.procfs().read_swap_info();
    assert_eq!(swap.total_kb, 0.0);
    assert_eq!(swap.free_kb, 512.0);
    assert_eq!(swap.used_kb, -512.0);
}

#[test]
fn load_info_parses_loadavg_and_counts_cores() {
    let fake = FakeProc::new();
    fake.write("loadavg", "0.50 0.40 0.30 1/120 9999\n")
        .write("cpuinfo", CPUINFO);
    let load = fake.procfs().read_load_info().unwrap();
    assert_eq!(load.load1, 0.50);
    assert_eq!(load.load5, 0.40);
    assert_eq!(load.load15, 0.30);
    assert_eq!(load.running_processes, 1);
    assert_eq!(load.total_processes, 120);
    assert_eq!(load.last_pid, 9999);
    assert_eq!(load.cpu_core_count, 2);
}

#[test]
fn load_info_missing_field_is_parse_error() {
    let fake = FakeProc::new();
    fake.write("loadavg", "0.50 0.40 0.30 1/120\n")
        .write("cpuinfo", CPUINFO);
    let err = fake.procfs().read_load_info().unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("loadavg"));
}

#[test]
fn load_info_missing_loadavg_is_io_error() {
    let fake = FakeProc::new();
    fake.write("cpuinfo", CPUINFO);
    let err = fake.procfs().read_load_info().unwrap_err();
    assert!(matches!(err, ProcfsError::Io { .. }));
}

#[test]
fn load_info_missing_cpuinfo_is_io_error() {
    let fake = FakeProc::new();
    fake.write("loadavg", "0.50 0.40 0.30 1/120 9999\n");
    let err = fake.procfs().read_load_info().unwrap_err();
    assert!(matches!(err, ProcfsError::Io { .. }));
    assert!(err.to_string().contains("cpuinfo"));
}

#[test]
fn core_frequencies_one_record_per_processor() {
    let fake = FakeProc::new();
    fake.write("cpuinfo", CPUINFO);
    let procfs = fake.procfs();
    let cores = procfs.enumerate_core_frequencies().unwrap();
    assert_eq!(
        cores,
        vec![
            CoreFrequency {
                core_id: 0,
                frequency_mhz: 2400.0
            },
            CoreFrequency {
                core_id: 1,
                frequency_mhz: 3100.5
            },
        ]
    );
    assert_eq!(cores.len() as u32, procfs.cpu_core_count().unwrap());
}

#[test]
fn core_frequencies_missing_cpuinfo_is_io_error() {
    let fake = FakeProc::new();
    let err = fake.procfs().enumerate_core_frequencies().unwrap_err();
    assert!(matches!(err, ProcfsError::Io { .. }));
}

#[test]
fn system_readers_are_idempotent() {
    let fake = FakeProc::new();
    fake.write("loadavg", "0.50 0.40 0.30 1/120 9999\n")
        .write("cpuinfo", CPUINFO)
        .write("meminfo", "SwapTotal: 2048 kB\nSwapFree: 512 kB\n");
    let procfs = fake.procfs();
    assert_eq!(procfs.read_swap_info(), procfs.read_swap_info());
    assert_eq!(procfs.read_load_info().unwrap(), procfs.read_load_info().unwrap());
    assert_eq!(
        procfs.enumerate_core_frequencies().unwrap(),
        procfs.enumerate_core_frequencies().unwrap()
    );
}

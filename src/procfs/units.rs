// Unit conversions: kernel clock ticks and kilobytes

const KB_PER_MB: f64 = 1024.0;

/// Used when the platform does not report a tick rate. 100 on every mainstream Linux target.
pub const DEFAULT_TICKS_PER_SECOND: u64 = 100;

/// The platform's ticks-per-second constant (`sysconf(_SC_CLK_TCK)`).
pub fn clock_ticks_per_second() -> u64 {
    #[cfg(target_os = "linux")]
    {
        // SAFETY: sysconf has no preconditions and only reads a constant.
        let hz = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        if hz > 0 {
            return hz as u64;
        }
    }
    DEFAULT_TICKS_PER_SECOND
}

pub fn ticks_to_seconds(ticks: u64, ticks_per_second: u64) -> f64 {
    if ticks_per_second == 0 {
        return 0.0;
    }
    ticks as f64 / ticks_per_second as f64
}

pub fn kb_to_mb(kb: f64) -> f64 {
    kb / KB_PER_MB
}

/// Ticks in a whole number of seconds, saturating at `u64::MAX`.
pub fn seconds_to_ticks(seconds: u64, ticks_per_second: u64) -> u64 {
    seconds.saturating_mul(ticks_per_second)
}

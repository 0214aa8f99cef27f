// Telemetry records produced by the procfs engine

mod network;
mod process;
mod system;

pub use network::NetworkInterfaceStats;
pub use process::{ProcessSnapshot, UNKNOWN_COMMAND};
pub use system::{CoreFrequency, LoadInfo, SwapInfo, SwapUsage};

//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the kernel.
//! - `adapters`: OS specific implementations (files, settings, editor tracking).

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};

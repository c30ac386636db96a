//! Driver for the NXP PCA9624 8-channel I2C LED dimmer.
//!
//! The controller speaks to the chip through the [`Transport`] trait, a
//! buffered two-wire transaction model. Real hardware plugs in through
//! [`I2cTransport`] over any [`embedded_hal::i2c::I2c`] bus; tests plug in a
//! recording fake. Drive commands are fire-and-forget: nothing returns a
//! `Result`, the status of the last transaction is kept on the controller.
//!
//! ```
//! use pca9624::{LedState, Pca9624, Transport};
//!
//! struct NullBus;
//!
//! impl Transport for NullBus {
//!     fn begin_transaction(&mut self, _address: u8) {}
//!     fn write_byte(&mut self, _byte: u8) {}
//!     fn end_transaction(&mut self, _send_stop: bool) -> u8 {
//!         0
//!     }
//!     fn request_bytes(&mut self, _address: u8, _count: u8) {}
//!     fn read_byte(&mut self) -> Option<u8> {
//!         None
//!     }
//! }
//!
//! let mut bus = NullBus;
//! let mut driver = Pca9624::new(0x60);
//! driver.setup(&mut bus);
//! driver.set_channel(0, 128);
//! driver.set_all(32);
//! assert_eq!(driver.last_error(), 0);
//! ```
#![no_std]

mod config;
mod diag;
mod i2c;
mod pca9624;
mod transport;

#[cfg(test)]
mod test_utils;

pub use config::{
    Register, AUTO_INCREMENT, CHANNEL_COUNT, MODE1_SLEEP, MODE1_SLEEP_BIT,
    MODE1_WAKE, SUPPRESSED_STATUS,
};
pub use diag::{Diagnostics, LogDiagnostics};
pub use i2c::I2cTransport;
pub use pca9624::{LedState, Pca9624};
pub use transport::Transport;

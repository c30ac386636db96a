use crate::config::*;
use crate::diag::{Diagnostics, LogDiagnostics};
use crate::transport::Transport;

/// Output mode of the eight LED drivers, two bits per channel.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    /// Driver is off.
    Disabled = 0b00,
    /// Driver is fully on, PWM has no effect.
    FullyOn = 0b01,
    /// Brightness follows the channel's PWMx register.
    Pwm = 0b10,
    /// Brightness follows both the channel's PWMx register and GRPPWM.
    PwmAndGroup = 0b11,
}

impl LedState {
    /// The 2-bit code replicated into all four channel slots of one LEDOUT
    /// register.
    fn packed(self) -> u8 {
        let code = self as u8;
        code << 6 | code << 4 | code << 2 | code
    }
}

/// Driver for the PCA9624 8-channel I2C LED dimmer.
///
/// The controller owns the device address, a write-only cache of the last
/// brightness requested per channel, and the status code of the most recent
/// transaction. The bus itself is attached after construction and may be a
/// mutable borrow, so one bus can serve several devices.
///
/// Transactions are fire-and-forget: no operation returns an error. The
/// status of the last transaction is available from [`last_error`] and,
/// with [`set_verbose`] enabled, failures are reported to the injected
/// [`Diagnostics`] sink.
///
/// [`last_error`]: Pca9624::last_error
/// [`set_verbose`]: Pca9624::set_verbose
pub struct Pca9624<BUS, D = LogDiagnostics> {
    bus: Option<BUS>,
    address: u8,
    channels: [u8; CHANNEL_COUNT],
    verbose: bool,
    last_error: u8,
    diagnostics: D,
}

impl<BUS> Pca9624<BUS, LogDiagnostics> {
    /// Create a new driver for the device at the given 7-bit address.
    /// Performs no bus I/O.
    pub fn new(address: u8) -> Self {
        Self::with_diagnostics(address, LogDiagnostics)
    }
}

impl<BUS, D> Pca9624<BUS, D> {
    /// Like [`Pca9624::new`], with a caller-supplied diagnostics sink.
    pub fn with_diagnostics(address: u8, diagnostics: D) -> Self {
        Self {
            bus: None,
            address: address & 0x7f,
            channels: [0; CHANNEL_COUNT],
            verbose: false,
            last_error: 0,
            diagnostics,
        }
    }

    /// Change the device address. Takes effect on the next transaction.
    pub fn set_address(&mut self, address: u8) {
        self.address = address & 0x7f;
    }

    /// The 7-bit device address transactions are issued to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Bind the bus transport. Calling again rebinds to a new transport;
    /// until the first call, every operation is a no-op on the bus.
    pub fn attach(&mut self, bus: BUS) {
        self.bus = Some(bus);
    }

    /// Enable or disable error reporting through the diagnostics sink.
    /// Has no effect on transaction outcomes.
    pub fn set_verbose(&mut self, enabled: bool) {
        self.verbose = enabled;
    }

    /// Status code of the most recent transaction, `0` on success.
    pub fn last_error(&self) -> u8 {
        self.last_error
    }

    /// Last brightness requested per channel.
    ///
    /// The cache records what was asked for, not what the chip confirmed: a
    /// failed write still updates it.
    pub fn channels(&self) -> &[u8; CHANNEL_COUNT] {
        &self.channels
    }

    /// Detach and return the bus transport, if one is attached.
    pub fn release(&mut self) -> Option<BUS> {
        self.bus.take()
    }
}

impl<BUS: Transport, D: Diagnostics> Pca9624<BUS, D> {
    /// Bring the chip up: bind the transport, leave sleep mode and enable
    /// individual plus group PWM control on all channels. Safe to call
    /// again, it re-applies the same state.
    pub fn setup(&mut self, bus: BUS) {
        self.attach(bus);
        self.sleep(false);
        self.set_output_state(LedState::PwmAndGroup);
    }

    /// Put the chip to sleep (oscillator off) or wake it up. The all-call
    /// response stays enabled in both states.
    pub fn sleep(&mut self, enabled: bool) {
        let data = if enabled { MODE1_SLEEP } else { MODE1_WAKE };
        self.write_register(Register::Mode1 as u8, data);
    }

    /// Apply one output mode to all eight channels. Packs the 2-bit code
    /// into both LEDOUT registers and writes them in one auto-increment
    /// transaction.
    pub fn set_output_state(&mut self, state: LedState) {
        let packed = state.packed();
        self.write_registers(Register::LedOut0 as u8, &[packed, packed]);
    }

    /// Set the group duty cycle (GRPPWM), scaling every channel in
    /// [`LedState::PwmAndGroup`] mode.
    pub fn set_group_pwm(&mut self, level: u8) {
        self.write_register(Register::GrpPwm as u8, level);
    }

    /// Set the brightness of one channel. Channels out of `0..8` are
    /// rejected: no transaction, no cache update.
    pub fn set_channel(&mut self, channel: u8, level: u8) {
        let Some(cached) = self.channels.get_mut(channel as usize) else {
            return;
        };
        *cached = level;
        self.write_register(Register::Pwm0 as u8 + channel, level);
    }

    /// Set every channel to the same brightness in a single 8-byte
    /// auto-increment transaction.
    pub fn set_all(&mut self, level: u8) {
        self.set_channels([level; CHANNEL_COUNT]);
    }

    /// Set all eight channels in one auto-increment transaction, channel
    /// order 0 to 7.
    pub fn set_channels(&mut self, levels: [u8; CHANNEL_COUNT]) {
        self.channels = levels;
        self.write_registers(Register::Pwm0 as u8, &levels);
    }

    /// Read one register. Not used by any drive path, available for
    /// diagnostics.
    pub fn read_register(&mut self, register: Register) -> u8 {
        let mut data = [0];
        self.read_registers(register, &mut data);
        data[0]
    }

    /// Read consecutive registers starting at `register` into `dest`.
    ///
    /// The address write ends without a stop so the read request follows
    /// with a repeated start. Bytes arriving short of `dest.len()` leave the
    /// tail untouched.
    pub fn read_registers(&mut self, register: Register, dest: &mut [u8]) {
        let Some(bus) = self.bus.as_mut() else {
            return;
        };

        bus.begin_transaction(self.address);
        bus.write_byte(register as u8);
        let status = bus.end_transaction(false);

        bus.request_bytes(self.address, dest.len() as u8);
        for slot in dest.iter_mut() {
            match bus.read_byte() {
                Some(byte) => *slot = byte,
                None => break,
            }
        }

        self.record_status(status);
    }

    fn write_register(&mut self, register: u8, data: u8) {
        let Some(bus) = self.bus.as_mut() else {
            return;
        };

        bus.begin_transaction(self.address);
        bus.write_byte(register);
        bus.write_byte(data);
        let status = bus.end_transaction(true);

        self.record_status(status);
    }

    fn write_registers(&mut self, register: u8, data: &[u8]) {
        let Some(bus) = self.bus.as_mut() else {
            return;
        };

        bus.begin_transaction(self.address);
        bus.write_byte(register | AUTO_INCREMENT);
        for byte in data {
            bus.write_byte(*byte);
        }
        let status = bus.end_transaction(true);

        self.record_status(status);
    }

    fn record_status(&mut self, status: u8) {
        self.last_error = status;
        if status == 0 || status == SUPPRESSED_STATUS {
            return;
        }
        if self.verbose {
            self.diagnostics.transport_error(status);
        }
    }
}

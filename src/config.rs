/// Number of PWM output channels on the chip.
pub const CHANNEL_COUNT: usize = 8;

/// Auto-increment flag. OR-ed into the register-address byte, it makes the
/// chip advance the target register after every data byte in the same
/// transaction.
pub const AUTO_INCREMENT: u8 = 0x80;

/// Register map of the PCA9624.
///
/// PWM0..PWM7 and LEDOUT0..LEDOUT1 are contiguous and eligible for
/// auto-increment writes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Mode1 = 0x00,
    Mode2 = 0x01,
    Pwm0 = 0x02,
    Pwm1 = 0x03,
    Pwm2 = 0x04,
    Pwm3 = 0x05,
    Pwm4 = 0x06,
    Pwm5 = 0x07,
    Pwm6 = 0x08,
    Pwm7 = 0x09,
    GrpPwm = 0x0a,
    GrpFreq = 0x0b,
    LedOut0 = 0x0c,
    LedOut1 = 0x0d,
    SubAdr1 = 0x0e,
    SubAdr2 = 0x0f,
    SubAdr3 = 0x10,
    AllCallAdr = 0x11,
}

/// MODE1 pattern for normal operation: oscillator on, all-call response
/// enabled.
pub const MODE1_WAKE: u8 = 0b1000_0001;

/// MODE1 pattern for low-power mode: oscillator off, all-call response
/// enabled. Differs from [`MODE1_WAKE`] only in the sleep bit.
pub const MODE1_SLEEP: u8 = 0b1001_0001;

/// The sleep bit of MODE1.
pub const MODE1_SLEEP_BIT: u8 = 0b0001_0000;

/// Status code the stickbreaker ESP32 Wire fork returns on success. Treated
/// as non-error unconditionally.
pub const SUPPRESSED_STATUS: u8 = 7;

use embedded_hal::i2c::{Error, ErrorKind, I2c, NoAcknowledgeSource};

use crate::transport::Transport;

/// [`Transport`] over any [`embedded_hal::i2c::I2c`] bus.
///
/// Queued bytes are staged in a fixed-capacity buffer and sent as one I2C
/// write when the transaction ends. A transaction ended without a stop is
/// held back and replayed as a combined write-read when the next byte
/// request arrives, which gives the repeated-start shape register reads
/// need.
///
/// Error kinds are folded into the classic Wire status codes: 1 buffer
/// overflow, 2 address NACK, 3 data NACK, 4 any other bus error.
pub struct I2cTransport<I2C, const N: usize = 32> {
    i2c: I2C,
    address: u8,
    tx: heapless::Vec<u8, N>,
    rx: heapless::Deque<u8, N>,
    overflow: bool,
    held: bool,
}

impl<I2C, const N: usize> I2cTransport<I2C, N> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            tx: heapless::Vec::new(),
            rx: heapless::Deque::new(),
            overflow: false,
            held: false,
        }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

fn status_from_error<E: Error>(error: &E) -> u8 {
    match error.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => 2,
        ErrorKind::NoAcknowledge(_) => 3,
        _ => 4,
    }
}

impl<I2C: I2c, const N: usize> Transport for I2cTransport<I2C, N> {
    fn begin_transaction(&mut self, address: u8) {
        self.address = address;
        self.tx.clear();
        self.overflow = false;
        self.held = false;
    }

    fn write_byte(&mut self, byte: u8) {
        if self.tx.push(byte).is_err() {
            self.overflow = true;
        }
    }

    fn end_transaction(&mut self, send_stop: bool) -> u8 {
        if self.overflow {
            return 1;
        }
        if !send_stop {
            // Keep the staged bytes, the next request_bytes turns them
            // into a write-read with a repeated start.
            self.held = true;
            return 0;
        }
        match self.i2c.write(self.address, &self.tx) {
            Ok(()) => 0,
            Err(error) => status_from_error(&error),
        }
    }

    fn request_bytes(&mut self, address: u8, count: u8) {
        self.rx.clear();

        let mut buffer = [0u8; N];
        let count = (count as usize).min(N);
        let result = if self.held {
            self.held = false;
            self.i2c.write_read(address, &self.tx, &mut buffer[..count])
        } else {
            self.i2c.read(address, &mut buffer[..count])
        };

        // A failed read leaves nothing to drain, matching a bus that
        // clocked in zero bytes.
        if result.is_ok() {
            for byte in &buffer[..count] {
                let _ = self.rx.push_back(*byte);
            }
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

/// Bus transport the driver issues its transactions against.
///
/// Models a two-wire controller with a transmit buffer: a transaction is
/// opened for a device address, bytes are queued, and the whole buffer goes
/// out when the transaction ends. The end-of-transaction status byte is the
/// only feedback the driver gets; `0` means success and every other value is
/// transport-defined.
///
/// Reads use the second pair of methods: `request_bytes` clocks in up to
/// `count` bytes from the device and `read_byte` drains them in the order
/// they arrived, returning `None` once the receive buffer is empty.
pub trait Transport {
    /// Open a transaction addressed to the 7-bit device address.
    fn begin_transaction(&mut self, address: u8);

    /// Queue one byte for transmission.
    fn write_byte(&mut self, byte: u8);

    /// Transmit the queued bytes and return the status code. When
    /// `send_stop` is false the bus is kept claimed so the next request
    /// starts with a repeated start instead of a stop/start pair.
    fn end_transaction(&mut self, send_stop: bool) -> u8;

    /// Clock in `count` bytes from the device at `address`.
    fn request_bytes(&mut self, address: u8, count: u8);

    /// Drain one received byte, `None` when nothing is left.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<T> Transport for &mut T
where
    T: Transport,
{
    fn begin_transaction(&mut self, address: u8) {
        T::begin_transaction(self, address);
    }

    fn write_byte(&mut self, byte: u8) {
        T::write_byte(self, byte);
    }

    fn end_transaction(&mut self, send_stop: bool) -> u8 {
        T::end_transaction(self, send_stop)
    }

    fn request_bytes(&mut self, address: u8, count: u8) {
        T::request_bytes(self, address, count);
    }

    fn read_byte(&mut self) -> Option<u8> {
        T::read_byte(self)
    }
}

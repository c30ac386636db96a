use crate::diag::Diagnostics;
use crate::transport::Transport;

/// Recording bus for tests. Captures the full transaction sequence and
/// returns a programmable status code from `end_transaction`.
pub(crate) struct FakeBus<const N: usize> {
    pub(crate) started: heapless::Vec<u8, 8>,
    pub(crate) write_data: heapless::Vec<u8, N>,
    pub(crate) stops: heapless::Vec<bool, 8>,
    pub(crate) requests: heapless::Vec<(u8, u8), 4>,
    pub(crate) read_data: heapless::Deque<u8, N>,
    pub(crate) status: u8,
}

impl<const N: usize> FakeBus<N> {
    pub(crate) fn new() -> Self {
        Self {
            started: heapless::Vec::new(),
            write_data: heapless::Vec::new(),
            stops: heapless::Vec::new(),
            requests: heapless::Vec::new(),
            read_data: heapless::Deque::new(),
            status: 0,
        }
    }

    pub(crate) fn new_with_status(status: u8) -> Self {
        let mut bus = Self::new();
        bus.status = status;
        bus
    }

    pub(crate) fn new_with_read_data(read_data: &[u8]) -> Self {
        let mut bus = Self::new();
        for byte in read_data {
            bus.read_data.push_back(*byte).unwrap();
        }
        bus
    }

    pub(crate) fn write_data_as_ref(&self) -> &[u8] {
        self.write_data.as_slice()
    }
}

impl<const N: usize> Transport for FakeBus<N> {
    fn begin_transaction(&mut self, address: u8) {
        self.started.push(address).unwrap();
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_data.push(byte).unwrap();
    }

    fn end_transaction(&mut self, send_stop: bool) -> u8 {
        self.stops.push(send_stop).unwrap();
        self.status
    }

    fn request_bytes(&mut self, address: u8, count: u8) {
        self.requests.push((address, count)).unwrap();
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.read_data.pop_front()
    }
}

/// Diagnostics sink that records every reported code.
pub(crate) struct RecordingDiagnostics {
    pub(crate) codes: heapless::Vec<u8, 8>,
}

impl RecordingDiagnostics {
    pub(crate) fn new() -> Self {
        Self {
            codes: heapless::Vec::new(),
        }
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn transport_error(&mut self, code: u8) {
        self.codes.push(code).unwrap();
    }
}

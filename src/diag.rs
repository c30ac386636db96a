/// Sink for transaction error reports.
///
/// The controller calls this instead of printing anywhere itself, so hosts
/// decide where diagnostics go and tests can capture the invocations.
pub trait Diagnostics {
    /// Called with the status code of a failed transaction. Never called for
    /// status `0` or for the suppressed false-positive code.
    fn transport_error(&mut self, code: u8);
}

impl<T> Diagnostics for &mut T
where
    T: Diagnostics,
{
    fn transport_error(&mut self, code: u8) {
        T::transport_error(self, code);
    }
}

/// Default sink, reports through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn transport_error(&mut self, code: u8) {
        log::error!("I2C error code: {}", code);
    }
}

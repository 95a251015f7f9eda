/// Failure classes surfaced by an exchange.
#[derive(Debug)]
pub enum Error {
    /// The payload argument is not a sequence of hex digit pairs.
    InvalidInput(String),
    /// The serial device could not be opened or enumerated.
    DeviceUnavailable(serialport::Error),
    /// A write or read failed after the device was opened.
    Transport(std::io::Error),
}

impl From<serialport::Error> for Error {
    fn from(value: serialport::Error) -> Self {
        Self::DeviceUnavailable(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Transport(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(reason) => write!(f, "invalid hex payload: {reason}"),
            Error::DeviceUnavailable(e) => write!(f, "serial device unavailable: {e}"),
            Error::Transport(e) => write!(f, "serial transfer failed: {e}"),
        }
    }
}

impl std::error::Error for Error {}

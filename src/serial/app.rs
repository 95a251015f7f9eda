use log::debug;
use serialport::{DataBits, Parity, SerialPort};
use std::io::{self, Read, Write};
use std::time::Duration;

use super::utils::bytes_to_hex_string;
use crate::error::Error;

/// Fixed line parameters for the exchange.
pub const BAUD_RATE: u32 = 2400;
pub const READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Open `path` with the fixed line parameters. Stop bits are left at the
/// library default.
pub fn open_device(path: &str) -> Result<Box<dyn SerialPort>, Error> {
    debug!("opening {path} at {BAUD_RATE} baud, odd parity, {READ_TIMEOUT:?} read timeout");
    let port = serialport::new(path, BAUD_RATE)
        .data_bits(DataBits::Eight)
        .parity(Parity::Odd)
        .timeout(READ_TIMEOUT)
        .open()?;
    Ok(port)
}

/// Write `payload` to `port`, then drain the response one byte at a time
/// until a read times out. The `[TX]`/`[RX]` trace lines go to `out`; the
/// received bytes are also returned.
///
/// There is no overall deadline and no byte cap on the receive side: as
/// long as each read completes within the port timeout, the loop keeps
/// going.
pub fn exchange<P, W>(port: &mut P, payload: &[u8], mut out: W) -> Result<Vec<u8>, Error>
where
    P: Read + Write,
    W: io::Write,
{
    writeln!(out, "[TX] {}", bytes_to_hex_string(payload))?;
    port.write_all(payload)?;
    port.flush()?;
    debug!("wrote {} bytes", payload.len());

    write!(out, "[RX] ")?;
    out.flush()?;
    let mut received = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match port.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                received.push(byte[0]);
                write!(out, "{:02x} ", byte[0])?;
                out.flush()?;
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
            Err(e) => return Err(Error::Transport(e)),
        }
    }
    writeln!(out)?;
    debug!("read {} bytes before timeout", received.len());
    Ok(received)
}

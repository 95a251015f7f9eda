mod error;
mod serial;

use clap::Parser;
use log::debug;

use error::Error;
use serial::app;
use serial::utils::hex_to_bytes;

/// Send a hex-encoded payload over a serial line and print whatever comes
/// back before the read timeout elapses.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Serial device to open (e.g. '/dev/ttyUSB0')
    #[arg(required_unless_present = "list_ports")]
    serial_device: Option<String>,

    /// Data to send, in hex (e.g. '55FF00609F609F')
    #[arg(required_unless_present = "list_ports")]
    data_to_send: Option<String>,

    /// List the serial devices found on this system and exit
    #[arg(long, conflicts_with_all = ["serial_device", "data_to_send"])]
    list_ports: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_ports {
        list_ports()?;
        return Ok(());
    }

    let (Some(device), Some(payload)) = (cli.serial_device, cli.data_to_send) else {
        unreachable!("clap requires both positional arguments");
    };

    let bytes = hex_to_bytes(&payload)?;
    let mut port = app::open_device(&device)?;
    let received = app::exchange(&mut port, &bytes, std::io::stdout().lock())?;
    debug!("exchange done: {} bytes sent, {} received", bytes.len(), received.len());
    Ok(())
}

fn list_ports() -> Result<(), Error> {
    let ports = serialport::available_ports()?;
    if ports.is_empty() {
        println!("no serial ports found");
    }
    for port in ports {
        println!("{}", port.port_name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

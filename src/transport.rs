//! Transports carrying sysex frames to a Firmata host.
//!
//! Each transport wraps the payload in the sysex envelope and writes it out.
//! There is no response parsing, no retry and no locking here; callers that
//! share a transport across threads serialize access themselves.

use std::io::Write;
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use log::trace;
use serialport::SerialPort;

use crate::protocol::sysex::wrap_sysex;
use crate::Error;

/// A connection able to deliver a sysex payload to the firmware.
pub trait SysexTransport {
    /// Envelope and send one payload. Exactly one write per call; a failure
    /// is returned unchanged to the caller.
    fn send_sysex(&mut self, payload: &[u8]) -> Result<(), Error>;
}

impl<T: SysexTransport + ?Sized> SysexTransport for Box<T> {
    fn send_sysex(&mut self, payload: &[u8]) -> Result<(), Error> {
        (**self).send_sysex(payload)
    }
}

fn log_frame(target: &str, frame: &[u8]) {
    if log::log_enabled!(log::Level::Trace) {
        let hex: String = frame
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        trace!("{}: {}", target, hex);
    }
}

/// Firmata host on a local serial port.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open a serial port at 8N1 with no flow control.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self, Error> {
        let mut port = serialport::new(port_name, baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(1000))
            .open()?;

        // Boards reset on DTR; assert it and give the firmware time to boot.
        port.write_data_terminal_ready(true)?;
        thread::sleep(Duration::from_millis(100));

        Ok(SerialTransport { port })
    }
}

impl SysexTransport for SerialTransport {
    fn send_sysex(&mut self, payload: &[u8]) -> Result<(), Error> {
        let frame = wrap_sysex(payload);
        log_frame("serial tx", &frame);
        self.port.write_all(&frame)?;
        self.port.flush()?;
        Ok(())
    }
}

/// Firmata host behind a TCP bridge (a WiFi board or `ser2net`).
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to `addr` (`host:port`).
    pub fn connect(addr: &str) -> Result<Self, Error> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        Ok(TcpTransport { stream })
    }
}

impl SysexTransport for TcpTransport {
    fn send_sysex(&mut self, payload: &[u8]) -> Result<(), Error> {
        let frame = wrap_sysex(payload);
        log_frame("tcp tx", &frame);
        self.stream.write_all(&frame)?;
        self.stream.flush()?;
        Ok(())
    }
}

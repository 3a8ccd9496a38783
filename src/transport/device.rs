//! # Device Transport
//!
//! Writes raw receipt bytes to a printer device node: a Bluetooth RFCOMM
//! binding (`/dev/rfcomm0`), a USB/serial TTY, or a plain file.
//!
//! ## Bluetooth Setup (Linux)
//!
//! Before using this transport, the printer must be paired and bound to an
//! RFCOMM device:
//!
//! ```bash
//! $ bluetoothctl
//! [bluetooth]# pair 66:22:XX:XX:XX:XX
//! $ sudo rfcomm bind 0 66:22:XX:XX:XX:XX
//! # This creates /dev/rfcomm0
//! ```
//!
//! ## TTY Configuration
//!
//! When the path is a terminal it is switched to raw mode so binary data
//! is transmitted without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! Regular files are written as-is, which is handy for capturing jobs.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::Delivery;
use crate::error::DeliveryError;
use crate::protocol::stream::ByteStream;

/// Default RFCOMM device path
pub const DEFAULT_DEVICE: &str = "/dev/rfcomm0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 512;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 5;

/// # Device Printer Transport
///
/// ## Example
///
/// ```no_run
/// use recibo::transport::{Delivery, DeviceTransport};
/// use recibo::protocol::stream::ByteStream;
///
/// let mut stream = ByteStream::new();
/// stream.init().text("hello").line_feed().cut();
///
/// let mut transport = DeviceTransport::open("/dev/rfcomm0")?;
/// transport.deliver(&stream)?;
///
/// # Ok::<(), recibo::error::DeliveryError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    path: String,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need root or dialout group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, DeliveryError> {
        let path = device.as_ref();
        let path_str = path.display().to_string();

        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|source| DeliveryError::Open {
                path: path_str.clone(),
                source,
            })?;

        let fd = file.as_raw_fd();
        // SAFETY: fd is owned by `file`, which outlives the call.
        if unsafe { libc::isatty(fd) } == 1 {
            configure_tty_raw(fd).map_err(|e| DeliveryError::Configure {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
            debug!(device = %path_str, "configured raw tty");
        }

        Ok(Self {
            file,
            path: path_str,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes.
    ///
    /// Larger chunks are faster but may overflow the Bluetooth buffer.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Write raw bytes, chunked, then flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), DeliveryError> {
        if data.len() <= self.chunk_size {
            self.file.write_all(data).map_err(DeliveryError::Write)?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file.write_all(chunk).map_err(DeliveryError::Write)?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file.flush().map_err(DeliveryError::Write)
    }
}

impl Delivery for DeviceTransport {
    fn deliver(&mut self, stream: &ByteStream) -> Result<(), DeliveryError> {
        info!(device = %self.path, bytes = stream.len(), "sending receipt to device");
        self.write_all(stream.as_bytes())
    }
}

/// Configure a file descriptor for raw TTY mode.
///
/// This disables all input/output processing so binary data passes through
/// unmodified.
///
/// Note: IXON/IXOFF/IXANY disable XON/XOFF software flow control. This matters
/// because `GS ! 0x11` (double size on) carries the XON byte.
fn configure_tty_raw(fd: i32) -> io::Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    // SAFETY: tcgetattr fully initialises termios when it returns 0.
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // SAFETY: termios was initialised by tcgetattr above.
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

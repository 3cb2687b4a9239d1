//! Serial link to the module
//!
//! The AX93304 speaks raw 8N1 with no handshake, so the transport is a
//! thin seam: ordered byte writes out, an optional single byte back when
//! polled. Driver logic is generic over [`Transport`] and is tested
//! against an in-memory implementation.

use std::ffi::CString;
use std::io;
use std::mem;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use log::debug;

/// One-way-framed serial link
pub trait Transport {
    /// Write `bytes` in order, completely
    fn send(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Return one byte if the device has one ready, without blocking
    fn try_recv_byte(&mut self) -> io::Result<Option<u8>>;
}

/// A character device configured for the module's link discipline
#[derive(Debug)]
pub struct SerialPort {
    fd: OwnedFd,
}

impl SerialPort {
    /// Open `device` and configure raw 8N1 at `speed` bits per second
    ///
    /// The input direction is left at B0; the module's reply path is
    /// clocked independently of the configured output speed.
    pub fn open(device: &str, speed: u32) -> io::Result<Self> {
        let path = CString::new(device)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "device path contains NUL"))?;

        let raw = unsafe { libc::open(path.as_ptr(), libc::O_RDWR | libc::O_NOCTTY | libc::O_NDELAY) };
        if raw < 0 {
            return Err(io::Error::last_os_error());
        }
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        unsafe {
            libc::tcflush(raw, libc::TCIOFLUSH);

            let mut portset: libc::termios = mem::zeroed();
            libc::cfmakeraw(&mut portset);
            portset.c_cc[libc::VMIN] = 1;
            portset.c_cc[libc::VTIME] = 0;
            libc::cfsetospeed(&mut portset, speed_code(speed));
            libc::cfsetispeed(&mut portset, libc::B0);

            if libc::tcsetattr(raw, libc::TCSANOW, &portset) != 0 {
                return Err(io::Error::last_os_error());
            }
            libc::tcflush(raw, libc::TCIOFLUSH);
        }

        debug!("ax93304: opened {device} at {speed} baud");
        Ok(Self { fd })
    }

    fn raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

/// Map bits per second to the termios speed constant
///
/// Callers validate the speed first; anything unexpected lands on B9600.
fn speed_code(speed: u32) -> libc::speed_t {
    match speed {
        1200 => libc::B1200,
        2400 => libc::B2400,
        19200 => libc::B19200,
        _ => libc::B9600,
    }
}

impl Transport for SerialPort {
    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut rest = bytes;
        while !rest.is_empty() {
            let written =
                unsafe { libc::write(self.raw_fd(), rest.as_ptr().cast(), rest.len()) };
            if written < 0 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
            rest = &rest[written as usize..];
        }
        Ok(())
    }

    fn try_recv_byte(&mut self) -> io::Result<Option<u8>> {
        let mut pollfd = libc::pollfd {
            fd: self.raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };

        // Zero timeout: the server polls many backends cooperatively and
        // none of them may stall.
        let ready = unsafe { libc::poll(&mut pollfd, 1, 0) };
        if ready < 0 {
            return Err(io::Error::last_os_error());
        }
        if ready == 0 {
            return Ok(None);
        }

        let mut byte = 0u8;
        let read = unsafe { libc::read(self.raw_fd(), (&mut byte as *mut u8).cast(), 1) };
        if read < 0 {
            return Err(io::Error::last_os_error());
        }
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(byte))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Transport;
    use std::collections::VecDeque;
    use std::io;

    /// In-memory link that records writes and scripts replies
    #[derive(Debug, Default)]
    pub struct MockTransport {
        pub written: Vec<u8>,
        pub replies: VecDeque<u8>,
        pub fail_sends: bool,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_reply(byte: u8) -> Self {
            let mut mock = Self::default();
            mock.replies.push_back(byte);
            mock
        }
    }

    impl Transport for MockTransport {
        fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
            if self.fail_sends {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "link down"));
            }
            self.written.extend_from_slice(bytes);
            Ok(())
        }

        fn try_recv_byte(&mut self) -> io::Result<Option<u8>> {
            Ok(self.replies.pop_front())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_device_fails() {
        let err = SerialPort::open("/nonexistent/lcd-device", 9600).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn speed_code_covers_supported_rates() {
        assert_eq!(speed_code(1200), libc::B1200);
        assert_eq!(speed_code(2400), libc::B2400);
        assert_eq!(speed_code(9600), libc::B9600);
        assert_eq!(speed_code(19200), libc::B19200);
        assert_eq!(speed_code(0), libc::B9600);
    }
}

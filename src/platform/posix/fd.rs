use std::io;
use std::os::unix::io::{AsRawFd, IntoRawFd, RawFd};

/// POSIX file descriptor with close-on-drop ownership.
pub(crate) struct Fd {
    pub(crate) inner: RawFd,
}

impl Fd {
    pub fn new(value: RawFd) -> io::Result<Self> {
        if value < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Self::new_uncheck(value))
    }
    pub fn new_uncheck(value: RawFd) -> Self {
        Fd { inner: value }
    }
}

impl AsRawFd for Fd {
    fn as_raw_fd(&self) -> RawFd {
        self.inner
    }
}

impl IntoRawFd for Fd {
    fn into_raw_fd(mut self) -> RawFd {
        let fd = self.inner;
        self.inner = -1;
        fd
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        if self.inner >= 0 {
            unsafe { libc::close(self.inner) };
        }
    }
}

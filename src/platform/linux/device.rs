use crate::builder::DeviceConfig;
use crate::error::{Error, Result};
use crate::platform::linux::sys::*;
use crate::platform::posix::Fd;
use libc::{self, c_char, c_short, ifreq, IFF_NO_PI, IFF_TAP, IFNAMSIZ, O_RDWR};
use std::ffi::{CStr, CString};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, IntoRawFd, RawFd};
use std::{io, mem, ptr};

/// A TAP device backed by the TUN/TAP Linux driver.
pub struct Device {
    fd: Fd,
}

impl Device {
    /// Open `/dev/net/tun` and attach the Ethernet-layer interface described
    /// by `config`.
    pub(crate) fn new(config: DeviceConfig) -> Result<Self> {
        let dev_name = match config.dev_name.as_deref() {
            Some(name) if !name.is_empty() => {
                let name = CString::new(name)?;

                if name.as_bytes_with_nul().len() > IFNAMSIZ {
                    return Err(Error::NameTooLong);
                }

                Some(name)
            }
            _ => None,
        };
        unsafe {
            let mut req: ifreq = mem::zeroed();

            if let Some(dev_name) = dev_name.as_ref() {
                ptr::copy_nonoverlapping(
                    dev_name.as_ptr() as *const c_char,
                    req.ifr_name.as_mut_ptr(),
                    dev_name.as_bytes_with_nul().len(),
                );
            }
            // Ethernet frames without the protocol-information prefix. The
            // allocator supports no other flag combination.
            req.ifr_ifru.ifru_flags = (IFF_TAP | IFF_NO_PI) as c_short;

            let fd = libc::open(c"/dev/net/tun".as_ptr() as *const _, O_RDWR, 0);
            let tap_fd = Fd::new(fd)?;
            if let Err(err) = tunsetiff(tap_fd.inner, &mut req as *mut _ as *mut _) {
                let err = io::Error::from(err);
                log::error!("TUNSETIFF failed: {err}");
                return Err(Error::Io(err));
            }
            // The kernel wrote the actual name back into the request.
            let name = CStr::from_ptr(req.ifr_name.as_ptr() as *const c_char);
            log::debug!(
                "attached tap interface {:?} with flags {:#06x}",
                name,
                req.ifr_ifru.ifru_flags
            );
            Ok(Device { fd: tap_fd })
        }
    }

    pub(crate) fn from_fd(fd: RawFd) -> Self {
        Device {
            fd: Fd::new_uncheck(fd),
        }
    }

    /// Interface name as reported by the kernel, kernel-assigned when the
    /// builder left it unset.
    pub fn name(&self) -> io::Result<String> {
        unsafe {
            let mut req: ifreq = mem::zeroed();
            if let Err(err) = tungetiff(self.as_raw_fd(), &mut req as *mut _ as *mut _) {
                return Err(io::Error::from(err));
            }
            let c_str = CStr::from_ptr(req.ifr_name.as_ptr() as *const c_char);
            Ok(c_str.to_string_lossy().into_owned())
        }
    }
}

impl FromRawFd for Device {
    unsafe fn from_raw_fd(fd: RawFd) -> Self {
        Device::from_fd(fd)
    }
}

impl AsRawFd for Device {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl AsFd for Device {
    fn as_fd(&self) -> BorrowedFd<'_> {
        unsafe { BorrowedFd::borrow_raw(self.as_raw_fd()) }
    }
}

impl IntoRawFd for Device {
    fn into_raw_fd(self) -> RawFd {
        self.fd.into_raw_fd()
    }
}

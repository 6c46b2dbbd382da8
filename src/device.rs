use crate::Device;
use std::ops::Deref;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, IntoRawFd, RawFd};

#[repr(transparent)]
pub struct SyncDevice(pub(crate) Device);

impl SyncDevice {
    /// # Safety
    /// The fd passed in must be an owned file descriptor; in particular, it must be open and valid.
    pub unsafe fn from_fd(fd: RawFd) -> Self {
        SyncDevice(Device::from_fd(fd))
    }
}

impl Deref for SyncDevice {
    type Target = Device;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRawFd for SyncDevice {
    fn as_raw_fd(&self) -> RawFd {
        self.0.as_raw_fd()
    }
}

impl AsFd for SyncDevice {
    fn as_fd(&self) -> BorrowedFd<'_> {
        unsafe { BorrowedFd::borrow_raw(self.as_raw_fd()) }
    }
}

impl IntoRawFd for SyncDevice {
    fn into_raw_fd(self) -> RawFd {
        self.0.into_raw_fd()
    }
}

impl FromRawFd for SyncDevice {
    unsafe fn from_raw_fd(fd: RawFd) -> Self {
        SyncDevice::from_fd(fd)
    }
}

use crate::error::Result;
use crate::platform::Device;
use crate::SyncDevice;

/// Configuration handed down to the platform allocator.
#[derive(Clone, Default, Debug)]
pub(crate) struct DeviceConfig {
    pub dev_name: Option<String>,
}

/// Builder for a TAP interface.
#[derive(Default)]
pub struct DeviceBuilder {
    dev_name: Option<String>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Request a specific interface name. Leave unset (or empty) to let the
    /// kernel pick the next free `tapN` name.
    pub fn name<S: Into<String>>(mut self, dev_name: S) -> Self {
        self.dev_name = Some(dev_name.into());
        self
    }
    pub(crate) fn build_config(&mut self) -> DeviceConfig {
        DeviceConfig {
            dev_name: self.dev_name.take(),
        }
    }
    pub fn build_sync(mut self) -> Result<SyncDevice> {
        let device = Device::new(self.build_config())?;
        Ok(SyncDevice(device))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn name_longer_than_ifnamsiz_is_rejected() {
        let result = DeviceBuilder::new().name("a".repeat(40)).build_sync();
        match result {
            Err(Error::NameTooLong) => {}
            Err(err) => panic!("expected NameTooLong, got {err:?}"),
            Ok(_) => panic!("expected NameTooLong, got a device"),
        }
    }

    #[test]
    fn name_with_interior_nul_is_rejected() {
        let result = DeviceBuilder::new().name("tap\0zero").build_sync();
        match result {
            Err(Error::Nul(_)) => {}
            Err(err) => panic!("expected Nul, got {err:?}"),
            Ok(_) => panic!("expected Nul, got a device"),
        }
    }
}

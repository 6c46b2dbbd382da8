/*!
# Example:
```no_run
use tapdev::DeviceBuilder;

fn main() -> Result<(), tapdev::Error> {
    let dev = DeviceBuilder::new().name("tap0").build_sync()?;
    println!("allocated {}", dev.name()?);
    Ok(())
}
```
# Example with an externally created fd:
```no_run
use tapdev::SyncDevice;
// fd handed over by a privileged launcher
let fd = 7;
let dev = unsafe { SyncDevice::from_fd(fd) };
```
*/

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::builder::DeviceBuilder;
pub use crate::error::{BoxError, Error, Result};
pub use crate::platform::Device;

mod error;

mod device;
pub use device::SyncDevice;

mod builder;
pub mod frame;
pub mod platform;

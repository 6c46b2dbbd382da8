pub mod sys;

mod device;

pub use self::device::Device;

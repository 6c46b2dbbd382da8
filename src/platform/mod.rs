#[cfg(unix)]
pub mod posix;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use self::linux::*;

#[cfg(target_os = "linux")]
#[cfg(test)]
mod test {
    use crate::DeviceBuilder;

    // These attach a real interface, which needs CAP_NET_ADMIN and the tun
    // module loaded. Run with `cargo test -- --ignored` as root.
    #[test]
    #[ignore]
    fn create_named() {
        let dev = DeviceBuilder::new().name("tap9").build_sync().unwrap();
        assert_eq!("tap9", dev.name().unwrap());
    }

    #[test]
    #[ignore]
    fn create_kernel_named() {
        let dev = DeviceBuilder::new().build_sync().unwrap();
        let name = dev.name().unwrap();
        assert!(!name.is_empty());
        assert!(name.len() < libc::IFNAMSIZ);
    }
}

use byteorder::{ByteOrder, NetworkEndian};

use crate::error::{Error, Result};

pub const ETH_ALEN: usize = 6;
/// Ethernet header length: two addresses plus the ethertype.
pub const ETH_HLEN: usize = 2 * ETH_ALEN + 2;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_ARP: u16 = 0x0806;
pub const ETHERTYPE_IPV6: u16 = 0x86DD;

pub type MacAddr = [u8; ETH_ALEN];

/// Borrowed view over one raw frame as a TAP device delivers it. With
/// `IFF_NO_PI` set the buffer starts directly at the Ethernet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetFrame<'a> {
    destination: MacAddr,
    source: MacAddr,
    ethertype: u16,
    payload: &'a [u8],
}

impl<'a> EthernetFrame<'a> {
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        if buf.len() < ETH_HLEN {
            return Err(Error::TruncatedFrame);
        }
        let mut destination: MacAddr = [0; ETH_ALEN];
        let mut source: MacAddr = [0; ETH_ALEN];
        destination.copy_from_slice(&buf[..ETH_ALEN]);
        source.copy_from_slice(&buf[ETH_ALEN..2 * ETH_ALEN]);
        Ok(EthernetFrame {
            destination,
            source,
            ethertype: NetworkEndian::read_u16(&buf[2 * ETH_ALEN..ETH_HLEN]),
            payload: &buf[ETH_HLEN..],
        })
    }

    pub fn destination(&self) -> MacAddr {
        self.destination
    }
    pub fn source(&self) -> MacAddr {
        self.source
    }
    pub fn ethertype(&self) -> u16 {
        self.ethertype
    }
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn parse_arp_ethertype() {
        let mut buf = vec![0u8; ETH_HLEN + 4];
        buf[..ETH_ALEN].copy_from_slice(&[0xff; ETH_ALEN]);
        buf[ETH_ALEN..2 * ETH_ALEN].copy_from_slice(&[0x02, 0, 0, 0, 0, 0x01]);
        buf[12] = 0x08;
        buf[13] = 0x06;

        let frame = EthernetFrame::parse(&buf).unwrap();
        assert_eq!([0xff; 6], frame.destination());
        assert_eq!([0x02, 0, 0, 0, 0, 0x01], frame.source());
        assert_eq!(ETHERTYPE_ARP, frame.ethertype());
        assert_eq!(4, frame.payload().len());
    }

    #[test]
    fn short_buffer_is_rejected() {
        let buf = [0u8; ETH_HLEN - 1];
        assert!(matches!(
            EthernetFrame::parse(&buf),
            Err(Error::TruncatedFrame)
        ));
    }
}

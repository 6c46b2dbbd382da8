//! Parsing for the raw Ethernet frames a TAP device delivers.

mod arp;
mod ethernet;

pub use self::arp::{Arp, ArpOp, ArpPacket, ARP_PACKET_LEN};
pub use self::ethernet::{
    EthernetFrame, MacAddr, ETHERTYPE_ARP, ETHERTYPE_IPV4, ETHERTYPE_IPV6, ETH_ALEN, ETH_HLEN,
};

/// Dispatch seam for protocol handlers keyed by ethertype.
pub trait FrameHandler {
    fn ethertype(&self) -> u16;
    fn handle_frame(&self, frame: &EthernetFrame<'_>);
}

use byteorder::{ByteOrder, NetworkEndian};

use crate::error::{Error, Result};
use crate::frame::{EthernetFrame, FrameHandler, MacAddr, ETHERTYPE_ARP, ETH_ALEN};

/// Fixed layout of an IPv4-over-Ethernet ARP body.
pub const ARP_PACKET_LEN: usize = 28;

const IPV4_ALEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpOp {
    Request,
    Reply,
    Other(u16),
}

impl From<u16> for ArpOp {
    fn from(op: u16) -> Self {
        match op {
            1 => ArpOp::Request,
            2 => ArpOp::Reply,
            op => ArpOp::Other(op),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpPacket {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_length: u8,
    pub protocol_length: u8,
    pub operation: ArpOp,
    pub sender_hardware_addr: MacAddr,
    pub sender_protocol_addr: [u8; IPV4_ALEN],
    pub target_hardware_addr: MacAddr,
    pub target_protocol_addr: [u8; IPV4_ALEN],
}

impl ArpPacket {
    pub fn parse(payload: &[u8]) -> Result<Self> {
        if payload.len() < ARP_PACKET_LEN {
            return Err(Error::TruncatedArp);
        }
        let mut sender_hardware_addr: MacAddr = [0; ETH_ALEN];
        let mut target_hardware_addr: MacAddr = [0; ETH_ALEN];
        let mut sender_protocol_addr = [0u8; IPV4_ALEN];
        let mut target_protocol_addr = [0u8; IPV4_ALEN];
        sender_hardware_addr.copy_from_slice(&payload[8..14]);
        sender_protocol_addr.copy_from_slice(&payload[14..18]);
        target_hardware_addr.copy_from_slice(&payload[18..24]);
        target_protocol_addr.copy_from_slice(&payload[24..28]);

        Ok(ArpPacket {
            hardware_type: NetworkEndian::read_u16(&payload[0..2]),
            protocol_type: NetworkEndian::read_u16(&payload[2..4]),
            hardware_length: payload[4],
            protocol_length: payload[5],
            operation: NetworkEndian::read_u16(&payload[6..8]).into(),
            sender_hardware_addr,
            sender_protocol_addr,
            target_hardware_addr,
            target_protocol_addr,
        })
    }
}

/// ARP handler for the ethertype dispatch seam. Parses and logs; replying
/// is left to the caller.
#[derive(Default)]
pub struct Arp;

impl Arp {
    pub fn new() -> Self {
        Arp
    }
}

impl FrameHandler for Arp {
    fn ethertype(&self) -> u16 {
        ETHERTYPE_ARP
    }

    fn handle_frame(&self, frame: &EthernetFrame<'_>) {
        match ArpPacket::parse(frame.payload()) {
            Ok(packet) => log::debug!(
                "arp {:?} from {:?}",
                packet.operation,
                packet.sender_protocol_addr
            ),
            Err(err) => log::warn!("dropping arp frame: {err}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn request() -> [u8; ARP_PACKET_LEN] {
        let mut buf = [0u8; ARP_PACKET_LEN];
        buf[1] = 1; // Ethernet
        buf[2] = 0x08; // IPv4
        buf[4] = 6;
        buf[5] = 4;
        buf[7] = 1; // request
        buf[8..14].copy_from_slice(&[0x02, 0, 0, 0, 0, 0x01]);
        buf[14..18].copy_from_slice(&[10, 0, 0, 1]);
        buf[24..28].copy_from_slice(&[10, 0, 0, 2]);
        buf
    }

    #[test]
    fn parse_request() {
        let packet = ArpPacket::parse(&request()).unwrap();
        assert_eq!(1, packet.hardware_type);
        assert_eq!(0x0800, packet.protocol_type);
        assert_eq!(6, packet.hardware_length);
        assert_eq!(4, packet.protocol_length);
        assert_eq!(ArpOp::Request, packet.operation);
        assert_eq!([0x02, 0, 0, 0, 0, 0x01], packet.sender_hardware_addr);
        assert_eq!([10, 0, 0, 1], packet.sender_protocol_addr);
        assert_eq!([0; 6], packet.target_hardware_addr);
        assert_eq!([10, 0, 0, 2], packet.target_protocol_addr);
    }

    #[test]
    fn short_payload_is_rejected() {
        let buf = [0u8; ARP_PACKET_LEN - 1];
        assert!(matches!(ArpPacket::parse(&buf), Err(Error::TruncatedArp)));
    }

    #[test]
    fn unknown_operation_is_preserved() {
        let mut buf = request();
        buf[7] = 9;
        assert_eq!(ArpOp::Other(9), ArpPacket::parse(&buf).unwrap().operation);
    }
}

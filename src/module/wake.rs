use std::net::SocketAddr;

use tracing::{debug, error};

use crate::{
    client::transport::udp::send_datagram,
    network::{wake_addr, MacAddr},
};

pub const MAGIC_PACKET_SIZE: usize = 102;

pub fn magic_packet(mac: MacAddr) -> [u8; MAGIC_PACKET_SIZE] {
    let mut buf = [0xffu8; MAGIC_PACKET_SIZE];
    for chunk in buf[6..].chunks_exact_mut(6) {
        chunk.copy_from_slice(&mac.octets());
    }

    buf
}

/// `true` only means the datagram left this host, the camera never answers.
pub fn wake(mac: MacAddr) -> bool {
    wake_to(mac, wake_addr())
}

pub fn wake_to(mac: MacAddr, dest: SocketAddr) -> bool {
    match send_datagram(&magic_packet(mac), dest) {
        Ok(_) => {
            debug!(%mac, %dest, "magic packet sent");
            true
        }

        Err(e) => {
            error!(%mac, %dest, "failed to send magic packet: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::*;

    #[test]
    fn packet_layout() {
        let mac: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        let pkt = magic_packet(mac);

        assert_eq!(pkt.len(), 102);
        assert_eq!(&pkt[..6], &[0xff; 6]);
        for i in 0..16 {
            let start = 6 + i * 6;
            assert_eq!(&pkt[start..start + 6], &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        }
    }

    #[test]
    fn wake_local_peer() {
        let peer = UdpSocket::bind("127.0.0.1:0").unwrap();
        peer.set_read_timeout(Some(Duration::from_secs(2))).unwrap();

        let mac = MacAddr([1, 2, 3, 4, 5, 6]);
        assert!(wake_to(mac, peer.local_addr().unwrap()));

        let mut buf = [0u8; 256];
        let (read, _) = peer.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..read], &magic_packet(mac)[..]);
    }
}

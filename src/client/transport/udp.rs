use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use net2::UdpBuilder;
use tracing::trace;

use crate::Result;

/// Nothing is read back: success only means the datagram was handed to the network stack.
pub fn send_datagram(data: &[u8], dest: SocketAddr) -> Result<usize> {
    let socket = match dest {
        SocketAddr::V4(_) => {
            UdpBuilder::new_v4()?.bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), 0))?
        }
        SocketAddr::V6(_) => {
            UdpBuilder::new_v6()?.bind(SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), 0))?
        }
    };

    if dest.is_ipv4() {
        socket.set_broadcast(true)?;
    }

    let sent = socket.send_to(data, dest)?;
    trace!(%dest, sent, "datagram sent");
    Ok(sent)
}

//! Listener failures surfaced to the CLI.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The listening socket could not be opened.
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop stopped with an I/O error.
    #[error("listener on {addr} failed: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl HttpTransportError {
    /// Address the failing listener was bound (or binding) to.
    pub fn addr(&self) -> SocketAddr {
        match self {
            Self::Bind { addr, .. } | Self::Serve { addr, .. } => *addr,
        }
    }
}

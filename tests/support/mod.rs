//! Shared helpers for integration tests

use std::net::TcpListener;

/// A URL on a port nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}/maven2", addr)
}

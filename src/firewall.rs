use std::net::IpAddr;

/// IP allowlist consulted before any bytes are read from a peer.
///
/// Entries are exact addresses (`192.168.1.20`) or prefixes when they end
/// with a dot (`192.168.1.`). An empty allowlist admits every peer.
#[derive(Debug, Clone)]
pub struct Firewall {
    allow_from: Vec<String>,
}

impl Firewall {
    pub fn new(allow_from: Vec<String>) -> Self {
        Self { allow_from }
    }

    pub fn is_allowed(&self, ip: IpAddr) -> bool {
        if self.allow_from.is_empty() {
            return true;
        }

        let ip = ip.to_string();
        self.allow_from.iter().any(|entry| {
            if entry.ends_with('.') {
                ip.starts_with(entry.as_str())
            } else {
                ip == *entry
            }
        })
    }
}

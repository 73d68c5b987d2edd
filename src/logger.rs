//! Tagged diagnostic logger with best-effort remote forwarding.
//!
//! Every log call writes to the local console sink (via `tracing`), then
//! forwards the same line to an optional message-bus sink and to the
//! transport selected at construction. Logging never fails outward: a
//! remote transport that cannot be set up degrades to [`Transport::Noop`]
//! and an unreachable one silently drops lines.

use std::net::UdpSocket;
use std::sync::Arc;

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Syslog priority value under the `user` facility.
    fn priority(&self) -> u8 {
        match self {
            Severity::Debug => 15,
            Severity::Info => 14,
            Severity::Warn => 12,
            Severity::Error => 11,
        }
    }
}

/// Sink for forwarding log lines onto a message bus (MQTT on the original
/// appliance). Registered by whoever assembles the server; absent by default.
pub trait BusSink: Send + Sync {
    fn forward(&self, line: &str);
}

/// Best-effort syslog-over-UDP client. The socket is non-blocking and send
/// errors are dropped; a slow or dead collector must never stall the
/// control loop.
pub struct SyslogTransport {
    socket: UdpSocket,
}

impl SyslogTransport {
    pub fn new(addr: &str) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0").context("bind syslog socket")?;
        socket
            .connect(addr)
            .with_context(|| format!("connect syslog socket to {}", addr))?;
        socket.set_nonblocking(true).context("set non-blocking")?;
        Ok(Self { socket })
    }

    fn send(&self, severity: Severity, tag: &str, message: &str) {
        let datagram = format!("<{}>{}: {}", severity.priority(), tag, message);
        let _ = self.socket.send(datagram.as_bytes());
    }
}

/// The transport a log line is forwarded to, fixed at construction.
pub enum Transport {
    /// Drops every line. Used when no remote sink is configured or setup failed.
    Noop,
    Syslog(SyslogTransport),
}

impl Transport {
    fn send(&self, severity: Severity, tag: &str, message: &str) {
        match self {
            Transport::Noop => {}
            Transport::Syslog(syslog) => syslog.send(severity, tag, message),
        }
    }
}

/// Tagged logger used by every stage of the connection lifecycle.
#[derive(Clone)]
pub struct Logger {
    tag: &'static str,
    transport: Arc<Transport>,
    bus: Option<Arc<dyn BusSink>>,
}

impl Logger {
    /// Builds a logger for `tag`. When `syslog_addr` is set, a remote
    /// transport is attempted; any setup fault falls back to the noop
    /// transport with one diagnostic line through the console/bus path.
    /// Construction never fails.
    pub fn new(
        tag: &'static str,
        syslog_addr: Option<&str>,
        bus: Option<Arc<dyn BusSink>>,
    ) -> Self {
        let transport = match syslog_addr {
            Some(addr) => match SyslogTransport::new(addr) {
                Ok(t) => Transport::Syslog(t),
                Err(e) => {
                    let logger = Self {
                        tag,
                        transport: Arc::new(Transport::Noop),
                        bus: bus.clone(),
                    };
                    logger.debug(&format!(
                        "Cannot set up syslog transport to {}: {}",
                        addr, e
                    ));
                    return logger;
                }
            },
            None => Transport::Noop,
        };

        Self {
            tag,
            transport: Arc::new(transport),
            bus,
        }
    }

    pub fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!("{}: {}", self.tag, message),
            Severity::Info => tracing::info!("{}: {}", self.tag, message),
            Severity::Warn => tracing::warn!("{}: {}", self.tag, message),
            Severity::Error => tracing::error!("{}: {}", self.tag, message),
        }

        if let Some(bus) = &self.bus {
            bus.forward(&format!("{:5} {}: {}", severity.label(), self.tag, message));
        }

        self.transport.send(severity, self.tag, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

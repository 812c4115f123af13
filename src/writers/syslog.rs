//! Syslog writer

use crate::core::{Level, LoggerError, Result, Writer};
use parking_lot::Mutex;
use std::net::{SocketAddr, ToSocketAddrs};
pub use ::syslog::Facility;
use ::syslog::{Formatter3164, LoggerBackend};

type SyslogClient = ::syslog::Logger<LoggerBackend, Formatter3164>;

/// Sends each serialized entry to syslog at the severity matching its level
///
/// Syslog has no "write at level" primitive, so entries with an invalid level
/// are rejected with [`LoggerError::InvalidLogLevel`].
pub struct WriterSyslog {
    client: Mutex<SyslogClient>,
}

fn syslog_error(err: impl std::fmt::Display) -> LoggerError {
    LoggerError::syslog(err.to_string())
}

fn process_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()?
        .next()
        .ok_or_else(|| LoggerError::syslog(format!("cannot resolve '{}'", addr)))
}

impl WriterSyslog {
    /// Connect to a syslog daemon
    ///
    /// `network` is `udp*` or `tcp*` for a remote `addr` (`host:port`), or
    /// empty / `unix*` for the local daemon, where a non-empty `addr` is the
    /// socket path. An empty `tag` uses the process name.
    ///
    /// ```no_run
    /// use leveled_logger::{Facility, WriterSyslog};
    ///
    /// let writer = WriterSyslog::connect("udp", "127.0.0.1:514", Facility::LOG_USER, "app").unwrap();
    /// ```
    pub fn connect(network: &str, addr: &str, facility: Facility, tag: &str) -> Result<Self> {
        let formatter = Formatter3164 {
            facility,
            hostname: None,
            process: if tag.is_empty() {
                process_name()
            } else {
                tag.to_string()
            },
            pid: std::process::id(),
        };

        let client = match network {
            n if n.starts_with("udp") => {
                let server = resolve(addr)?;
                let local: SocketAddr = if server.is_ipv4() {
                    ([0u8; 4], 0).into()
                } else {
                    ([0u16; 8], 0).into()
                };
                ::syslog::udp(formatter, local, server).map_err(syslog_error)?
            }
            n if n.starts_with("tcp") => {
                ::syslog::tcp(formatter, resolve(addr)?).map_err(syslog_error)?
            }
            #[cfg(unix)]
            "" | "unix" | "unixgram" if addr.is_empty() => {
                ::syslog::unix(formatter).map_err(syslog_error)?
            }
            #[cfg(unix)]
            "" | "unix" | "unixgram" => {
                ::syslog::unix_custom(formatter, addr).map_err(syslog_error)?
            }
            other => {
                return Err(LoggerError::syslog(format!(
                    "unsupported network '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            client: Mutex::new(client),
        })
    }

    /// Like [`WriterSyslog::connect`], for startup code that cannot go on without syslog
    ///
    /// # Panics
    ///
    /// Panics if the connection cannot be established.
    pub fn new(network: &str, addr: &str, facility: Facility, tag: &str) -> Self {
        match Self::connect(network, addr, facility, tag) {
            Ok(writer) => writer,
            Err(err) => panic!("cannot create syslog writer: {}", err),
        }
    }
}

impl Writer for WriterSyslog {
    fn write(&self, level: Level, bytes: &[u8]) -> Result<usize> {
        let message = String::from_utf8_lossy(bytes).into_owned();
        let mut client = self.client.lock();
        let sent = match level {
            Level::EMERGENCY => client.emerg(message),
            Level::ALERT => client.alert(message),
            Level::CRITICAL => client.crit(message),
            Level::ERROR => client.err(message),
            Level::WARNING => client.warning(message),
            Level::NOTICE => client.notice(message),
            Level::INFO => client.info(message),
            Level::DEBUG => client.debug(message),
            _ => return Err(LoggerError::InvalidLogLevel),
        };
        sent.map_err(syslog_error)?;
        Ok(0)
    }
}

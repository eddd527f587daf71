//! Structured logging with sensitive-data redaction
//!
//! Key material never belongs in logs: seed and private-key fields are
//! fully redacted, addresses are partially redacted, everything else passes
//! through as-is.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag to enable/disable debug logging
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable debug logging
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Structured log entry
#[derive(Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub module: &'static str,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, module: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            module,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the log entry (auto-redacts sensitive data)
    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let value_str = value.to_string();
        let redacted = redact_if_sensitive(key, &value_str);
        self.fields.push((key, redacted));
        self
    }

    /// Log the entry
    pub fn log(self) {
        if self.level == LogLevel::Debug && !is_debug_enabled() {
            return;
        }

        let fields_str = self
            .fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        if fields_str.is_empty() {
            eprintln!("[{}] {} [{}] {}", timestamp, self.level, self.module, self.message);
        } else {
            eprintln!(
                "[{}] {} [{}] {} | {}",
                timestamp, self.level, self.module, self.message, fields_str
            );
        }
    }
}

/// Redact a value if the key suggests it's sensitive
fn redact_if_sensitive(key: &str, value: &str) -> String {
    let key_lower = key.to_lowercase();

    // Keys that must always be fully redacted
    let fully_redacted_keys = ["prv", "private", "seed", "secret", "passphrase"];
    for sensitive_key in &fully_redacted_keys {
        if key_lower.contains(sensitive_key) {
            return redact_value(value);
        }
    }

    // Destination/address keys get partial redaction
    let address_keys = ["address", "recipient", "pub"];
    for addr_key in &address_keys {
        if key_lower.contains(addr_key) {
            return redact_address(value);
        }
    }

    value.to_string()
}

/// Fully redact a sensitive value
fn redact_value(value: &str) -> String {
    if value.is_empty() {
        return "[EMPTY]".to_string();
    }

    let len = value.len();
    if len <= 4 {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED:{}chars]", len)
    }
}

/// Partially redact an address (show first 6 and last 4 chars)
fn redact_address(address: &str) -> String {
    let trimmed = address.trim();

    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }

    if trimmed.len() <= 10 {
        return redact_value(trimmed);
    }

    let prefix_len = if trimmed.starts_with("0x") { 8 } else { 6 };
    let suffix_len = 4;

    if trimmed.len() <= prefix_len + suffix_len + 3 {
        return redact_value(trimmed);
    }

    // Addresses are normally ASCII, but the value is caller-supplied; never
    // split inside a multi-byte character.
    match (
        trimmed.get(..prefix_len),
        trimmed.get(trimmed.len() - suffix_len..),
    ) {
        (Some(prefix), Some(suffix)) => format!("{}...{}", prefix, suffix),
        _ => redact_value(trimmed),
    }
}

/// Convenience macro for debug logging
#[macro_export]
macro_rules! log_debug {
    ($module:expr, $msg:expr) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Debug,
            $module,
            $msg
        ).log()
    };
    ($module:expr, $msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Debug,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

/// Convenience macro for info logging
#[macro_export]
macro_rules! log_info {
    ($module:expr, $msg:expr) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Info,
            $module,
            $msg
        ).log()
    };
    ($module:expr, $msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Info,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

/// Convenience macro for warning logging
#[macro_export]
macro_rules! log_warn {
    ($module:expr, $msg:expr) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Warn,
            $module,
            $msg
        ).log()
    };
    ($module:expr, $msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Warn,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

/// Convenience macro for error logging
#[macro_export]
macro_rules! log_error {
    ($module:expr, $msg:expr) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Error,
            $module,
            $msg
        ).log()
    };
    ($module:expr, $msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::Error,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

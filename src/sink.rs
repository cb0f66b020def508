use std::error::Error;
use std::fmt;

use chrono::{SecondsFormat, Utc};

use crate::cause::render_cause;
use crate::notify::{NoticeDuration, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_log_level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination for gated diagnostics.
///
/// Sinks are assumed to always be available; failures inside a sink are not
/// reported back through the logger.
pub trait LogSink: Send + Sync {
    /// Emit one record.
    fn record(&self, severity: Severity, tag: &str, message: &str);

    /// Surface the diagnostic detail of `cause`.
    fn trace(&self, tag: &str, cause: &(dyn Error + 'static));

    /// Show a transient notice on the host surface.
    fn notify(&self, context: &dyn UiContext, message: &str, duration: NoticeDuration) {
        context.show_notice(message, duration);
    }
}

/// Forwards records to the `log` facade, using the tag as the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn record(&self, severity: Severity, tag: &str, message: &str) {
        log::log!(target: tag, severity.as_log_level(), "{message}");
    }

    fn trace(&self, tag: &str, cause: &(dyn Error + 'static)) {
        for line in render_cause(cause).lines() {
            log::error!(target: tag, "{line}");
        }
    }
}

/// Writes prefixed lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    pub fn format_line(timestamp: &str, severity: Severity, tag: &str, message: &str) -> String {
        format!("{timestamp} [{tag}] {severity} {message}")
    }

    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl LogSink for StderrSink {
    fn record(&self, severity: Severity, tag: &str, message: &str) {
        eprintln!("{}", Self::format_line(&Self::now(), severity, tag, message));
    }

    fn trace(&self, tag: &str, cause: &(dyn Error + 'static)) {
        let timestamp = Self::now();
        for line in render_cause(cause).lines() {
            eprintln!(
                "{}",
                Self::format_line(&timestamp, Severity::Error, tag, line)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[test]
    fn severity_maps_to_log_levels() {
        assert_eq!(Severity::Debug.as_log_level(), log::Level::Debug);
        assert_eq!(Severity::Info.as_log_level(), log::Level::Info);
        assert_eq!(Severity::Warning.as_log_level(), log::Level::Warn);
        assert_eq!(Severity::Error.as_log_level(), log::Level::Error);
    }

    #[test]
    fn stderr_line_format() {
        let line = StderrSink::format_line(
            "2025-11-15T00:00:00.000Z",
            Severity::Warning,
            "HttpProxyCacheDebugger",
            "cache miss",
        );

        assert_eq!(
            line,
            "2025-11-15T00:00:00.000Z [HttpProxyCacheDebugger] WARN cache miss"
        );
    }

    struct RecordingContext {
        notices: Mutex<Vec<(String, NoticeDuration)>>,
    }

    impl UiContext for RecordingContext {
        fn show_notice(&self, message: &str, duration: NoticeDuration) {
            self.notices
                .lock()
                .unwrap()
                .push((message.to_string(), duration));
        }
    }

    #[test]
    fn default_notify_hands_notice_to_context() {
        let context = RecordingContext {
            notices: Mutex::new(Vec::new()),
        };

        StderrSink.notify(&context, "saved", NoticeDuration::Short);

        let notices = context.notices.lock().unwrap();
        assert_eq!(*notices, vec![("saved".to_string(), NoticeDuration::Short)]);
    }
}

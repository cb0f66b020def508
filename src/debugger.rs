use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::DebugConfig;
use crate::notify::{NoticeDuration, UiContext};
use crate::sink::{LogSink, Severity};

pub const DEFAULT_TAG: &str = "HttpProxyCacheDebugger";

/// Shared debug-enabled switch. Clones observe the same value.
#[derive(Debug, Clone)]
pub struct DebugFlag {
    enabled: Arc<AtomicBool>,
}

impl DebugFlag {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn get(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for DebugFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Parameters of a single gated log call.
///
/// A missing tag falls back to the logger's default tag. A missing or empty
/// message makes the call a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequest<'a> {
    pub tag: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl<'a> LogRequest<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            tag: None,
            message: Some(message),
        }
    }

    pub fn tagged(tag: &'a str, message: &'a str) -> Self {
        Self {
            tag: Some(tag),
            message: Some(message),
        }
    }

    fn text(&self) -> Option<&'a str> {
        self.message.filter(|message| !message.is_empty())
    }
}

/// Gate in front of a [`LogSink`]: nothing reaches the sink while the flag is
/// off, and empty messages never do.
pub struct DebugLogger<S> {
    flag: DebugFlag,
    default_tag: String,
    sink: S,
}

impl<S: LogSink> DebugLogger<S> {
    pub fn new(sink: S) -> Self {
        Self::with_flag(DebugFlag::default(), sink)
    }

    pub fn with_flag(flag: DebugFlag, sink: S) -> Self {
        Self {
            flag,
            default_tag: DEFAULT_TAG.to_string(),
            sink,
        }
    }

    pub fn from_config(config: &DebugConfig, sink: S) -> Self {
        Self {
            flag: DebugFlag::new(config.enabled),
            default_tag: config.default_tag.clone(),
            sink,
        }
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn flag(&self) -> &DebugFlag {
        &self.flag
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_debug_enabled(&self, enabled: bool) {
        self.flag.set(enabled);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.flag.get()
    }

    pub fn log(&self, severity: Severity, request: LogRequest<'_>) {
        if !self.flag.get() {
            return;
        }

        if let Some(message) = request.text() {
            let tag = request.tag.unwrap_or(self.default_tag.as_str());
            self.sink.record(severity, tag, message);
        }
    }

    pub fn debug(&self, request: LogRequest<'_>) {
        self.log(Severity::Debug, request);
    }

    pub fn info(&self, request: LogRequest<'_>) {
        self.log(Severity::Info, request);
    }

    pub fn warn(&self, request: LogRequest<'_>) {
        self.log(Severity::Warning, request);
    }

    pub fn error(&self, request: LogRequest<'_>) {
        self.log(Severity::Error, request);
    }

    pub fn log_debug(&self, message: &str) {
        self.debug(LogRequest::new(message));
    }

    pub fn log_info(&self, message: &str) {
        self.info(LogRequest::new(message));
    }

    pub fn log_info_tagged(&self, tag: &str, message: &str) {
        self.info(LogRequest::tagged(tag, message));
    }

    pub fn log_warning(&self, message: &str) {
        self.warn(LogRequest::new(message));
    }

    pub fn log_warning_tagged(&self, tag: &str, message: &str) {
        self.warn(LogRequest::tagged(tag, message));
    }

    pub fn log_error(&self, message: &str) {
        self.error(LogRequest::new(message));
    }

    pub fn log_error_tagged(&self, tag: &str, message: &str) {
        self.error(LogRequest::tagged(tag, message));
    }

    /// Log `message` at error severity, then surface `cause`.
    ///
    /// The cause is surfaced whenever the flag is on, including when the
    /// message is empty.
    pub fn log_error_with_cause(&self, message: &str, cause: &(dyn Error + 'static)) {
        if !self.flag.get() {
            return;
        }

        if !message.is_empty() {
            self.sink.record(Severity::Error, &self.default_tag, message);
        }
        self.sink.trace(&self.default_tag, cause);
    }

    pub fn notify_user(&self, context: &dyn UiContext, message: &str) {
        if !self.flag.get() || message.is_empty() {
            return;
        }

        self.sink.notify(context, message, NoticeDuration::Short);
    }
}

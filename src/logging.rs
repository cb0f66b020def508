use std::error::Error;
use std::sync::OnceLock;

use crate::config::DebugConfig;
use crate::debugger::{DebugFlag, DebugLogger, LogRequest};
use crate::notify::UiContext;
use crate::sink::LogCrateSink;

static GLOBAL: OnceLock<DebugLogger<LogCrateSink>> = OnceLock::new();

/// Process-wide logger. Created on first use, enabled, with the default tag.
pub fn global() -> &'static DebugLogger<LogCrateSink> {
    GLOBAL.get_or_init(|| DebugLogger::with_flag(DebugFlag::default(), LogCrateSink))
}

/// Apply `config` to the process-wide logger.
///
/// The default tag only takes effect if the global logger has not been used
/// yet; returns `false` when it was already initialised, in which case only
/// the flag is updated.
pub fn install(config: &DebugConfig) -> bool {
    let mut installed = false;
    let logger = GLOBAL.get_or_init(|| {
        installed = true;
        DebugLogger::from_config(config, LogCrateSink)
    });

    logger.set_debug_enabled(config.enabled);
    installed
}

pub fn set_debug(enabled: bool) {
    global().set_debug_enabled(enabled);
}

pub fn is_debug_enabled() -> bool {
    global().is_debug_enabled()
}

pub fn debug(message: &str) {
    global().log_debug(message);
}

pub fn info(message: &str) {
    global().log_info(message);
}

pub fn info_tagged(tag: &str, message: &str) {
    global().info(LogRequest::tagged(tag, message));
}

pub fn warn(message: &str) {
    global().log_warning(message);
}

pub fn warn_tagged(tag: &str, message: &str) {
    global().warn(LogRequest::tagged(tag, message));
}

pub fn error(message: &str) {
    global().log_error(message);
}

pub fn error_tagged(tag: &str, message: &str) {
    global().error(LogRequest::tagged(tag, message));
}

pub fn error_with_cause(message: &str, cause: &(dyn Error + 'static)) {
    global().log_error_with_cause(message, cause);
}

pub fn notify(context: &dyn UiContext, message: &str) {
    global().notify_user(context, message);
}

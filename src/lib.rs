pub mod cause;
pub mod config;
pub mod debugger;
pub mod logging;
pub mod notify;
pub mod sink;

pub use cause::render_cause;
pub use config::{ConfigError, DebugConfig};
pub use debugger::{DebugFlag, DebugLogger, LogRequest, DEFAULT_TAG};
pub use notify::{NoticeDuration, UiContext};
pub use sink::{LogCrateSink, LogSink, Severity, StderrSink};

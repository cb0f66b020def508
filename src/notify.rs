use std::time::Duration;

/// How long a transient notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    Short,
    Long,
}

impl NoticeDuration {
    pub fn as_duration(self) -> Duration {
        match self {
            NoticeDuration::Short => Duration::from_millis(2000),
            NoticeDuration::Long => Duration::from_millis(3500),
        }
    }
}

/// Host surface able to render a transient, auto-dismissing notice.
///
/// Implementations must not block the caller until the notice is dismissed.
pub trait UiContext {
    fn show_notice(&self, message: &str, duration: NoticeDuration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_notice_is_shorter_than_long() {
        assert!(NoticeDuration::Short.as_duration() < NoticeDuration::Long.as_duration());
        assert_eq!(NoticeDuration::Short.as_duration(), Duration::from_secs(2));
    }
}

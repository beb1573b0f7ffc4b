use crate::domain::ports::Notifier;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!("❌ {}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// 把訊息依序記錄下來，測試與 JSON 輸出用
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(msg) => Some(msg),
                Notification::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Success(msg) => Some(msg),
                Notification::Error(_) => None,
            })
            .collect()
    }

    fn push(&self, notification: Notification) {
        self.lock().push(notification);
    }

    // 某個持有鎖的執行緒 panic 過也照樣記錄
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        tracing::debug!("notify success: {}", message);
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        tracing::debug!("notify error: {}", message);
        self.push(Notification::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.success("saved");
        notifier.error("empty");
        assert_eq!(
            notifier.messages(),
            vec![
                Notification::Success("saved".to_string()),
                Notification::Error("empty".to_string()),
            ]
        );
        assert_eq!(notifier.errors(), vec!["empty".to_string()]);
    }

    #[test]
    fn test_keeps_messages_after_poisoned_lock() {
        let notifier = MemoryNotifier::new();
        notifier.success("before");

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = notifier.messages.lock().unwrap();
            panic!("holder crashed");
        }));
        assert!(result.is_err());
        assert!(notifier.messages.is_poisoned());

        notifier.error("after");
        assert_eq!(notifier.successes(), vec!["before".to_string()]);
        assert_eq!(notifier.errors(), vec!["after".to_string()]);
    }
}

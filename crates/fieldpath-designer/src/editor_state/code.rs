//! Program regeneration and the outward-facing sinks.

use chrono::{DateTime, Utc};
use fieldpath_core::{thread_safe, ThreadSafe};

use super::EditorSession;

/// Receiver of generated program text (display panel, clipboard, file).
pub trait CodeSink: Send {
    fn publish(&mut self, code: &str) -> anyhow::Result<()>;
}

/// In-memory display buffer. Clones share the same text, so a host can keep
/// one handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: ThreadSafe<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            text: thread_safe(String::new()),
        }
    }

    pub fn contents(&self) -> String {
        self.text.lock().clone()
    }
}

impl CodeSink for TextBuffer {
    fn publish(&mut self, code: &str) -> anyhow::Result<()> {
        let mut text = self.text.lock();
        text.clear();
        text.push_str(code);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// Transient user-facing message (a toast in a graphical host).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created: DateTime<Utc>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            created: Utc::now(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
            created: Utc::now(),
        }
    }
}

impl EditorSession {
    /// The program for the current path.
    pub fn generated_code(&self) -> &str {
        &self.generated_code
    }

    /// Registers a sink that receives the program after every regeneration.
    /// The current program is published immediately.
    pub fn add_sink(&mut self, mut sink: Box<dyn CodeSink>) {
        if let Err(e) = sink.publish(&self.generated_code) {
            tracing::warn!("Failed to publish code to new sink: {}", e);
        }
        self.sinks.push(sink);
    }

    /// Regenerates the program, writes the loaded slot back and publishes the
    /// result to every sink.
    pub fn regenerate(&mut self) {
        self.generated_code = self.generator.generate(self.path.waypoints());
        self.auto_save_loaded_slot();

        for sink in &mut self.sinks {
            if let Err(e) = sink.publish(&self.generated_code) {
                tracing::warn!("Failed to publish generated code: {}", e);
            }
        }
    }

    /// Sends the current program to `clipboard` and queues a notification.
    pub fn copy_code(&mut self, clipboard: &mut dyn CodeSink) -> anyhow::Result<()> {
        match clipboard.publish(&self.generated_code) {
            Ok(()) => {
                self.notify(Notification::info("Code copied to clipboard!"));
                Ok(())
            }
            Err(e) => {
                self.notify(Notification::warning("Could not copy code to clipboard"));
                Err(e)
            }
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!("Notification: {}", notification.message);
        self.notifications.push(notification);
    }

    /// Drains pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

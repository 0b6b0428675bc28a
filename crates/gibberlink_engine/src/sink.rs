//! Notification sinks receive the scheduler's events.

use gibberlink_core::ConversationEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Consumer of scheduler events.
///
/// `notify` is called from the scheduler's message loop, once per event
/// occurrence, and must not block.
pub trait NotificationSink: Send + Sync {
    /// Handle one event.
    fn notify(&self, event: &ConversationEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, event: &ConversationEvent) {
        info!(
            %event,
            title = event.title(),
            description = event.description(),
            "Notification"
        );
    }
}

/// Forwards events into an unbounded channel.
///
/// # Examples
///
/// ```
/// use gibberlink_core::ConversationEvent;
/// use gibberlink_engine::{ChannelSink, NotificationSink};
///
/// let (sink, mut rx) = ChannelSink::new();
/// sink.notify(&ConversationEvent::Reset);
/// assert_eq!(rx.try_recv().unwrap(), ConversationEvent::Reset);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ConversationEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver its events arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ConversationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, event: &ConversationEvent) {
        if self.tx.send(*event).is_err() {
            warn!(%event, "Notification receiver dropped");
        }
    }
}

/// Delivers each event to several sinks in order.
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl FanoutSink {
    /// Create an empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl NotificationSink for FanoutSink {
    fn notify(&self, event: &ConversationEvent) {
        for sink in &self.sinks {
            sink.notify(event);
        }
    }
}

//! Handle for a running conversation actor.

use crate::{
    ConversationActor, ConversationActorArgs, ConversationState, EngineConfig, NotificationSink,
    SchedulerMessage,
};
use gibberlink_error::{SchedulerError, SchedulerErrorKind, SchedulerResult};
use gibberlink_script::ScriptedTimeline;
use ractor::rpc::CallResult;
use ractor::{Actor, ActorRef};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Public surface of the engine: start, stop, reset and snapshot.
///
/// Commands are queued on the actor's mailbox and applied one at a time, so a
/// snapshot requested after a command always observes that command.
pub struct ConversationScheduler {
    actor: ActorRef<SchedulerMessage>,
    handle: JoinHandle<()>,
    call_timeout: Duration,
}

impl ConversationScheduler {
    /// Spawn a scheduler for a timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor cannot be spawned.
    #[instrument(skip_all, fields(steps = timeline.len()))]
    pub async fn spawn(
        timeline: ScriptedTimeline,
        config: EngineConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> SchedulerResult<Self> {
        let call_timeout = config.snapshot_timeout();
        let args = ConversationActorArgs {
            timeline: Arc::new(timeline),
            config,
        };

        let (actor, handle) = Actor::spawn(None, ConversationActor::new(sink), args)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to spawn conversation actor");
                SchedulerError::new(SchedulerErrorKind::SpawnFailed(e.to_string()))
            })?;

        info!("Conversation scheduler spawned");
        Ok(Self {
            actor,
            handle,
            call_timeout,
        })
    }

    /// Begin or resume delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is no longer running.
    pub fn start(&self) -> SchedulerResult<()> {
        self.send(SchedulerMessage::Start)
    }

    /// Pause delivery, keeping progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is no longer running.
    pub fn stop(&self) -> SchedulerResult<()> {
        self.send(SchedulerMessage::Stop)
    }

    /// Return to a fresh idle state.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is no longer running.
    pub fn reset(&self) -> SchedulerResult<()> {
        self.send(SchedulerMessage::Reset)
    }

    /// Copy of the current conversation state.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is gone or does not answer within the
    /// configured snapshot timeout.
    pub async fn snapshot(&self) -> SchedulerResult<ConversationState> {
        let result = self
            .actor
            .call(SchedulerMessage::Snapshot, Some(self.call_timeout))
            .await
            .map_err(|e| SchedulerError::new(SchedulerErrorKind::MessagingFailed(e.to_string())))?;

        match result {
            CallResult::Success(state) => Ok(state),
            CallResult::Timeout => Err(SchedulerError::new(SchedulerErrorKind::CallTimeout(
                self.call_timeout.as_millis() as u64,
            ))),
            CallResult::SenderError => Err(SchedulerError::new(SchedulerErrorKind::CallFailed(
                "snapshot reply dropped".to_string(),
            ))),
        }
    }

    /// Stop the actor, cancelling all timers, and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> SchedulerResult<()> {
        self.actor.stop(None);
        self.handle
            .await
            .map_err(|e| SchedulerError::new(SchedulerErrorKind::CallFailed(e.to_string())))
    }

    fn send(&self, message: SchedulerMessage) -> SchedulerResult<()> {
        self.actor
            .send_message(message)
            .map_err(|e| SchedulerError::new(SchedulerErrorKind::MessagingFailed(e.to_string())))
    }
}

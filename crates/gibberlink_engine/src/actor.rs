//! Ractor actor that owns a [`ConversationMachine`] and runs its timers.

use crate::{ConversationMachine, ConversationState, Effect, EngineConfig, NotificationSink, Timer};
use chrono::Utc;
use gibberlink_script::ScriptedTimeline;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages for the conversation actor.
#[derive(Debug)]
pub enum SchedulerMessage {
    /// Begin or resume delivery
    Start,
    /// Pause delivery
    Stop,
    /// Return to a fresh idle state
    Reset,
    /// Reply with a copy of the current state
    Snapshot(RpcReplyPort<ConversationState>),
    /// A timer armed by the machine elapsed
    TimerFired(Timer),
}

/// Arguments for actor initialization.
#[derive(Debug, Clone)]
pub struct ConversationActorArgs {
    /// Script to play
    pub timeline: Arc<ScriptedTimeline>,
    /// Timing configuration
    pub config: EngineConfig,
}

/// Actor driving one conversation.
pub struct ConversationActor {
    sink: Arc<dyn NotificationSink>,
}

impl ConversationActor {
    /// Creates a new conversation actor reporting to `sink`.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    fn apply(
        &self,
        myself: &ActorRef<SchedulerMessage>,
        state: &mut ConversationActorState,
        effects: Vec<Effect>,
    ) {
        for effect in effects {
            match effect {
                Effect::Schedule(timer) => state.arm(myself, timer),
                Effect::CancelAll => state.cancel_all(),
                Effect::Emit(event) => {
                    info!(%event, "Emitting event");
                    self.sink.notify(&event);
                }
            }
        }
    }
}

/// State for the conversation actor.
pub struct ConversationActorState {
    machine: ConversationMachine,
    timers: Vec<JoinHandle<()>>,
}

impl ConversationActorState {
    /// The machine owned by this actor.
    pub fn machine(&self) -> &ConversationMachine {
        &self.machine
    }

    fn arm(&mut self, myself: &ActorRef<SchedulerMessage>, timer: Timer) {
        self.timers.retain(|handle| !handle.is_finished());

        debug!(kind = ?timer.kind(), delay = ?timer.delay(), "Arming timer");
        let actor = myself.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(*timer.delay()).await;
            if actor.send_message(SchedulerMessage::TimerFired(timer)).is_err() {
                debug!("Scheduler stopped before timer fired");
            }
        });
        self.timers.push(handle);
    }

    fn cancel_all(&mut self) {
        debug!(count = self.timers.len(), "Cancelling timers");
        for handle in self.timers.drain(..) {
            handle.abort();
        }
    }
}

#[async_trait::async_trait]
impl Actor for ConversationActor {
    type Msg = SchedulerMessage;
    type State = ConversationActorState;
    type Arguments = ConversationActorArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: ConversationActorArgs,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(
            steps = args.timeline.len(),
            trigger = ?args.timeline.protocol_trigger(),
            mode_switch_delay_ms = args.config.mode_switch_delay_ms(),
            "Conversation actor starting"
        );
        Ok(ConversationActorState {
            machine: ConversationMachine::new(args.timeline, &args.config),
            timers: Vec::new(),
        })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.cancel_all();
        info!("Conversation actor stopped");
        Ok(())
    }

    #[instrument(skip(self, myself, state))]
    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let effects = match message {
            SchedulerMessage::Start => state.machine.start(),
            SchedulerMessage::Stop => state.machine.stop(),
            SchedulerMessage::Reset => state.machine.reset(),
            SchedulerMessage::Snapshot(reply) => {
                if reply.send(state.machine.state().clone()).is_err() {
                    warn!("Snapshot requester went away");
                }
                return Ok(());
            }
            SchedulerMessage::TimerFired(timer) => state.machine.fire(&timer, Utc::now()),
        };

        self.apply(&myself, state, effects);
        Ok(())
    }
}

//! The conversation state machine.
//!
//! [`ConversationMachine`] never touches a clock or a runtime. Each command
//! returns the [`Effect`]s the driver has to carry out, and the driver hands
//! timers back through [`ConversationMachine::fire`] once they elapse.

use crate::{ConversationState, EngineConfig};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use gibberlink_core::{ConversationEvent, Message, Mode, RunState};
use gibberlink_script::ScriptedTimeline;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Deliver the step at this index
    Deliver {
        /// Step index
        step: usize,
    },
    /// Un-highlight the speaker of this step
    ClearActive {
        /// Step index
        step: usize,
    },
    /// Enter protocol mode
    SwitchMode,
}

/// A callback armed by the machine.
///
/// The generation is captured when the timer is armed; the machine ignores
/// timers from an older generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Timer {
    /// Action to take
    kind: TimerKind,
    /// Wait before firing
    delay: Duration,
    /// Generation the timer belongs to
    generation: u64,
}

/// Work the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm a timer and hand it back to [`ConversationMachine::fire`] after its delay
    Schedule(Timer),
    /// Abort every outstanding timer
    CancelAll,
    /// Forward an event to the notification sink
    Emit(ConversationEvent),
}

/// Finite-state machine driving one conversation.
///
/// # Examples
///
/// ```
/// use gibberlink_core::{AgentId, ConversationEvent, RunState, ScriptStep};
/// use gibberlink_engine::{ConversationMachine, Effect, EngineConfig};
/// use gibberlink_script::ScriptedTimeline;
///
/// let timeline =
///     ScriptedTimeline::new(vec![ScriptStep::new(AgentId::A, "hello", 100)], None).unwrap();
/// let mut machine = ConversationMachine::new(timeline, &EngineConfig::default());
///
/// let effects = machine.start();
/// assert_eq!(effects[0], Effect::Emit(ConversationEvent::Started));
///
/// let Effect::Schedule(timer) = effects[1].clone() else { unreachable!() };
/// let effects = machine.fire(&timer, chrono::Utc::now());
///
/// assert_eq!(*machine.state().run_state(), RunState::Completed);
/// assert!(effects.contains(&Effect::Emit(ConversationEvent::Completed)));
/// ```
#[derive(Debug, Clone)]
pub struct ConversationMachine {
    timeline: Arc<ScriptedTimeline>,
    mode_switch_delay: Duration,
    state: ConversationState,
    generation: u64,
    active_step: Option<usize>,
    mode_switch_pending: bool,
}

impl ConversationMachine {
    /// Create an idle machine for a timeline.
    pub fn new(timeline: impl Into<Arc<ScriptedTimeline>>, config: &EngineConfig) -> Self {
        Self {
            timeline: timeline.into(),
            mode_switch_delay: config.mode_switch_delay(),
            state: ConversationState::default(),
            generation: 0,
            active_step: None,
            mode_switch_pending: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// The script being played.
    pub fn timeline(&self) -> &ScriptedTimeline {
        &self.timeline
    }

    /// Current timer generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin or resume delivery from the current step.
    ///
    /// No-op while running or once completed. An exhausted script completes
    /// immediately without arming any timer.
    #[instrument(skip(self), fields(step = self.state.current_step_index(), generation = self.generation))]
    pub fn start(&mut self) -> Vec<Effect> {
        match self.state.run_state() {
            RunState::Running => {
                debug!("Start ignored, already running");
                return Vec::new();
            }
            RunState::Completed => {
                debug!("Start ignored, conversation already completed");
                return Vec::new();
            }
            RunState::Idle | RunState::Stopped => {}
        }

        if *self.state.current_step_index() >= self.timeline.len() {
            info!("Script exhausted, completing without scheduling");
            self.state.set_run_state(RunState::Completed);
            return vec![Effect::Emit(ConversationEvent::Completed)];
        }

        info!("Conversation running");
        self.state.set_run_state(RunState::Running);
        let mut effects = vec![Effect::Emit(ConversationEvent::Started)];

        // A stop between the trigger step and its mode switch cancelled the
        // switch timer; re-arm it on resume.
        if self.mode_switch_pending && *self.state.mode() == Mode::English {
            debug!("Re-arming pending mode switch");
            effects.push(Effect::Schedule(self.timer(
                TimerKind::SwitchMode,
                self.mode_switch_delay,
            )));
        }

        effects.push(self.schedule_next_delivery());
        effects
    }

    /// Pause delivery, keeping progress, messages and mode.
    ///
    /// Every outstanding timer is invalidated and the speaker highlight is
    /// dropped along with its clearing timer. Only a running conversation
    /// becomes `Stopped`: stopping an idle or completed one cancels timers
    /// but leaves the run state as it was, so a completed run stays
    /// completed until reset.
    #[instrument(skip(self), fields(step = self.state.current_step_index(), generation = self.generation))]
    pub fn stop(&mut self) -> Vec<Effect> {
        self.invalidate_timers();
        if self.state.run_state().is_running() {
            info!("Conversation stopped");
            self.state.set_run_state(RunState::Stopped);
        }
        vec![Effect::CancelAll]
    }

    /// Cancel everything and return to a fresh idle state.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) -> Vec<Effect> {
        self.invalidate_timers();
        self.mode_switch_pending = false;
        self.state = ConversationState::default();
        info!("Conversation reset");
        vec![Effect::CancelAll, Effect::Emit(ConversationEvent::Reset)]
    }

    /// Apply a timer that elapsed at `now`.
    ///
    /// Timers from an earlier generation are ignored.
    #[instrument(skip(self, now), fields(kind = ?timer.kind, timer_generation = timer.generation))]
    pub fn fire(&mut self, timer: &Timer, now: DateTime<Utc>) -> Vec<Effect> {
        if timer.generation != self.generation {
            debug!(current = self.generation, "Ignoring stale timer");
            return Vec::new();
        }

        match timer.kind {
            TimerKind::Deliver { step } => self.deliver(step, now),
            TimerKind::ClearActive { step } => {
                if self.active_step == Some(step) {
                    debug!(step, "Clearing active agent");
                    self.active_step = None;
                    self.state.set_active_agent(None);
                }
                Vec::new()
            }
            TimerKind::SwitchMode => {
                self.mode_switch_pending = false;
                if *self.state.mode() == Mode::English {
                    info!("Switching to protocol mode");
                    self.state.set_mode(Mode::Protocol);
                    vec![Effect::Emit(ConversationEvent::ModeChanged(Mode::Protocol))]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn deliver(&mut self, step_index: usize, now: DateTime<Utc>) -> Vec<Effect> {
        if !self.state.run_state().is_running() || step_index != *self.state.current_step_index()
        {
            debug!(step = step_index, "Ignoring delivery out of sequence");
            return Vec::new();
        }

        let step = self.timeline.step_at(step_index);
        let agent = *step.agent();
        info!(step = step_index, %agent, "Delivering message");

        self.state.set_active_agent(Some(agent));
        self.active_step = Some(step_index);
        self.state.record_delivery(Message::delivered(step, now));

        let mut effects = Vec::new();

        if self.timeline.protocol_trigger() == Some(step_index) && *self.state.mode() == Mode::English
        {
            debug!(step = step_index, "Protocol trigger reached");
            self.mode_switch_pending = true;
            effects.push(Effect::Schedule(self.timer(
                TimerKind::SwitchMode,
                self.mode_switch_delay,
            )));
        }

        effects.push(Effect::Schedule(self.timer(
            TimerKind::ClearActive { step: step_index },
            step.clear_delay(),
        )));

        if *self.state.current_step_index() == self.timeline.len() {
            info!("All steps delivered");
            self.state.set_run_state(RunState::Completed);
            effects.push(Effect::Emit(ConversationEvent::Completed));
        } else {
            effects.push(self.schedule_next_delivery());
        }

        effects
    }

    fn schedule_next_delivery(&self) -> Effect {
        let index = *self.state.current_step_index();
        let step = self.timeline.step_at(index);
        debug!(step = index, delay_ms = step.delay_ms(), "Scheduling delivery");
        Effect::Schedule(self.timer(TimerKind::Deliver { step: index }, step.delay()))
    }

    fn timer(&self, kind: TimerKind, delay: Duration) -> Timer {
        Timer {
            kind,
            delay,
            generation: self.generation,
        }
    }

    fn invalidate_timers(&mut self) {
        self.generation += 1;
        self.active_step = None;
        self.state.set_active_agent(None);
    }
}

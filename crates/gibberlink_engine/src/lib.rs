//! Conversation scheduler and state machine for Gibberlink.
//!
//! The engine plays a [`ScriptedTimeline`](gibberlink_script::ScriptedTimeline)
//! back over time. It is split in two layers:
//!
//! - [`ConversationMachine`]: a synchronous state machine. Commands and fired
//!   timers go in, [`Effect`]s (timers to arm, cancellations, events) come out.
//! - [`ConversationScheduler`]: a ractor actor that owns the machine, turns
//!   [`Effect::Schedule`] into sleeping tokio tasks and forwards events to a
//!   [`NotificationSink`].
//!
//! Every timer carries the generation it was armed in. `stop` and `reset`
//! bump the generation and abort the outstanding tasks, so a timer that still
//! reaches the machine afterwards is ignored.
//!
//! # Example
//!
//! ```no_run
//! use gibberlink_engine::{ConversationScheduler, EngineConfig, TracingSink};
//! use gibberlink_script::ScriptedTimeline;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let timeline = ScriptedTimeline::sample()?;
//! let scheduler =
//!     ConversationScheduler::spawn(timeline, EngineConfig::default(), Arc::new(TracingSink)).await?;
//!
//! scheduler.start()?;
//! tokio::time::sleep(std::time::Duration::from_secs(30)).await;
//!
//! let state = scheduler.snapshot().await?;
//! println!("{} messages delivered", state.message_count());
//! scheduler.shutdown().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod config;
mod machine;
mod scheduler;
mod sink;
mod state;

pub use actor::{ConversationActor, ConversationActorArgs, ConversationActorState, SchedulerMessage};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use machine::{ConversationMachine, Effect, Timer, TimerKind};
pub use scheduler::ConversationScheduler;
pub use sink::{ChannelSink, FanoutSink, NotificationSink, TracingSink};
pub use state::ConversationState;

//! Conversation playback command handler.

use gibberlink::{
    ChannelSink, ConversationEvent, ConversationScheduler, EngineConfig, FanoutSink,
    GibberlinkResult, ScriptedTimeline, TracingSink,
};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// How playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Every step was delivered and no mode switch is outstanding
    Finished,
    /// The interrupt future resolved first
    Interrupted,
    /// The event stream closed
    Closed,
}

/// Play a script until it completes or the user presses Ctrl-C, then print
/// the final state.
pub async fn run_conversation(
    script: Option<&Path>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let timeline = load_timeline(script)?;
    let config = EngineConfig::load_with_override(config)?;

    tracing::info!(
        name = %timeline.metadata().name(),
        steps = timeline.len(),
        duration_ms = timeline.total_delay_ms(),
        "Loaded script"
    );

    let expect_mode_switch = timeline.protocol_trigger().is_some();
    let (channel, mut events) = ChannelSink::new();
    let sink = FanoutSink::new()
        .with(Arc::new(TracingSink))
        .with(Arc::new(channel));

    let scheduler = ConversationScheduler::spawn(timeline, config, Arc::new(sink)).await?;
    scheduler.start()?;

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        }
    };
    if await_playback(&mut events, expect_mode_switch, interrupt).await == Playback::Interrupted {
        tracing::info!("Interrupted, stopping conversation");
        scheduler.stop()?;
    }

    let state = scheduler.snapshot().await?;
    scheduler.shutdown().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!(
            "Status: {}  Mode: {}  Step: {}",
            state.run_state().label(),
            state.mode().label(),
            state.current_step_index()
        );
        for panel in state.panels() {
            println!();
            print!("{}", panel);
        }
    }

    Ok(())
}

/// Print events as they arrive until the run is over.
///
/// A script with a protocol trigger always ends in protocol mode, but the
/// switch lands a fixed delay after the trigger step. When the trigger is
/// one of the last steps, `Completed` can arrive first, so playback also
/// waits for the `ModeChanged` event.
pub async fn await_playback(
    events: &mut UnboundedReceiver<ConversationEvent>,
    expect_mode_switch: bool,
    interrupt: impl Future<Output = ()>,
) -> Playback {
    tokio::pin!(interrupt);
    let mut completed = false;
    let mut mode_switched = !expect_mode_switch;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    eprintln!("{}  {}", event.title(), event.description());
                    match event {
                        ConversationEvent::Completed => completed = true,
                        ConversationEvent::ModeChanged(_) => mode_switched = true,
                        ConversationEvent::Reset => {
                            completed = false;
                            mode_switched = !expect_mode_switch;
                        }
                        ConversationEvent::Started => {}
                    }
                    if completed && mode_switched {
                        return Playback::Finished;
                    }
                }
                None => return Playback::Closed,
            },
            _ = &mut interrupt => return Playback::Interrupted,
        }
    }
}

fn load_timeline(script: Option<&Path>) -> GibberlinkResult<ScriptedTimeline> {
    let timeline = match script {
        Some(path) => ScriptedTimeline::from_file(path)?,
        None => ScriptedTimeline::sample()?,
    };
    Ok(timeline)
}

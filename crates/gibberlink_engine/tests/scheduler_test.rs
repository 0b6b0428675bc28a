//! End-to-end tests for the actor-backed scheduler on virtual time.

use gibberlink_core::{AgentId, ConversationEvent, Mode, RunState, ScriptStep};
use gibberlink_engine::{ChannelSink, ConversationScheduler, EngineConfig};
use gibberlink_script::ScriptedTimeline;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

async fn spawn(timeline: ScriptedTimeline) -> (ConversationScheduler, UnboundedReceiver<ConversationEvent>) {
    let (sink, rx) = ChannelSink::new();
    let scheduler = ConversationScheduler::spawn(timeline, EngineConfig::default(), Arc::new(sink))
        .await
        .unwrap();
    (scheduler, rx)
}

fn drain(rx: &mut UnboundedReceiver<ConversationEvent>) -> Vec<ConversationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_sample_runs_to_completion() {
    let (scheduler, mut rx) = spawn(ScriptedTimeline::sample().unwrap()).await;

    scheduler.start().unwrap();
    sleep(Duration::from_secs(30)).await;
    let state = scheduler.snapshot().await.unwrap();

    assert_eq!(state.messages_for(AgentId::A).len(), 7);
    assert_eq!(state.messages_for(AgentId::B).len(), 7);
    assert_eq!(*state.current_step_index(), 14);
    assert_eq!(*state.mode(), Mode::Protocol);
    assert_eq!(*state.run_state(), RunState::Completed);
    assert_eq!(*state.active_agent(), None);
    assert_eq!(
        drain(&mut rx),
        vec![
            ConversationEvent::Started,
            ConversationEvent::ModeChanged(Mode::Protocol),
            ConversationEvent::Completed,
        ]
    );

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_messages_arrive_in_script_order() {
    let sample = ScriptedTimeline::sample().unwrap();
    let (scheduler, _rx) = spawn(sample.clone()).await;

    scheduler.start().unwrap();
    sleep(Duration::from_secs(30)).await;
    let state = scheduler.snapshot().await.unwrap();

    for agent in [AgentId::A, AgentId::B] {
        let expected: Vec<_> = sample
            .iter()
            .filter(|step| *step.agent() == agent)
            .map(|step| step.text().clone())
            .collect();
        let delivered: Vec<_> = state
            .messages_for(agent)
            .iter()
            .map(|m| m.text().clone())
            .collect();
        assert_eq!(delivered, expected);
    }

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_mode_switches_after_trigger_delay() {
    let (scheduler, _rx) = spawn(ScriptedTimeline::sample().unwrap()).await;
    scheduler.start().unwrap();

    // Step 6 lands at 12.5s, the switch follows one second later.
    sleep(Duration::from_millis(13_000)).await;
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(*state.current_step_index(), 7);
    assert_eq!(*state.mode(), Mode::English);

    sleep(Duration::from_millis(800)).await;
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(*state.current_step_index(), 7);
    assert_eq!(*state.mode(), Mode::Protocol);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_active_agent_cleared_after_half_delay() {
    let (scheduler, _rx) = spawn(ScriptedTimeline::sample().unwrap()).await;
    scheduler.start().unwrap();

    // Step 1 (agent B, 2000ms) lands at 3s and is cleared at 4s.
    sleep(Duration::from_millis(3_200)).await;
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(*state.active_agent(), Some(AgentId::B));

    sleep(Duration::from_millis(1_000)).await;
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(*state.active_agent(), None);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_then_start_resumes() {
    let (scheduler, mut rx) = spawn(ScriptedTimeline::sample().unwrap()).await;
    scheduler.start().unwrap();

    sleep(Duration::from_millis(3_500)).await;
    scheduler.stop().unwrap();
    let stopped = scheduler.snapshot().await.unwrap();
    assert_eq!(*stopped.run_state(), RunState::Stopped);
    assert_eq!(*stopped.current_step_index(), 2);
    assert_eq!(*stopped.active_agent(), None);

    sleep(Duration::from_secs(10)).await;
    let idle = scheduler.snapshot().await.unwrap();
    assert_eq!(*idle.current_step_index(), 2);
    assert_eq!(idle.message_count(), 2);

    // Step 2 waits its full 1500ms again after resuming.
    scheduler.start().unwrap();
    sleep(Duration::from_millis(1_000)).await;
    assert_eq!(*scheduler.snapshot().await.unwrap().current_step_index(), 2);
    sleep(Duration::from_millis(1_000)).await;
    let resumed = scheduler.snapshot().await.unwrap();
    assert_eq!(*resumed.current_step_index(), 3);
    assert_eq!(*resumed.run_state(), RunState::Running);

    sleep(Duration::from_secs(30)).await;
    let done = scheduler.snapshot().await.unwrap();
    assert_eq!(done.message_count(), 14);
    assert_eq!(*done.run_state(), RunState::Completed);

    assert_eq!(
        drain(&mut rx),
        vec![
            ConversationEvent::Started,
            ConversationEvent::Started,
            ConversationEvent::ModeChanged(Mode::Protocol),
            ConversationEvent::Completed,
        ]
    );

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_run() {
    let (scheduler, mut rx) = spawn(ScriptedTimeline::sample().unwrap()).await;
    scheduler.start().unwrap();

    sleep(Duration::from_millis(3_500)).await;
    scheduler.reset().unwrap();
    sleep(Duration::from_secs(30)).await;
    let state = scheduler.snapshot().await.unwrap();

    assert_eq!(*state.run_state(), RunState::Idle);
    assert_eq!(*state.mode(), Mode::English);
    assert_eq!(*state.current_step_index(), 0);
    assert_eq!(*state.active_agent(), None);
    assert_eq!(state.message_count(), 0);
    assert_eq!(
        drain(&mut rx),
        vec![ConversationEvent::Started, ConversationEvent::Reset]
    );

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_protocol_switch_restores_english() {
    let (scheduler, _rx) = spawn(ScriptedTimeline::sample().unwrap()).await;
    scheduler.start().unwrap();
    sleep(Duration::from_secs(30)).await;

    scheduler.reset().unwrap();
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(*state.mode(), Mode::English);
    assert_eq!(*state.run_state(), RunState::Idle);

    scheduler.start().unwrap();
    sleep(Duration::from_millis(1_200)).await;
    let state = scheduler.snapshot().await.unwrap();
    assert_eq!(state.message_count(), 1);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_empty_script_emits_single_completed() {
    let (scheduler, mut rx) = spawn(ScriptedTimeline::new(Vec::new(), None).unwrap()).await;

    scheduler.start().unwrap();
    scheduler.start().unwrap();
    let state = scheduler.snapshot().await.unwrap();

    assert_eq!(*state.run_state(), RunState::Completed);
    assert_eq!(state.message_count(), 0);
    assert_eq!(drain(&mut rx), vec![ConversationEvent::Completed]);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_short_script_without_trigger_stays_english() {
    let timeline = ScriptedTimeline::new(
        vec![
            ScriptStep::new(AgentId::A, "ping", 200),
            ScriptStep::new(AgentId::B, "pong", 200),
        ],
        None,
    )
    .unwrap();
    let (scheduler, mut rx) = spawn(timeline).await;

    scheduler.start().unwrap();
    sleep(Duration::from_secs(2)).await;
    let state = scheduler.snapshot().await.unwrap();

    assert_eq!(*state.mode(), Mode::English);
    assert_eq!(*state.run_state(), RunState::Completed);
    assert_eq!(
        drain(&mut rx),
        vec![ConversationEvent::Started, ConversationEvent::Completed]
    );

    scheduler.shutdown().await.unwrap();
}

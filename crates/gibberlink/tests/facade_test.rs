//! Tests that exercise the whole pipeline through the facade re-exports.

use gibberlink::{
    AgentId, ChannelSink, ConversationEvent, ConversationScheduler, DisplayRepresentation,
    ENCRYPTED_BANNER, EngineConfig, GibberlinkError, GibberlinkErrorKind, Mode, ScriptedTimeline,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_sample_panels_render_in_protocol_mode() {
    let (sink, mut rx) = ChannelSink::new();
    let scheduler = ConversationScheduler::spawn(
        ScriptedTimeline::sample().unwrap(),
        EngineConfig::default(),
        Arc::new(sink),
    )
    .await
    .unwrap();

    scheduler.start().unwrap();
    loop {
        if rx.recv().await == Some(ConversationEvent::Completed) {
            break;
        }
    }
    let state = scheduler.snapshot().await.unwrap();
    scheduler.shutdown().await.unwrap();

    let panels = state.panels();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].name(), "AGENT A");
    assert_eq!(panels[1].name(), "AGENT B");

    for (panel, agent) in panels.iter().zip([AgentId::A, AgentId::B]) {
        assert_eq!(panel.badge(), Mode::Protocol.badge());
        assert_eq!(panel.entries().len(), 7);
        for (entry, message) in panel.entries().iter().zip(state.messages_for(agent)) {
            match entry {
                DisplayRepresentation::Protocol {
                    banner, obfuscated, ..
                } => {
                    assert_eq!(*banner, ENCRYPTED_BANNER);
                    assert_eq!(obfuscated.chars().count(), message.text().chars().count());
                }
                other => panic!("expected protocol rendering, got {:?}", other),
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_serializes_to_json() {
    let (sink, _rx) = ChannelSink::new();
    let scheduler = ConversationScheduler::spawn(
        ScriptedTimeline::sample().unwrap(),
        EngineConfig::default(),
        Arc::new(sink),
    )
    .await
    .unwrap();

    scheduler.start().unwrap();
    tokio::time::sleep(Duration::from_millis(1_200)).await;
    let state = scheduler.snapshot().await.unwrap();
    scheduler.shutdown().await.unwrap();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["current_step_index"], 1);
    assert_eq!(json["messages_by_agent"]["A"].as_array().unwrap().len(), 1);
    assert!(json["messages_by_agent"]["B"].as_array().unwrap().is_empty());
}

#[test]
fn test_script_errors_convert_to_top_level_error() {
    let err: GibberlinkError = ScriptedTimeline::from_file("/nonexistent/script.toml")
        .unwrap_err()
        .into();
    assert!(matches!(err.kind(), GibberlinkErrorKind::Script(_)));
}

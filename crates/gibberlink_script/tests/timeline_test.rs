use gibberlink_core::{AgentId, ScriptStep};
use gibberlink_script::ScriptedTimeline;
use gibberlink_error::ScriptErrorKind;

#[test]
fn test_sample_script_shape() {
    let timeline = ScriptedTimeline::sample().expect("Failed to load sample script");

    assert_eq!(timeline.len(), 14);
    assert_eq!(timeline.protocol_trigger(), Some(6));
    assert_eq!(timeline.metadata().name(), "hotel-booking");

    let a = timeline.iter().filter(|s| *s.agent() == AgentId::A).count();
    let b = timeline.iter().filter(|s| *s.agent() == AgentId::B).count();
    assert_eq!(a, 7);
    assert_eq!(b, 7);

    assert_eq!(*timeline.step_at(0).delay_ms(), 1000);
    assert_eq!(*timeline.step_at(5).delay_ms(), 2500);
    assert_eq!(timeline.total_delay_ms(), 24_800);
}

#[test]
fn test_sample_script_alternates_speakers() {
    let timeline = ScriptedTimeline::sample().expect("Failed to load sample script");
    for (index, step) in timeline.iter().enumerate() {
        let expected = if index % 2 == 0 { AgentId::A } else { AgentId::B };
        assert_eq!(*step.agent(), expected, "step {index}");
    }
}

#[test]
fn test_unknown_agent_rejected() {
    let toml = r#"
        [[steps]]
        agent = "A"
        text = "hello"
        delay_ms = 100

        [[steps]]
        agent = "C"
        text = "who am I"
        delay_ms = 100
    "#;

    let err = toml.parse::<ScriptedTimeline>().unwrap_err();
    assert_eq!(
        err.kind,
        ScriptErrorKind::InvalidAgent {
            step: 1,
            value: "C".to_string()
        }
    );
}

#[test]
fn test_empty_agent_rejected() {
    let toml = r#"
        [[steps]]
        agent = ""
        text = "hello"
        delay_ms = 100
    "#;

    let err = toml.parse::<ScriptedTimeline>().unwrap_err();
    assert!(matches!(err.kind, ScriptErrorKind::InvalidAgent { step: 0, .. }));
}

#[test]
fn test_non_positive_delay_rejected() {
    for delay in [0, -250] {
        let toml = format!(
            r#"
            [[steps]]
            agent = "B"
            text = "hello"
            delay_ms = {delay}
            "#
        );

        let err = toml.parse::<ScriptedTimeline>().unwrap_err();
        assert_eq!(
            err.kind,
            ScriptErrorKind::NonPositiveDelay {
                step: 0,
                delay_ms: delay
            }
        );
    }
}

#[test]
fn test_empty_text_rejected() {
    let err = ScriptedTimeline::new(
        vec![
            ScriptStep::new(AgentId::A, "fine", 10),
            ScriptStep::new(AgentId::B, "", 10),
        ],
        None,
    )
    .unwrap_err();
    assert_eq!(err.kind, ScriptErrorKind::EmptyText { step: 1 });
}

#[test]
fn test_trigger_out_of_range_rejected() {
    let err = ScriptedTimeline::new(vec![ScriptStep::new(AgentId::A, "only", 10)], Some(1))
        .unwrap_err();
    assert_eq!(err.kind, ScriptErrorKind::TriggerOutOfRange { trigger: 1, len: 1 });
}

#[test]
fn test_invalid_toml_rejected() {
    let err = "[[steps]\nagent = ".parse::<ScriptedTimeline>().unwrap_err();
    assert!(matches!(err.kind, ScriptErrorKind::TomlParse(_)));
}

#[test]
fn test_missing_file_rejected() {
    let err = ScriptedTimeline::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err.kind, ScriptErrorKind::FileRead(_)));
}

#[test]
fn test_script_without_steps_loads() {
    let timeline: ScriptedTimeline = "[script]\nname = \"silent\"\n"
        .parse()
        .expect("Failed to parse empty script");
    assert!(timeline.is_empty());
    assert_eq!(timeline.protocol_trigger(), None);
}

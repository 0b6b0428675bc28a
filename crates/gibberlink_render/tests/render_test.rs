use chrono::Utc;
use gibberlink_core::{AgentId, Message, Mode, ScriptStep};
use gibberlink_render::{
    DisplayRepresentation, ENCRYPTED_BANNER, PanelView, WAVEFORM_SAMPLES, Waveform, obfuscate,
    render,
};

fn message(agent: AgentId, text: &str) -> Message {
    Message::delivered(&ScriptStep::new(agent, text, 1000), Utc::now())
}

#[test]
fn test_english_render_is_identity() {
    let msg = message(AgentId::A, "Around $200-300 per night would be ideal.");
    assert_eq!(
        render(&msg, Mode::English),
        DisplayRepresentation::Plain {
            text: "Around $200-300 per night would be ideal.".to_string()
        }
    );
}

#[test]
fn test_obfuscation_preserves_length_and_range() {
    let samples = [
        "",
        "Hello! I'm looking to book a hotel in San Francisco for next week.",
        "Affirmative. Switching to protocol mode for efficiency.",
        "tabs\tand\nnewlines",
        "naïve café 日本語 🔊🤖",
        "~~~~ !!!! \u{7f}\u{80}",
    ];

    for text in samples {
        let out = obfuscate(text);
        assert_eq!(out.chars().count(), text.chars().count(), "input {text:?}");
        assert!(
            out.chars().all(|c| (33..=126).contains(&(c as u32))),
            "output {out:?} leaves printable range"
        );
    }
}

#[test]
fn test_obfuscation_is_lossy() {
    // 'a' (97) and '\u{3}' (3) differ by 94
    assert_eq!(obfuscate("a"), obfuscate("\u{3}"));
}

#[test]
fn test_protocol_render_shape() {
    let msg = message(AgentId::B, "Protocol established.");
    let DisplayRepresentation::Protocol {
        banner,
        obfuscated,
        waveform,
    } = render(&msg, Mode::Protocol)
    else {
        panic!("expected protocol representation");
    };

    assert_eq!(banner, ENCRYPTED_BANNER);
    assert_eq!(obfuscated, obfuscate("Protocol established."));
    assert_eq!(waveform.len(), WAVEFORM_SAMPLES);
    assert!(waveform.samples().iter().all(|a| (0.0..1.0).contains(a)));
}

#[test]
fn test_waveform_bars_width() {
    let waveform = Waveform::random();
    assert_eq!(waveform.to_bars().chars().count(), WAVEFORM_SAMPLES);
}

#[test]
fn test_panel_view() {
    let messages = vec![message(AgentId::A, "one"), message(AgentId::A, "two")];

    let panel = PanelView::new(AgentId::A, &messages, Mode::English, true);
    assert_eq!(panel.name(), "AGENT A");
    assert_eq!(panel.badge(), "💬 ENGLISH MODE");
    assert!(*panel.active());
    assert_eq!(panel.entries().len(), 2);
    assert_eq!(panel.entries()[1].text(), "two");

    let rendered = panel.to_string();
    assert!(rendered.contains("AGENT A"));
    assert!(rendered.contains("one"));

    let panel = PanelView::new(AgentId::A, &messages, Mode::Protocol, false);
    assert_eq!(panel.badge(), "🔊 PROTOCOL MODE");
    assert!(panel.to_string().contains(ENCRYPTED_BANNER));
}

//! The immutable, validated script a conversation plays back.

use crate::toml_parser::{TomlScript, parse_script};
use derive_getters::Getters;
use gibberlink_core::ScriptStep;
use gibberlink_error::{ScriptError, ScriptErrorKind, ScriptResult};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

const SAMPLE_SCRIPT: &str = include_str!("../scripts/hotel_booking.toml");

/// Descriptive fields from the `[script]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ScriptMetadata {
    /// Short identifier
    name: String,
    /// Human-readable summary
    description: String,
}

impl ScriptMetadata {
    /// Create metadata with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable sequence of script steps.
///
/// Construction validates every step: text must be non-empty, delays must be
/// positive, and the protocol trigger (if any) must name an existing step.
///
/// # Examples
///
/// ```
/// use gibberlink_core::{AgentId, ScriptStep};
/// use gibberlink_script::ScriptedTimeline;
///
/// let timeline = ScriptedTimeline::new(
///     vec![
///         ScriptStep::new(AgentId::A, "ping", 100),
///         ScriptStep::new(AgentId::B, "pong", 100),
///     ],
///     Some(1),
/// )
/// .unwrap();
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.step_at(1).text(), "pong");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTimeline {
    metadata: ScriptMetadata,
    steps: Vec<ScriptStep>,
    protocol_trigger: Option<usize>,
}

impl ScriptedTimeline {
    /// Build a timeline from steps and an optional protocol trigger index.
    ///
    /// # Errors
    ///
    /// Returns an error if a step has empty text or a zero delay, or if the
    /// trigger index is not below the number of steps.
    pub fn new(steps: Vec<ScriptStep>, protocol_trigger: Option<usize>) -> ScriptResult<Self> {
        for (index, step) in steps.iter().enumerate() {
            if step.text().is_empty() {
                return Err(ScriptError::new(ScriptErrorKind::EmptyText { step: index }));
            }
            if *step.delay_ms() == 0 {
                return Err(ScriptError::new(ScriptErrorKind::NonPositiveDelay {
                    step: index,
                    delay_ms: 0,
                }));
            }
        }

        if let Some(trigger) = protocol_trigger.filter(|t| *t >= steps.len()) {
            return Err(ScriptError::new(ScriptErrorKind::TriggerOutOfRange {
                trigger,
                len: steps.len(),
            }));
        }

        Ok(Self {
            metadata: ScriptMetadata::default(),
            steps,
            protocol_trigger,
        })
    }

    /// Attach descriptive metadata.
    pub fn with_metadata(mut self, metadata: ScriptMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Loads a timeline from a TOML script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is invalid, or
    /// validation fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScriptResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(ScriptErrorKind::FileRead(e.to_string())))?;
        content.parse()
    }

    /// The bundled hotel-booking script.
    pub fn sample() -> ScriptResult<Self> {
        SAMPLE_SCRIPT.parse()
    }

    /// Step at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers walk the timeline by index and
    /// never step past the end.
    pub fn step_at(&self, index: usize) -> &ScriptStep {
        match self.steps.get(index) {
            Some(step) => step,
            None => panic!(
                "script step {} out of range for timeline of {} steps",
                index,
                self.steps.len()
            ),
        }
    }

    /// Step at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ScriptStep> {
        self.steps.get(index)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in script order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptStep> {
        self.steps.iter()
    }

    /// Index of the step whose delivery switches the conversation to protocol mode.
    pub fn protocol_trigger(&self) -> Option<usize> {
        self.protocol_trigger
    }

    /// Descriptive metadata.
    pub fn metadata(&self) -> &ScriptMetadata {
        &self.metadata
    }

    /// Sum of all step delays in milliseconds.
    pub fn total_delay_ms(&self) -> u64 {
        self.steps.iter().map(|s| *s.delay_ms()).sum()
    }
}

impl TryFrom<TomlScript> for ScriptedTimeline {
    type Error = ScriptError;

    fn try_from(script: TomlScript) -> ScriptResult<Self> {
        let steps = script
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| step.into_step(index))
            .collect::<ScriptResult<Vec<_>>>()?;

        let metadata = ScriptMetadata::new(
            script.script.name.unwrap_or_default(),
            script.script.description.unwrap_or_default(),
        );

        Ok(Self::new(steps, script.script.protocol_trigger)?.with_metadata(metadata))
    }
}

impl FromStr for ScriptedTimeline {
    type Err = ScriptError;

    fn from_str(content: &str) -> ScriptResult<Self> {
        let timeline = Self::try_from(parse_script(content)?)?;
        debug!(
            name = %timeline.metadata.name,
            steps = timeline.len(),
            trigger = ?timeline.protocol_trigger,
            "Loaded script"
        );
        Ok(timeline)
    }
}

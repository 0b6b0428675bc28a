//! Random waveform bars shown for protocol-mode messages.

use rand::Rng;
use serde::Serialize;

/// Number of bars in a waveform.
pub const WAVEFORM_SAMPLES: usize = 40;

/// Amplitudes in `[0, 1)`, freshly randomized for every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform(Vec<f64>);

impl Waveform {
    /// A new random waveform from the thread-local generator.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// A new random waveform from the given generator.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self((0..WAVEFORM_SAMPLES).map(|_| rng.r#gen::<f64>()).collect())
    }

    /// Amplitude values.
    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draw the waveform as a row of block characters.
    pub fn to_bars(&self) -> String {
        const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
        self.0
            .iter()
            .map(|amp| {
                let level = (amp * LEVELS.len() as f64) as usize;
                LEVELS[level.min(LEVELS.len() - 1)]
            })
            .collect()
    }
}

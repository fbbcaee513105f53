use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{FadeError, FadeResult};

/// Longest side allowed before both inputs are downscaled.
pub const DEFAULT_MAX_DIMENSION: u32 = 800;

/// Knobs for one cross-fade render.
///
/// Every field has a default, so a JSON config file only needs the keys it overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendParams {
    /// Number of blend steps. The transition itself spans `frames + 1` images.
    pub frames: u32,
    /// Display time of every frame, in milliseconds.
    pub duration_ms: u32,
    /// Time to linger on the first image before fading.
    pub hold_start_ms: u32,
    /// Time to linger on the final image after fading.
    pub hold_end_ms: u32,
    /// Inputs larger than this on either axis are scaled down together.
    pub max_dimension: u32,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            frames: 30,
            duration_ms: 100,
            hold_start_ms: 2000,
            hold_end_ms: 5000,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl BlendParams {
    pub fn validate(&self) -> FadeResult<()> {
        if self.duration_ms == 0 {
            return Err(FadeError::validation("frame duration must be > 0 ms"));
        }
        if self.max_dimension == 0 {
            return Err(FadeError::validation("max dimension must be > 0"));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> FadeResult<Self> {
        let params: Self = serde_json::from_str(s).context("parse blend params JSON")?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: &Path) -> FadeResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open blend params '{}'", path.display()))?;
        let params: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse blend params '{}'", path.display()))?;
        params.validate()?;
        Ok(params)
    }

    /// Nominal playback length of the rendered animation.
    pub fn total_duration_ms(&self, frame_count: usize) -> u64 {
        frame_count as u64 * u64::from(self.duration_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/params.rs"]
mod tests;

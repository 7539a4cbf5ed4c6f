use super::duration_codec;
use serde::{Deserialize, Serialize};

/// modelled average response times with zero stations converted. used for
/// display captions only, it is never re-derived from the scenario table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Baseline {
    pub overall_seconds: u32,
    pub night_seconds: u32,
}

pub const BASELINE: Baseline = Baseline {
    overall_seconds: 288,
    night_seconds: 287,
};

impl Baseline {
    pub fn overall_display(&self) -> String {
        duration_codec::format(self.overall_seconds)
    }

    pub fn night_display(&self) -> String {
        duration_codec::format(self.night_seconds)
    }
}

impl Default for Baseline {
    fn default() -> Self {
        BASELINE
    }
}

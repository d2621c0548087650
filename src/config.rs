use serde::Serialize;

use crate::{Error, Result};

/// Parameters of one routing scenario over the embedded network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioConfig {
    /// Seed for the edge-closure draws
    pub seed: u64,
    /// Probability that any given edge is closed
    pub p_closed: f64,
    pub source: String,
    pub destination: String,
    /// Print the JSON report instead of the narration
    pub json: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            p_closed: 0.02,
            source: "b".to_string(),
            destination: "g".to_string(),
            json: false,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p_closed) {
            return Err(Error::InvalidProbability(self.p_closed));
        }
        Ok(())
    }
}

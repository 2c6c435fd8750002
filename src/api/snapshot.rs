use serde::{Deserialize, Serialize};

use crate::core::{LabelDecision, PointLabel, ValueDomain};
use crate::error::{ChartError, ChartResult};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Values computed by one render pass, independent of any backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub reference: f64,
    pub step_count: usize,
    pub domain: ValueDomain,
    pub split_fraction: f64,
    pub decisions: Vec<LabelDecision>,
}

impl ChartSnapshot {
    /// Shown labels in series order.
    pub fn labels(&self) -> impl Iterator<Item = PointLabel> + '_ {
        self.decisions.iter().filter_map(|decision| decision.label())
    }

    #[must_use]
    pub fn labeled_indices(&self) -> Vec<usize> {
        self.labels().map(|label| label.index).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{Chart, ChartConfig};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

impl ChartConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a v1 contract envelope, then validates.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<ChartConfig>(input) {
            Ok(config) => config,
            Err(_) => {
                let payload: ChartConfigJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ChartError::InvalidData(format!(
                            "failed to parse chart config json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported chart config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        config.validate()?;
        Ok(config)
    }
}

impl Chart {
    pub fn config_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.config.to_json_contract_v1_pretty()
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{WaterfallError, WaterfallResult};
use crate::render::WaterfallFrame;

pub const WATERFALL_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: WaterfallFrame,
}

impl WaterfallFrame {
    pub fn to_json_pretty(&self) -> WaterfallResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            WaterfallError::Serialization(format!("failed to serialize frame json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> WaterfallResult<String> {
        let payload = WaterfallFrameJsonContractV1 {
            schema_version: WATERFALL_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            WaterfallError::Serialization(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> WaterfallResult<Self> {
        if let Ok(frame) = serde_json::from_str::<WaterfallFrame>(input) {
            return Ok(frame);
        }
        let payload: WaterfallFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            WaterfallError::Serialization(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != WATERFALL_FRAME_JSON_SCHEMA_V1 {
            return Err(WaterfallError::Serialization(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

use serde::{Deserialize, Serialize};

use crate::core::ScaleDivision;
use crate::error::{ScaleError, ScaleResult};

pub const SCALE_DIVISION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDivisionJsonContractV1 {
    pub schema_version: u32,
    pub division: ScaleDivision,
}

impl ScaleDivision {
    pub fn to_json_contract_v1_pretty(&self) -> ScaleResult<String> {
        let payload = ScaleDivisionJsonContractV1 {
            schema_version: SCALE_DIVISION_JSON_SCHEMA_V1,
            division: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize division contract v1: {e}"))
        })
    }

    /// Parses either a bare division payload or a versioned v1 contract.
    ///
    /// The restored division must pass [`ScaleDivision::validate`].
    pub fn from_json_compat_str(input: &str) -> ScaleResult<Self> {
        let division = match serde_json::from_str::<ScaleDivision>(input) {
            Ok(division) => division,
            Err(_) => parse_contract_v1(input)?,
        };
        division.validate()?;
        Ok(division)
    }
}

fn parse_contract_v1(input: &str) -> ScaleResult<ScaleDivision> {
    let payload: ScaleDivisionJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        ScaleError::InvalidData(format!("failed to parse division json payload: {e}"))
    })?;
    if payload.schema_version != SCALE_DIVISION_JSON_SCHEMA_V1 {
        return Err(ScaleError::InvalidData(format!(
            "unsupported division schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.division)
}

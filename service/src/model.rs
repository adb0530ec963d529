use serde::{Deserialize, Serialize};

/// Request body for the live-detection endpoint.  The field names are part
/// of the wire contract and must stay exactly as written.
#[derive(Debug, Serialize)]
pub struct LiveDetectionRequest<'a> {
    pub liveimage1: &'a str,
    pub liveimage2: &'a str,
}

/// Decoded live-detection response.  Every field defaults so a body that
/// omits parts of the structure still decodes; the service uses PascalCase
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LivenessResult {
    pub success: bool,
    pub state: String,
    #[serde(rename = "JobID")]
    pub job_id: String,
    pub samples: Vec<Sample>,
}

/// Per-image result entry.  Order matches the order of the submitted
/// images and is used for 1-based labeling in the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Sample {
    pub errors: Vec<ErrorEntry>,
    pub eye_centers: EyeCenters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EyeCenters {
    pub right_eye_x: f64,
    pub right_eye_y: f64,
    pub left_eye_x: f64,
    pub left_eye_y: f64,
}

//! State version data models

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// State version data from TFE API
#[derive(Deserialize, Debug)]
pub struct CurrentStateVersion {
    pub id: String,
    pub attributes: StateVersionAttributes,
}

/// State version attributes from TFE API
#[derive(Deserialize, Debug)]
pub struct StateVersionAttributes {
    pub serial: u64,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "hosted-state-download-url")]
    pub hosted_state_download_url: Option<String>,

    pub lineage: Option<String>,
}

/// Snapshot of a workspace's latest state, ready to be uploaded elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub serial: u64,
    pub lineage: Option<String>,
    /// Raw state file exactly as downloaded
    pub payload: Vec<u8>,
    /// Lowercase hex MD5 of `payload`
    pub md5: String,
}

impl StateSnapshot {
    /// Build a snapshot from a downloaded state file
    ///
    /// Lineage is read from the payload when it is a JSON state file, falling
    /// back to the lineage reported by the state version.
    pub fn from_payload(serial: u64, lineage: Option<String>, payload: Vec<u8>) -> Self {
        let lineage = serde_json::from_slice::<serde_json::Value>(&payload)
            .ok()
            .and_then(|v| v["lineage"].as_str().map(|s| s.to_string()))
            .or(lineage);
        let md5 = md5_hex(&payload);
        Self {
            serial,
            lineage,
            payload,
            md5,
        }
    }

    /// Base64 encoded payload, as expected by the upload API
    pub fn payload_base64(&self) -> String {
        BASE64.encode(&self.payload)
    }
}

/// Lowercase hex MD5 digest
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Request payload for creating a new state version
#[derive(Serialize, Debug)]
pub struct StateVersionRequest {
    pub data: StateVersionData,
}

/// State version data for upload
#[derive(Serialize, Debug)]
pub struct StateVersionData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: StateVersionUpload,
}

/// State version upload attributes
#[derive(Serialize, Debug)]
pub struct StateVersionUpload {
    pub serial: u64,
    pub md5: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,
    /// base64 encoded state
    pub state: String,
}

impl From<&StateSnapshot> for StateVersionRequest {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            data: StateVersionData {
                data_type: "state-versions".to_string(),
                attributes: StateVersionUpload {
                    serial: snapshot.serial,
                    md5: snapshot.md5.clone(),
                    lineage: snapshot.lineage.clone(),
                    state: snapshot.payload_base64(),
                },
            },
        }
    }
}

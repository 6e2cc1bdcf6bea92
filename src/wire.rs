use serde::{Deserialize, Serialize};

/// Application-level success status carried by the envelope.
pub(crate) const STATUS_OK: u16 = 200;

/// Universal response wrapper returned by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    #[serde(default)]
    pub msg: String,
    pub result: T,
}

/// Envelope before its `result` has been validated and decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    pub status: u16,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Error body shape for non-2xx responses; only `msg` is of interest.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedFolder {
    pub folderid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Splash {
    pub url: String,
}

/// Response of the upload server after a multipart POST.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    pub result: Option<UploadResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResult {
    #[serde(default)]
    pub url: Option<String>,
}

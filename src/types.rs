use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub apiid: String,
    pub email: String,
    pub signup_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadTicket {
    pub ticket: String,
    /// Seconds to wait before the ticket can be exchanged.
    #[serde(default)]
    pub wait_time: u64,
    #[serde(default)]
    pub valid_until: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub name: String,
    pub size: u64,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub converted: bool,
    /// Per-file status, e.g. `404` for an unknown id.
    pub status: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFile {
    pub name: String,
    pub size: u64,
    pub link: String,
    pub created_at: u64,
    #[serde(default)]
    pub downloads: u64,
    pub linkid: String,
    #[serde(default)]
    pub convert: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderContent {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub files: Vec<FolderFile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvertStatus {
    pub name: String,
    pub folderid: String,
    pub status: String,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub retries: u32,
    pub link: String,
    pub linkid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadUrl {
    pub url: String,
    #[serde(default)]
    pub valid_until: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUpload {
    pub id: String,
    pub folderid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUploadStatus {
    pub id: String,
    pub remoteurl: String,
    /// `new`, `downloading`, `finished`, `error`, ...
    pub status: String,
    #[serde(default)]
    pub bytes_loaded: Option<u64>,
    #[serde(default)]
    pub bytes_total: Option<u64>,
    pub folderid: String,
    pub added: String,
    pub last_update: String,
    /// Sent as `false` until the file exists.
    #[serde(default, deserialize_with = "false_or_string")]
    pub extid: Option<String>,
    /// Sent as `false` until the file exists.
    #[serde(default, deserialize_with = "false_or_string")]
    pub url: Option<String>,
}

impl RemoteUploadStatus {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// Whether polling can stop: the file is available or the upload failed.
    pub fn is_settled(&self) -> bool {
        self.url.is_some() || self.is_error()
    }
}

fn false_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FalseOrString {
        Flag(#[allow(dead_code)] bool),
        Text(String),
    }

    Ok(
        match Option::<FalseOrString>::deserialize(deserializer)? {
            Some(FalseOrString::Text(text)) if !text.is_empty() => Some(text),
            _ => None,
        },
    )
}

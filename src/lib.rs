//! `streamtape-http` is an async HTTP client for the StreamTape file hosting API.
//!
//! Every call goes through [`StreamTapeClient::execute`], which injects the
//! `login`/`key` credentials, validates the response envelope, maps failures
//! onto [`StreamTapeError`] and retries configured statuses with exponential
//! backoff. Endpoint groups are exposed as typed services:
//! - [`StreamTapeClient::account`]
//! - [`StreamTapeClient::file`]
//! - [`StreamTapeClient::download`]
//! - [`StreamTapeClient::upload`]

mod client;
mod decode;
mod error;
mod options;
mod params;
mod retry;
mod services;
mod types;
mod value;
mod wire;

pub use client::StreamTapeClient;
pub use error::{ErrorKind, StreamTapeError};
pub use options::{ClientOptions, RetryConfig, DEFAULT_BASE_URL};
pub use params::{join_ids, Query, Request};
pub use retry::JITTER_MS;
pub use services::{
    AccountService, DownloadService, FileService, RemoteUploadOptions, UploadOptions,
    UploadService, WaitOptions,
};
pub use types::{
    AccountInfo, ConvertStatus, DownloadLink, DownloadTicket, FileInfo, Folder, FolderContent,
    FolderFile, RemoteUpload, RemoteUploadStatus, UploadUrl,
};
pub use value::QueryValue;
pub use wire::Envelope;

pub type Result<T> = std::result::Result<T, StreamTapeError>;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{stream, TryStreamExt};
use reqwest::{multipart, Body, StatusCode};
use tokio::{
    fs::File,
    io::AsyncReadExt,
    time::{sleep, Instant},
};

use crate::{
    services::endpoints,
    wire::UploadResponse,
    Query, RemoteUpload, RemoteUploadStatus, Request, Result, StreamTapeClient, StreamTapeError,
    UploadUrl,
};

/// Multipart field name expected by the upload server.
const UPLOAD_FIELD: &str = "file1";
const READ_CHUNK_SIZE: usize = 64 * 1024;

type ProgressFn = Arc<dyn Fn(f64) + Send + Sync>;

/// Options for direct uploads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Target folder; root when `None`.
    pub folder_id: Option<String>,
    /// Expected SHA-256 of the file.
    pub sha256: Option<String>,
    /// Request an HTTP (non-TLS) upload URL.
    pub http_only: bool,
}

/// Options for remote (server-side) uploads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteUploadOptions {
    pub folder_id: Option<String>,
    /// Extra HTTP headers the server sends when fetching the URL.
    pub headers: Option<String>,
    /// Custom name for the stored file.
    pub name: Option<String>,
}

/// Polling behavior of [`UploadService::wait_for_remote_upload`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitOptions {
    pub poll_interval: Duration,
    /// Checked between polls; an in-flight status request is not interrupted.
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(60 * 60),
        }
    }
}

/// Direct and remote upload operations.
#[derive(Clone, Copy, Debug)]
pub struct UploadService<'a> {
    client: &'a StreamTapeClient,
}

impl<'a> UploadService<'a> {
    pub(crate) fn new(client: &'a StreamTapeClient) -> Self {
        Self { client }
    }

    /// Requests a one-off URL for a direct upload.
    pub async fn upload_url(&self, options: &UploadOptions) -> Result<UploadUrl> {
        let request = Request::get(endpoints::FILE_UPLOAD).with_query(
            Query::new()
                .with_opt("folder", options.folder_id.as_deref())
                .with_opt("sha256", options.sha256.as_deref())
                .with_flag("httponly", options.http_only),
        );
        self.client.fetch_result(&request).await
    }

    /// Uploads a local file and returns the id of the stored file.
    pub async fn upload_file(&self, path: impl AsRef<Path>, options: &UploadOptions) -> Result<String> {
        self.upload(path.as_ref(), options, None).await
    }

    /// Like [`UploadService::upload_file`], reporting progress in `0.0..=1.0`
    /// as the file is handed to the transport.
    pub async fn upload_file_with_progress<F>(
        &self,
        path: impl AsRef<Path>,
        options: &UploadOptions,
        on_progress: F,
    ) -> Result<String>
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.upload(path.as_ref(), options, Some(Arc::new(on_progress)))
            .await
    }

    async fn upload(
        &self,
        path: &Path,
        options: &UploadOptions,
        progress: Option<ProgressFn>,
    ) -> Result<String> {
        let upload_url = self.upload_url(options).await?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, file_part(path, progress).await?);

        let response = self
            .client
            .http()
            .post(&upload_url.url)
            .multipart(form)
            .send()
            .await
            .map_err(StreamTapeError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(StreamTapeError::network)?;

        let url = (status == StatusCode::OK)
            .then(|| serde_json::from_str::<UploadResponse>(&body).ok())
            .flatten()
            .and_then(|parsed| parsed.result)
            .and_then(|result| result.url)
            .ok_or_else(|| {
                StreamTapeError::Validation(
                    "upload failed: invalid response from server".to_owned(),
                )
            })?;

        extract_file_id(&url).map(str::to_owned).ok_or_else(|| {
            StreamTapeError::Validation(
                "upload failed: could not extract file id from response".to_owned(),
            )
        })
    }

    /// Asks the server to fetch `url` and store it.
    pub async fn add_remote_upload(
        &self,
        url: &str,
        options: &RemoteUploadOptions,
    ) -> Result<RemoteUpload> {
        let request = Request::get(endpoints::REMOTE_UPLOAD_ADD).with_query(
            Query::new()
                .with("url", url)
                .with_opt("folder", options.folder_id.as_deref())
                .with_opt("headers", options.headers.as_deref())
                .with_opt("name", options.name.as_deref()),
        );
        self.client.fetch_result(&request).await
    }

    pub async fn remove_remote_upload(&self, upload_id: &str) -> Result<bool> {
        let request = Request::get(endpoints::REMOTE_UPLOAD_REMOVE)
            .with_query(Query::new().with("id", upload_id));
        self.client.fetch_result(&request).await
    }

    /// Removes every queued remote upload.
    pub async fn remove_all_remote_uploads(&self) -> Result<bool> {
        self.remove_remote_upload("all").await
    }

    /// Returns remote upload states keyed by upload id.
    pub async fn remote_upload_status(
        &self,
        upload_id: &str,
    ) -> Result<HashMap<String, RemoteUploadStatus>> {
        let request = Request::get(endpoints::REMOTE_UPLOAD_STATUS)
            .with_query(Query::new().with("id", upload_id));
        self.client.fetch_result(&request).await
    }

    /// Polls until the remote upload has a file URL or reports `error`.
    pub async fn wait_for_remote_upload(
        &self,
        upload_id: &str,
        options: &WaitOptions,
    ) -> Result<RemoteUploadStatus> {
        self.wait_for_remote_upload_with_progress(upload_id, options, |_| {})
            .await
    }

    /// Like [`UploadService::wait_for_remote_upload`], passing every polled
    /// status to `on_progress`.
    pub async fn wait_for_remote_upload_with_progress<F>(
        &self,
        upload_id: &str,
        options: &WaitOptions,
        mut on_progress: F,
    ) -> Result<RemoteUploadStatus>
    where
        F: FnMut(&RemoteUploadStatus),
    {
        let started = Instant::now();

        loop {
            let status = self
                .remote_upload_status(upload_id)
                .await?
                .remove(upload_id)
                .ok_or_else(|| StreamTapeError::Validation("remote upload not found".to_owned()))?;

            on_progress(&status);

            if status.is_settled() {
                return Ok(status);
            }

            let elapsed = started.elapsed();
            if elapsed >= options.timeout {
                return Err(StreamTapeError::Generic(format!(
                    "timed out after {} ms waiting for remote upload {upload_id}",
                    elapsed.as_millis()
                )));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(upload_id, status = %status.status, "remote upload still running");

            sleep(options.poll_interval).await;
        }
    }
}

/// Streams `path` from disk as a multipart file part.
async fn file_part(path: &Path, progress: Option<ProgressFn>) -> Result<multipart::Part> {
    let file = File::open(path).await.map_err(|err| read_error(path, err))?;
    let total = file
        .metadata()
        .await
        .map_err(|err| read_error(path, err))?
        .len();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_owned();

    let mut loaded = 0u64;
    let chunks = stream::try_unfold(file, |mut file| async move {
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        let read = file.read(&mut chunk).await?;
        if read == 0 {
            return Ok::<_, std::io::Error>(None);
        }
        chunk.truncate(read);
        Ok(Some((chunk, file)))
    })
    .inspect_ok(move |chunk| {
        loaded += chunk.len() as u64;
        if let Some(progress) = &progress {
            if total > 0 {
                progress(loaded as f64 / total as f64);
            }
        }
    });

    Ok(multipart::Part::stream_with_length(Body::wrap_stream(chunks), total).file_name(file_name))
}

fn read_error(path: &Path, err: std::io::Error) -> StreamTapeError {
    StreamTapeError::Generic(format!("could not read {}: {err}", path.display()))
}

/// Pulls the id out of a file URL such as `https://streamtape.com/v/<id>/<name>`.
fn extract_file_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/v/")?;
    let id = rest.split('/').next()?;
    (!id.is_empty()).then_some(id)
}

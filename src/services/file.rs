use std::collections::HashMap;

use crate::{
    services::endpoints,
    wire::{CreatedFolder, Splash},
    ConvertStatus, FileInfo, FolderContent, Query, Request, Result, StreamTapeClient,
};

/// File and folder management.
#[derive(Clone, Copy, Debug)]
pub struct FileService<'a> {
    client: &'a StreamTapeClient,
}

impl<'a> FileService<'a> {
    pub(crate) fn new(client: &'a StreamTapeClient) -> Self {
        Self { client }
    }

    /// Looks up one or more files (the API accepts up to 100 ids per call).
    ///
    /// The result is keyed by file id.
    pub async fn info<I, S>(&self, file_ids: I) -> Result<HashMap<String, FileInfo>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let request = Request::get(endpoints::FILE_INFO)
            .with_query(Query::new().with_ids("file", file_ids));
        self.client.fetch_result(&request).await
    }

    /// Lists a folder, or the root folder when `folder_id` is `None`.
    pub async fn list_folder(&self, folder_id: Option<&str>) -> Result<FolderContent> {
        let request = Request::get(endpoints::FILE_LIST_FOLDER)
            .with_query(Query::new().with_opt("folder", folder_id));
        self.client.fetch_result(&request).await
    }

    /// Creates a folder and returns its id.
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> Result<String> {
        let request = Request::get(endpoints::FILE_CREATE_FOLDER).with_query(
            Query::new()
                .with("name", name)
                .with_opt("pid", parent_id),
        );
        let created: CreatedFolder = self.client.fetch_result(&request).await?;
        Ok(created.folderid)
    }

    pub async fn rename_folder(&self, folder_id: &str, new_name: &str) -> Result<bool> {
        let request = Request::get(endpoints::FILE_RENAME_FOLDER).with_query(
            Query::new()
                .with("folder", folder_id)
                .with("name", new_name),
        );
        self.client.fetch_result(&request).await
    }

    /// Deletes a folder together with everything inside it.
    pub async fn delete_folder(&self, folder_id: &str) -> Result<bool> {
        let request = Request::get(endpoints::FILE_DELETE_FOLDER)
            .with_query(Query::new().with("folder", folder_id));
        self.client.fetch_result(&request).await
    }

    pub async fn rename(&self, file_id: &str, new_name: &str) -> Result<bool> {
        let request = Request::get(endpoints::FILE_RENAME).with_query(
            Query::new()
                .with("file", file_id)
                .with("name", new_name),
        );
        self.client.fetch_result(&request).await
    }

    /// Moves a file into `folder_id`.
    pub async fn move_to(&self, file_id: &str, folder_id: &str) -> Result<bool> {
        let request = Request::get(endpoints::FILE_MOVE).with_query(
            Query::new()
                .with("file", file_id)
                .with("folder", folder_id),
        );
        self.client.fetch_result(&request).await
    }

    pub async fn delete(&self, file_id: &str) -> Result<bool> {
        let request =
            Request::get(endpoints::FILE_DELETE).with_query(Query::new().with("file", file_id));
        self.client.fetch_result(&request).await
    }

    pub async fn running_converts(&self) -> Result<Vec<ConvertStatus>> {
        let request = Request::get(endpoints::FILE_RUNNING_CONVERTS);
        self.client.fetch_result(&request).await
    }

    pub async fn failed_converts(&self) -> Result<Vec<ConvertStatus>> {
        let request = Request::get(endpoints::FILE_FAILED_CONVERTS);
        self.client.fetch_result(&request).await
    }

    /// Returns the thumbnail (splash image) URL of a video.
    pub async fn thumbnail(&self, file_id: &str) -> Result<String> {
        let request = Request::get(endpoints::FILE_GET_SPLASH)
            .with_query(Query::new().with("file", file_id));
        let splash: Splash = self.client.fetch_result(&request).await?;
        Ok(splash.url)
    }
}

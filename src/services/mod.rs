//! Typed façades over the API endpoints.
//!
//! Each method builds one [`Request`](crate::Request), runs it through
//! [`StreamTapeClient::execute`](crate::StreamTapeClient::execute) and
//! returns the envelope `result` (or one field of it).

mod account;
mod download;
mod file;
mod upload;

pub use account::AccountService;
pub use download::DownloadService;
pub use file::FileService;
pub use upload::{RemoteUploadOptions, UploadOptions, UploadService, WaitOptions};

pub(crate) mod endpoints {
    pub const ACCOUNT_INFO: &str = "/account/info";

    pub const FILE_INFO: &str = "/file/info";
    pub const FILE_LIST_FOLDER: &str = "/file/listfolder";
    pub const FILE_CREATE_FOLDER: &str = "/file/createfolder";
    pub const FILE_RENAME_FOLDER: &str = "/file/renamefolder";
    pub const FILE_DELETE_FOLDER: &str = "/file/deletefolder";
    pub const FILE_RENAME: &str = "/file/rename";
    pub const FILE_MOVE: &str = "/file/move";
    pub const FILE_DELETE: &str = "/file/delete";
    pub const FILE_RUNNING_CONVERTS: &str = "/file/runningconverts";
    pub const FILE_FAILED_CONVERTS: &str = "/file/failedconverts";
    pub const FILE_GET_SPLASH: &str = "/file/getsplash";

    pub const FILE_DL_TICKET: &str = "/file/dlticket";
    pub const FILE_DL: &str = "/file/dl";

    pub const FILE_UPLOAD: &str = "/file/ul";
    pub const REMOTE_UPLOAD_ADD: &str = "/remotedl/add";
    pub const REMOTE_UPLOAD_REMOVE: &str = "/remotedl/remove";
    pub const REMOTE_UPLOAD_STATUS: &str = "/remotedl/status";
}

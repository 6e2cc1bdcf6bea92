use crate::{services::endpoints, AccountInfo, Request, Result, StreamTapeClient};

/// Account operations.
#[derive(Clone, Copy, Debug)]
pub struct AccountService<'a> {
    client: &'a StreamTapeClient,
}

impl<'a> AccountService<'a> {
    pub(crate) fn new(client: &'a StreamTapeClient) -> Self {
        Self { client }
    }

    /// Returns details of the authenticated account.
    pub async fn info(&self) -> Result<AccountInfo> {
        let request = Request::get(endpoints::ACCOUNT_INFO);
        self.client.fetch_result(&request).await
    }
}

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    services::endpoints, DownloadLink, DownloadTicket, Query, Request, Result, StreamTapeClient,
};

/// Download ticket and link retrieval.
#[derive(Clone, Copy, Debug)]
pub struct DownloadService<'a> {
    client: &'a StreamTapeClient,
}

impl<'a> DownloadService<'a> {
    pub(crate) fn new(client: &'a StreamTapeClient) -> Self {
        Self { client }
    }

    /// Requests a download ticket for `file_id`.
    pub async fn ticket(&self, file_id: &str) -> Result<DownloadTicket> {
        let request = Request::get(endpoints::FILE_DL_TICKET)
            .with_query(Query::new().with("file", file_id));
        self.client.fetch_result(&request).await
    }

    /// Exchanges a ticket for a download link.
    ///
    /// Some files require a captcha; a missing or wrong answer surfaces as
    /// [`StreamTapeError::Validation`](crate::StreamTapeError::Validation)
    /// or an `ApiRequest` error, depending on how the API reports it.
    pub async fn link(
        &self,
        file_id: &str,
        ticket: &str,
        captcha_response: Option<&str>,
    ) -> Result<DownloadLink> {
        let request = Request::get(endpoints::FILE_DL).with_query(
            Query::new()
                .with("file", file_id)
                .with("ticket", ticket)
                .with_opt("captcha_response", captcha_response),
        );
        self.client.fetch_result(&request).await
    }

    /// Requests a ticket, waits out its `wait_time`, then fetches the link.
    pub async fn direct_link(
        &self,
        file_id: &str,
        captcha_response: Option<&str>,
    ) -> Result<DownloadLink> {
        let ticket = self.ticket(file_id).await?;

        if ticket.wait_time > 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(file_id, "waiting {} s for download ticket", ticket.wait_time);

            sleep(Duration::from_secs(ticket.wait_time)).await;
        }

        self.link(file_id, &ticket.ticket, captcha_response).await
    }
}

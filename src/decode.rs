use serde::de::DeserializeOwned;

use crate::{
    wire::{ErrorBody, RawEnvelope, STATUS_OK},
    Envelope, StreamTapeError,
};

const BAD_REQUEST: u16 = 400;
const FORBIDDEN: u16 = 403;
const NOT_FOUND: u16 = 404;
const BANDWIDTH_EXCEEDED: u16 = 509;

/// Maps a non-2xx HTTP response onto the error taxonomy.
pub(crate) fn classify_status(status: u16, body: String) -> StreamTapeError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.msg)
        .filter(|msg| !msg.is_empty());

    match status {
        BAD_REQUEST => StreamTapeError::Validation(
            message.unwrap_or_else(|| "invalid request parameters".to_owned()),
        ),
        FORBIDDEN => StreamTapeError::Authentication(
            "please check your login and key".to_owned(),
        ),
        NOT_FOUND => {
            StreamTapeError::NotFound("the requested resource was not found".to_owned())
        }
        BANDWIDTH_EXCEEDED => {
            StreamTapeError::RateLimit("please try again later".to_owned())
        }
        _ => StreamTapeError::ApiRequest {
            status,
            message: message.unwrap_or_else(|| "API request failed".to_owned()),
            body,
        },
    }
}

/// Validates the envelope of a 2xx response and decodes its `result`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: String,
) -> Result<Envelope<T>, StreamTapeError> {
    let raw = serde_json::from_str::<RawEnvelope>(&body).map_err(|err| {
        StreamTapeError::Generic(format!("invalid response JSON: {err}; body: {body}"))
    })?;

    if raw.status != STATUS_OK {
        return Err(StreamTapeError::ApiRequest {
            status: raw.status,
            message: raw
                .msg
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| "API request failed".to_owned()),
            body,
        });
    }

    let result = serde_json::from_value::<T>(raw.result).map_err(|err| {
        StreamTapeError::Generic(format!("unexpected result payload: {err}; body: {body}"))
    })?;

    Ok(Envelope {
        status: raw.status,
        msg: raw.msg.unwrap_or_default(),
        result,
    })
}

//! Blocking libcurl GET.

use std::time::Duration;

use url::Url;

/// Status code and body of a completed transfer.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a GET and collects the body. Non-2xx statuses are returned, not errors;
/// the caller decides what the body means.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub(crate) fn get(url: &Url, timeout: Option<Duration>) -> Result<RawResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(t) = timeout {
        easy.timeout(t)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(RawResponse { status, body })
}

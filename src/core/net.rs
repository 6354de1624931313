// src/core/net.rs

// Single blocking GET. No retries: any failure ends the run.

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Fetch `url` and return the body decoded as UTF-8.
/// Invalid byte sequences become U+FFFD; the server's declared charset is ignored.
pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    log::debug!("GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }

    let bytes = resp.bytes()?;
    log::debug!("GET {url} -> {status}, {} bytes", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

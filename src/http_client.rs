use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::error::DatasetError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> reqwest::Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
    })
}

/// GET `url` and return the body. Non-2xx responses are load failures.
pub fn fetch_text(url: &str) -> Result<String, DatasetError> {
    let client = http_client().map_err(|err| {
        DatasetError::load(url, format!("failed to build http client: {err}"))
    })?;
    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .map_err(|err| DatasetError::load(url, format!("request failed: {err}")))?;
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|err| DatasetError::load(url, format!("failed reading body: {err}")))?;
    if !status.is_success() {
        return Err(DatasetError::load(url, format!("http {status}")));
    }
    Ok(body)
}

use crate::{
    constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT},
    data::{parse_rows, Dataset},
    error::{Error, Result},
    source::interface::DataSource,
};
use reqwest::{blocking::Client, header::ACCEPT, StatusCode};
use std::time::Duration;
use url::Url;

/// Fetches rows from a JSON API with a blocking GET request.
pub struct HttpSource {
    url: Url,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::Fetch(format!("invalid URL '{}': {e}", mask_url_str(url))))?;
        Ok(Self { url, timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS), client: None })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a preconfigured client instead of building one per fetch. The
    /// client's own timeout then applies.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn client(&self) -> Result<Client> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => Ok(Client::builder().timeout(self.timeout).user_agent(USER_AGENT).build()?),
        }
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Dataset> {
        log::debug!("Fetching rows from {}", mask_url(&self.url));

        let response = self
            .client()?
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| Error::Fetch(error_chain(e)))?;

        let status = response.status();
        let body = response.text().map_err(|e| Error::Fetch(error_chain(e)))?;
        if !status.is_success() {
            return Err(Error::Fetch(status_message(status, &body)));
        }

        let rows = parse_rows(&body)?;
        log::info!("Fetched {} rows from {}", rows.len(), mask_url(&self.url));
        Dataset::new(rows)
    }
}

/// `HTTP <code> <reason>` followed by the response body on the next line.
fn status_message(status: StatusCode, body: &str) -> String {
    format!(
        "HTTP {} {}\n{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        body
    )
}

/// An error and all its sources, outermost first, joined by `: `.
fn error_chain<E>(err: E) -> String
where
    E: std::error::Error + Send + Sync + 'static,
{
    format!("{:#}", anyhow::Error::from(err))
}

/// Hides everything after the host; API URLs usually embed a key in the path.
pub fn mask_url(url: &Url) -> String {
    match url.host_str() {
        Some(host) => format!("{}://{}/***", url.scheme(), host),
        None => format!("{}:***", url.scheme()),
    }
}

fn mask_url_str(url: &str) -> String {
    Url::parse(url).map(|u| mask_url(&u)).unwrap_or_else(|_| "***".to_string())
}

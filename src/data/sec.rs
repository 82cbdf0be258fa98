//! SEC flat-file download with candidate fallback.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::data::period::BASE_URL;
use crate::domain::PeriodCandidate;
use crate::error::AppError;

/// Fixed on-disk location of the raw payload audit copy.
pub const AUDIT_COPY_PATH: &str = "latest_ftd.zip";

// sec.gov rejects requests without a plausible user agent and referer.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Safari/605.1.15";
const REFERER_URL: &str = "https://www.sec.gov/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SecClient {
    client: Client,
}

impl SecClient {
    /// Build a blocking client with the headers sec.gov expects.
    ///
    /// `FTD_USER_AGENT` (environment or `.env`) overrides the default user
    /// agent, e.g. to include contact info as the SEC requests for automated
    /// access.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let user_agent = std::env::var("FTD_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|_| AppError::new(2, "FTD_USER_AGENT contains invalid header characters."))?,
        );
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Download the first candidate whose published file exists.
    ///
    /// Candidates are tried strictly in order; the first success wins and
    /// later candidates are never attempted. An error status or a transport
    /// failure (timeout, DNS) abandons that candidate and moves on; a failed
    /// candidate is never retried. Returns the payload and the URL it came
    /// from, and writes the raw payload to [`AUDIT_COPY_PATH`].
    pub fn download_first_available(
        &self,
        candidates: &[PeriodCandidate],
    ) -> Result<(Vec<u8>, String), AppError> {
        let (payload, url) = fetch_first(candidates, |candidate| {
            let url = candidate.url(BASE_URL);
            let resp = self
                .client
                .get(&url)
                .send()
                .map_err(|e| format!("request failed: {e}"))?;
            if !resp.status().is_success() {
                return Err(format!("status {}", resp.status()));
            }
            let body = resp.bytes().map_err(|e| format!("body read failed: {e}"))?;
            Ok(body.to_vec())
        })?;

        std::fs::write(AUDIT_COPY_PATH, &payload).map_err(|e| {
            AppError::new(2, format!("Failed to write audit copy '{AUDIT_COPY_PATH}': {e}"))
        })?;

        Ok((payload, url))
    }
}

/// Try candidates in order with `attempt`, returning the first successful
/// payload and its URL.
///
/// Any candidate failure advances to the next candidate. Exhausting the list
/// is fatal, and the error message carries every attempted URL so the failure
/// is diagnosable from the message alone.
fn fetch_first<F>(
    candidates: &[PeriodCandidate],
    mut attempt: F,
) -> Result<(Vec<u8>, String), AppError>
where
    F: FnMut(&PeriodCandidate) -> Result<Vec<u8>, String>,
{
    for candidate in candidates {
        if let Ok(payload) = attempt(candidate) {
            return Ok((payload, candidate.url(BASE_URL)));
        }
    }

    let attempted: Vec<String> = candidates.iter().map(|c| c.url(BASE_URL)).collect();
    Err(AppError::new(
        4,
        format!("No fails file accessible within: [{}]", attempted.join(", ")),
    ))
}

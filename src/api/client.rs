use crate::analysis::match_record::MatchRecord;
use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints::{match_url, USER_AGENT};
use super::models::MatchDto;

const MAX_RETRIES: u32 = 3;
const REQUESTS_PER_SECOND: u32 = 20;

pub struct RiotApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(REQUESTS_PER_SECOND).unwrap_or(NonZeroU32::MIN));
        RiotApiClient {
            config,
            rate_limiter: RateLimiter::direct(quota),
        }
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }

    fn execute_request(&self, url: &str, match_id: &str) -> Result<String, AppError> {
        let api_key = self.config.require_api_key()?;
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            debug!(url, attempt = retry_count + 1, "requesting match");

            let response = ureq::get(url)
                .set("User-Agent", USER_AGENT)
                .set("X-Riot-Token", api_key)
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!(wait_ms, "rate limited by Riot API, backing off");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::MatchNotFound(match_id.to_string()));
                }
                Err(ureq::Error::Status(code @ (401 | 403), _)) => {
                    return Err(AppError::ApiError(format!(
                        "Riot API rejected the key (HTTP {})",
                        code
                    )));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchRecord, AppError> {
        let url = match_url(&self.config.region, match_id);

        let body = self.execute_request(&url, match_id)?;
        let dto: MatchDto = serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })?;
        dto.into_record()
    }
}

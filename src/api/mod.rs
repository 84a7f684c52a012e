// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the staff portal API.
//!
//! The portal reports donor-notification failures in-band: the response body
//! carries `{success, message, error?, donor_details?}` regardless of HTTP
//! status, so the body is decoded without checking the status code. Transport
//! and decode failures collapse into a rejected outcome with the generic
//! network-error text; nothing propagates past this boundary.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Rejected-outcome text when the server reports failure without detail.
const DEFAULT_FAILURE_TEXT: &str = "Failed to send notifications";

/// Rejected-outcome text for transport and decode failures.
const NETWORK_FAILURE_TEXT: &str = "Network error. Please try again.";

/// Summary of one notified donor, as reported by the portal.
#[derive(Debug, Clone, Deserialize)]
pub struct DonorSummary {
    pub name: String,
    pub blood_type: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Outcome of a donor-notification dispatch.
///
/// `Rejected.message` is display-ready: the dashboard renders it verbatim
/// behind its error prefix.
#[derive(Debug, Clone)]
pub enum NotifyOutcome {
    Delivered {
        message: String,
        donors: Vec<DonorSummary>,
    },
    Rejected {
        message: String,
    },
}

/// Dashboard counter card values from `/api/stats/quick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct QuickStats {
    pub pending_requests: u32,
    pub low_stock: u32,
    pub pending_eligibility: u32,
}

/// Wire shape of the notify endpoint's response body.
#[derive(Debug, Deserialize)]
struct NotifyResponse {
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    donor_details: Vec<DonorSummary>,
}

impl From<NotifyResponse> for NotifyOutcome {
    fn from(body: NotifyResponse) -> Self {
        if body.success {
            NotifyOutcome::Delivered {
                message: body.message,
                donors: body.donor_details,
            }
        } else {
            NotifyOutcome::Rejected {
                message: format!(
                    "Error: {}",
                    body.error.unwrap_or_else(|| DEFAULT_FAILURE_TEXT.to_string())
                ),
            }
        }
    }
}

/// Client for the portal's staff endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client against the given portal base URL.
    ///
    /// Falls back to an unconfigured `reqwest::Client` if builder options are
    /// rejected, which cannot happen with the options used here.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("BloodLinkConsole/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatches one donor notification for a blood request.
    ///
    /// Exactly one `POST /staff/requests/{id}/notify` with JSON headers and an
    /// empty body. Never fails: every failure mode maps to
    /// [`NotifyOutcome::Rejected`]. No retry is attempted.
    pub async fn notify_donors(&self, request_id: u64) -> NotifyOutcome {
        let url = format!("{}/staff/requests/{}/notify", self.base_url, request_id);
        log::debug!("dispatching donor notification for request {request_id}");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                log::debug!("notify dispatch for request {request_id} failed: {err}");
                return NotifyOutcome::Rejected {
                    message: NETWORK_FAILURE_TEXT.to_string(),
                };
            }
        };

        log::debug!(
            "notify response for request {request_id}: status {}",
            response.status()
        );

        // Failure payloads arrive with 4xx/5xx codes; decode the body either way
        match response.json::<NotifyResponse>().await {
            Ok(body) => {
                let outcome = NotifyOutcome::from(body);
                if let NotifyOutcome::Delivered { donors, .. } = &outcome {
                    if !donors.is_empty() {
                        log::debug!("donors notified for request {request_id}: {donors:?}");
                    }
                }
                outcome
            }
            Err(err) => {
                log::debug!("notify response for request {request_id} undecodable: {err}");
                NotifyOutcome::Rejected {
                    message: NETWORK_FAILURE_TEXT.to_string(),
                }
            }
        }
    }

    /// Fetches the dashboard quick-stat counters.
    pub async fn quick_stats(&self) -> Result<QuickStats> {
        let url = format!("{}/api/stats/quick", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::from)?;

        let stats = response.json::<QuickStats>().await.map_err(Error::from)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> NotifyOutcome {
        let body: NotifyResponse = serde_json::from_str(raw).expect("valid body");
        NotifyOutcome::from(body)
    }

    #[test]
    fn success_body_becomes_delivered() {
        let outcome = decode(r#"{"success": true, "message": "12 donors notified"}"#);
        match outcome {
            NotifyOutcome::Delivered { message, donors } => {
                assert_eq!(message, "12 donors notified");
                assert!(donors.is_empty());
            }
            NotifyOutcome::Rejected { .. } => panic!("expected Delivered"),
        }
    }

    #[test]
    fn success_body_carries_donor_details() {
        let outcome = decode(
            r#"{
                "success": true,
                "message": "2 donors notified",
                "donor_details": [
                    {"name": "Ada", "blood_type": "O+", "email": "ada@example.com"},
                    {"name": "Grace", "blood_type": "O+"}
                ]
            }"#,
        );
        match outcome {
            NotifyOutcome::Delivered { donors, .. } => {
                assert_eq!(donors.len(), 2);
                assert_eq!(donors[0].name, "Ada");
                assert!(donors[1].email.is_none());
            }
            NotifyOutcome::Rejected { .. } => panic!("expected Delivered"),
        }
    }

    #[test]
    fn failure_body_uses_server_error_text() {
        let outcome = decode(r#"{"success": false, "error": "No eligible donors found"}"#);
        match outcome {
            NotifyOutcome::Rejected { message } => {
                assert_eq!(message, "Error: No eligible donors found");
            }
            NotifyOutcome::Delivered { .. } => panic!("expected Rejected"),
        }
    }

    #[test]
    fn failure_body_without_error_uses_default_text() {
        // The portal's front-end ignored `message` on failure
        let outcome = decode(r#"{"success": false, "message": "ignored"}"#);
        match outcome {
            NotifyOutcome::Rejected { message } => {
                assert_eq!(message, "Error: Failed to send notifications");
            }
            NotifyOutcome::Delivered { .. } => panic!("expected Rejected"),
        }
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn quick_stats_decodes_counters() {
        let stats: QuickStats = serde_json::from_str(
            r#"{"pending_requests": 7, "low_stock": 3, "pending_eligibility": 2}"#,
        )
        .expect("valid stats");
        assert_eq!(stats.pending_requests, 7);
        assert_eq!(stats.low_stock, 3);
        assert_eq!(stats.pending_eligibility, 2);
    }
}

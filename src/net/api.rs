//! REST API helpers for communicating with the console backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! List and detail fetches return `Option` so failures degrade to an empty
//! UI without crashing hydration. The identity fetch returns `Result`
//! because its failure must abort an unjoin. The unjoin endpoint itself
//! never rejects: transport and decode failures are folded into the
//! response's `error` field.

#![allow(clippy::unused_async)]

use super::types::{ChannelInfo, ChannelSummary, Identity, Osn, UnjoinResponse};

/// Fetch the channel list from `/api/channels`.
/// Returns `None` on failure or on the server.
pub async fn fetch_channels() -> Option<Vec<ChannelSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/channels")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ChannelSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one channel's details, including its node map, from
/// `/api/channels/{name}`.
pub async fn fetch_channel(name: &str) -> Option<ChannelInfo> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/channels/{name}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ChannelInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Fetch the admin identity set from `/api/identities`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_identities() -> Result<Vec<Identity>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/identities")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("identity request failed: {}", resp.status()));
        }
        resp.json::<Vec<Identity>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Ask one ordering node to unjoin a channel via
/// `POST /api/channels/{channel}/unjoin`.
///
/// Never rejects: any transport or decode failure surfaces through
/// `UnjoinResponse::error`, matching the backend's own error reporting.
pub async fn unjoin_channel(
    identities: &[Identity],
    osn: &Osn,
    channel_name: &str,
) -> UnjoinResponse {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/channels/{channel_name}/unjoin");
        let body = serde_json::json!({
            "osn": osn,
            "identities": identities,
        });

        let req = match gloo_net::http::Request::post(&url).json(&body) {
            Ok(req) => req,
            Err(e) => return UnjoinResponse { error: Some(e.to_string()) },
        };
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return UnjoinResponse { error: Some(e.to_string()) },
        };

        resp.json::<UnjoinResponse>()
            .await
            .unwrap_or_else(|e| UnjoinResponse { error: Some(e.to_string()) })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identities, osn, channel_name);
        UnjoinResponse { error: Some("not available on server".to_owned()) }
    }
}

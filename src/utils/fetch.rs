//! Network fetching utilities with timeout support.
//!
//! Requests go through `gloo-net`; every request is tied to an
//! `AbortController` that fires after [`FETCH_TIMEOUT_MS`].

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, UrlSearchParams};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Send a request, aborting it if no response arrives within the timeout.
///
/// `finish` attaches the body (if any) and builds the request.
async fn send(
    builder: RequestBuilder,
    finish: impl FnOnce(RequestBuilder) -> Result<Request, gloo_net::Error>,
) -> Result<Response, FetchError> {
    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let request = finish(builder.abort_signal(Some(&controller.signal())))
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let timed_out = Rc::new(Cell::new(false));
    // Dropped (and thereby cancelled) when this function returns.
    let _timer = {
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(FETCH_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let response = request.send().await.map_err(|e| {
        if timed_out.get() {
            FetchError::Timeout
        } else {
            FetchError::NetworkError(e.to_string())
        }
    })?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }
    Ok(response)
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = send(Request::get(url), |b| b.build()).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// POST an `application/x-www-form-urlencoded` body and parse the JSON reply.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    fields: &[(&str, &str)],
) -> Result<T, FetchError> {
    let params = UrlSearchParams::new().map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in fields {
        params.append(name, value);
    }
    let body = String::from(params.to_string());

    let response = send(Request::post(url), |b| {
        b.header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
    })
    .await?;
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// PUT a JSON body with a bearer token. The response body is ignored.
pub async fn put_json<T: Serialize>(url: &str, token: &str, body: &T) -> Result<(), FetchError> {
    let authorization = format!("Bearer {}", token);
    send(Request::put(url), |b| {
        b.header("Authorization", &authorization).json(body)
    })
    .await?;
    Ok(())
}

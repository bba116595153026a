pub mod cashback;

use common::{ApiResponse, ErrorResponse};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

/// Turn a failed response body into a user-facing message.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => format!("Error: {}", err.error),
        Err(_) => format!("HTTP error: {}", status),
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let body = response.text().await.unwrap_or_default();
        let error_msg = error_message(response.status(), &body);
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_api_error() {
        let body = r#"{"error":"2019-12 is outside the selectable range","code":"MONTH_OUT_OF_RANGE","success":false}"#;
        assert_eq!(
            error_message(400, body),
            "Error: 2019-12 is outside the selectable range"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "HTTP error: 502");
    }
}

//! reqwest-backed transport. Builds for native targets and for `wasm32`,
//! where reqwest goes through the browser's fetch.

use crate::controller::Transport;
use crate::error::PredictError;
use crate::payload::PredictionRequest;
use log::{debug, warn};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request};

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Build the `POST` for a prediction request without sending it.
    pub fn build_request(&self, request: &PredictionRequest) -> Result<Request, PredictError> {
        let mut builder = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&request.body);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder
            .build()
            .map_err(|e| PredictError::Transport(e.to_string()))
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &PredictionRequest) -> Result<String, PredictError> {
        let http_request = self.build_request(request)?;
        debug!("POST {}", http_request.url());
        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction service at {} answered {}", request.url, status);
            return Err(PredictError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::RequestPayload;

    #[test]
    fn test_build_request_with_query() {
        let transport = ReqwestTransport::new();
        let request = PredictionRequest {
            url: "http://127.0.0.1:5000/api/predict".to_string(),
            query: vec![
                ("location".to_string(), "South Tangerang".to_string()),
                ("pollutant".to_string(), "PM2.5".to_string()),
                ("algorithm".to_string(), "sarima".to_string()),
            ],
            body: RequestPayload::Site {
                location: "South Tangerang".to_string(),
                pollutant: "PM2.5".to_string(),
                algorithm: "sarima".to_string(),
            },
        };

        let built = transport.build_request(&request).unwrap();

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(
            built.url().as_str(),
            "http://127.0.0.1:5000/api/predict?location=South+Tangerang&pollutant=PM2.5&algorithm=sarima"
        );
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
        let body: serde_json::Value =
            serde_json::from_slice(built.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body["algorithm"], "sarima");
    }

    #[test]
    fn test_build_request_without_query() {
        let transport = ReqwestTransport::new();
        let request = PredictionRequest {
            url: "http://127.0.0.1:8000/predict".to_string(),
            query: Vec::new(),
            body: RequestPayload::DateParts {
                year: 2024,
                month: 5,
                day: 10,
            },
        };

        let built = transport.build_request(&request).unwrap();

        assert_eq!(built.url().as_str(), "http://127.0.0.1:8000/predict");
        assert_eq!(
            built.body().and_then(|b| b.as_bytes()).unwrap(),
            br#"{"year":2024,"month":5,"day":10}"#
        );
    }

    #[test]
    fn test_bad_url_is_a_transport_error() {
        let transport = ReqwestTransport::new();
        let request = PredictionRequest {
            url: "not a url".to_string(),
            query: Vec::new(),
            body: RequestPayload::ModelDate {
                model: "GRU".to_string(),
                date: "2025-01-01".to_string(),
            },
        };
        assert!(matches!(
            transport.build_request(&request),
            Err(PredictError::Transport(_))
        ));
    }
}

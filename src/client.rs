use crate::codec::encode_image;
use crate::constants::GPT_API_URL;
use crate::error::AnalyzeError;
use crate::vision::{VisionRequest, VisionResponse};
use image::DynamicImage;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Client for the meal-analysis round trip. The credential is injected at
/// construction; an empty key still goes out as an empty bearer token and
/// comes back as an upstream authentication error.
pub struct MealClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl MealClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self::with_endpoint(http, api_key, GPT_API_URL.to_string())
    }

    /// Same client against a different completions endpoint; tests point
    /// this at a local mock server.
    pub fn with_endpoint(http: reqwest::Client, api_key: String, endpoint: String) -> Self {
        MealClient {
            http,
            api_key,
            endpoint,
        }
    }

    pub fn build_headers(&self) -> Result<HeaderMap, AnalyzeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// One meal photo in, one overview string out. A single POST to the
    /// completions endpoint; the reply is classified, never retried.
    pub async fn analyze(&self, image: &DynamicImage) -> Result<String, AnalyzeError> {
        let payload = encode_image(image)?;
        let request = VisionRequest::for_meal(&payload);
        log::debug!(
            "sending meal analysis request ({} bytes of base64 image)",
            payload.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.build_headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::error!("vision endpoint rejected the request ({status}): {body}");
            return Err(AnalyzeError::Upstream { status, body });
        }

        let reply: VisionResponse = serde_json::from_str(&body)?;
        match reply.meal_overview() {
            Some(overview) => Ok(overview),
            None => {
                log::error!("vision endpoint reply had no content field: {body}");
                Err(AnalyzeError::MissingContent { raw: body })
            }
        }
    }
}

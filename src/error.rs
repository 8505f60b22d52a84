use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a decoded image and the returned
/// meal overview. The shell matches on this exhaustively.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("request to the vision endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("vision endpoint returned {status}")]
    Upstream { status: StatusCode, body: String },

    #[error("vision endpoint reply was not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("vision endpoint reply carried no analysis content")]
    MissingContent { raw: String },

    #[error("the configured API key cannot be sent as a header: {0}")]
    Credential(#[from] reqwest::header::InvalidHeaderValue),

    #[error("could not encode the image for upload: {0}")]
    ImageEncode(#[from] image::ImageError),
}

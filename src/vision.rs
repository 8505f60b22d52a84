use crate::constants::{GPT4O_MODEL, JPEG_MIME, MAX_RESPONSE_TOKENS, MEAL_INSTRUCTIONS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum VisionContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct VisionMessage {
    pub role: String,
    pub content: Vec<VisionContent>,
}

#[derive(Debug, Serialize)]
pub struct VisionRequest {
    pub model: String,
    pub messages: Vec<VisionMessage>,
    pub max_tokens: u32,
}

impl VisionRequest {
    /// The fixed meal-analysis request: one user message holding the
    /// instruction text and the encoded photo as a data URI.
    pub fn for_meal(encoded_image: &str) -> Self {
        VisionRequest {
            model: GPT4O_MODEL.to_string(),
            messages: vec![VisionMessage {
                role: "user".to_string(),
                content: vec![
                    VisionContent::Text {
                        text: MEAL_INSTRUCTIONS.to_string(),
                    },
                    VisionContent::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:{};base64,{}", JPEG_MIME, encoded_image),
                        },
                    },
                ],
            }],
            max_tokens: MAX_RESPONSE_TOKENS,
        }
    }
}

// Replies are only guaranteed to carry `choices[0].message.content` on
// success, so every step of that path is optional here and absence is
// reported as a named condition by the client.
#[derive(Debug, Deserialize)]
pub struct VisionResponse {
    #[serde(default)]
    pub choices: Vec<VisionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct VisionChoice {
    pub message: VisionReply,
}

#[derive(Debug, Deserialize)]
pub struct VisionReply {
    pub content: Option<String>,
}

impl VisionResponse {
    pub fn meal_overview(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

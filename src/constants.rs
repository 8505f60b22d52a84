pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const GPT4O_MODEL: &str = "gpt-4o";
pub const MEAL_INSTRUCTIONS: &str =
    "Identify the foods in this meal and estimate the total calorie count.";
pub const MAX_RESPONSE_TOKENS: u32 = 300;
pub const JPEG_MIME: &str = "image/jpeg";
pub const JPEG_QUALITY: u8 = 75;
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const PROCESSING_ERROR_MESSAGE: &str =
    "An error occurred while processing your image. Please try again.";

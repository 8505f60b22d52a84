use crate::client::MealClient;
use crate::constants::{PROCESSING_ERROR_MESSAGE, SUPPORTED_EXTENSIONS};
use crate::error::AnalyzeError;
use colored::Colorize;
use image::GenericImageView;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Upload gate: anything outside jpg/jpeg/png never reaches the client.
pub fn is_supported_upload(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn render_meal_overview(overview: &str) -> String {
    format!("{:━^60}\n{}", " Meal Overview ".green().bold(), overview)
}

/// One user-facing line per failure kind. Everything the remote service got
/// wrong collapses to the same generic message.
pub fn render_failure(error: &AnalyzeError) -> String {
    match error {
        AnalyzeError::Upstream { .. }
        | AnalyzeError::MissingContent { .. }
        | AnalyzeError::MalformedResponse(_) => PROCESSING_ERROR_MESSAGE.to_string(),
        AnalyzeError::Transport(source) => {
            format!("The analysis service could not be reached: {}", source)
        }
        AnalyzeError::Credential(_) => {
            "The configured API key cannot be used in a request. Check OPENAI_API_KEY.".to_string()
        }
        AnalyzeError::ImageEncode(source) => {
            format!("The image could not be prepared for upload: {}", source)
        }
    }
}

pub async fn analyze_meal(client: &MealClient, path: &str) {
    let upload = Path::new(path);
    if !is_supported_upload(upload) {
        eprintln!(
            "{}",
            format!(
                "{} is not a supported image; expected one of: {}",
                path,
                SUPPORTED_EXTENSIONS.join(", ")
            )
            .red()
        );
        return;
    }

    let image = match image::open(upload) {
        Ok(image) => image,
        Err(error) => {
            log::error!("could not decode {path}: {error}");
            eprintln!("{}", format!("{} could not be read as an image.", path).red());
            return;
        }
    };

    let name = upload.file_name().and_then(|n| n.to_str()).unwrap_or(path);
    let (width, height) = image.dimensions();
    println!("Uploaded image: {} ({}x{})", name.bold(), width, height);

    let spinner = create_spinner("magenta", "Analyzing...".to_string());
    let result = client.analyze(&image).await;
    spinner.finish_and_clear();

    match result {
        Ok(overview) => println!("{}", render_meal_overview(&overview)),
        Err(error) => eprintln!("{}", render_failure(&error).red()),
    }
}

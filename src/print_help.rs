use crate::constants::SUPPORTED_EXTENSIONS;
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " Meal Analyzer ".yellow());
    println!("Upload an image of your meal to get an overview and estimate");
    println!("the calorie count.");
    println!("\nUsage:");
    println!("  {} <image-path>", "meals".bold().green());
    println!("\nArguments:");
    println!(
        "  {}  A photo of a meal ({}).",
        "<image-path>".bold().green(),
        SUPPORTED_EXTENSIONS.join(", ")
    );
    println!("\nOptions:");
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nEnvironment:");
    println!(
        "  {}  Bearer credential for the vision endpoint.",
        "OPENAI_API_KEY".bold().cyan()
    );
    println!("\nExamples:");
    println!("  {} lunch.jpg", "meals".bold().green());
    println!("{:━^60}", "".yellow());
}

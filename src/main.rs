use base64::{engine::general_purpose::STANDARD, Engine as _};
use sketchgen::models::project;
use sketchgen::{GeminiConfig, ProjectKind, SketchClient, SketchGateway};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    sketchgen::logger::init_with_config(
        sketchgen::logger::LoggerConfig::development()
            .with_level(sketchgen::logger::LogLevel::Debug),
    )?;

    sketchgen::logger::log_startup_info("sketchgen", env!("CARGO_PKG_VERSION"));

    log::info!("🔍 Checking Gemini environment...");

    // Report credential presence without printing the actual value.
    match env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
        Ok(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("Key starts with: {}...", &key[..5.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  No Gemini API key in environment variables");
            log::error!("❌ Generation requests will resolve to the empty result");
        }
    }

    let config = GeminiConfig::from_env();
    sketchgen::logger::log_config_info(&config);

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in SketchClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    log::info!("🏛️  Portfolio catalog:");
    let entries = project::catalog();
    for entry in project::filter_by_kind(&entries, Some(ProjectKind::Sketch)) {
        log::info!("  [{}] {} — {}", entry.id, entry.title, entry.category);
    }

    log::info!("🎨 Testing sketch generation...");
    let gateway = SketchGateway::new(config);

    let prompt = "a minimalist concrete villa on a cliff edge";
    log::info!("🧪 Prompt: {}", prompt);

    match gateway.generate(prompt).await {
        Some(image) => {
            log::info!("✅ Sketch generated!");
            log::info!("📏 Data URI length: {} characters", image.data_uri().len());

            let filename = format!("generated_sketch_{}.png", chrono::Utc::now().timestamp());
            match STANDARD.decode(&image.data) {
                Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                    Ok(_) => log::info!("💾 Sketch saved to: {}", filename),
                    Err(e) => log::error!("❌ Failed to save sketch: {}", e),
                },
                Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
            }
        }
        None => {
            log::warn!("🫥 No sketch this time — the gateway collapsed the failure");
            log::warn!("💡 Check the API key and the error log lines above");
        }
    }

    log::info!("🎉 Done!");
    Ok(())
}

use tauri::Manager;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "estetica_app_lib=debug,tauri_plugin_whatsapp_share=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Estetica...");

    tauri::Builder::default()
        // Exposes `plugin:whatsapp-share|share_file_to_whatsapp` to the webview
        .plugin(tauri_plugin_whatsapp_share::init())
        .setup(|app| {
            info!("Estetica ready ({})", app.config().identifier);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

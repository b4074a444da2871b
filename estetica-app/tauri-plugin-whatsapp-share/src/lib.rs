use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(target_os = "android")]
mod mobile;
#[cfg(not(target_os = "android"))]
mod unsupported;

mod bridge;
mod commands;
mod error;
mod models;

pub use bridge::{mime_type_for, normalize_recipient, IntentDispatcher, ShareBridge, ShareHandler};
pub use error::{Error, Result};

#[cfg(target_os = "android")]
use mobile::WhatsappShare;
#[cfg(not(target_os = "android"))]
use unsupported::WhatsappShare;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the whatsapp-share APIs.
pub trait WhatsappShareExt<R: Runtime> {
    fn whatsapp_share(&self) -> &WhatsappShare<R>;
}

impl<R: Runtime, T: Manager<R>> crate::WhatsappShareExt<R> for T {
    fn whatsapp_share(&self) -> &WhatsappShare<R> {
        self.state::<WhatsappShare<R>>().inner()
    }
}

/// Initializes the whatsapp-share plugin.
///
/// On Android the plugin builds an `ACTION_SEND` intent for a local file,
/// grants read access through its own FileProvider and optionally pins it
/// to WhatsApp or WhatsApp Business. On other targets requests are
/// validated and then reported as failed.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("whatsapp-share")
        .invoke_handler(tauri::generate_handler![commands::share_file_to_whatsapp])
        .setup(|app, api| {
            let authority = file_provider_authority(&app.config().identifier);
            tracing::debug!("whatsapp-share using FileProvider authority {}", authority);

            #[cfg(target_os = "android")]
            let whatsapp_share = mobile::init(app, api, authority)?;
            #[cfg(not(target_os = "android"))]
            let whatsapp_share = {
                let _ = api;
                unsupported::init(app, authority)?
            };
            app.manage(whatsapp_share);
            Ok(())
        })
        .build()
}

/// Authority of the plugin's FileProvider. The identifier doubles as the
/// Android `applicationId`, matching the manifest's
/// `${applicationId}.whatsappshare.fileprovider`.
fn file_provider_authority(identifier: &str) -> String {
    format!("{}{}", identifier, FILE_PROVIDER_AUTHORITY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_is_scoped_to_plugin_provider() {
        let authority = file_provider_authority("com.estetica.app");
        assert_eq!(authority, "com.estetica.app.whatsappshare.fileprovider");
        // Must not collide with a host-declared `${applicationId}.fileprovider`
        assert_ne!(authority, "com.estetica.app.fileprovider");
    }
}

use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::bridge::{IntentDispatcher, ShareBridge, ShareHandler};
use crate::error::Result;
use crate::models::*;

/// Initialize the Android plugin by registering with the native layer.
pub fn init<R: Runtime>(
    _app: &AppHandle<R>,
    api: PluginApi<R, ()>,
    authority: String,
) -> Result<WhatsappShare<R>> {
    let handle = api.register_android_plugin(
        "com.estetica.plugins.whatsappshare",
        "WhatsappSharePlugin",
    )?;
    Ok(WhatsappShare(ShareBridge::new(
        authority,
        AndroidDispatcher(handle),
    )))
}

/// Forwards intents to the Kotlin plugin, which resolves the FileProvider
/// URI and starts the activity.
pub struct AndroidDispatcher<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> IntentDispatcher for AndroidDispatcher<R> {
    fn dispatch(&self, intent: &ShareIntent) -> Result<()> {
        // Kotlin resolves with an empty JSObject once startActivity returns
        self.0
            .run_mobile_plugin::<serde_json::Value>("shareFile", intent)
            .map(|_| ())
            .map_err(Into::into)
    }
}

/// Access to the whatsapp-share mobile APIs.
pub struct WhatsappShare<R: Runtime>(ShareBridge<AndroidDispatcher<R>>);

impl<R: Runtime> WhatsappShare<R> {
    pub fn share_file(&self, request: ShareFileRequest) -> Result<bool> {
        self.0.share_file(request)
    }
}

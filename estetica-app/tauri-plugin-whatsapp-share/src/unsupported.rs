use tauri::{AppHandle, Manager, Runtime};
use tracing::warn;

use crate::bridge::{IntentDispatcher, ShareBridge, ShareHandler};
use crate::error::{Error, Result};
use crate::models::*;

/// Initialize the plugin on targets without Android share intents
/// (desktop and iOS).
pub fn init<R: Runtime>(app: &AppHandle<R>, authority: String) -> Result<WhatsappShare<R>> {
    Ok(WhatsappShare(ShareBridge::new(
        authority,
        UnsupportedDispatcher(app.clone()),
    )))
}

/// Dispatcher that rejects every intent.
///
/// Requests are still validated, so a missing path reports `NO_PATH`
/// everywhere; anything valid ends as a `false` result.
pub struct UnsupportedDispatcher<R: Runtime>(AppHandle<R>);

impl<R: Runtime> IntentDispatcher for UnsupportedDispatcher<R> {
    fn dispatch(&self, intent: &ShareIntent) -> Result<()> {
        warn!(
            "{} cannot share {}: no share intent support on {}",
            self.0.config().identifier,
            intent.content.path.display(),
            std::env::consts::OS
        );
        Err(Error::Unsupported)
    }
}

/// Access to the whatsapp-share APIs on targets other than Android.
pub struct WhatsappShare<R: Runtime>(ShareBridge<UnsupportedDispatcher<R>>);

impl<R: Runtime> WhatsappShare<R> {
    pub fn share_file(&self, request: ShareFileRequest) -> Result<bool> {
        self.0.share_file(request)
    }
}

//! Turns share requests from the webview into Android share intents.
//!
//! The bridge owns no platform code. Everything OS-specific sits behind
//! [`IntentDispatcher`], so the same validation and intent construction runs
//! on every target and in tests.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::models::*;

/// Hands a built intent to the operating system.
///
/// Returns once the OS has accepted the intent. Implementations must not
/// wait for the user to finish or cancel the share.
pub trait IntentDispatcher: Send + Sync {
    fn dispatch(&self, intent: &ShareIntent) -> Result<()>;
}

/// Request handler the host wires to its UI boundary.
pub trait ShareHandler: Send + Sync {
    /// Share a file to WhatsApp.
    ///
    /// - `Err(Error::MissingPath)` when the request has no path
    /// - `Ok(true)` once the intent was handed to the OS
    /// - `Ok(false)` when the OS hand-off failed
    fn share_file(&self, request: ShareFileRequest) -> Result<bool>;
}

/// Stateless share bridge over a platform dispatcher.
pub struct ShareBridge<D> {
    authority: String,
    dispatcher: D,
}

impl<D: IntentDispatcher> ShareBridge<D> {
    pub fn new(authority: impl Into<String>, dispatcher: D) -> Self {
        Self {
            authority: authority.into(),
            dispatcher,
        }
    }

    /// Build the intent for a validated request without dispatching it.
    pub fn build_intent(&self, request: &ShareRequest) -> ShareIntent {
        ShareIntent {
            action: ACTION_SEND.to_string(),
            content: ContentRef {
                authority: self.authority.clone(),
                path: request.path.clone(),
            },
            mime_type: mime_type_for(&request.path),
            text: request.caption.clone(),
            grant_read_permission: true,
            package_name: request
                .target_app
                .map(|app| app.package_name().to_string()),
            jid: request.recipient.clone(),
        }
    }
}

impl<D: IntentDispatcher> ShareHandler for ShareBridge<D> {
    fn share_file(&self, request: ShareFileRequest) -> Result<bool> {
        let request = ShareRequest::try_from(request).map_err(|e| {
            warn!("Rejected share request: {}", e);
            e
        })?;
        let intent = self.build_intent(&request);

        debug!(
            "Dispatching share intent for {} ({}, package: {:?}, recipient: {})",
            intent.content.path.display(),
            intent.mime_type,
            intent.package_name,
            intent.jid.is_some()
        );

        match self.dispatcher.dispatch(&intent) {
            Ok(()) => {
                info!("Share intent handed to the OS");
                Ok(true)
            }
            Err(e) => {
                error!("Failed to share {}: {}", intent.content.path.display(), e);
                Ok(false)
            }
        }
    }
}

impl TryFrom<ShareFileRequest> for ShareRequest {
    type Error = Error;

    fn try_from(request: ShareFileRequest) -> Result<Self> {
        let path = match request.path {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => return Err(Error::MissingPath),
        };

        let target_app = request.package.as_deref().and_then(|package| {
            let target = TargetApp::from_package(package);
            if target.is_none() {
                // Unknown packages degrade to the system chooser.
                debug!("Ignoring unrecognized target package: {}", package);
            }
            target
        });

        Ok(Self {
            path,
            caption: request.caption.unwrap_or_default(),
            target_app,
            recipient: request.phone.as_deref().and_then(normalize_recipient),
        })
    }
}

/// Convert a phone number into a WhatsApp jid.
///
/// Empty input yields `None`. Anything containing `@` is taken as a jid
/// already and returned verbatim.
pub fn normalize_recipient(phone: &str) -> Option<String> {
    if phone.is_empty() {
        None
    } else if phone.contains('@') {
        Some(phone.to_string())
    } else {
        Some(format!("{}{}", phone, WHATSAPP_JID_DOMAIN))
    }
}

/// Guess the MIME type from the file extension, `*/*` when unknown.
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}

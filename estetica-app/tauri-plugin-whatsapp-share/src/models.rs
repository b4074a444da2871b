//! Data types for the whatsapp-share plugin.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Intent action used for every share.
pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// MIME type used when the file extension gives no hint.
pub const FALLBACK_MIME_TYPE: &str = "*/*";

/// Domain appended to bare phone numbers to form a WhatsApp jid.
pub const WHATSAPP_JID_DOMAIN: &str = "@s.whatsapp.net";

/// Suffix appended to the app identifier to form the authority of the
/// plugin's own FileProvider (declared in the plugin's Android manifest).
pub const FILE_PROVIDER_AUTHORITY_SUFFIX: &str = ".whatsappshare.fileprovider";

/// Arguments of the `share_file_to_whatsapp` command as sent by the webview.
///
/// Every field is optional on the wire so that a missing path surfaces as
/// [`crate::Error::MissingPath`] instead of an IPC deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareFileRequest {
    /// Filesystem location of the file to share.
    pub path: Option<String>,
    /// Text placed alongside the file.
    pub caption: Option<String>,
    /// Android package the share should be pinned to.
    pub package: Option<String>,
    /// Recipient phone number, or a full jid.
    pub phone: Option<String>,
}

/// The WhatsApp variants a share can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetApp {
    WhatsApp,
    WhatsAppBusiness,
}

impl TargetApp {
    /// Look up a target by Android package name.
    /// Returns `None` for anything that is not a WhatsApp package.
    pub fn from_package(package: &str) -> Option<Self> {
        match package {
            "com.whatsapp" => Some(Self::WhatsApp),
            "com.whatsapp.w4b" => Some(Self::WhatsAppBusiness),
            _ => None,
        }
    }

    pub fn package_name(&self) -> &'static str {
        match self {
            Self::WhatsApp => "com.whatsapp",
            Self::WhatsAppBusiness => "com.whatsapp.w4b",
        }
    }
}

/// A validated share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub path: PathBuf,
    pub caption: String,
    pub target_app: Option<TargetApp>,
    pub recipient: Option<String>,
}

/// Provider-scoped reference to the shared file.
///
/// The native side turns this into a `content://` URI; the receiving app
/// never sees the raw path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    pub authority: String,
    pub path: PathBuf,
}

/// A fully built share intent, ready to be handed to the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareIntent {
    pub action: String,
    pub content: ContentRef,
    pub mime_type: String,
    /// Caption, delivered as `EXTRA_TEXT`.
    pub text: String,
    /// Grants the receiving app temporary read access to `content`.
    pub grant_read_permission: bool,
    /// When set, bypasses the chooser and targets this package.
    pub package_name: Option<String>,
    /// Recipient hint, delivered as the `jid` extra.
    pub jid: Option<String>,
}

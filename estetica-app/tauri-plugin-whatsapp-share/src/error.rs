//! Error types for the whatsapp-share plugin.

use serde::ser::SerializeStruct;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sharing a file.
///
/// Only [`Error::MissingPath`] ever reaches the webview from a share call;
/// platform failures are logged and reported as `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no file path.
    #[error("No file path provided")]
    MissingPath,

    /// This platform has no share intent to hand the file to.
    #[error("Sharing to WhatsApp is not supported on this platform")]
    Unsupported,

    /// Mobile plugin invocation error.
    #[cfg(target_os = "android")]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(String),
}

impl Error {
    /// Stable code for programmatic handling in the frontend.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingPath => "NO_PATH",
            Error::Unsupported => "UNSUPPORTED",
            #[cfg(target_os = "android")]
            Error::PluginInvoke(_) => "PLUGIN_INVOKE",
        }
    }
}

#[cfg(target_os = "android")]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        Error::PluginInvoke(err.to_string())
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_serialization() {
        let json = serde_json::to_value(Error::MissingPath).unwrap();
        assert_eq!(json["code"], "NO_PATH");
        assert_eq!(json["message"], "No file path provided");
    }

    #[test]
    fn test_unsupported_code() {
        assert_eq!(Error::Unsupported.code(), "UNSUPPORTED");
    }
}

use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::Result;
use crate::WhatsappShareExt;

/// Share a local file to WhatsApp.
///
/// Arguments arrive as the flat `{ path, caption, package, phone }` payload.
/// Returns `true` once Android accepted the share intent and `false` if the
/// hand-off failed. A request without a path is rejected with `NO_PATH`.
/// The call does not wait for the user to pick a chat or cancel.
#[command]
pub(crate) async fn share_file_to_whatsapp<R: Runtime>(
    app: AppHandle<R>,
    path: Option<String>,
    caption: Option<String>,
    package: Option<String>,
    phone: Option<String>,
) -> Result<bool> {
    app.whatsapp_share().share_file(ShareFileRequest {
        path,
        caption,
        package,
        phone,
    })
}

#[cfg(test)]
mod tests {
    use crate::models::*;

    #[test]
    fn test_flat_payload_keys() {
        // Same keys the webview sends as command arguments
        let req: ShareFileRequest = serde_json::from_str(
            r#"{"path":"/tmp/img.jpg","caption":"hi","package":"com.whatsapp","phone":"59171234567"}"#,
        )
        .unwrap();
        let req = ShareRequest::try_from(req).unwrap();
        assert_eq!(req.caption, "hi");
        assert_eq!(req.target_app, Some(TargetApp::WhatsApp));
        assert_eq!(req.recipient.as_deref(), Some("59171234567@s.whatsapp.net"));
    }
}

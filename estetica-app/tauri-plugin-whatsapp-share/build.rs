const COMMANDS: &[&str] = &["share_file_to_whatsapp"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .build();
}

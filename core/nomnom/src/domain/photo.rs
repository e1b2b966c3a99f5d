//! 写真の data: URI 化
//!
//! 取り込んだ画像はインライン（base64 data URI）でカタログに保存する。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// 取り込み上限（これを超える画像は受け付けない）
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// 上限超過のときの通知文面
pub const PHOTO_TOO_LARGE: &str = "图片太大了，请上传小于 2MB 的图片哦";

/// 拡張子から MIME タイプを推定する
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
}

/// バイト列を data: URI にする
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(&PathBuf::from("a.png")), "image/png");
        assert_eq!(mime_for_path(&PathBuf::from("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(&PathBuf::from("a.webp")), "image/webp");
        assert_eq!(mime_for_path(&PathBuf::from("photo")), "image/jpeg");
    }

    #[test]
    fn test_to_data_uri() {
        let uri = to_data_uri("image/png", &[0, 1, 2]);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(uri, "data:image/png;base64,AAEC");
    }
}

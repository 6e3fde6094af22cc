//! Tray Icon Resource
//!
//! The icon is embedded at compile time and decoded to RGBA when the tray
//! session applies it.

use launcher_core::TrayError;
use tray_icon::Icon;

pub const TRAY_ICON: &[u8] = include_bytes!("../../icons/icon.png");

/// Decode PNG or ICO bytes into a tray icon
pub fn decode_icon(bytes: &[u8]) -> Result<Icon, TrayError> {
    let img = image::load_from_memory(bytes).map_err(|e| TrayError::Icon(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| TrayError::Icon(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_icon_decodes() {
        let img = image::load_from_memory(TRAY_ICON).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
        assert!(decode_icon(TRAY_ICON).is_ok());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            decode_icon(b"definitely not an image"),
            Err(TrayError::Icon(_))
        ));
    }
}

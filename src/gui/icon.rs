//! Application icon for the Iced window
//!
//! The icon is drawn at startup: a filled disc in the accent color with a
//! white downward arrow.

use iced::window;
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;

/// Draw the icon pixels
fn render_icon() -> RgbaImage {
    let accent = Rgba([230u8, 0, 35, 255]);
    let white = Rgba([255u8, 255, 255, 255]);
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0;

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if dx * dx + dy * dy > radius * radius {
            return Rgba([0, 0, 0, 0]);
        }

        // Arrow shaft, then the head below it
        let shaft = dx.abs() <= 4.0 && (-18.0..=4.0).contains(&dy);
        let head = dy > 4.0 && dy <= 18.0 && dx.abs() <= 18.0 - dy;
        if shaft || head {
            white
        } else {
            accent
        }
    })
}

/// Load the application icon for the window.
///
/// Returns `None` if the platform rejects the pixels; the window then opens
/// with the default icon.
pub fn load_icon() -> Option<window::Icon> {
    let img = render_icon();
    let (width, height) = img.dimensions();
    window::icon::from_rgba(img.into_raw(), width, height).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_corners_are_transparent() {
        let img = render_icon();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(ICON_SIZE - 1, ICON_SIZE - 1)[3], 0);
        assert_eq!(img.get_pixel(ICON_SIZE / 2, ICON_SIZE / 2)[3], 255);
    }

    #[test]
    fn test_icon_loads_successfully() {
        assert!(load_icon().is_some());
    }
}

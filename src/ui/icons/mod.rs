use eframe::egui::IconData;
use image::{ImageBuffer, Rgba};

const ICON_SIZE: u32 = 32;

// Icône générée : trois lignes de tâches sur fond sombre, la première barrée
pub fn create_app_icon() -> IconData {
    let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(ICON_SIZE, ICON_SIZE);

    let rows = [
        (8u32, Rgba([128, 128, 128, 255]), true),
        (15, Rgba([255, 255, 255, 255]), false),
        (22, Rgba([255, 0, 0, 255]), true),
    ];

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Fond #141414 avec un bord transparent
        let inside = (2..ICON_SIZE - 2).contains(&x) && (2..ICON_SIZE - 2).contains(&y);
        *pixel = if inside {
            Rgba([20, 20, 20, 255])
        } else {
            Rgba([0, 0, 0, 0])
        };

        for (top, color, struck) in rows {
            let in_bar = (6..26).contains(&x) && (top..top + 4).contains(&y);
            if in_bar {
                *pixel = color;
            }
            if struck && in_bar && y == top + 2 {
                *pixel = Rgba([20, 20, 20, 255]);
            }
        }
    }

    IconData {
        rgba: img.into_raw(),
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Room label rasterization with the bundled DejaVu Sans face.

use super::put;
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::sync::OnceLock;

/// Label font size in pixels.
pub const LABEL_SIZE: f32 = 12.0;

const FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static LABEL_FONT: OnceLock<Option<FontArc>> = OnceLock::new();

/// The parsed label face, or `None` if the bundled data is unreadable.
fn label_font() -> Option<&'static FontArc> {
    LABEL_FONT
        .get_or_init(|| match FontArc::try_from_slice(FONT_DATA) {
            Ok(font) => Some(font),
            Err(e) => {
                log::error!("Bundled label font is invalid, labels disabled: {}", e);
                None
            }
        })
        .as_ref()
}

/// Draw `text` with its baseline starting at `(x, baseline)`, blending each
/// pixel by glyph coverage.
pub fn draw_text(surface: &mut RgbaImage, x: i64, baseline: i64, text: &str, color: Rgba<u8>) {
    let Some(font) = label_font() else {
        return;
    };
    let scale = PxScale::from(LABEL_SIZE);
    let scaled = font.as_scaled(scale);

    let mut caret = x as f32;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline as f32));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let alpha = (coverage.clamp(0.0, 1.0) * color[3] as f32).round() as u8;
            if alpha > 0 {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                put(surface, px, py, Rgba([color[0], color[1], color[2], alpha]));
            }
        });
    }
}

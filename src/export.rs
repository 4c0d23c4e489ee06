// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch export.
//!
//! Encodes the rendered canvas as PNG for the plan request (as a data URI)
//! and for direct download.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// MIME type of exported sketches.
pub const MIME_TYPE: &str = "image/png";

/// An encoded sketch image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ExportPayload {
    /// Encode a rendered surface as PNG.
    pub fn encode(surface: &RgbaImage) -> Result<Self> {
        let mut png = Vec::new();
        surface
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .context("encoding sketch as PNG")?;

        Ok(Self {
            png,
            width: surface.width(),
            height: surface.height(),
        })
    }

    /// `data:image/png;base64,...` form handed to the plan request.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", MIME_TYPE, STANDARD.encode(&self.png))
    }

    /// Write the PNG bytes to `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Saved sketch to {}", path.display());
        Ok(())
    }
}

/// Shared stem of every file saved for a plan: `<app>-projeto-<id>`.
pub fn plan_file_stem(app_name: &str, plan_id: &str) -> String {
    format!("{}-projeto-{}", app_name, plan_id)
}

/// File name offered when downloading a plan's sketch.
pub fn download_filename(app_name: &str, plan_id: &str) -> String {
    format!("{}.png", plan_file_stem(app_name, plan_id))
}

/// File name offered when saving a plan request.
pub fn request_filename(app_name: &str, plan_id: &str) -> String {
    format!("{}.json", plan_file_stem(app_name, plan_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn surface() -> RgbaImage {
        RgbaImage::from_pixel(4, 3, Rgba([0x1e, 0x29, 0x3b, 0xff]))
    }

    #[test]
    fn test_encode_produces_png() {
        let payload = ExportPayload::encode(&surface()).unwrap();
        assert_eq!(&payload.png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!((payload.width, payload.height), (4, 3));

        let decoded = image::load_from_memory(&payload.png).unwrap().to_rgba8();
        assert_eq!(decoded, surface());
    }

    #[test]
    fn test_data_uri() {
        let payload = ExportPayload::encode(&surface()).unwrap();
        let uri = payload.data_uri();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), payload.png);
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("architai", "k3j9x0a1b"), "architai-projeto-k3j9x0a1b.png");
    }

    #[test]
    fn test_plan_files_share_stem() {
        let stem = plan_file_stem("casa", "abc123def");
        assert_eq!(stem, "casa-projeto-abc123def");
        assert_eq!(request_filename("casa", "abc123def"), format!("{}.json", stem));
        assert_eq!(
            download_filename("casa", "abc123def").strip_suffix(".png"),
            Some(stem.as_str())
        );
    }

    #[test]
    fn test_save_png() {
        let payload = ExportPayload::encode(&surface()).unwrap();
        let path = std::env::temp_dir().join("architai_export_test.png");
        payload.save_png(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), payload.png);
        let _ = std::fs::remove_file(&path);
    }
}

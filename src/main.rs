// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ArchitAI - house floor-plan sketching
//!
//! A desktop application for sketching a house as labelled room
//! rectangles and turning the sketch into a plan generation request.

mod app;
mod config;
mod editor;
mod export;
mod io;
mod models;
mod plan;
mod render;
mod ui;

use anyhow::Result;
use app::ArchitaiApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::from_env();
    log::info!(
        "Canvas {}x{}, grid {}px, minimum room {}px",
        config.canvas_width,
        config.canvas_height,
        config.grid_spacing,
        config.min_room_size
    );

    // Leave room around the canvas for the toolbar and side panel
    let inner_size = [
        config.canvas_width as f32 + 360.0,
        config.canvas_height as f32 + 140.0,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size([800.0, 560.0])
            .with_title("ArchitAI - House Plan Sketcher"),
        ..Default::default()
    };

    eframe::run_native(
        "ArchitAI",
        options,
        Box::new(move |_cc| Ok(Box::new(ArchitaiApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

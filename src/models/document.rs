// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Room layout documents.
//!
//! A layout document is the serializable form of a sketch: the canvas
//! resolution plus every committed room.

use super::room::Room;
use serde::{Deserialize, Serialize};

/// Complete sketch layout for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchDocument {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub rooms: Vec<Room>,
}

impl SketchDocument {
    /// Create a layout document for the given canvas size and rooms.
    pub fn new(canvas_width: u32, canvas_height: u32, rooms: Vec<Room>) -> Self {
        Self {
            canvas_width,
            canvas_height,
            rooms,
        }
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Room data structures and the room type catalog.
//!
//! This module defines the rectangles users draw on the sketch canvas
//! and the fixed set of room types they can be labelled with.

use serde::{Deserialize, Serialize};

/// A 2D point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation (`#rrggbb`), as shown in the UI.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0, self.1, self.2)
    }
}

/// A selectable room type: label plus its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomType {
    pub label: &'static str,
    pub color: Rgb,
}

/// The fixed, ordered room type catalog presented as drawing tools.
pub const CATALOG: [RoomType; 5] = [
    RoomType { label: "Sala", color: Rgb(0x3b, 0x82, 0xf6) },
    RoomType { label: "Quarto", color: Rgb(0x8b, 0x5c, 0xf6) },
    RoomType { label: "Cozinha", color: Rgb(0xf5, 0x9e, 0x0b) },
    RoomType { label: "Banheiro", color: Rgb(0x10, 0xb9, 0x81) },
    RoomType { label: "Garagem", color: Rgb(0x64, 0x74, 0x8b) },
];

impl RoomType {
    /// Look up a catalog entry by its exact label.
    pub fn find(label: &str) -> Option<&'static RoomType> {
        CATALOG.iter().find(|room_type| room_type.label == label)
    }
}

/// Identifier of a room, unique within one sketch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

/// One user-drawn rectangular zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub color: Rgb,
}

impl Room {
    /// Normalize two corner points into a room of the given type.
    ///
    /// Returns `None` when either side is shorter than `min_size`.
    pub fn from_corners(
        id: RoomId,
        a: Point,
        b: Point,
        room_type: &RoomType,
        min_size: f64,
    ) -> Option<Self> {
        let width = (a.x - b.x).abs();
        let height = (a.y - b.y).abs();
        if width < min_size || height < min_size {
            return None;
        }

        Some(Self {
            id,
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width,
            height,
            label: room_type.label.to_string(),
            color: room_type.color,
        })
    }

    /// The catalog entry this room was drawn with, if its label is known.
    pub fn room_type(&self) -> Option<&'static RoomType> {
        RoomType::find(&self.label)
    }

    /// Check the stored-room invariant: finite geometry with a non-negative
    /// origin, both sides at least `min_size`, and a catalog label.
    pub fn is_valid(&self, min_size: f64) -> bool {
        [self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite())
            && self.room_type().is_some()
            && self.x >= 0.0
            && self.y >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.width >= min_size
            && self.height >= min_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 10.0;

    #[test]
    fn test_from_corners_normalizes() {
        let quarto = &CATALOG[1];
        let room = Room::from_corners(
            RoomId(1),
            Point::new(110.0, 90.0),
            Point::new(10.0, 10.0),
            quarto,
            MIN,
        )
        .unwrap();

        assert_eq!(room.x, 10.0);
        assert_eq!(room.y, 10.0);
        assert_eq!(room.width, 100.0);
        assert_eq!(room.height, 80.0);
        assert_eq!(room.label, "Quarto");
        assert_eq!(room.color, quarto.color);
    }

    #[test]
    fn test_from_corners_rejects_small() {
        let sala = &CATALOG[0];
        assert!(Room::from_corners(RoomId(1), Point::new(5.0, 5.0), Point::new(8.0, 8.0), sala, MIN).is_none());
        // One side long enough is not sufficient
        assert!(Room::from_corners(RoomId(1), Point::new(0.0, 0.0), Point::new(200.0, 9.9), sala, MIN).is_none());
        // Exactly the threshold is kept
        assert!(Room::from_corners(RoomId(1), Point::new(0.0, 0.0), Point::new(10.0, 10.0), sala, MIN).is_some());
    }

    #[test]
    fn test_catalog_labels_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn test_find_room_type_by_label() {
        assert_eq!(RoomType::find("Cozinha"), Some(&CATALOG[2]));
        assert_eq!(RoomType::find("cozinha"), None);
        assert_eq!(RoomType::find("Piscina"), None);
    }

    #[test]
    fn test_is_valid_requires_catalog_label_and_finite_geometry() {
        let sala = &CATALOG[0];
        let room = Room::from_corners(RoomId(1), Point::new(0.0, 0.0), Point::new(50.0, 40.0), sala, MIN).unwrap();
        assert!(room.is_valid(MIN));

        let pool = Room { label: "Piscina".to_string(), ..room.clone() };
        assert!(!pool.is_valid(MIN));

        let endless = Room { width: f64::INFINITY, ..room.clone() };
        assert!(!endless.is_valid(MIN));

        let undefined = Room { y: f64::NAN, ..room };
        assert!(!undefined.is_valid(MIN));
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(CATALOG[0].color.hex(), "#3b82f6");
        assert_eq!(CATALOG[4].color.hex(), "#64748b");
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch session state.
//!
//! A session owns the committed rooms, the in-progress drag and the
//! currently selected room type for one open editor.

use super::room::{Point, Room, RoomId, RoomType, CATALOG};

/// Drag state of the pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down; `start` is the canvas-relative press position.
    Dragging { start: Point, current: Point },
}

/// The in-memory state of one sketch editor instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rooms: Vec<Room>,
    drag: DragState,
    selected: usize,
    next_id: u64,
    /// Bumped on every change to the room set.
    revision: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub(crate) fn set_drag(&mut self, drag: DragState) {
        self.drag = drag;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_type(&self) -> &'static RoomType {
        &CATALOG[self.selected]
    }

    /// Select the active room type. Out-of-range indices are ignored.
    pub fn select_type(&mut self, index: usize) {
        if index < CATALOG.len() {
            self.selected = index;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Reserve the next unused room identifier.
    pub(crate) fn allocate_id(&mut self) -> RoomId {
        self.next_id += 1;
        RoomId(self.next_id)
    }

    /// Append a committed room.
    pub(crate) fn commit(&mut self, room: Room) {
        let mut rooms = Vec::with_capacity(self.rooms.len() + 1);
        rooms.extend_from_slice(&self.rooms);
        rooms.push(room);
        self.rooms = rooms;
        self.revision += 1;
    }

    /// Clear every room and drop any in-progress drag.
    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
        if !self.rooms.is_empty() {
            self.rooms = Vec::new();
            self.revision += 1;
        }
    }

    /// Replace the whole room set, keeping only rooms that satisfy the room
    /// invariant and assigning fresh identifiers. Kept rooms take the color of
    /// their catalog entry.
    ///
    /// Returns the number of rooms dropped.
    pub fn replace_rooms(&mut self, rooms: Vec<Room>, min_size: f64) -> usize {
        let total = rooms.len();
        let mut kept = Vec::with_capacity(total);
        for mut room in rooms.into_iter().filter(|r| r.is_valid(min_size)) {
            if let Some(room_type) = room.room_type() {
                room.color = room_type.color;
            }
            room.id = self.allocate_id();
            kept.push(room);
        }
        let dropped = total - kept.len();

        self.drag = DragState::Idle;
        self.rooms = kept;
        self.revision += 1;
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::Rgb;

    fn room(x: f64, y: f64, w: f64, h: f64) -> Room {
        Room {
            id: RoomId(0),
            x,
            y,
            width: w,
            height: h,
            label: "Sala".to_string(),
            color: CATALOG[0].color,
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = Session::new();
        let id = session.allocate_id();
        session.commit(Room { id, ..room(0.0, 0.0, 20.0, 20.0) });
        assert_eq!(session.rooms().len(), 1);

        session.reset();
        assert!(session.is_empty());
        let revision = session.revision();

        session.reset();
        assert!(session.is_empty());
        assert_eq!(session.revision(), revision);
        assert_eq!(session.drag(), DragState::Idle);
    }

    #[test]
    fn test_select_type_bounds() {
        let mut session = Session::new();
        assert_eq!(session.selected_type().label, "Sala");

        session.select_type(3);
        assert_eq!(session.selected_type().label, "Banheiro");

        session.select_type(CATALOG.len());
        assert_eq!(session.selected_index(), 3);
    }

    #[test]
    fn test_replace_rooms_filters_and_reassigns_ids() {
        let mut session = Session::new();
        let dropped = session.replace_rooms(
            vec![
                room(0.0, 0.0, 50.0, 50.0),
                room(0.0, 0.0, 5.0, 50.0),
                room(-1.0, 0.0, 50.0, 50.0),
                room(100.0, 100.0, 30.0, 40.0),
            ],
            10.0,
        );

        assert_eq!(dropped, 2);
        assert_eq!(session.rooms().len(), 2);
        assert_ne!(session.rooms()[0].id, session.rooms()[1].id);
        assert_eq!(session.rooms()[1].x, 100.0);
    }

    #[test]
    fn test_replace_rooms_enforces_catalog() {
        let mut session = Session::new();
        let pool = Room {
            label: "Piscina".to_string(),
            color: Rgb(1, 2, 3),
            ..room(0.0, 0.0, 50.0, 50.0)
        };
        let recolored = Room {
            label: "Garagem".to_string(),
            color: Rgb(1, 2, 3),
            ..room(100.0, 100.0, 50.0, 50.0)
        };

        assert_eq!(session.replace_rooms(vec![pool, recolored], 10.0), 1);
        assert_eq!(session.rooms().len(), 1);
        assert_eq!(session.rooms()[0].label, "Garagem");
        assert_eq!(session.rooms()[0].color, CATALOG[4].color);
    }

    #[test]
    fn test_ids_stay_unique_after_reset() {
        let mut session = Session::new();
        let first = session.allocate_id();
        session.reset();
        let second = session.allocate_id();
        assert_ne!(first, second);
    }
}

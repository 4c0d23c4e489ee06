// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer-drag interaction.
//!
//! Press starts a draft rectangle, release commits it as a room when it
//! is large enough. Everything else is a silent no-op.

use crate::models::room::{Point, Room, RoomId};
use crate::models::session::{DragState, Session};

/// Pointer input, already resolved to canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    /// Release; `None` when the position is outside the canvas.
    Up(Option<Point>),
    /// Pointer left the canvas or the drag was cancelled.
    Leave,
}

/// What an event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Started,
    Moved,
    Committed(RoomId),
    /// Draft smaller than the minimum room size.
    Discarded,
    Aborted,
    Ignored,
}

impl Outcome {
    /// Whether the room set changed (and the canvas must be redrawn).
    pub fn changed_rooms(&self) -> bool {
        matches!(self, Outcome::Committed(_))
    }
}

/// Screen-space placement of the canvas, used to resolve pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Canvas-relative point, or `None` when outside the canvas.
    pub fn resolve(&self, screen_x: f64, screen_y: f64) -> Option<Point> {
        let x = screen_x - self.left;
        let y = screen_y - self.top;
        if (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y) {
            Some(Point::new(x, y))
        } else {
            None
        }
    }
}

/// Apply one pointer event to the session.
pub fn apply(session: &mut Session, event: PointerEvent, min_size: f64) -> Outcome {
    match (session.drag(), event) {
        (_, PointerEvent::Down(start)) => {
            session.set_drag(DragState::Dragging { start, current: start });
            Outcome::Started
        }
        (DragState::Dragging { start, .. }, PointerEvent::Move(current)) => {
            session.set_drag(DragState::Dragging { start, current });
            Outcome::Moved
        }
        (DragState::Dragging { start, .. }, PointerEvent::Up(Some(end))) => {
            session.set_drag(DragState::Idle);
            // The room type is read at release, not at press.
            let room_type = session.selected_type();
            let id = session.allocate_id();
            match Room::from_corners(id, start, end, room_type, min_size) {
                Some(room) => {
                    log::info!(
                        "Added {} at ({:.0}, {:.0}) {:.0}x{:.0}",
                        room.label, room.x, room.y, room.width, room.height
                    );
                    session.commit(room);
                    Outcome::Committed(id)
                }
                None => {
                    log::debug!("Discarded draft smaller than {}px", min_size);
                    Outcome::Discarded
                }
            }
        }
        (DragState::Dragging { .. }, PointerEvent::Up(None) | PointerEvent::Leave) => {
            session.set_drag(DragState::Idle);
            log::debug!("Drag aborted");
            Outcome::Aborted
        }
        (DragState::Idle, _) => Outcome::Ignored,
    }
}

//! Update function for the Elm-style architecture
//!
//! All session state transformations flow through [`update`]. The math
//! itself lives in the pure functions of [`crate::offset`],
//! [`crate::pointer`] and [`crate::viewport`]; this module only decides
//! which of them a message triggers.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Session;
use crate::offset;
use crate::pointer;
use crate::viewport::{self, ViewportSource};

/// Apply one message to the session
pub fn update(session: &mut Session, msg: Msg, host: &dyn ViewportSource) -> Option<Cmd> {
    match msg {
        Msg::Resized => {
            let next = viewport::resize(host);
            session.viewport = next;
            Some(Cmd::ResizeSurface(next))
        }

        Msg::PointerMoved(pos) => {
            session.pointer = pos;
            session.hovered = pointer::on_move(pos, session.square_size(), session.offset);
            tracing::trace!("Pointer at ({}, {}) -> {:?}", pos.x, pos.y, session.hovered);
            // The next tick repaints
            None
        }

        Msg::PointerLeft => {
            let (hovered, position) = pointer::on_leave();
            session.hovered = hovered;
            session.pointer = position;
            None
        }

        Msg::Tick => {
            session.offset = offset::advance(session.config(), session.offset);
            // Keep the highlight on the cell now under a resting pointer
            if !session.pointer.is_outside() {
                session.hovered =
                    pointer::on_move(session.pointer, session.square_size(), session.offset);
            }
            session.frames += 1;
            Some(Cmd::Redraw)
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the few inputs the deck reacts to:
//! - Keyboard presses not captured by a widget become deck commands
//! - Touch contacts are always forwarded so a swipe starting on a button
//!   still counts
//! - Mouse drags are forwarded as pointer swipes; presses captured by a
//!   widget (a button click) do not start one

use super::message::Pointer;
use super::Message;
use crate::deck::input::command_for_key;
use iced::{event, keyboard, mouse, touch, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => command_for_key(&key).map(Message::Command),
            event::Status::Captured => None,
        },
        event::Event::Touch(touch_event) => pointer_from_touch(touch_event).map(Message::Pointer),
        event::Event::Mouse(mouse_event) => {
            pointer_from_mouse(mouse_event, status).map(Message::Pointer)
        }
        _ => None,
    })
}

fn pointer_from_touch(event: touch::Event) -> Option<Pointer> {
    match event {
        touch::Event::FingerPressed { id, position } => Some(Pointer::FingerPressed {
            finger: id,
            x: position.x,
        }),
        touch::Event::FingerLifted { id, position } => Some(Pointer::FingerLifted {
            finger: id,
            x: position.x,
        }),
        touch::Event::FingerLost { id, .. } => Some(Pointer::FingerLost { finger: id }),
        touch::Event::FingerMoved { .. } => None,
    }
}

fn pointer_from_mouse(event: mouse::Event, status: event::Status) -> Option<Pointer> {
    match event {
        mouse::Event::CursorMoved { position } => Some(Pointer::CursorMoved { x: position.x }),
        mouse::Event::ButtonPressed(mouse::Button::Left) => match status {
            event::Status::Ignored => Some(Pointer::ButtonPressed),
            event::Status::Captured => None,
        },
        mouse::Event::ButtonReleased(mouse::Button::Left) => Some(Pointer::ButtonReleased),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn finger_events_keep_horizontal_position() {
        let finger = touch::Finger(7);
        let pressed = pointer_from_touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(120.0, 40.0),
        });
        assert_eq!(pressed, Some(Pointer::FingerPressed { finger, x: 120.0 }));

        let moved = pointer_from_touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(80.0, 40.0),
        });
        assert_eq!(moved, None);
    }

    #[test]
    fn captured_mouse_press_does_not_start_a_swipe() {
        let press = mouse::Event::ButtonPressed(mouse::Button::Left);
        assert_eq!(pointer_from_mouse(press, event::Status::Captured), None);
        assert_eq!(
            pointer_from_mouse(press, event::Status::Ignored),
            Some(Pointer::ButtonPressed)
        );
    }

    #[test]
    fn release_is_forwarded_even_when_captured() {
        let release = mouse::Event::ButtonReleased(mouse::Button::Left);
        assert_eq!(
            pointer_from_mouse(release, event::Status::Captured),
            Some(Pointer::ButtonReleased)
        );
    }

    #[test]
    fn right_button_is_ignored() {
        let press = mouse::Event::ButtonPressed(mouse::Button::Right);
        assert_eq!(pointer_from_mouse(press, event::Status::Ignored), None);
    }
}

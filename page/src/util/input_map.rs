//! DOM event → viewer input mapping.
//!
//! Mouse and touch both collapse into `PointerDown` / `PointerMove` /
//! `PointerUp` carrying every active contact; the wheel keeps only its
//! vertical delta.

#[cfg(test)]
#[path = "input_map_test.rs"]
mod input_map_test;

use viewer::input::InputEvent;
use viewer::transform::Point;

/// `MouseEvent.button` value of the primary button.
const PRIMARY_BUTTON: i16 = 0;

/// `MouseEvent.buttons` bit set while the primary button is held.
const PRIMARY_BUTTONS_MASK: u16 = 1;

/// Phase of a DOM touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

pub fn wheel_input(delta_y: f64) -> InputEvent {
    InputEvent::Wheel { delta_y }
}

/// Press with the primary button; other buttons are ignored.
pub fn mouse_down_input(button: i16, point: Point) -> Option<InputEvent> {
    (button == PRIMARY_BUTTON).then(|| InputEvent::PointerDown { points: vec![point] })
}

/// Movement while the primary button is held; hover movement is ignored.
pub fn mouse_move_input(buttons: u16, point: Point) -> Option<InputEvent> {
    ((buttons & PRIMARY_BUTTONS_MASK) != 0).then(|| InputEvent::PointerMove { points: vec![point] })
}

/// `points` are the contacts still on the surface (`TouchEvent.touches`).
///
/// Lifting any finger ends the session, even if another remains.
pub fn touch_input(phase: TouchPhase, points: Vec<Point>) -> InputEvent {
    match phase {
        TouchPhase::Start => InputEvent::PointerDown { points },
        TouchPhase::Move => InputEvent::PointerMove { points },
        TouchPhase::End | TouchPhase::Cancel => InputEvent::PointerUp,
    }
}

/// Decides whether a touch interaction ends in a tap.
///
/// The touch handlers cancel the browser's compatibility mouse events, which
/// also cancels the `click` that would have reported the tap, so the release
/// of the last finger stands in for it. An interaction that ever held two
/// contacts is a pinch and never taps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TouchTap {
    active: bool,
    multi: bool,
}

impl TouchTap {
    /// Record a touch event with `contacts` fingers still down. Returns
    /// `true` when it lifted the last finger of a single-finger interaction.
    pub fn observe(&mut self, phase: TouchPhase, contacts: usize) -> bool {
        match phase {
            TouchPhase::Start => {
                if !self.active {
                    *self = Self { active: true, multi: false };
                }
                self.multi |= contacts > 1;
                false
            }
            TouchPhase::Move => {
                self.multi |= contacts > 1;
                false
            }
            TouchPhase::End if contacts == 0 => {
                let tap = self.active && !self.multi;
                *self = Self::default();
                tap
            }
            TouchPhase::End => false,
            TouchPhase::Cancel if contacts == 0 => {
                *self = Self::default();
                false
            }
            TouchPhase::Cancel => {
                self.multi = true;
                false
            }
        }
    }
}

/// Client coordinates of every touch in `list`.
#[cfg(feature = "csr")]
pub fn touch_points(list: &web_sys::TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
        .collect()
}

use glam::Vec2;

use super::event::MouseButton;

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReleaseResult {
    /// Nothing was pressed, or a different button was released.
    NoAction,
    /// The pointer moved past the drag threshold while pressed, or the
    /// press happened before any pointer position was known.
    Drag,
    /// Press and release without significant movement.
    Click {
        /// Where the click happened.
        position: Vec2,
    },
}

/// Tracks pointer position, the held button and drag detection.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    position: Option<Vec2>,
    pressed: Option<MouseButton>,
    travel: f32,
}

impl PointerState {
    /// Record a new absolute position and return the movement since the
    /// previous one (zero for the first sample).
    pub(crate) fn handle_move(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let delta = self.position.map_or(Vec2::ZERO, |last| current - last);
        self.position = Some(current);
        if self.pressed.is_some() {
            self.travel += delta.length();
        }
        delta
    }

    /// Button currently held, if any.
    pub(crate) fn pressed(&self) -> Option<MouseButton> {
        self.pressed
    }

    /// Begin a press. A second button while one is held is ignored.
    pub(crate) fn press(&mut self, button: MouseButton) -> bool {
        if self.pressed.is_some() {
            return false;
        }
        self.pressed = Some(button);
        self.travel = 0.0;
        true
    }

    /// End a press and classify it.
    pub(crate) fn release(
        &mut self,
        button: MouseButton,
        drag_threshold: f32,
    ) -> ReleaseResult {
        if self.pressed != Some(button) {
            return ReleaseResult::NoAction;
        }
        self.pressed = None;
        if self.travel > drag_threshold {
            return ReleaseResult::Drag;
        }
        // No known position to pick at; end it like a drag.
        self.position
            .map_or(ReleaseResult::Drag, |position| ReleaseResult::Click {
                position,
            })
    }

    /// Forget the held button without classifying the release.
    pub(crate) fn cancel(&mut self) {
        self.pressed = None;
        self.travel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_has_no_delta() {
        let mut state = PointerState::default();
        assert_eq!(state.handle_move(10.0, 10.0), Vec2::ZERO);
        assert_eq!(state.handle_move(13.0, 6.0), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn small_travel_is_a_click() {
        let mut state = PointerState::default();
        let _ = state.handle_move(50.0, 50.0);
        assert!(state.press(MouseButton::Left));
        let _ = state.handle_move(51.0, 51.0);
        assert_eq!(
            state.release(MouseButton::Left, 4.0),
            ReleaseResult::Click {
                position: Vec2::new(51.0, 51.0)
            }
        );
    }

    #[test]
    fn large_travel_is_a_drag() {
        let mut state = PointerState::default();
        let _ = state.handle_move(0.0, 0.0);
        assert!(state.press(MouseButton::Left));
        let _ = state.handle_move(30.0, 0.0);
        assert_eq!(state.release(MouseButton::Left, 4.0), ReleaseResult::Drag);
    }

    #[test]
    fn mismatched_release_is_ignored() {
        let mut state = PointerState::default();
        assert!(state.press(MouseButton::Right));
        assert!(!state.press(MouseButton::Left));
        assert_eq!(
            state.release(MouseButton::Left, 4.0),
            ReleaseResult::NoAction
        );
        assert_eq!(state.pressed(), Some(MouseButton::Right));
    }
}

//! Per-frame input as delivered by the input collaborator
//!
//! Four shoulder buttons and two analog sticks. Button sets are tiny bitsets so a
//! frame's input is `Copy` and cheap to log.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The fixed button vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    R1,
    L1,
    R2,
    L2,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::R1, Button::L1, Button::R2, Button::L2];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Button::R1 => 1 << 0,
            Button::L1 => 1 << 1,
            Button::R2 => 1 << 2,
            Button::L2 => 1 << 3,
        }
    }

    /// Standard gamepad button index
    pub fn gamepad_index(self) -> usize {
        match self {
            Button::L1 => 4,
            Button::R1 => 5,
            Button::L2 => 6,
            Button::R2 => 7,
        }
    }
}

/// Set of buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    #[inline]
    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    #[inline]
    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn with(mut self, button: Button) -> Self {
        self.insert(button);
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::EMPTY;
        for b in iter {
            set.insert(b);
        }
        set
    }
}

/// Input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Went down this frame
    pub pressed: ButtonSet,
    /// Went up this frame
    pub released: ButtonSet,
    /// Down this frame
    pub held: ButtonSet,
    /// Movement stick, each axis in [-1, 1]
    pub left_stick: Vec2,
    /// Aim stick, each axis in [-1, 1]
    pub right_stick: Vec2,
}

impl FrameInput {
    /// Derive edges from the previous frame's held set and the raw button state
    pub fn advance(previous: ButtonSet, down: ButtonSet, left_stick: Vec2, right_stick: Vec2) -> Self {
        Self {
            pressed: ButtonSet(down.0 & !previous.0),
            released: ButtonSet(previous.0 & !down.0),
            held: down,
            left_stick: left_stick.clamp(Vec2::NEG_ONE, Vec2::ONE),
            right_stick: right_stick.clamp(Vec2::NEG_ONE, Vec2::ONE),
        }
    }

    #[inline]
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }

    #[inline]
    pub fn released(&self, button: Button) -> bool {
        self.released.contains(button)
    }

    #[inline]
    pub fn held(&self, button: Button) -> bool {
        self.held.contains(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_set_ops() {
        let mut set = ButtonSet::EMPTY.with(Button::R1).with(Button::L2);
        assert!(set.contains(Button::R1));
        assert!(!set.contains(Button::L1));
        set.remove(Button::R1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Button::L2]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_advance_edges() {
        let prev: ButtonSet = [Button::R1, Button::L1].into_iter().collect();
        let down: ButtonSet = [Button::L1, Button::R2].into_iter().collect();
        let input = FrameInput::advance(prev, down, Vec2::ZERO, Vec2::ZERO);
        assert!(input.pressed(Button::R2));
        assert!(!input.pressed(Button::L1));
        assert!(input.released(Button::R1));
        assert!(input.held(Button::L1));
        assert!(!input.held(Button::R1));
    }

    #[test]
    fn test_advance_clamps_sticks() {
        let input = FrameInput::advance(
            ButtonSet::EMPTY,
            ButtonSet::EMPTY,
            Vec2::new(2.0, -0.5),
            Vec2::new(-3.0, 1.5),
        );
        assert_eq!(input.left_stick, Vec2::new(1.0, -0.5));
        assert_eq!(input.right_stick, Vec2::new(-1.0, 1.0));
    }
}

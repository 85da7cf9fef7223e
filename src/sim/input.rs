//! Player input
//!
//! The simulation only ever sees [`InputState`]. Keyboard, touch buttons,
//! tap-to-jump and device tilt are folded into it by [`InputReducer`], so
//! tests can drive the game with synthetic inputs.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Input flags for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        jump: false,
    };

    pub const RIGHT: Self = Self {
        left: false,
        right: true,
        jump: false,
    };

    /// -1, 0 or +1; both directions pressed cancel out
    pub fn horizontal_axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a browser-style key name (`KeyboardEvent.key`)
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "a" => Some(Key::Left),
            "d" => Some(Key::Right),
            " " => Some(Key::Jump),
            _ => None,
        }
    }
}

/// On-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

/// Raw device events, already translated out of the host's event types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    KeyDown(Key),
    KeyUp(Key),
    ButtonDown(TouchButton),
    ButtonUp(TouchButton),
    /// Tap on the play area; `y_fraction` is 0 at the top, 1 at the bottom
    Tap { y_fraction: f32 },
    /// Device left/right tilt in degrees (orientation gamma, -90..90)
    Tilt { gamma: f32 },
    /// Show/hide the on-screen buttons
    ToggleControls,
    /// Viewport orientation changed
    Orientation { landscape: bool },
}

/// Folds raw events into the per-tick [`InputState`]
#[derive(Debug, Clone)]
pub struct InputReducer {
    left: bool,
    right: bool,
    jump_held: bool,
    /// Remaining ticks of a tap-to-jump pulse
    tap_ticks: u32,
    tap_duration: u32,
    tilt_threshold: f32,
    controls_visible: bool,
    landscape: bool,
}

impl InputReducer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            left: false,
            right: false,
            jump_held: false,
            tap_ticks: 0,
            tap_duration: config.tap_jump_ticks,
            tilt_threshold: config.tilt_threshold,
            controls_visible: true,
            landscape: false,
        }
    }

    pub fn apply(&mut self, event: RawInput) {
        match event {
            RawInput::KeyDown(key) => self.set_key(key, true),
            RawInput::KeyUp(key) => self.set_key(key, false),
            RawInput::ButtonDown(button) => self.set_button(button, true),
            RawInput::ButtonUp(button) => self.set_button(button, false),
            RawInput::Tap { y_fraction } => {
                // Bottom strip belongs to the on-screen buttons
                if y_fraction < crate::consts::TAP_ZONE {
                    self.tap_ticks = self.tap_duration;
                }
            }
            RawInput::Tilt { gamma } => self.apply_tilt(gamma),
            RawInput::ToggleControls => self.controls_visible = !self.controls_visible,
            RawInput::Orientation { landscape } => self.landscape = landscape,
        }
    }

    /// Current flags for the next tick
    pub fn state(&self) -> InputState {
        InputState {
            left: self.left,
            right: self.right,
            jump: self.jump_held || self.tap_ticks > 0,
        }
    }

    /// Age one-shot inputs; call once after each tick
    pub fn end_frame(&mut self) {
        self.tap_ticks = self.tap_ticks.saturating_sub(1);
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    fn set_key(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Jump => self.jump_held = down,
        }
    }

    fn set_button(&mut self, button: TouchButton, down: bool) {
        match button {
            TouchButton::Left => self.left = down,
            TouchButton::Right => self.right = down,
            TouchButton::Jump => self.jump_held = down,
        }
    }

    /// Tilt steers only when the buttons are hidden or the device is sideways
    fn apply_tilt(&mut self, gamma: f32) {
        if self.controls_visible && !self.landscape {
            return;
        }
        if gamma > self.tilt_threshold {
            self.right = true;
            self.left = false;
        } else if gamma < -self.tilt_threshold {
            self.left = true;
            self.right = false;
        } else {
            self.left = false;
            self.right = false;
        }
    }
}

//! Toolkit-independent input vocabulary and per-session interaction bookkeeping.

use serde::{Deserialize, Serialize};

/// Which writer currently owns scroll/scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    #[default]
    Idle,
    WheelMomentum,
    PinchZoom,
    LandingAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl WheelModifiers {
    #[must_use]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Unit of wheel deltas as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelIntent {
    Pan,
    Zoom,
}

/// Wheel events pan when horizontal motion dominates or a modifier is held.
#[must_use]
pub fn classify_wheel(delta_x: f64, delta_y: f64, modifiers: WheelModifiers) -> WheelIntent {
    if delta_x.abs() > delta_y.abs() || modifiers.any() {
        WheelIntent::Pan
    } else {
        WheelIntent::Zoom
    }
}

/// Touch position relative to the viewport's left/top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    JumpToYear(i32),
}

/// Tagged union of everything the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Wheel {
        delta_x: f64,
        delta_y: f64,
        delta_mode: WheelDeltaMode,
        modifiers: WheelModifiers,
    },
    PinchStart {
        touches: [TouchPoint; 2],
    },
    PinchMove {
        touches: [TouchPoint; 2],
    },
    PinchEnd,
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerLeave,
    /// Direct drag pan; positive values reveal later years.
    Pan {
        delta_px: f64,
    },
    Key(KeyCommand),
    NavigateTo {
        year: i32,
        px_per_year: f64,
    },
}

impl InputEvent {
    /// Plain pixel-mode wheel event without modifiers.
    #[must_use]
    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        Self::Wheel {
            delta_x,
            delta_y,
            delta_mode: WheelDeltaMode::Pixel,
            modifiers: WheelModifiers::default(),
        }
    }
}

/// Pointer tracking for anchor resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: Option<(f64, f64)>,
}

impl InteractionState {
    /// Last known pointer position, relative to the viewport.
    #[must_use]
    pub fn pointer(self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Horizontal pointer offset, if the pointer is over the viewport.
    #[must_use]
    pub fn pointer_x(self) -> Option<f64> {
        self.pointer.map(|(x, _)| x)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }
}

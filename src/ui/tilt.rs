use serde::{Deserialize, Serialize};

const MAX_ROTATION_DEG: f64 = 10.0;
const HOVER_SCALE: f64 = 1.05;

/// Pointer position relative to a card's top-left corner, plus the card size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerOnCard {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// 3D hover transform for a recommendation card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    /// Transform with the pointer away from the card
    pub fn reset() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
        }
    }

    /// Leans the card toward the pointer; the top edge tips back
    pub fn from_pointer(pointer: PointerOnCard) -> Self {
        let center_x = pointer.width / 2.0;
        let center_y = pointer.height / 2.0;

        // A zero-sized card has no meaningful center
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self::reset();
        }

        Self {
            rotate_x: ((pointer.y - center_y) / center_y) * -MAX_ROTATION_DEG,
            rotate_y: ((pointer.x - center_x) / center_x) * MAX_ROTATION_DEG,
            scale: HOVER_SCALE,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

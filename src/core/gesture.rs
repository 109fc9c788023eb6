//! Swipe gesture interpretation: continuous transform during a drag, discrete
//! decision on release.
//!
//! The classification rule is a contract: a release commits when the horizontal
//! displacement passes [`SWIPE_DISTANCE_THRESHOLD`] or the velocity passes
//! [`SWIPE_VELOCITY_THRESHOLD`] (flick detection for fast short drags), with the
//! direction taken from the sign of the displacement. Everything else here (rotation
//! divisor, opacity falloff, exit targets) is presentation feedback and is only
//! required to be proportional, not bit-exact.

/// Displacement (px) past which a release commits regardless of velocity
pub const SWIPE_DISTANCE_THRESHOLD: f32 = 100.0;

/// Velocity (px/ms) past which a release commits regardless of displacement
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 0.2;

/// Horizontal offset a committed card exits to, in the swipe direction
pub const EXIT_OFFSET: f32 = 500.0;

/// Rotation a committed card exits at, in the swipe direction
pub const EXIT_ROTATION: f32 = 30.0;

/// Delay between a committed swipe and the session advancing to the next card
pub const SETTLE_DELAY_MS: u64 = 400;

/// Visual state of the current card while dragging or animating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal offset in px, right positive
    pub offset: f32,
    /// Rotation in degrees, right positive
    pub rotation: f32,
    /// Opacity in [0, 1]
    pub opacity: f32,
}

impl CardTransform {
    /// Resting transform of an untouched card
    pub const NEUTRAL: CardTransform = CardTransform {
        offset: 0.0,
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Proportional feedback while the card is held at displacement `dx`.
    ///
    /// Opacity is clamped to [0, 1]; the raw `1 - |dx|/200` formula goes negative
    /// past 200px and negative opacity is meaningless.
    pub fn from_drag(dx: f32) -> Self {
        Self {
            offset: dx,
            rotation: dx / 20.0,
            opacity: (1.0 - dx.abs() / 200.0).clamp(0.0, 1.0),
        }
    }

    /// Target transform of the exit animation for a committed swipe
    pub fn exit(direction: SwipeDirection) -> Self {
        let sign = direction.sign();
        Self {
            offset: sign * EXIT_OFFSET,
            rotation: sign * EXIT_ROTATION,
            opacity: 0.0,
        }
    }

    /// Linear interpolation toward `target`, used to sample exit animation frames
    pub fn lerp(&self, target: &CardTransform, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            offset: self.offset + (target.offset - self.offset) * t,
            rotation: self.rotation + (target.rotation - self.rotation) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
        }
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// What a release of the pointer resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Threshold met: the card commits in this direction
    Commit(SwipeDirection),
    /// Threshold not met: the card springs back to neutral
    Return,
}

/// Classify a release given the final displacement and velocity.
///
/// Direction comes from the sign of `dx`, so a pure flick (`dx == 0`) resolves left.
pub fn classify_release(dx: f32, vx: f32) -> ReleaseOutcome {
    if dx.abs() > SWIPE_DISTANCE_THRESHOLD || vx > SWIPE_VELOCITY_THRESHOLD {
        if dx > 0.0 {
            ReleaseOutcome::Commit(SwipeDirection::Right)
        } else {
            ReleaseOutcome::Commit(SwipeDirection::Left)
        }
    } else {
        ReleaseOutcome::Return
    }
}

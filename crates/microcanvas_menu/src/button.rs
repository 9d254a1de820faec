//! Button input sampling and edge detection.
//!
//! The input collaborator reports debounced *levels*; turning a level
//! stream into single-fire press events is an explicit state machine
//! here, so press semantics are testable without hardware.

/// Identifier of a physical input source (e.g. a GPIO line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub u32);

/// Debounced state of a button at one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLevel {
    /// Button is not pressed.
    #[default]
    Released,
    /// Button is pressed.
    Pressed,
}

/// Input sampler provided by the IO framework.
///
/// Each call returns the current debounced level of the given source;
/// the menu samples each of its sources once per poll step.
pub trait ButtonSource {
    /// Samples the debounced level of `id`.
    fn level(&mut self, id: ButtonId) -> ButtonLevel;
}

/// Released→Pressed transition detector.
///
/// Fires exactly once per physical press regardless of how long the
/// button is held; a release must be observed before the next fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: ButtonLevel,
}

impl EdgeDetector {
    /// Creates a detector in the released state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sampled level; returns true on a press edge.
    pub fn update(&mut self, level: ButtonLevel) -> bool {
        let edge = self.last == ButtonLevel::Released && level == ButtonLevel::Pressed;
        self.last = level;
        edge
    }

    /// Forgets any held state, e.g. after rebinding inputs.
    pub fn reset(&mut self) {
        self.last = ButtonLevel::Released;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut edge = EdgeDetector::new();

        assert!(edge.update(ButtonLevel::Pressed));
        // Held: no repeat fire
        assert!(!edge.update(ButtonLevel::Pressed));
        assert!(!edge.update(ButtonLevel::Pressed));

        assert!(!edge.update(ButtonLevel::Released));
        assert!(edge.update(ButtonLevel::Pressed));
    }

    #[test]
    fn test_reset_requires_fresh_press() {
        let mut edge = EdgeDetector::new();
        assert!(edge.update(ButtonLevel::Pressed));
        edge.reset();
        // After a reset the held button reads as a new press
        assert!(edge.update(ButtonLevel::Pressed));
    }
}

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// One-shot entrance latch. Once a section has been visible past the
/// threshold it stays revealed, whatever the viewport does afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds an intersection ratio. Returns `true` only for the observation
    /// that flips the latch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.visible = true;
        true
    }
}

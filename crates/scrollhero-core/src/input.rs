use serde::{Deserialize, Serialize};

/// Input snapshot consumed by one simulation tick.
///
/// `left`, `right`, and `jump` are held state; `shoot` is a one-shot
/// press (a key-down event, not key-held).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

impl TickInput {
    /// Fold a newer input report into this pending snapshot.
    ///
    /// Held state is overwritten with the latest report; the transient
    /// shoot flag accumulates. Without accumulation, a shoot press in
    /// frame N would be lost when frame N+1 reports shoot:false before
    /// the tick consumes it.
    pub fn merge(&mut self, newer: TickInput) {
        self.left = newer.left;
        self.right = newer.right;
        self.jump = newer.jump;
        if newer.shoot {
            self.shoot = true;
        }
    }
}

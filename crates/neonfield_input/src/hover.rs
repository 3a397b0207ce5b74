//! Hover regions
//!
//! Interactive page elements are modelled as named pixel rectangles. The
//! tracker reports enter and leave transitions as the cursor moves.

use serde::{Serialize, Deserialize};

/// A named rectangle in viewport pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverRegion {
    pub name: String,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HoverRegion {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { name: name.into(), x, y, width, height }
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Centre of the rectangle in viewport pixels
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A hover transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverEvent {
    /// The cursor entered region `index`, whose centre is `center`
    Enter { index: usize, center: (f32, f32) },
    /// The cursor left region `index`
    Leave { index: usize },
}

/// Tracks which regions currently contain the cursor
pub struct HoverTracker {
    regions: Vec<HoverRegion>,
    inside: Vec<bool>,
}

impl HoverTracker {
    pub fn new(regions: Vec<HoverRegion>) -> Self {
        let inside = vec![false; regions.len()];
        Self { regions, inside }
    }

    /// Update with the current cursor (`None` when it left the window)
    ///
    /// Events are reported in region order.
    pub fn update(&mut self, cursor: Option<(f32, f32)>) -> Vec<HoverEvent> {
        let mut events = Vec::new();
        for (index, region) in self.regions.iter().enumerate() {
            let now = cursor.is_some_and(|(x, y)| region.contains(x, y));
            match (self.inside[index], now) {
                (false, true) => {
                    log::debug!("Hover enter: {}", region.name);
                    events.push(HoverEvent::Enter { index, center: region.center() });
                }
                (true, false) => events.push(HoverEvent::Leave { index }),
                _ => {}
            }
            self.inside[index] = now;
        }
        events
    }

    pub fn regions(&self) -> &[HoverRegion] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&HoverRegion> {
        self.regions.get(index)
    }

    /// Whether the cursor is inside region `index`
    pub fn is_hovered(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }
}

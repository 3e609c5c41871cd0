use super::constants::*;
use super::keyframes::interpolate;
use fnv::FnvHashMap;

/// Vertical extent of a section in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Whether `rect` overlaps the viewport shrunk by `margin` on top and bottom.
pub fn intersects(rect: SectionRect, viewport_h: f32, margin: f32) -> bool {
    let top_edge = margin;
    let bottom_edge = viewport_h - margin;
    bottom_edge > top_edge && rect.top < bottom_edge && rect.bottom() > top_edge
}

/// Transit fraction: 0 when the section's top meets the viewport bottom, 1 when
/// its bottom meets the viewport top.
pub fn scroll_progress(rect: SectionRect, viewport_h: f32) -> f32 {
    let track = viewport_h + rect.height;
    if !(track > 0.0) {
        return 0.0;
    }
    ((viewport_h - rect.top) / track).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    NotEntered,
    Entered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealState {
    phase: RevealPhase,
    progress: f32,
}

impl RevealState {
    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn has_entered(&self) -> bool {
        self.phase == RevealPhase::Entered
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Feed one intersection sample. Returns `true` only on the single
    /// `NotEntered -> Entered` transition; `Entered` is terminal.
    pub fn observe(&mut self, rect: SectionRect, viewport_h: f32, margin: f32) -> bool {
        self.progress = scroll_progress(rect, viewport_h);
        if self.phase == RevealPhase::NotEntered && intersects(rect, viewport_h, margin) {
            self.phase = RevealPhase::Entered;
            return true;
        }
        false
    }
}

/// Scroll-linked style for a section at a given transit fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEffects {
    pub opacity: f32,
    /// Vertical shift as a percentage of the section's own height.
    pub shift_pct: f32,
}

impl ScrollEffects {
    pub fn at(progress: f32) -> Self {
        Self {
            opacity: interpolate(&SCROLL_OPACITY_INPUT, &SCROLL_OPACITY_OUTPUT, progress),
            shift_pct: interpolate(&SCROLL_SHIFT_INPUT, &SCROLL_SHIFT_OUTPUT_PCT, progress),
        }
    }
}

/// Reveal state for every tracked section, keyed by element id.
#[derive(Debug)]
pub struct RevealController {
    margin: f32,
    sections: FnvHashMap<String, RevealState>,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(REVEAL_MARGIN_PX)
    }
}

impl RevealController {
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            sections: FnvHashMap::default(),
        }
    }

    /// Start tracking `id`; re-registering keeps the existing state.
    pub fn register(&mut self, id: &str) {
        self.sections.entry(id.to_string()).or_default();
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Update `id` from its current rect; `true` when it just entered.
    /// Unregistered ids are ignored.
    pub fn update(&mut self, id: &str, rect: SectionRect, viewport_h: f32) -> bool {
        let margin = self.margin;
        match self.sections.get_mut(id) {
            Some(state) => state.observe(rect, viewport_h, margin),
            None => false,
        }
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.sections.get(id).copied()
    }

    pub fn has_entered(&self, id: &str) -> bool {
        self.state(id).map(|s| s.has_entered()).unwrap_or(false)
    }

    pub fn effects(&self, id: &str) -> Option<ScrollEffects> {
        self.state(id).map(|s| ScrollEffects::at(s.progress()))
    }
}

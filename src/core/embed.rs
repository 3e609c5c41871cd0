use super::constants::EMBED_FADE_SEC;

/// Load lifecycle of the embedded third-party scene frame.
///
/// The first outcome wins: a late `load` after an `error` (or the reverse)
/// leaves the state unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmbedState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl EmbedState {
    pub fn new() -> Self {
        Self::Loading
    }

    /// Returns `true` when the event changed the state.
    pub fn on_load(&mut self) -> bool {
        self.settle(EmbedState::Loaded)
    }

    pub fn on_error(&mut self) -> bool {
        self.settle(EmbedState::Failed)
    }

    fn settle(&mut self, outcome: EmbedState) -> bool {
        if *self != EmbedState::Loading {
            return false;
        }
        *self = outcome;
        true
    }

    #[inline]
    pub fn shows_loading(&self) -> bool {
        *self == EmbedState::Loading
    }

    #[inline]
    pub fn shows_fallback(&self) -> bool {
        *self == EmbedState::Failed
    }
}

/// Inline style for an overlay panel. Both directions run through the same
/// opacity transition; a faded-out panel stops taking pointer input.
pub fn overlay_style(visible: bool) -> String {
    if visible {
        format!("opacity:1;transition:opacity {EMBED_FADE_SEC}s")
    } else {
        format!("opacity:0;pointer-events:none;transition:opacity {EMBED_FADE_SEC}s")
    }
}

//! View Selector
//!
//! Transient UI state: which presentation mode is active, how far the
//! input-size range extends, and which classes are visible. Nothing
//! here is persisted; state lives only for the window's session.

use std::collections::BTreeMap;

use crate::catalog::Complexity;
use crate::series::clamp_max_n;

/// Slider lower bound (the data range itself allows down to 1).
pub const MIN_SLIDER_N: u32 = 5;
/// Default range endpoint when no config overrides it.
pub const DEFAULT_MAX_N: u32 = 50;

/// The three presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Growth,
    Comparison,
    Mathematical,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Growth, ViewMode::Comparison, ViewMode::Mathematical];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Growth => "Growth curves",
            ViewMode::Comparison => "Bar comparison",
            ViewMode::Mathematical => "Mathematical breakdown",
        }
    }

    /// Lenient parse for config values; unknown strings map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "growth" => Some(ViewMode::Growth),
            "comparison" => Some(ViewMode::Comparison),
            "mathematical" => Some(ViewMode::Mathematical),
            _ => None,
        }
    }
}

/// UI state driving all derived data.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub max_n: u32,
    pub mode: ViewMode,
    /// Display name of the class shown in mathematical mode.
    pub selected: String,
    pub visibility: BTreeMap<Complexity, bool>,
}

impl Default for ViewState {
    fn default() -> Self {
        let visibility = Complexity::ALL
            .iter()
            .map(|&class| {
                let visible = !matches!(class, Complexity::Cubic | Complexity::Exponential);
                (class, visible)
            })
            .collect();

        Self {
            max_n: DEFAULT_MAX_N,
            mode: ViewMode::Growth,
            selected: Complexity::Linear.name().to_string(),
            visibility,
        }
    }
}

impl ViewState {
    /// Re-clamp after any edit; the slider enforces `[5, 100]` but
    /// config values go through here too.
    pub fn clamp(&mut self) {
        self.max_n = clamp_max_n(self.max_n);
    }

    /// Visible classes in catalog order.
    pub fn visible_classes(&self) -> Vec<Complexity> {
        Complexity::ALL
            .iter()
            .copied()
            .filter(|class| self.visibility.get(class).copied().unwrap_or(false))
            .collect()
    }

    /// True when growth/comparison mode has nothing to draw.
    pub fn nothing_visible(&self) -> bool {
        self.visible_classes().is_empty()
    }

    pub fn set_visible(&mut self, class: Complexity, visible: bool) {
        self.visibility.insert(class, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_visibility_preset() {
        let state = ViewState::default();
        let visible = state.visible_classes();
        assert_eq!(
            visible,
            vec![
                Complexity::Constant,
                Complexity::Logarithmic,
                Complexity::Linear,
                Complexity::Linearithmic,
                Complexity::Quadratic,
            ]
        );
        assert!(!state.visibility[&Complexity::Cubic]);
        assert!(!state.visibility[&Complexity::Exponential]);
    }

    #[test]
    fn test_nothing_visible_notice_toggles() {
        let mut state = ViewState::default();
        for &class in &Complexity::ALL {
            state.set_visible(class, false);
        }
        assert!(state.nothing_visible());

        state.set_visible(Complexity::Cubic, true);
        assert!(!state.nothing_visible());
        assert_eq!(state.visible_classes(), vec![Complexity::Cubic]);
    }

    #[test]
    fn test_clamp_out_of_range_config() {
        let mut state = ViewState {
            max_n: 10_000,
            ..Default::default()
        };
        state.clamp();
        assert_eq!(state.max_n, 100);

        state.max_n = 0;
        state.clamp();
        assert_eq!(state.max_n, 1);
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(ViewMode::from_key("growth"), Some(ViewMode::Growth));
        assert_eq!(ViewMode::from_key("comparison"), Some(ViewMode::Comparison));
        assert_eq!(
            ViewMode::from_key("mathematical"),
            Some(ViewMode::Mathematical)
        );
        assert_eq!(ViewMode::from_key("pie"), None);
    }
}

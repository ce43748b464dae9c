//! # Slippage Controller
//!
//! The state machine behind the slippage control: preset selection, free-text
//! entry with commit-on-blur, focus tracking and auto-slippage resolution all
//! funnel through here into the settings store.
//!
//! The controller is deliberately a single component configured through
//! [`SlippageOptions`] rather than a family of near-duplicate variants: the
//! preset set, the auto-slippage toggle and the empty-blur policy are all
//! plain parameters. It owns no rendering; views derive everything they
//! display from [`SlippageController::selection`] and the committed value.
//!
//! ## Staleness
//!
//! Auto resolutions are tagged with a monotonically increasing request token.
//! Every user action that supersedes an in-flight resolution (preset click,
//! text edit, blur commit, a newer auto request) bumps the token, so a late
//! result can never clobber a more recent choice.

use crate::core::service::{SettingsPort, SLIPPAGE_KEY};
use crate::slippage::format::format_slippage;
use crate::slippage::resolver::ResolutionError;
use std::sync::Arc;

/// Which interactive element currently holds focus.
///
/// Used purely to disambiguate which element should appear selected when the
/// committed value matches several candidates (e.g. a preset equal to a typed
/// value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    None,
    Input,
    Button,
}

/// Which element the rendering should mark as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The preset at this index in the configured preset set.
    Preset(usize),
    /// The auto-slippage control.
    Auto,
    /// The custom free-text field.
    Custom,
    /// Nothing; focus rules vetoed every candidate.
    None,
}

/// Derive the selected indicator from the committed value, the auto flag and
/// the focus state.
///
/// - A preset is selected iff its value equals the committed value, auto mode
///   is off and focus is not on the input.
/// - The auto control is selected iff auto mode is on and focus is not on the
///   input.
/// - The custom field is selected iff the committed value matches no preset,
///   auto mode is off and focus is not on a button.
pub fn classify(value: &str, presets: &[String], auto: bool, focus: FocusState) -> Selection {
    if auto {
        return if focus != FocusState::Input {
            Selection::Auto
        } else {
            Selection::None
        };
    }
    if let Some(index) = presets.iter().position(|preset| preset == value) {
        return if focus != FocusState::Input {
            Selection::Preset(index)
        } else {
            Selection::None
        };
    }
    if focus != FocusState::Button {
        Selection::Custom
    } else {
        Selection::None
    }
}

/// Configuration of a slippage controller instance.
#[derive(Debug, Clone)]
pub struct SlippageOptions {
    /// Fallback and recommended tolerance; immutable for the widget's lifetime.
    pub default_value: String,
    /// Fixed set of one-click tolerances, canonicalized at construction.
    pub presets: Vec<String>,
    /// Whether the auto-slippage control is offered at all.
    pub with_auto_slippage: bool,
    /// Blur with an empty field: `true` commits the default ("cancel custom
    /// entry"), `false` keeps the prior committed value.
    pub reset_on_empty_blur: bool,
}

impl Default for SlippageOptions {
    fn default() -> Self {
        Self {
            default_value: "0.5".to_string(),
            presets: vec!["0.3".to_string(), "0.5".to_string(), "1".to_string()],
            with_auto_slippage: true,
            reset_on_empty_blur: true,
        }
    }
}

/// Outcome of applying an auto-slippage result to the controller.
#[derive(Debug)]
pub enum AutoOutcome {
    /// The result carried the current token and was committed.
    Committed(String),
    /// The result carried the current token but the resolution failed; the
    /// previously committed value and the auto flag are untouched. The caller
    /// surfaces the error to the user.
    Failed(ResolutionError),
    /// The result was superseded by a newer action and was discarded.
    Stale,
}

/// State machine coordinating presets, free-text entry, focus and
/// auto-slippage, writing committed values through the settings port.
#[derive(Clone)]
pub struct SlippageController {
    options: SlippageOptions,
    settings: Arc<dyn SettingsPort>,
    focus: FocusState,
    auto_mode: bool,
    buffer: String,
    request_seq: u64,
    auto_pending: bool,
}

impl SlippageController {
    /// Create a controller over an injected settings port.
    ///
    /// Presets are canonicalized through the formatter so that equality
    /// against committed values is exact. If the store holds no slippage yet,
    /// it is seeded with the default so every reader sees a value.
    pub fn new(mut options: SlippageOptions, settings: Arc<dyn SettingsPort>) -> Self {
        options.default_value =
            format_slippage(&options.default_value, &options.default_value, false);
        for preset in &mut options.presets {
            *preset = format_slippage(preset, &options.default_value, false);
        }
        if settings.get(SLIPPAGE_KEY).is_none() {
            settings.set_value(SLIPPAGE_KEY, &options.default_value);
        }
        Self {
            options,
            settings,
            focus: FocusState::None,
            auto_mode: false,
            buffer: String::new(),
            request_seq: 0,
            auto_pending: false,
        }
    }

    /// The committed slippage value, as every other reader of the store sees it.
    pub fn committed(&self) -> String {
        self.settings
            .get(SLIPPAGE_KEY)
            .unwrap_or_else(|| self.options.default_value.clone())
    }

    pub fn presets(&self) -> &[String] {
        &self.options.presets
    }

    pub fn default_value(&self) -> &str {
        &self.options.default_value
    }

    pub fn with_auto(&self) -> bool {
        self.options.with_auto_slippage
    }

    pub fn is_auto(&self) -> bool {
        self.auto_mode
    }

    pub fn auto_pending(&self) -> bool {
        self.auto_pending
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// Write counter of the underlying store, for readers tracking changes.
    pub fn settings_revision(&self) -> u64 {
        self.settings.revision()
    }

    /// The selected indicator, derived fresh from current state on every call.
    pub fn selection(&self) -> Selection {
        classify(
            &self.committed(),
            &self.options.presets,
            self.auto_mode,
            self.focus,
        )
    }

    /// What the custom input field should display: the live buffer while the
    /// field is focused, the committed value when it is the active custom
    /// choice, and nothing otherwise.
    pub fn input_display(&self) -> String {
        if self.focus == FocusState::Input {
            return self.buffer.clone();
        }
        let committed = self.committed();
        match classify(
            &committed,
            &self.options.presets,
            self.auto_mode,
            self.focus,
        ) {
            Selection::Custom => committed,
            _ => String::new(),
        }
    }

    /// Select the preset at `index`: clears auto mode and any in-flight
    /// resolution, empties the text buffer and commits the canonical preset.
    pub fn select_preset(&mut self, index: usize) {
        let Some(preset) = self.options.presets.get(index).cloned() else {
            tracing::warn!(index, "Ignoring out-of-range preset selection");
            return;
        };
        self.invalidate_pending();
        self.auto_mode = false;
        self.buffer.clear();
        self.focus = FocusState::Button;
        let value = format_slippage(&preset, &self.options.default_value, false);
        self.settings.set_value(SLIPPAGE_KEY, &value);
    }

    /// Per-keystroke update of the custom field. The buffer keeps the text
    /// verbatim; the store receives the editing-mode echo so other views
    /// reflect the in-progress value live.
    pub fn input_changed(&mut self, text: &str) {
        self.invalidate_pending();
        self.auto_mode = false;
        self.focus = FocusState::Input;
        self.buffer = text.to_string();
        let raw = if text.is_empty() {
            self.options.default_value.clone()
        } else {
            text.to_string()
        };
        let echoed = format_slippage(&raw, &self.options.default_value, true);
        self.settings.set_value(SLIPPAGE_KEY, &echoed);
    }

    /// Commit-on-blur. A non-empty buffer commits its canonical form; an
    /// empty buffer is "cancel custom entry" and, under the default policy,
    /// commits the default tolerance and hands the selected indicator back to
    /// the default preset.
    pub fn input_blurred(&mut self) {
        self.invalidate_pending();
        self.auto_mode = false;
        if self.buffer.is_empty() {
            if self.options.reset_on_empty_blur {
                self.focus = FocusState::Button;
                let value =
                    format_slippage(&self.options.default_value, &self.options.default_value, false);
                self.settings.set_value(SLIPPAGE_KEY, &value);
            } else {
                self.focus = FocusState::None;
            }
            return;
        }
        let value = format_slippage(&self.buffer, &self.options.default_value, false);
        self.settings.set_value(SLIPPAGE_KEY, &value);
        self.buffer = value;
        self.focus = FocusState::None;
    }

    /// The custom input field gained focus.
    pub fn focus_input(&mut self) {
        self.focus = FocusState::Input;
    }

    /// A preset or auto button gained focus.
    pub fn focus_button(&mut self) {
        self.focus = FocusState::Button;
    }

    /// A button lost focus without another element claiming it.
    pub fn clear_button_focus(&mut self) {
        if self.focus == FocusState::Button {
            self.focus = FocusState::None;
        }
    }

    /// Start an auto-slippage resolution. Returns the request token to tag
    /// the asynchronous result with, or `None` when auto-slippage is
    /// disabled. The previous committed value stays in place until the
    /// result arrives.
    pub fn begin_auto(&mut self) -> Option<u64> {
        if !self.options.with_auto_slippage {
            return None;
        }
        self.buffer.clear();
        self.request_seq = self.request_seq.wrapping_add(1);
        self.auto_pending = true;
        Some(self.request_seq)
    }

    /// Apply the result of an auto-slippage resolution.
    ///
    /// Results carrying anything but the newest token are discarded
    /// (last-requested-wins). A successful current result is canonicalized,
    /// committed and flips the auto flag on; a failed current result changes
    /// nothing beyond clearing the pending state.
    pub fn apply_auto_result(
        &mut self,
        token: u64,
        result: Result<String, ResolutionError>,
    ) -> AutoOutcome {
        if token != self.request_seq {
            tracing::debug!(
                token,
                current = self.request_seq,
                "Discarding stale auto-slippage result"
            );
            return AutoOutcome::Stale;
        }
        self.auto_pending = false;
        match result {
            Ok(raw) => {
                let value = format_slippage(&raw, &self.options.default_value, false);
                self.settings.set_value(SLIPPAGE_KEY, &value);
                self.auto_mode = true;
                AutoOutcome::Committed(value)
            }
            Err(err) => AutoOutcome::Failed(err),
        }
    }

    fn invalidate_pending(&mut self) {
        if self.auto_pending {
            self.request_seq = self.request_seq.wrapping_add(1);
            self.auto_pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::InMemorySettings;

    fn controller() -> (SlippageController, Arc<InMemorySettings>) {
        let store = Arc::new(InMemorySettings::new());
        let controller = SlippageController::new(SlippageOptions::default(), store.clone());
        (controller, store)
    }

    // ========== Classify Tests ==========

    fn presets() -> Vec<String> {
        vec!["0.3".to_string(), "0.5".to_string(), "1".to_string()]
    }

    #[test]
    fn test_classify_preset_selected() {
        assert_eq!(
            classify("0.3", &presets(), false, FocusState::None),
            Selection::Preset(0)
        );
        assert_eq!(
            classify("1", &presets(), false, FocusState::Button),
            Selection::Preset(2)
        );
    }

    #[test]
    fn test_classify_focus_on_input_vetoes_preset() {
        assert_eq!(
            classify("0.3", &presets(), false, FocusState::Input),
            Selection::None
        );
    }

    #[test]
    fn test_classify_custom_selected() {
        assert_eq!(
            classify("2.5", &presets(), false, FocusState::None),
            Selection::Custom
        );
        assert_eq!(
            classify("2.5", &presets(), false, FocusState::Input),
            Selection::Custom
        );
    }

    #[test]
    fn test_classify_focus_on_button_vetoes_custom() {
        assert_eq!(
            classify("2.5", &presets(), false, FocusState::Button),
            Selection::None
        );
    }

    #[test]
    fn test_classify_auto_wins_unless_typing() {
        assert_eq!(
            classify("0.7", &presets(), true, FocusState::None),
            Selection::Auto
        );
        assert_eq!(
            classify("0.3", &presets(), true, FocusState::Button),
            Selection::Auto
        );
        assert_eq!(
            classify("0.7", &presets(), true, FocusState::Input),
            Selection::None
        );
    }

    // ========== Preset Tests ==========

    #[test]
    fn test_select_preset_commits_canonical_value() {
        let (mut controller, store) = controller();
        store.set_value(SLIPPAGE_KEY, "0.5");

        controller.select_preset(0);

        assert_eq!(controller.committed(), "0.3");
        assert!(!controller.is_auto());
        assert_eq!(controller.selection(), Selection::Preset(0));
        assert_eq!(controller.input_display(), "");
    }

    #[test]
    fn test_scenario_custom_then_preset_click() {
        let (mut controller, store) = controller();
        store.set_value(SLIPPAGE_KEY, "2.5");
        assert_eq!(controller.selection(), Selection::Custom);

        controller.select_preset(0);

        assert_eq!(controller.committed(), "0.3");
        assert_eq!(controller.input_display(), "");
        assert_eq!(controller.selection(), Selection::Preset(0));
    }

    #[test]
    fn test_select_preset_out_of_range_is_ignored() {
        let (mut controller, _store) = controller();
        let before = controller.committed();
        controller.select_preset(99);
        assert_eq!(controller.committed(), before);
    }

    // ========== Text Entry Tests ==========

    #[test]
    fn test_input_echoes_keystrokes_live() {
        let (mut controller, store) = controller();

        controller.input_changed("0.");
        assert_eq!(store.get(SLIPPAGE_KEY).as_deref(), Some("0."));
        assert_eq!(controller.input_display(), "0.");

        controller.input_changed("0.4");
        assert_eq!(store.get(SLIPPAGE_KEY).as_deref(), Some("0.4"));
    }

    #[test]
    fn test_input_blur_commits_canonical_value() {
        let (mut controller, _store) = controller();

        controller.input_changed("2.5");
        controller.input_blurred();

        assert_eq!(controller.committed(), "2.5");
        assert_eq!(controller.focus(), FocusState::None);
        assert_eq!(controller.selection(), Selection::Custom);
    }

    #[test]
    fn test_input_blur_strips_trailing_separator() {
        let (mut controller, _store) = controller();

        controller.input_changed("3.");
        controller.input_blurred();

        assert_eq!(controller.committed(), "3");
    }

    #[test]
    fn test_empty_blur_resets_to_default() {
        let (mut controller, store) = controller();
        store.set_value(SLIPPAGE_KEY, "2.5");

        controller.focus_input();
        controller.input_blurred();

        assert_eq!(controller.committed(), "0.5");
        assert_eq!(controller.focus(), FocusState::Button);
        assert_eq!(controller.selection(), Selection::Preset(1));
        assert_eq!(controller.input_display(), "");
    }

    #[test]
    fn test_empty_blur_keeps_prior_value_when_configured() {
        let store = Arc::new(InMemorySettings::new());
        let options = SlippageOptions {
            reset_on_empty_blur: false,
            ..SlippageOptions::default()
        };
        let mut controller = SlippageController::new(options, store.clone());
        store.set_value(SLIPPAGE_KEY, "2.5");

        controller.focus_input();
        controller.input_blurred();

        assert_eq!(controller.committed(), "2.5");
        assert_eq!(controller.focus(), FocusState::None);
    }

    #[test]
    fn test_garbage_input_commits_default_on_blur() {
        let (mut controller, _store) = controller();

        controller.input_changed("abc");
        controller.input_blurred();

        assert_eq!(controller.committed(), "0.5");
    }

    // ========== Auto-Slippage Tests ==========

    #[test]
    fn test_auto_success_commits_and_sets_flag() {
        let (mut controller, _store) = controller();

        let token = controller.begin_auto().expect("auto enabled");
        assert!(controller.auto_pending());

        let outcome = controller.apply_auto_result(token, Ok("0.7".to_string()));

        assert!(matches!(outcome, AutoOutcome::Committed(ref v) if v == "0.7"));
        assert_eq!(controller.committed(), "0.7");
        assert!(controller.is_auto());
        assert!(!controller.auto_pending());
        assert_eq!(controller.selection(), Selection::Auto);
    }

    #[test]
    fn test_auto_failure_keeps_previous_value_and_flag() {
        let (mut controller, store) = controller();
        store.set_value(SLIPPAGE_KEY, "0.5");

        let token = controller.begin_auto().expect("auto enabled");
        let outcome = controller.apply_auto_result(token, Err(ResolutionError::Status(500)));

        assert!(matches!(outcome, AutoOutcome::Failed(_)));
        assert_eq!(controller.committed(), "0.5");
        assert!(!controller.is_auto());
        assert!(!controller.auto_pending());
    }

    #[test]
    fn test_only_latest_auto_request_commits() {
        let (mut controller, _store) = controller();

        let first = controller.begin_auto().expect("auto enabled");
        let second = controller.begin_auto().expect("auto enabled");

        let stale = controller.apply_auto_result(first, Ok("0.9".to_string()));
        assert!(matches!(stale, AutoOutcome::Stale));
        assert_eq!(controller.committed(), "0.5");
        assert!(!controller.is_auto());

        let fresh = controller.apply_auto_result(second, Ok("0.7".to_string()));
        assert!(matches!(fresh, AutoOutcome::Committed(_)));
        assert_eq!(controller.committed(), "0.7");
    }

    #[test]
    fn test_preset_click_invalidates_pending_auto() {
        let (mut controller, _store) = controller();

        let token = controller.begin_auto().expect("auto enabled");
        controller.select_preset(2);

        let outcome = controller.apply_auto_result(token, Ok("0.7".to_string()));
        assert!(matches!(outcome, AutoOutcome::Stale));
        assert_eq!(controller.committed(), "1");
        assert!(!controller.is_auto());
    }

    #[test]
    fn test_typing_invalidates_pending_auto_and_clears_flag() {
        let (mut controller, _store) = controller();

        let token = controller.begin_auto().expect("auto enabled");
        let outcome = controller.apply_auto_result(token, Ok("0.7".to_string()));
        assert!(matches!(outcome, AutoOutcome::Committed(_)));
        assert!(controller.is_auto());

        let token = controller.begin_auto().expect("auto enabled");
        controller.input_changed("1.2");
        assert!(!controller.is_auto());

        let outcome = controller.apply_auto_result(token, Ok("0.9".to_string()));
        assert!(matches!(outcome, AutoOutcome::Stale));
        assert_eq!(controller.committed(), "1.2");
    }

    #[test]
    fn test_auto_disabled_by_configuration() {
        let store = Arc::new(InMemorySettings::new());
        let options = SlippageOptions {
            with_auto_slippage: false,
            ..SlippageOptions::default()
        };
        let mut controller = SlippageController::new(options, store);

        assert!(controller.begin_auto().is_none());
    }

    // ========== Store Observation Tests ==========

    #[test]
    fn test_external_store_change_is_reflected_in_selection() {
        let (controller, store) = controller();

        store.set_value(SLIPPAGE_KEY, "7");

        assert_eq!(controller.committed(), "7");
        assert_eq!(controller.selection(), Selection::Custom);
    }

    #[test]
    fn test_store_is_seeded_with_default() {
        let store = Arc::new(InMemorySettings::new());
        assert!(store.get(SLIPPAGE_KEY).is_none());

        let controller = SlippageController::new(SlippageOptions::default(), store.clone());

        assert_eq!(store.get(SLIPPAGE_KEY).as_deref(), Some("0.5"));
        assert_eq!(controller.selection(), Selection::Preset(1));
    }

    #[test]
    fn test_every_commit_bumps_the_store_revision() {
        let (mut controller, store) = controller();
        let before = store.revision();

        controller.select_preset(0);
        controller.input_changed("2");
        controller.input_blurred();

        assert!(store.revision() >= before + 3);
    }
}

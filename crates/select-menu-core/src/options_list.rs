use crate::filter::filter_options;
use crate::filter::FuzzyFilter;
use crate::filter::OptionsFilter;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap::MenuBindings;
use crate::keymap::MenuCommand;
use crate::nav::BoundaryPolicy;
use crate::nav::Navigator;
use crate::option::OptionValue;
use crate::option::SelectOption;
use crate::selection::Selection;

/// Action produced by the options list for the host to apply.
///
/// Selection intents never touch the list's own state beyond the
/// highlight: the host owns the selected set and feeds it back through
/// [`OptionsListState::set_selected`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Redraw,
    /// The search query changed; carries the raw (untrimmed) query.
    FilterChanged(String),
    /// Select this option. `close` is set when a single-select menu with
    /// `close_on_select` should be dismissed after the host applies it.
    Selected { option: SelectOption, close: bool },
    Deselected(SelectOption),
    CloseRequested,
}

/// Host-supplied configuration, props-in style.
#[derive(Clone, Debug)]
pub struct OptionsListConfig {
    pub is_multi_select: bool,
    pub close_on_select: bool,
    pub has_filter: bool,
    pub default_search_value: String,
    pub boundary_policy: BoundaryPolicy,
    pub skip_disabled: bool,
}

impl Default for OptionsListConfig {
    fn default() -> Self {
        Self {
            is_multi_select: false,
            close_on_select: true,
            has_filter: true,
            default_search_value: String::new(),
            boundary_policy: BoundaryPolicy::default(),
            skip_disabled: true,
        }
    }
}

/// Per-row render data handed to the windowed renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowState {
    pub is_highlighted: bool,
    pub is_selected: bool,
    /// A selected row in single-select mode cannot be selected again.
    pub is_selectable: bool,
    pub disabled: bool,
}

/// The composed select-menu core: filter engine, highlight navigation and
/// selection intents over a host-owned option set.
///
/// Options and the selected set are inputs refreshed by the host on every
/// update; the only internal state is the search query, the highlight and
/// a pending scroll request. Input arrives through [`handle_key`] (and the
/// pointer entry points), actions flow back as [`MenuAction`] values.
///
/// [`handle_key`]: OptionsListState::handle_key
pub struct OptionsListState {
    config: OptionsListConfig,
    bindings: MenuBindings,
    filter: Box<dyn OptionsFilter>,

    options: Vec<SelectOption>,
    selection: Selection,
    visible: Vec<SelectOption>,
    query: String,
    nav: Navigator,
    scroll_request: Option<usize>,
}

impl Default for OptionsListState {
    fn default() -> Self {
        Self::new(OptionsListConfig::default())
    }
}

impl OptionsListState {
    pub fn new(config: OptionsListConfig) -> Self {
        let query = config.default_search_value.clone();
        let nav = Navigator::new(config.boundary_policy, config.skip_disabled);
        Self {
            config,
            bindings: MenuBindings::default(),
            filter: Box::new(FuzzyFilter),
            options: Vec::new(),
            selection: Selection::default(),
            visible: Vec::new(),
            query,
            nav,
            scroll_request: None,
        }
    }

    /// Replaces the default fuzzy filter with a custom one.
    pub fn with_filter(mut self, filter: impl OptionsFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self.refilter();
        self
    }

    pub fn with_bindings(mut self, bindings: MenuBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn config(&self) -> &OptionsListConfig {
        &self.config
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.refilter();
    }

    pub fn set_selected(&mut self, values: impl IntoIterator<Item = OptionValue>) {
        self.selection.replace(values);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[SelectOption] {
        &self.visible
    }

    pub fn highlight(&self) -> Option<usize> {
        self.nav.highlight()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selection.is_selected(option)
    }

    pub fn row_state(&self, index: usize) -> Option<RowState> {
        let option = self.visible.get(index)?;
        let is_selected = self.selection.is_selected(option);
        Some(RowState {
            is_highlighted: self.nav.highlight() == Some(index),
            is_selected,
            is_selectable: !option.disabled && (!is_selected || self.config.is_multi_select),
            disabled: option.disabled,
        })
    }

    /// Pending "bring this row into view" hint, set by keyboard-driven
    /// highlight moves only. Draining it is how the windowed renderer
    /// follows the keyboard without fighting pointer scrolling.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> MenuAction {
        if let Some(command) = self.bindings.command_for(key) {
            return self.handle_command(command);
        }

        if !self.config.has_filter {
            return MenuAction::None;
        }
        match key.code {
            KeyCode::Char(c) if !key.modifiers.ctrl && !key.modifiers.alt => {
                self.query.push(c);
                self.query_changed()
            }
            KeyCode::Backspace => {
                if self.query.pop().is_none() {
                    return MenuAction::None;
                }
                self.query_changed()
            }
            _ => MenuAction::None,
        }
    }

    /// Programmatic query update (e.g. a host-owned search input).
    pub fn set_query(&mut self, query: impl Into<String>) -> MenuAction {
        self.query = query.into();
        self.query_changed()
    }

    /// Pointer click selecting the row at `index`. Moves the highlight to
    /// the acted row, like the keyboard path.
    pub fn select_at(&mut self, index: usize) -> MenuAction {
        let Some(option) = self.visible.get(index).cloned() else {
            return MenuAction::None;
        };
        if option.disabled {
            return MenuAction::None;
        }
        self.nav.set(index, &self.visible);
        if self.selection.is_selected(&option) {
            if self.config.is_multi_select {
                return MenuAction::Deselected(option);
            }
            return self.close_only();
        }
        MenuAction::Selected {
            close: !self.config.is_multi_select && self.config.close_on_select,
            option,
        }
    }

    /// Pointer click deselecting the row at `index`.
    pub fn deselect_at(&mut self, index: usize) -> MenuAction {
        let Some(option) = self.visible.get(index).cloned() else {
            return MenuAction::None;
        };
        if option.disabled || !self.selection.is_selected(&option) {
            return MenuAction::None;
        }
        self.nav.set(index, &self.visible);
        MenuAction::Deselected(option)
    }

    /// Pointer hover re-highlight; never emits a scroll request.
    pub fn hover(&mut self, index: usize) {
        if index < self.visible.len() {
            self.nav.set(index, &self.visible);
        }
    }

    fn handle_command(&mut self, command: MenuCommand) -> MenuAction {
        match command {
            MenuCommand::Up => {
                if self.nav.move_up(&self.visible) {
                    self.scroll_request = self.nav.highlight();
                    MenuAction::Redraw
                } else {
                    MenuAction::None
                }
            }
            MenuCommand::Down => {
                if self.nav.move_down(&self.visible) {
                    self.scroll_request = self.nav.highlight();
                    MenuAction::Redraw
                } else {
                    MenuAction::None
                }
            }
            MenuCommand::Activate => self.activate(),
            MenuCommand::Select => match self.highlighted_option() {
                Some(option) if !self.selection.is_selected(&option) => MenuAction::Selected {
                    close: !self.config.is_multi_select && self.config.close_on_select,
                    option,
                },
                _ => MenuAction::None,
            },
            MenuCommand::Deselect => match self.highlighted_option() {
                Some(option) if self.selection.is_selected(&option) => {
                    MenuAction::Deselected(option)
                }
                _ => MenuAction::None,
            },
            MenuCommand::Close => MenuAction::CloseRequested,
        }
    }

    fn activate(&mut self) -> MenuAction {
        let Some(option) = self.highlighted_option() else {
            return MenuAction::None;
        };
        if self.selection.is_selected(&option) {
            if self.config.is_multi_select {
                return MenuAction::Deselected(option);
            }
            // Re-activating the single selection only dismisses the menu.
            return self.close_only();
        }
        MenuAction::Selected {
            close: !self.config.is_multi_select && self.config.close_on_select,
            option,
        }
    }

    fn close_only(&self) -> MenuAction {
        if self.config.close_on_select {
            MenuAction::CloseRequested
        } else {
            MenuAction::None
        }
    }

    fn highlighted_option(&self) -> Option<SelectOption> {
        let option = self.visible.get(self.nav.highlight()?)?;
        if option.disabled {
            return None;
        }
        Some(option.clone())
    }

    fn query_changed(&mut self) -> MenuAction {
        self.refilter();
        MenuAction::FilterChanged(self.query.clone())
    }

    fn refilter(&mut self) {
        self.visible = filter_options(&self.options, &self.query, self.filter.as_ref());
        self.nav.reconcile(&self.visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::key_char;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "Apple"),
            SelectOption::new(2, "Banana"),
            SelectOption::new(3, "Cherry"),
        ]
    }

    /// Deterministic fixture: case-insensitive substring, input order.
    fn substring(labels: &[&str], query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        labels
            .iter()
            .filter(|l| l.to_lowercase().contains(&needle))
            .map(|l| l.to_string())
            .collect()
    }

    fn state(config: OptionsListConfig) -> OptionsListState {
        let mut s = OptionsListState::new(config).with_filter(substring);
        s.set_options(fruit());
        s
    }

    fn press(s: &mut OptionsListState, code: KeyCode) -> MenuAction {
        s.handle_key(&KeyEvent::new(code))
    }

    #[test]
    fn empty_query_shows_all_in_order() {
        let s = state(OptionsListConfig::default());
        assert_eq!(s.visible(), fruit().as_slice());
    }

    #[test]
    fn typing_filters_and_reports_raw_query() {
        let mut s = state(OptionsListConfig::default());
        assert_eq!(
            s.handle_key(&key_char('a')),
            MenuAction::FilterChanged("a".into())
        );
        assert_eq!(
            s.handle_key(&key_char('n')),
            MenuAction::FilterChanged("an".into())
        );
        assert_eq!(s.visible().len(), 1);
        assert_eq!(s.visible()[0].label, "Banana");
    }

    #[test]
    fn backspace_on_empty_query_is_silent() {
        let mut s = state(OptionsListConfig::default());
        assert_eq!(press(&mut s, KeyCode::Backspace), MenuAction::None);
    }

    #[test]
    fn no_filter_means_chars_are_ignored() {
        let mut s = state(OptionsListConfig {
            has_filter: false,
            ..Default::default()
        });
        assert_eq!(s.handle_key(&key_char('a')), MenuAction::None);
        assert_eq!(s.visible().len(), 3);
    }

    #[test]
    fn default_search_value_seeds_the_query() {
        let mut s = OptionsListState::new(OptionsListConfig {
            default_search_value: "che".into(),
            ..Default::default()
        })
        .with_filter(substring);
        s.set_options(fruit());
        assert_eq!(s.query(), "che");
        assert_eq!(s.visible().len(), 1);
        assert_eq!(s.visible()[0].label, "Cherry");
    }

    #[test]
    fn single_select_enter_selects_and_closes() {
        let mut s = state(OptionsListConfig::default());
        press(&mut s, KeyCode::Down);
        assert_eq!(s.highlight(), Some(0));
        let action = press(&mut s, KeyCode::Enter);
        assert_eq!(
            action,
            MenuAction::Selected {
                option: SelectOption::new(1, "Apple"),
                close: true,
            }
        );
    }

    #[test]
    fn single_select_without_close_on_select_stays_open() {
        let mut s = state(OptionsListConfig {
            close_on_select: false,
            ..Default::default()
        });
        press(&mut s, KeyCode::Down);
        assert_eq!(
            press(&mut s, KeyCode::Enter),
            MenuAction::Selected {
                option: SelectOption::new(1, "Apple"),
                close: false,
            }
        );
    }

    #[test]
    fn single_select_enter_on_selected_is_close_only() {
        let mut s = state(OptionsListConfig::default());
        s.set_selected([OptionValue::from(1)]);
        press(&mut s, KeyCode::Down);
        assert_eq!(press(&mut s, KeyCode::Enter), MenuAction::CloseRequested);
    }

    #[test]
    fn multi_select_enter_toggles_and_never_closes() {
        let mut s = state(OptionsListConfig {
            is_multi_select: true,
            ..Default::default()
        });
        s.set_selected([OptionValue::from(1)]);
        press(&mut s, KeyCode::Down);
        assert_eq!(
            press(&mut s, KeyCode::Enter),
            MenuAction::Deselected(SelectOption::new(1, "Apple"))
        );

        // Host applies the deselect and pushes the new state back.
        s.set_selected([]);
        assert_eq!(
            press(&mut s, KeyCode::Enter),
            MenuAction::Selected {
                option: SelectOption::new(1, "Apple"),
                close: false,
            }
        );
    }

    #[test]
    fn right_selects_left_deselects_without_moving() {
        let mut s = state(OptionsListConfig {
            is_multi_select: true,
            ..Default::default()
        });
        press(&mut s, KeyCode::Down);
        assert_eq!(
            press(&mut s, KeyCode::Right),
            MenuAction::Selected {
                option: SelectOption::new(1, "Apple"),
                close: false,
            }
        );
        assert_eq!(s.highlight(), Some(0));
        assert_eq!(press(&mut s, KeyCode::Left), MenuAction::None);

        s.set_selected([OptionValue::from(1)]);
        assert_eq!(
            press(&mut s, KeyCode::Left),
            MenuAction::Deselected(SelectOption::new(1, "Apple"))
        );
        assert_eq!(s.highlight(), Some(0));
    }

    #[test]
    fn wrap_policy_cycles_from_last_to_first() {
        let mut s = OptionsListState::new(OptionsListConfig::default()).with_filter(substring);
        s.set_options(
            (0..5)
                .map(|i| SelectOption::new(i as i64, format!("row {i}")))
                .collect(),
        );
        s.hover(4);
        assert_eq!(press(&mut s, KeyCode::Down), MenuAction::Redraw);
        assert_eq!(s.highlight(), Some(0));
    }

    #[test]
    fn narrowing_filter_clamps_highlight() {
        let mut s = state(OptionsListConfig::default());
        s.hover(2);
        s.handle_key(&key_char('a'));
        // "a" matches Apple and Banana; index 2 no longer exists.
        assert_eq!(s.visible().len(), 2);
        assert_eq!(s.highlight(), Some(1));

        s.handle_key(&key_char('z'));
        assert!(s.visible().is_empty());
        assert_eq!(s.highlight(), None);
    }

    #[test]
    fn everything_is_a_no_op_when_empty() {
        let mut s = OptionsListState::new(OptionsListConfig::default()).with_filter(substring);
        for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter, KeyCode::Right] {
            assert_eq!(press(&mut s, code), MenuAction::None);
        }
        assert_eq!(s.select_at(0), MenuAction::None);
        assert_eq!(s.take_scroll_request(), None);
    }

    #[test]
    fn disabled_option_cannot_be_activated() {
        let mut s = OptionsListState::new(OptionsListConfig {
            skip_disabled: false,
            ..Default::default()
        })
        .with_filter(substring);
        s.set_options(vec![
            SelectOption::new(1, "Apple").disabled(),
            SelectOption::new(2, "Banana"),
        ]);
        s.hover(0);
        assert_eq!(press(&mut s, KeyCode::Enter), MenuAction::None);
        assert_eq!(s.select_at(0), MenuAction::None);
    }

    #[test]
    fn keyboard_moves_request_scroll_pointer_moves_do_not() {
        let mut s = state(OptionsListConfig::default());
        press(&mut s, KeyCode::Down);
        assert_eq!(s.take_scroll_request(), Some(0));
        assert_eq!(s.take_scroll_request(), None);

        s.hover(2);
        assert_eq!(s.highlight(), Some(2));
        assert_eq!(s.take_scroll_request(), None);
    }

    #[test]
    fn click_selects_and_moves_highlight() {
        let mut s = state(OptionsListConfig::default());
        assert_eq!(
            s.select_at(2),
            MenuAction::Selected {
                option: SelectOption::new(3, "Cherry"),
                close: true,
            }
        );
        assert_eq!(s.highlight(), Some(2));
    }

    #[test]
    fn row_state_reflects_mode() {
        let mut s = state(OptionsListConfig::default());
        s.set_selected([OptionValue::from(1)]);
        s.hover(0);
        let row = s.row_state(0).unwrap();
        assert!(row.is_highlighted);
        assert!(row.is_selected);
        // Single-select: the selected row is not selectable again.
        assert!(!row.is_selectable);

        let mut multi = state(OptionsListConfig {
            is_multi_select: true,
            ..Default::default()
        });
        multi.set_selected([OptionValue::from(1)]);
        assert!(multi.row_state(0).unwrap().is_selectable);
        assert_eq!(multi.row_state(9), None);
    }

    #[test]
    fn unknown_selected_values_degrade_to_not_selected() {
        let mut s = state(OptionsListConfig::default());
        s.set_selected([OptionValue::from(42)]);
        assert!((0..3).all(|i| !s.row_state(i).unwrap().is_selected));
    }
}

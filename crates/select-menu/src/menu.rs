use crate::render;
use crate::search;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use select_menu_core::input::InputEvent;
use select_menu_core::input::MouseButton;
use select_menu_core::input::MouseEvent;
use select_menu_core::input::MouseEventKind;
use select_menu_core::option::SelectOption;
use select_menu_core::options_list::MenuAction;
use select_menu_core::options_list::OptionsListState;
use select_menu_core::options_list::RowState;
use virtualizer::Align;
use virtualizer::Virtualizer;
use virtualizer::VirtualizerOptions;

#[derive(Clone, Debug)]
pub struct SelectMenuViewOptions {
    pub show_scrollbar: bool,
    pub overscan: usize,
    /// Row height in terminal rows.
    pub option_size: u32,
    pub placeholder: String,
    pub selected_mark: String,
    pub style: Style,
    pub highlight_style: Style,
    pub selected_style: Style,
    pub scrollbar_style: Style,
}

impl Default for SelectMenuViewOptions {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
            overscan: 2,
            option_size: 1,
            placeholder: "Filter...".to_string(),
            selected_mark: "✓ ".to_string(),
            style: Style::default(),
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            scrollbar_style: Style::default(),
        }
    }
}

/// Render data for one visible row, handed to the row renderer.
#[derive(Clone, Debug)]
pub struct OptionRowContext {
    /// Index into the visible sequence.
    pub index: usize,
    pub option: SelectOption,
    pub row: RowState,
    /// Rows clipped at the top of the viewport start this many rows in.
    pub clip_top: u32,
    pub selected_mark: String,
}

/// The select menu widget: an [`OptionsListState`] core wired to a
/// virtualized viewport, an optional one-line filter header and a
/// scrollbar.
///
/// The widget renders only the window of rows the virtualizer reports as
/// visible, so option sets can be large. Keyboard-driven highlight moves
/// drain the core's scroll request into `scroll_to_index`, keeping the
/// highlighted row in view without fighting pointer scrolling.
pub struct SelectMenuView {
    pub state: OptionsListState,
    options: SelectMenuViewOptions,
    viewport: ViewportState,
    virtualizer: Virtualizer,
    list_area: Option<Rect>,
}

impl Default for SelectMenuView {
    fn default() -> Self {
        Self::new(OptionsListState::default())
    }
}

impl SelectMenuView {
    pub fn new(state: OptionsListState) -> Self {
        Self::with_options(state, SelectMenuViewOptions::default())
    }

    pub fn with_options(state: OptionsListState, options: SelectMenuViewOptions) -> Self {
        let virtualizer = Self::make_virtualizer(
            state.visible().len(),
            options.option_size,
            options.overscan,
        );
        Self {
            state,
            options,
            viewport: ViewportState::default(),
            virtualizer,
            list_area: None,
        }
    }

    pub fn options(&self) -> &SelectMenuViewOptions {
        &self.options
    }

    pub fn set_view_options(&mut self, options: SelectMenuViewOptions) {
        let size = options.option_size;
        self.options = options;
        self.virtualizer.set_overscan(self.options.overscan);
        self.virtualizer.set_estimate_size(move |_| size);
        self.viewport.clamp();
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn handle_event(&mut self, event: InputEvent) -> MenuAction {
        match event {
            InputEvent::Key(key) => self.state.handle_key(&key),
            InputEvent::Paste(text) => {
                if !self.state.config().has_filter {
                    return MenuAction::None;
                }
                let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
                if pasted.is_empty() {
                    return MenuAction::None;
                }
                let query = format!("{}{}", self.state.query(), pasted);
                self.state.set_query(query)
            }
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.render_with(area, buf, theme, default_option_row);
    }

    pub fn render_with<F>(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, mut render_item: F)
    where
        F: FnMut(Rect, OptionRowContext, &mut Buffer, &Theme),
    {
        if area.width == 0 || area.height == 0 {
            self.list_area = None;
            return;
        }

        let list_total = if self.state.config().has_filter && area.height >= 1 {
            search::render_search_row(
                Rect::new(area.x, area.y, area.width, 1),
                buf,
                self.state.query(),
                &self.options.placeholder,
                theme,
            );
            Rect::new(area.x, area.y + 1, area.width, area.height - 1)
        } else {
            area
        };
        if list_total.height == 0 {
            self.list_area = None;
            return;
        }

        let (content_area, scrollbar_x) = if self.options.show_scrollbar && list_total.width >= 2 {
            (
                Rect::new(
                    list_total.x,
                    list_total.y,
                    list_total.width - 1,
                    list_total.height,
                ),
                Some(list_total.x + list_total.width - 1),
            )
        } else {
            (list_total, None)
        };
        self.list_area = Some(content_area);

        let count = self.state.visible().len();
        self.viewport.set_viewport(content_area.height);
        self.sync_virtualizer(count);

        if let Some(index) = self.state.take_scroll_request() {
            self.virtualizer.scroll_to_index(index, Align::Auto);
            self.viewport.y = self.virtualizer.scroll_offset().min(u32::MAX as u64) as u32;
            self.viewport.clamp();
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(content_area, base_style);

        let highlight_style = self.options.highlight_style.patch(theme.accent);
        let selected_style = self.options.selected_style.patch(theme.selected);

        let mut items = Vec::new();
        self.virtualizer.collect_virtual_items(&mut items);
        let scroll = self.virtualizer.scroll_offset();

        for item in items {
            let rel_start = item.start as i64 - scroll as i64;
            let clip_top = (-rel_start).max(0) as u32;
            let visible_start = rel_start.max(0) as u16;
            let remaining_h = content_area.height.saturating_sub(visible_start);
            if remaining_h == 0 {
                continue;
            }

            let visible_h_u32 = item.size.saturating_sub(clip_top);
            if visible_h_u32 == 0 {
                continue;
            }
            let visible_h = (visible_h_u32.min(remaining_h as u32)).min(u16::MAX as u32) as u16;

            let item_area = Rect::new(
                content_area.x,
                content_area.y + visible_start,
                content_area.width,
                visible_h,
            );

            let index = item.index;
            let Some(row) = self.state.row_state(index) else {
                continue;
            };
            let Some(option) = self.state.visible().get(index).cloned() else {
                continue;
            };

            let style = if row.is_highlighted {
                highlight_style
            } else if row.is_selected {
                selected_style
            } else if row.disabled {
                theme.text_muted
            } else {
                base_style
            };
            buf.set_style(item_area, style);

            let ctx = OptionRowContext {
                index,
                option,
                row,
                clip_top,
                selected_mark: self.options.selected_mark.clone(),
            };
            render_item(item_area, ctx, buf, theme);
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, list_total.y, 1, list_total.height),
                buf,
                &self.viewport,
                self.options.scrollbar_style,
            );
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> MenuAction {
        let Some(area) = self.list_area else {
            return MenuAction::None;
        };

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_y_by(-1);
                MenuAction::Redraw
            }
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_y_by(1);
                MenuAction::Redraw
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                let Some(index) = self.row_at(area, mouse.x, mouse.y) else {
                    return MenuAction::None;
                };
                let before = self.state.highlight();
                self.state.hover(index);
                if self.state.highlight() != before {
                    MenuAction::Redraw
                } else {
                    MenuAction::None
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.row_at(area, mouse.x, mouse.y) else {
                    return MenuAction::None;
                };
                let toggles_off = self.state.config().is_multi_select
                    && self
                        .state
                        .visible()
                        .get(index)
                        .is_some_and(|o| self.state.is_selected(o));
                if toggles_off {
                    self.state.deselect_at(index)
                } else {
                    self.state.select_at(index)
                }
            }
            _ => MenuAction::None,
        }
    }

    fn row_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }
        let offset = self.viewport.y as u64 + (y - area.y) as u64;
        self.virtualizer.index_at_offset(offset)
    }

    fn sync_virtualizer(&mut self, count: usize) {
        self.virtualizer.set_count(count);
        self.virtualizer
            .set_viewport_size(self.viewport.viewport_h as u32);
        self.virtualizer.set_overscan(self.options.overscan);
        self.virtualizer.set_scroll_offset(self.viewport.y as u64);
        self.viewport.y = self.virtualizer.scroll_offset().min(u32::MAX as u64) as u32;
        self.viewport
            .set_content(self.virtualizer.total_size().min(u32::MAX as u64) as u32);
    }

    fn make_virtualizer(count: usize, option_size: u32, overscan: usize) -> Virtualizer {
        let mut opts = VirtualizerOptions::new(count, move |_| option_size);
        opts.overscan = overscan;
        Virtualizer::new(opts)
    }
}

/// The default row renderer: one column of padding, the selected mark for
/// selected rows, then the clipped label.
pub fn default_option_row(area: Rect, ctx: OptionRowContext, buf: &mut Buffer, theme: &Theme) {
    // The label lives on the item's first row; a top-clipped row shows
    // only its background.
    if area.width <= 1 || ctx.clip_top > 0 {
        return;
    }

    let style = if ctx.row.disabled {
        theme.text_muted
    } else {
        Style::default()
    };
    let mark = if ctx.row.is_selected {
        ctx.selected_mark.as_str()
    } else {
        ""
    };
    let text = format!("{mark}{}", ctx.option.label);
    render::render_str_clipped(area.x + 1, area.y, area.width - 1, buf, &text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_menu_core::input::KeyCode;
    use select_menu_core::input::KeyEvent;
    use select_menu_core::options_list::OptionsListConfig;

    fn fruit_view(config: OptionsListConfig) -> SelectMenuView {
        let mut state = OptionsListState::new(config);
        state.set_options(vec![
            SelectOption::new(1, "Apple"),
            SelectOption::new(2, "Banana"),
            SelectOption::new(3, "Cherry"),
        ]);
        SelectMenuView::new(state)
    }

    fn key(view: &mut SelectMenuView, code: KeyCode) -> MenuAction {
        view.handle_event(InputEvent::Key(KeyEvent::new(code)))
    }

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn renders_filter_row_then_options() {
        let mut view = fruit_view(OptionsListConfig::default());
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0, 20), "> Filter...");
        assert_eq!(row_text(&buf, 1, 19), " Apple");
        assert_eq!(row_text(&buf, 2, 19), " Banana");
        assert_eq!(row_text(&buf, 3, 19), " Cherry");
    }

    #[test]
    fn no_filter_skips_the_header_row() {
        let mut view = fruit_view(OptionsListConfig {
            has_filter: false,
            ..Default::default()
        });
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());
        assert_eq!(row_text(&buf, 0, 19), " Apple");
    }

    #[test]
    fn typing_narrows_rendered_rows() {
        let mut view = fruit_view(OptionsListConfig::default());
        assert_eq!(
            key(&mut view, KeyCode::Char('c')),
            MenuAction::FilterChanged("c".into())
        );
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());
        assert_eq!(row_text(&buf, 0, 5), "> c");
        assert_eq!(row_text(&buf, 1, 19), " Cherry");
        assert_eq!(row_text(&buf, 2, 19), "");
    }

    #[test]
    fn selected_rows_show_the_mark() {
        let mut view = fruit_view(OptionsListConfig {
            is_multi_select: true,
            ..Default::default()
        });
        view.state.set_selected([2i64.into()]);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());
        assert_eq!(row_text(&buf, 2, 19), " ✓ Banana");
    }

    #[test]
    fn keyboard_navigation_scrolls_the_window() {
        let mut state = OptionsListState::default();
        state.set_options(
            (0..100)
                .map(|i| SelectOption::new(i as i64, format!("row {i}")))
                .collect(),
        );
        let mut view = SelectMenuView::new(state);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());

        for _ in 0..10 {
            key(&mut view, KeyCode::Down);
        }
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());
        assert_eq!(view.state.highlight(), Some(9));
        // 3 list rows; row 9 must be inside the window.
        assert!(view.viewport().y >= 7);
    }

    #[test]
    fn click_outside_the_list_is_ignored() {
        let mut view = fruit_view(OptionsListConfig::default());
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());

        let action = view.handle_event(InputEvent::Mouse(MouseEvent {
            x: 0,
            y: 0, // the filter row, not a list row
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: Default::default(),
        }));
        assert_eq!(action, MenuAction::None);
    }

    #[test]
    fn click_on_a_row_selects_it() {
        let mut view = fruit_view(OptionsListConfig::default());
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());

        let action = view.handle_event(InputEvent::Mouse(MouseEvent {
            x: 2,
            y: 2, // second list row
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: Default::default(),
        }));
        assert_eq!(
            action,
            MenuAction::Selected {
                option: SelectOption::new(2, "Banana"),
                close: true,
            }
        );
        assert_eq!(view.state.highlight(), Some(1));
    }

    #[test]
    fn paste_feeds_the_filter() {
        let mut view = fruit_view(OptionsListConfig::default());
        let action = view.handle_event(InputEvent::Paste("ban\n".to_string()));
        assert_eq!(action, MenuAction::FilterChanged("ban".into()));
        assert_eq!(view.state.visible().len(), 1);
    }
}

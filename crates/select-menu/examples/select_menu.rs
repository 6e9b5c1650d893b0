use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::Terminal;
use select_menu::crossterm_input::input_event_from_crossterm;
use select_menu::menu::SelectMenuView;
use select_menu::option::OptionValue;
use select_menu::option::SelectOption;
use select_menu::options_list::MenuAction;
use select_menu::options_list::OptionsListConfig;
use select_menu::options_list::OptionsListState;
use select_menu::theme::Theme;
use std::collections::HashSet;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, crossterm::event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let options: Vec<SelectOption> = (0..50_000)
        .map(|i| SelectOption::new(i as i64, format!("Item {i:05}")))
        .collect();

    let mut state = OptionsListState::new(OptionsListConfig {
        is_multi_select: true,
        close_on_select: false,
        ..Default::default()
    });
    state.set_options(options);

    let mut view = SelectMenuView::new(state);
    let mut selected: HashSet<OptionValue> = HashSet::new();

    let res = run(&mut terminal, &theme, &mut view, &mut selected);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    view: &mut SelectMenuView,
    selected: &mut HashSet<OptionValue>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("SelectMenu (type to filter, ↑/↓, Enter, ←/→, Esc quits)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            view.render(inner, buf, theme);

            let status_line = format!(
                "visible={}  selected={}  query={:?}",
                view.state.visible().len(),
                selected.len(),
                view.state.query()
            );
            let status_span = Span::styled(status_line, Style::default());
            buf.set_span(status.x, status.y, &status_span, status.width);
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
                continue;
            };

            match view.handle_event(ev) {
                MenuAction::Selected { option, close } => {
                    selected.insert(option.value.clone());
                    view.state.set_selected(selected.iter().cloned());
                    if close {
                        return Ok(());
                    }
                }
                MenuAction::Deselected(option) => {
                    selected.remove(&option.value);
                    view.state.set_selected(selected.iter().cloned());
                }
                MenuAction::CloseRequested => return Ok(()),
                MenuAction::FilterChanged(_) | MenuAction::Redraw | MenuAction::None => {}
            }
        }
    }
}

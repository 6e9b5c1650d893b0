use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";

/// Renders the one-line filter header: prompt, the current query (or the
/// placeholder when empty) and a block cursor after the query.
pub fn render_search_row(
    area: Rect,
    buf: &mut Buffer,
    query: &str,
    placeholder: &str,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = theme.search.patch(theme.text_primary);
    buf.set_style(Rect::new(area.x, area.y, area.width, 1), style);
    render::render_str_clipped(area.x, area.y, area.width, buf, PROMPT, style);

    let text_x = area.x + PROMPT.len().min(area.width as usize) as u16;
    let text_w = area.width.saturating_sub(text_x - area.x);
    if text_w == 0 {
        return;
    }

    if query.is_empty() {
        render::render_str_clipped(text_x, area.y, text_w, buf, placeholder, theme.text_muted);
    } else {
        render::render_str_clipped(text_x, area.y, text_w, buf, query, style);
    }

    // Block cursor right after the query, the menu's focus cue.
    let cursor_dx = UnicodeWidthStr::width(query).min(text_w.saturating_sub(1) as usize) as u16;
    if query.is_empty() {
        if let Some(cell) = buf.cell_mut((text_x, area.y)) {
            cell.set_style(style.add_modifier(Modifier::REVERSED));
        }
    } else if let Some(cell) = buf.cell_mut((text_x + cursor_dx, area.y)) {
        cell.set_style(style.add_modifier(Modifier::REVERSED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn empty_query_shows_placeholder() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        render_search_row(
            Rect::new(0, 0, 12, 1),
            &mut buf,
            "",
            "Filter...",
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, 11), "> Filter...");
    }

    #[test]
    fn query_replaces_placeholder() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        render_search_row(
            Rect::new(0, 0, 12, 1),
            &mut buf,
            "che",
            "Filter...",
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, 5), "> che");
    }
}

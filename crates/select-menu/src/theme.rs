use ratatui::style::Style;

/// Resolved styles the menu widgets draw with.
///
/// Hosts resolve whatever theming system they use down to these styles;
/// the widgets never consult anything else.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    /// Disabled rows and placeholder text.
    pub text_muted: Style,
    /// Patched onto the highlighted row.
    pub accent: Style,
    /// Patched onto selected rows and the selected mark.
    pub selected: Style,
    pub search: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            selected: Style::default().bold(),
            search: Style::default(),
        }
    }
}

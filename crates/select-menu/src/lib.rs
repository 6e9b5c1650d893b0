//! Searchable, keyboard-navigable, virtualized select menu for ratatui.
//!
//! The state machine (filtering, highlight navigation, selection intents)
//! lives in `select-menu-core`; this crate wires it to a virtualized
//! viewport, a one-line filter header, a scrollbar and a theme.
//!
//! ## Getting started
//!
//! Build an [`options_list::OptionsListState`], wrap it in a
//! [`menu::SelectMenuView`], feed [`input::InputEvent`]s into
//! `handle_event` and apply the returned [`options_list::MenuAction`]s to
//! your own selection state. See `examples/select_menu.rs` for a full
//! event loop.
pub mod theme;

pub mod render;
pub mod viewport;

pub mod menu;
pub mod search;

pub use select_menu_core::filter;
pub use select_menu_core::input;
pub use select_menu_core::keymap;
pub use select_menu_core::nav;
pub use select_menu_core::option;
pub use select_menu_core::options_list;
pub use select_menu_core::selection;

#[cfg(feature = "crossterm")]
pub use select_menu_core::crossterm_input;

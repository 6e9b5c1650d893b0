//! `select-menu-core` is the render-agnostic core of a searchable select menu.
//!
//! It combines fuzzy text filtering, an index-based highlight state machine,
//! single/multi-select semantics and the plumbing a windowed renderer needs,
//! without depending on any terminal or GUI stack.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you feed [`input::KeyEvent`]s in, actions come out.
//! - No async runtime: every transition is synchronous and runs to completion.
//! - Selection is host-controlled: the menu emits [`options_list::MenuAction`]
//!   select/deselect intents and the caller applies them to its own state,
//!   then pushes the updated set back in.
//!
//! ## Getting started
//!
//! Most users should depend on the `select-menu` widget crate. Use this crate
//! directly to drive the menu from a custom renderer.
//!
//! Useful entry points:
//! - [`options_list::OptionsListState`]: the composed controller.
//! - [`filter::OptionsFilter`]: pluggable label filter
//!   (default: [`filter::FuzzyFilter`] over `nucleo-matcher`).
//! - [`nav::Navigator`]: the highlight state machine, usable on its own.
//! - [`keymap::MenuBindings`]: rebindable keys.
pub mod filter;
pub mod input;
pub mod keymap;
pub mod nav;
pub mod option;
pub mod options_list;
pub mod selection;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

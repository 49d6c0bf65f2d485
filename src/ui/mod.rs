//! Terminal front-end: chrome, flow containers and the event loop.

pub mod events;
pub mod flow;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod stack_view;
pub mod tab_view;
pub mod terminal_guard;
pub mod theme;

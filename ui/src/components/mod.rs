//! The components module contains the building blocks of the order list
//! screens. Each one is stateless: values come in as props and user input
//! goes back out through `EventHandler`s.
pub mod filters;
pub mod header;
pub mod order_card;
pub mod sidebar;
pub mod sort_select;
pub mod tabs;
pub mod theme_toggle;

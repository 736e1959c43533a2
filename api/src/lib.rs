//! This crate contains the view-model types and sample data shared by every
//! order-list front end.
//!
//! Nothing in here renders. In a wired-up marketplace the order sequence
//! would come from a backend; for now [`order::mock_orders`] stands in for it.

pub mod nav;
pub mod order;
pub mod order_list_state;
pub mod prefs;
pub mod sort;
pub mod tab;
pub mod theme;

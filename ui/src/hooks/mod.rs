pub mod use_order_list_state;
pub mod use_theme_attribute;

// This file makes the screen modules available to the rest of the application.

pub mod order_list_page;
pub mod seller_order_list;

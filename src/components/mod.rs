pub mod cart_counter;
pub mod product_card;
pub mod product_tabs;
pub mod review_form;
pub mod reviews_list;

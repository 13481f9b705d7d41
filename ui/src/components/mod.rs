pub mod app;
pub mod faq_view;
pub mod header;
pub mod markdown;
pub mod site_content;
pub mod transition;

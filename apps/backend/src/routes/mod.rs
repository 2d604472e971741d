pub mod categories;
pub mod faq;
pub mod health;
pub mod search;

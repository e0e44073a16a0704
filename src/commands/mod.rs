pub mod extract;
pub mod pages;
pub mod validate;

pub mod dom;
pub mod pages;
pub mod style;

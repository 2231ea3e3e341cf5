pub mod about;
pub mod form;
pub mod gen;

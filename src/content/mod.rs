pub mod articles;
pub mod form;
pub mod scroll;

pub mod escape;
pub mod path;
pub mod table;
pub mod time;

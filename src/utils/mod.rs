pub mod colors;
pub mod date;
pub mod path;
pub mod phone;
pub mod table;
pub mod time;

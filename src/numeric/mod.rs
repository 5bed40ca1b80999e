pub mod array;
pub mod coords;

pub mod character;
pub mod item;
pub mod object;
pub mod setting;

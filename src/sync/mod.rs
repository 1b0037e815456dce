pub mod commands;
pub mod controller;
pub mod emphasis;
pub mod events;
pub mod scroll;
pub mod visibility;

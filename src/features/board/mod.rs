pub mod components;
pub mod dnd;
pub mod hooks;
pub mod services;

pub mod config;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod render;
pub mod routing;
pub mod screenshot;
pub mod server;

pub mod application;
pub mod commands;
pub mod installer;
pub mod module;
pub mod package;
pub mod runtime;
pub mod script;

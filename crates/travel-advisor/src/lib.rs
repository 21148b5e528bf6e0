pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod facts;
pub mod history;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod ticker;
pub mod view;

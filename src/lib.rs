pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod store;
pub mod view;

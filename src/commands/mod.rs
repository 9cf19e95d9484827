pub mod add;
pub mod browse;
pub mod calendar;
pub mod config;
pub mod login;
pub mod post;
pub mod register;
pub mod remove;
pub mod show;
pub mod update;

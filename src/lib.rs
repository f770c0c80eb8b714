pub mod app;
pub mod buffer;
pub mod controller;
pub mod core;
pub mod notifications;
pub mod worker;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

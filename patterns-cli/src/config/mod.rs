//! Demo configuration loaded from env.

mod demo_config;


pub use demo_config::DemoConfig;

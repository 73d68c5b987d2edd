//! LevIoT - Air Purifier Control Surface
//!
//! Core library for the appliance's HTTP control endpoint.

pub mod config;
pub mod device;
pub mod firewall;
pub mod html;
pub mod http;
pub mod logger;
pub mod server;

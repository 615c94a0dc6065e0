//! Declarative engine configuration.
//!
//! [`RouterConfig`] and [`MessengerConfig`] are blueprints validated at
//! construction; [`DeploymentConfig`] reads both from one TOML file.
//! Engines are built from them through
//! [`FromConfig`](crate::traits::FromConfig).

mod deployment;
mod messenger_config;
mod router_config;

pub use deployment::DeploymentConfig;
pub use messenger_config::MessengerConfig;
pub use router_config::RouterConfig;

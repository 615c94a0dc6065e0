//! Construction of engines from validated configuration.
//!
//! Each engine implements `FromConfig<C>` for its own config struct.
//! Implementations must call the config's `validate()` before building
//! anything, so a constructed engine always starts from a consistent
//! state.
//!
//! | Config | Engine |
//! |--------|--------|
//! | [`RouterConfig`](crate::config::RouterConfig) | [`LiquidityRouter`](crate::pools::LiquidityRouter) |
//! | [`MessengerConfig`](crate::config::MessengerConfig) | [`CrossChainMessenger`](crate::messaging::CrossChainMessenger) |

/// Builds `Self` from a configuration value.
pub trait FromConfig<C>: Sized {
    /// Validates `config` and constructs the engine.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] (or a more specific
    /// variant) if the configuration is inconsistent.
    ///
    /// [`RouterError::InvalidConfiguration`]: crate::error::RouterError::InvalidConfiguration
    fn from_config(config: &C) -> crate::error::Result<Self>;
}

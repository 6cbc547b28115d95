// src/lib.rs
//! Prankster: role-aware prank messages resolved through a pluggable
//! strategy registry.
//!
//! ```
//! use prankster::{InternFactory, PrankGenerator, Role};
//!
//! let mut generator = PrankGenerator::new();
//! assert_eq!(
//!     generator.generate_prank("Alice", Role::Employee),
//!     "Congratulations Alice! You have been promoted to Chief Joke Officer!"
//! );
//!
//! generator.register_strategy_factory(InternFactory);
//! assert_eq!(
//!     generator.generate_prank("Alice", Role::Employee),
//!     "Hey Alice, the CEO wants you to get coffee for the entire department!"
//! );
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod generator;
pub mod registry;
pub mod role;
pub mod strategy;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use factory::{BuiltinFactory, FactoryId, InternFactory, StrategyFactory};
pub use generator::{PrankGenerator, SharedPrankGenerator};
pub use registry::{Precedence, StrategyRegistry};
pub use role::Role;
pub use strategy::PrankStrategy;

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Safe to call more than once; only the first call installs anything.
#[cfg(feature = "tracing-subscriber")]
pub fn init_logging() {
    use once_cell::sync::OnceCell;
    use tracing_subscriber::EnvFilter;

    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

#[cfg(all(test, feature = "tracing-subscriber"))]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging();
        init_logging();

        // fallback path emits a debug event through the installed subscriber
        let mut g = PrankGenerator::with_default("quiet");
        g.unregister_strategy_factory::<BuiltinFactory>();
        assert_eq!(g.generate_prank("x", Role::Hr), "quiet");
    }
}

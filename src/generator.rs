// src/generator.rs
//! The prank generator facade: one private registry seeded with the built-in
//! factory, plus a fallback message.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::config::{GeneratorConfig, DEFAULT_PRANK};
use crate::factory::{BuiltinFactory, StrategyFactory};
use crate::registry::StrategyRegistry;
use crate::role::Role;

pub struct PrankGenerator {
    registry: StrategyRegistry,
    default_prank: String,
}

impl PrankGenerator {
    /// Generator falling back to "April Fools!".
    pub fn new() -> Self {
        Self::with_default(DEFAULT_PRANK)
    }

    pub fn with_default(default_prank: impl Into<String>) -> Self {
        Self::from_config(&GeneratorConfig {
            default_prank: default_prank.into(),
            ..GeneratorConfig::default()
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut registry = StrategyRegistry::with_precedence(config.precedence);
        registry.register(BuiltinFactory);
        Self {
            registry,
            default_prank: config.default_prank.clone(),
        }
    }

    /// Add (or replace) a factory. See [`StrategyRegistry::register`].
    pub fn register_strategy_factory<F: StrategyFactory>(&mut self, factory: F) {
        self.registry.register(factory);
    }

    /// Drop a factory, built-in included. Returns whether it was present.
    pub fn unregister_strategy_factory<F: StrategyFactory>(&mut self) -> bool {
        self.registry.unregister::<F>()
    }

    /// Prank text for `name` in `role`, or the default message if nothing answers.
    pub fn generate_prank(&self, name: &str, role: Role) -> String {
        match self.registry.resolve(&role) {
            Some(strategy) => strategy.produce(name),
            None => {
                debug!(%role, "no strategy for role, using default prank");
                self.default_prank.clone()
            }
        }
    }

    pub fn default_prank(&self) -> &str {
        &self.default_prank
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }
}

impl Default for PrankGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle for sharing one generator across threads.
/// Registration takes the write lock; generation only reads.
#[derive(Clone)]
pub struct SharedPrankGenerator {
    inner: Arc<RwLock<PrankGenerator>>,
}

impl SharedPrankGenerator {
    pub fn new(generator: PrankGenerator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(generator)),
        }
    }

    pub fn register_strategy_factory<F: StrategyFactory>(&self, factory: F) {
        self.inner.write().register_strategy_factory(factory);
    }

    pub fn unregister_strategy_factory<F: StrategyFactory>(&self) -> bool {
        self.inner.write().unregister_strategy_factory::<F>()
    }

    pub fn generate_prank(&self, name: &str, role: Role) -> String {
        self.inner.read().generate_prank(name, role)
    }
}

impl From<PrankGenerator> for SharedPrankGenerator {
    fn from(generator: PrankGenerator) -> Self {
        Self::new(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::InternFactory;
    use crate::registry::Precedence;

    #[test]
    fn fresh_generator_holds_only_builtin() {
        let g = PrankGenerator::new();
        assert_eq!(g.registry().len(), 1);
        assert!(g.registry().contains::<BuiltinFactory>());
        assert_eq!(g.default_prank(), "April Fools!");
    }

    #[test]
    fn builtin_removed_falls_back_to_default() {
        let mut g = PrankGenerator::with_default("Nothing to see here");
        assert!(g.unregister_strategy_factory::<BuiltinFactory>());
        assert_eq!(g.generate_prank("Eve", Role::Hr), "Nothing to see here");
    }

    #[test]
    fn intern_only_registry_defaults_other_roles() {
        let mut g = PrankGenerator::new();
        g.unregister_strategy_factory::<BuiltinFactory>();
        g.register_strategy_factory(InternFactory);
        assert_eq!(
            g.generate_prank("Kim", Role::Employee),
            "Hey Kim, the CEO wants you to get coffee for the entire department!"
        );
        assert_eq!(g.generate_prank("Kim", Role::Developer), "April Fools!");
    }

    #[test]
    fn config_precedence_reaches_registry() {
        let cfg = GeneratorConfig {
            precedence: Precedence::EarliestFirst,
            ..GeneratorConfig::default()
        };
        let mut g = PrankGenerator::from_config(&cfg);
        g.register_strategy_factory(InternFactory);
        assert_eq!(g.registry().precedence(), Precedence::EarliestFirst);
        assert_eq!(
            g.generate_prank("Intern", Role::Employee),
            "Congratulations Intern! You have been promoted to Chief Joke Officer!"
        );
    }
}

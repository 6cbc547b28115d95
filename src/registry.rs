// src/registry.rs
//! Strategy Registry
//! Holds factories keyed by their identity and asks them, in a documented
//! order, to resolve an identifier into a strategy.

use indexmap::IndexMap;
use serde::Deserialize;
use std::any::Any;
use tracing::{debug, trace};

use crate::factory::{FactoryId, StrategyFactory};
use crate::strategy::PrankStrategy;

/// Which of several matching factories answers a resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precedence {
    /// Most recently registered factory is consulted first.
    #[default]
    LatestFirst,
    /// Factories are consulted in registration order.
    EarliestFirst,
}

pub struct StrategyRegistry {
    /// Insertion-ordered; a replaced entry keeps its slot.
    factories: IndexMap<FactoryId, Box<dyn StrategyFactory>>,
    precedence: Precedence,
}

impl StrategyRegistry {
    /// Create a new, empty registry with the default precedence.
    pub fn new() -> Self {
        Self::with_precedence(Precedence::default())
    }

    pub fn with_precedence(precedence: Precedence) -> Self {
        Self {
            factories: IndexMap::new(),
            precedence,
        }
    }

    /// Register a factory under its type identity.
    /// If that identity is already present, its resolver is replaced in place.
    pub fn register<F: StrategyFactory>(&mut self, factory: F) {
        let id = FactoryId::of::<F>();
        if self.factories.insert(id, Box::new(factory)).is_some() {
            debug!(factory = id.name(), "replaced strategy factory");
        } else {
            debug!(factory = id.name(), total = self.factories.len(), "registered strategy factory");
        }
    }

    /// Remove a factory. Returns whether it was registered.
    pub fn unregister<F: StrategyFactory>(&mut self) -> bool {
        let id = FactoryId::of::<F>();
        let removed = self.factories.shift_remove(&id).is_some();
        if removed {
            debug!(factory = id.name(), "unregistered strategy factory");
        }
        removed
    }

    pub fn contains<F: StrategyFactory>(&self) -> bool {
        self.factories.contains_key(&FactoryId::of::<F>())
    }

    /// First strategy any factory produces for `identifier`.
    pub fn resolve(&self, identifier: &dyn Any) -> Option<Box<dyn PrankStrategy>> {
        self.resolve_with(identifier).map(|(_, strategy)| strategy)
    }

    /// Like [`resolve`](Self::resolve), also reporting which factory answered.
    pub fn resolve_with(
        &self,
        identifier: &dyn Any,
    ) -> Option<(FactoryId, Box<dyn PrankStrategy>)> {
        self.ordered().find_map(|(id, factory)| {
            trace!(factory = id.name(), "consulting strategy factory");
            factory.resolve(identifier).map(|strategy| (*id, strategy))
        })
    }

    /// Factory identities in the order `resolve` consults them.
    pub fn factory_ids(&self) -> Vec<FactoryId> {
        self.ordered().map(|(id, _)| *id).collect()
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn set_precedence(&mut self, precedence: Precedence) {
        self.precedence = precedence;
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn ordered(
        &self,
    ) -> Box<dyn Iterator<Item = (&FactoryId, &Box<dyn StrategyFactory>)> + '_> {
        match self.precedence {
            Precedence::LatestFirst => Box::new(self.factories.iter().rev()),
            Precedence::EarliestFirst => Box::new(self.factories.iter()),
        }
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

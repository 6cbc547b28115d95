// src/factory.rs
//! Strategy factories: map an arbitrary identifier to a strategy, or nothing.
//!
//! A factory's identity is its type. Two factory definitions are always
//! distinct registry keys, whatever identifiers they happen to accept.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::role::Role;
use crate::strategy::{
    CorporatePlayerStrategy, DeveloperStrategy, EmployeeStrategy, HrStrategy, InternStrategy,
    ManagerStrategy, PrankStrategy, UxuiStrategy,
};

/// Resolves an identifier into a strategy. Unmatched identifiers yield `None`.
pub trait StrategyFactory: Send + Sync + 'static {
    fn resolve(&self, identifier: &dyn Any) -> Option<Box<dyn PrankStrategy>>;
}

/// Opaque per-definition identity of a factory.
#[derive(Clone, Copy)]
pub struct FactoryId {
    type_id: TypeId,
    name: &'static str,
}

impl FactoryId {
    pub fn of<F: StrategyFactory>() -> Self {
        Self {
            type_id: TypeId::of::<F>(),
            name: std::any::type_name::<F>(),
        }
    }

    /// Type name of the factory, for logs.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for FactoryId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for FactoryId {}

impl Hash for FactoryId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FactoryId").field(&self.name).finish()
    }
}

/// Answers every [`Role`] with its built-in strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinFactory;

impl StrategyFactory for BuiltinFactory {
    fn resolve(&self, identifier: &dyn Any) -> Option<Box<dyn PrankStrategy>> {
        let role = identifier.downcast_ref::<Role>()?;
        // Exhaustive on purpose: a new role must get a strategy here.
        let strategy: Box<dyn PrankStrategy> = match role {
            Role::Employee => Box::new(EmployeeStrategy),
            Role::Manager => Box::new(ManagerStrategy),
            Role::Developer => Box::new(DeveloperStrategy),
            Role::CorporatePlayer => Box::new(CorporatePlayerStrategy),
            Role::Hr => Box::new(HrStrategy),
            Role::Uxui => Box::new(UxuiStrategy),
        };
        Some(strategy)
    }
}

/// Only answers `Role::Employee`, with [`InternStrategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InternFactory;

impl StrategyFactory for InternFactory {
    fn resolve(&self, identifier: &dyn Any) -> Option<Box<dyn PrankStrategy>> {
        match identifier.downcast_ref::<Role>() {
            Some(Role::Employee) => Some(Box::new(InternStrategy)),
            _ => None,
        }
    }
}

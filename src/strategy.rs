// src/strategy.rs
//! Prank strategies: pure `name -> message` behaviors tagged with the role
//! they apply to.

use crate::role::Role;

/// A stateless text generator for one role.
///
/// `role` is lookup metadata only; the produced text comes from the
/// strategy's own template.
pub trait PrankStrategy {
    fn role(&self) -> Role;

    fn produce(&self, name: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EmployeeStrategy;

impl PrankStrategy for EmployeeStrategy {
    fn role(&self) -> Role {
        Role::Employee
    }

    fn produce(&self, name: &str) -> String {
        format!("Congratulations {name}! You have been promoted to Chief Joke Officer!")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ManagerStrategy;

impl PrankStrategy for ManagerStrategy {
    fn role(&self) -> Role {
        Role::Manager
    }

    fn produce(&self, _name: &str) -> String {
        "URGENT: Surprise meeting with the CEO in 5 minutes. Prepare a presentation!".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeveloperStrategy;

impl PrankStrategy for DeveloperStrategy {
    fn role(&self) -> Role {
        Role::Developer
    }

    fn produce(&self, _name: &str) -> String {
        "[CRITICAL ALERT] A fatal error has been detected in your IDE! Error code: APR-001."
            .to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CorporatePlayerStrategy;

impl PrankStrategy for CorporatePlayerStrategy {
    fn role(&self) -> Role {
        Role::CorporatePlayer
    }

    fn produce(&self, _name: &str) -> String {
        "URGENT Circle meeting about objectives in 3 min".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HrStrategy;

impl PrankStrategy for HrStrategy {
    fn role(&self) -> Role {
        Role::Hr
    }

    fn produce(&self, _name: &str) -> String {
        "You're demoted to Standardist!".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UxuiStrategy;

impl PrankStrategy for UxuiStrategy {
    fn role(&self) -> Role {
        Role::Uxui
    }

    fn produce(&self, _name: &str) -> String {
        "The figma files disappeared and we have a meeting in 5 min.".to_string()
    }
}

/// Shares `Role::Employee` with [`EmployeeStrategy`] but says something else.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternStrategy;

impl PrankStrategy for InternStrategy {
    fn role(&self) -> Role {
        Role::Employee
    }

    fn produce(&self, name: &str) -> String {
        format!("Hey {name}, the CEO wants you to get coffee for the entire department!")
    }
}

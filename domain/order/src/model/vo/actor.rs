use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::{OrderException, OrderResult};

/// Calling principal, resolved by the identity provider and passed into
/// every mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    /// Field supervisor ("mandor").
    Supervisor,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Customer => "customer",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn customer(id: Uuid) -> Self {
        Self::new(id, Role::Customer)
    }

    pub fn supervisor(id: Uuid) -> Self {
        Self::new(id, Role::Supervisor)
    }

    pub fn admin(id: Uuid) -> Self {
        Self::new(id, Role::Admin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Supervisors and admins run the field side of an order.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Supervisor | Role::Admin)
    }

    pub fn unauthorized(&self, action: &'static str) -> OrderException {
        OrderException::Unauthorized {
            actor_id: self.id,
            role: self.role,
            action,
        }
    }

    pub fn ensure_customer(&self, action: &'static str) -> OrderResult<()> {
        match self.role {
            Role::Customer => Ok(()),
            _ => Err(self.unauthorized(action)),
        }
    }

    pub fn ensure_staff(&self, action: &'static str) -> OrderResult<()> {
        if self.is_staff() {
            Ok(())
        } else {
            Err(self.unauthorized(action))
        }
    }

    /// Staff, or the customer who owns the order.
    pub fn ensure_staff_or_owner(&self, owner: Uuid, action: &'static str) -> OrderResult<()> {
        if self.is_staff() || (self.role == Role::Customer && self.id == owner) {
            Ok(())
        } else {
            Err(self.unauthorized(action))
        }
    }

    /// Admins, or the customer who owns the order.
    pub fn ensure_admin_or_owner(&self, owner: Uuid, action: &'static str) -> OrderResult<()> {
        if self.is_admin() || (self.role == Role::Customer && self.id == owner) {
            Ok(())
        } else {
            Err(self.unauthorized(action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_rules() {
        let owner = Uuid::new_v4();
        let customer = Actor::customer(owner);
        let stranger = Actor::customer(Uuid::new_v4());
        let supervisor = Actor::supervisor(Uuid::new_v4());
        let admin = Actor::admin(Uuid::new_v4());

        assert!(customer.ensure_staff_or_owner(owner, "cancel").is_ok());
        assert!(stranger.ensure_staff_or_owner(owner, "cancel").is_err());
        assert!(supervisor.ensure_staff_or_owner(owner, "cancel").is_ok());

        assert!(customer.ensure_admin_or_owner(owner, "decide").is_ok());
        assert!(admin.ensure_admin_or_owner(owner, "decide").is_ok());
        assert!(matches!(
            supervisor.ensure_admin_or_owner(owner, "decide"),
            Err(OrderException::Unauthorized { role: Role::Supervisor, .. })
        ));
        assert!(admin.ensure_customer("submit").is_err());
    }
}

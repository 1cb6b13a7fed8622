//! Role/permission registry
//!
//! The registry is the single source of truth for which permissions each
//! role grants. It is built once at startup and never mutated afterwards,
//! so concurrent readers need no synchronization.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::types::{Permission, Role};

static REGISTRY: OnceLock<RoleRegistry> = OnceLock::new();

/// Process-wide registry instance, initialized on first use
pub fn role_registry() -> &'static RoleRegistry {
    REGISTRY.get_or_init(RoleRegistry::new)
}

/// Total, read-only mapping from each role to its permission set
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RoleRegistry {
    /// Build the registry with the fixed default grants
    pub fn new() -> Self {
        debug!("Initializing role/permission registry");

        let mut grants: HashMap<Role, HashSet<Permission>> = HashMap::new();

        // Internal roles
        grants.insert(Role::Admin, Permission::ALL.iter().copied().collect());
        grants.insert(
            Role::Dev,
            [
                Permission::BotConfig,
                Permission::SystemLogs,
                Permission::ClientManagement,
                Permission::ViewDashboard,
                Permission::VoiceControls,
            ]
            .into_iter()
            .collect(),
        );
        grants.insert(
            Role::Support,
            [
                Permission::ClientManagement,
                Permission::ViewDashboard,
                Permission::ViewRoi,
                Permission::SupportTickets,
            ]
            .into_iter()
            .collect(),
        );

        // Client roles
        grants.insert(
            Role::Owner,
            [
                Permission::BotConfig,
                Permission::EditBotContent,
                Permission::ViewRoi,
                Permission::ViewDashboard,
                Permission::ManageTeam,
                Permission::Billing,
                Permission::VoiceControls,
                Permission::SupportTickets,
            ]
            .into_iter()
            .collect(),
        );
        grants.insert(
            Role::Manager,
            [
                Permission::EditBotContent,
                Permission::ViewRoi,
                Permission::ViewDashboard,
                Permission::ManageTeam,
                Permission::SupportTickets,
            ]
            .into_iter()
            .collect(),
        );
        grants.insert(
            Role::Agent,
            [
                Permission::ViewDashboard,
                Permission::VoiceControls,
                Permission::SupportTickets,
            ]
            .into_iter()
            .collect(),
        );
        grants.insert(
            Role::Editor,
            [Permission::ViewDashboard, Permission::EditBotContent]
                .into_iter()
                .collect(),
        );

        // The map must stay total over the closed role set
        debug_assert!(Role::ALL.iter().all(|role| grants.contains_key(role)));

        debug!(roles = grants.len(), "Role registry initialized");
        Self { grants }
    }

    /// All valid roles
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter()
    }

    /// Permission set granted to `role`
    ///
    /// The map is total by construction; if an entry is ever missing this
    /// fails closed with an empty set rather than granting anything.
    pub fn permissions_for(&self, role: Role) -> &HashSet<Permission> {
        static EMPTY: OnceLock<HashSet<Permission>> = OnceLock::new();

        match self.grants.get(&role) {
            Some(permissions) => permissions,
            None => {
                warn!(%role, "Role missing from registry, denying all permissions");
                EMPTY.get_or_init(HashSet::new)
            }
        }
    }

    /// Dynamic-boundary lookup for role names from external systems
    ///
    /// An unknown role name is a configuration error: it is logged and
    /// granted no permissions, never treated as any known role.
    pub fn permissions_for_name(&self, role_name: &str) -> HashSet<Permission> {
        match role_name.parse::<Role>() {
            Ok(role) => self.permissions_for(role).clone(),
            Err(_) => {
                warn!(role = role_name, "Unknown role name, granting no permissions");
                HashSet::new()
            }
        }
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

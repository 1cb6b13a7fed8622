//! Core role and permission types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role
///
/// Roles form a closed set: internal (YoBot team) roles operate across all
/// client accounts, client roles are scoped to a single account via
/// `client_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full system administrator (internal)
    Admin,
    /// Developer (internal)
    Dev,
    /// Support staff (internal)
    Support,
    /// Client account owner
    Owner,
    /// Client account manager
    Manager,
    /// Client agent
    Agent,
    /// Client content editor
    Editor,
}

impl Role {
    /// Every valid role, internal first
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Dev,
        Role::Support,
        Role::Owner,
        Role::Manager,
        Role::Agent,
        Role::Editor,
    ];

    /// Roles belonging to the YoBot team
    pub const INTERNAL: [Role; 3] = [Role::Admin, Role::Dev, Role::Support];

    /// Whether this role belongs to the YoBot team
    pub fn is_internal(&self) -> bool {
        matches!(self, Role::Admin | Role::Dev | Role::Support)
    }

    /// Whether this role is scoped to a client account
    pub fn is_client(&self) -> bool {
        !self.is_internal()
    }

    /// Access level for this role
    ///
    /// Exhaustive and mutually exclusive over the closed role set: every
    /// role maps to exactly one level.
    pub fn access_level(&self) -> AccessLevel {
        if self.is_internal() {
            AccessLevel::Admin
        } else {
            AccessLevel::Client
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Dev => write!(f, "dev"),
            Role::Support => write!(f, "support"),
            Role::Owner => write!(f, "owner"),
            Role::Manager => write!(f, "manager"),
            Role::Agent => write!(f, "agent"),
            Role::Editor => write!(f, "editor"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "dev" => Ok(Role::Dev),
            "support" => Ok(Role::Support),
            "owner" => Ok(Role::Owner),
            "manager" => Ok(Role::Manager),
            "agent" => Ok(Role::Agent),
            "editor" => Ok(Role::Editor),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Capability tag checked by guards before allowing an action
///
/// Permissions are flat; all hierarchy lives in the role-to-permission
/// mapping held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Unrestricted access to every surface
    FullSystemAccess,
    /// Provision and manage client accounts
    ClientManagement,
    /// Read system and bot logs
    SystemLogs,
    /// Configure bot behavior and integrations
    BotConfig,
    /// Edit bot-facing content (scripts, responses)
    EditBotContent,
    /// View ROI and revenue analytics
    ViewRoi,
    /// View the client dashboard
    ViewDashboard,
    /// Manage the client's team members
    ManageTeam,
    /// View and manage billing
    Billing,
    /// Operate live voice controls
    VoiceControls,
    /// Open and view support tickets
    SupportTickets,
}

impl Permission {
    /// Every defined permission
    pub const ALL: [Permission; 11] = [
        Permission::FullSystemAccess,
        Permission::ClientManagement,
        Permission::SystemLogs,
        Permission::BotConfig,
        Permission::EditBotContent,
        Permission::ViewRoi,
        Permission::ViewDashboard,
        Permission::ManageTeam,
        Permission::Billing,
        Permission::VoiceControls,
        Permission::SupportTickets,
    ];
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::FullSystemAccess => write!(f, "full_system_access"),
            Permission::ClientManagement => write!(f, "client_management"),
            Permission::SystemLogs => write!(f, "system_logs"),
            Permission::BotConfig => write!(f, "bot_config"),
            Permission::EditBotContent => write!(f, "edit_bot_content"),
            Permission::ViewRoi => write!(f, "view_roi"),
            Permission::ViewDashboard => write!(f, "view_dashboard"),
            Permission::ManageTeam => write!(f, "manage_team"),
            Permission::Billing => write!(f, "billing"),
            Permission::VoiceControls => write!(f, "voice_controls"),
            Permission::SupportTickets => write!(f, "support_tickets"),
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_system_access" => Ok(Permission::FullSystemAccess),
            "client_management" => Ok(Permission::ClientManagement),
            "system_logs" => Ok(Permission::SystemLogs),
            "bot_config" => Ok(Permission::BotConfig),
            "edit_bot_content" => Ok(Permission::EditBotContent),
            "view_roi" => Ok(Permission::ViewRoi),
            "view_dashboard" => Ok(Permission::ViewDashboard),
            "manage_team" => Ok(Permission::ManageTeam),
            "billing" => Ok(Permission::Billing),
            "voice_controls" => Ok(Permission::VoiceControls),
            "support_tickets" => Ok(Permission::SupportTickets),
            _ => Err(format!("Invalid permission: {}", s)),
        }
    }
}

/// Access level derived from a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Internal (YoBot team) access across all client accounts
    Admin,
    /// Access scoped to a single client account
    Client,
}

impl AccessLevel {
    /// Fixed redirect target applied after login
    pub fn post_login_destination(&self) -> &'static str {
        match self {
            AccessLevel::Admin => "/admin",
            AccessLevel::Client => "/dashboard",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Admin => write!(f, "admin"),
            AccessLevel::Client => write!(f, "client"),
        }
    }
}

/// Authenticated user attached to a request by the identity layer
///
/// The role is read on every request and never mutated here. `client_id`
/// present means the user is scoped to one client account; internal roles
/// carry no `client_id` and operate across all accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User id
    pub id: Uuid,
    /// User role
    pub role: Role,
    /// Client account this user is scoped to (client roles only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

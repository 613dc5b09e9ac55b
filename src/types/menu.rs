//! Navigation menu types
//!
//! The menu is static configuration: a tree of entries, each annotated with
//! the roles allowed to see it. It is owned by whoever bootstraps the
//! application and handed to the resolver explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard audience
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Staff, Role::Student, Role::Parent];

    /// Lowercase name used on the wire and as the path prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,

    /// Generic path such as `/students`; role prefixes are applied on lookup.
    /// Separators and pure group headers carry no href.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    pub label: String,

    pub roles: Vec<Role>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,

    /// Visual divider; never matched against a path
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub separator: bool,
}

impl MenuItem {
    pub fn new(id: &str, href: &str, label: &str, roles: &[Role]) -> Self {
        MenuItem {
            id: id.to_string(),
            href: Some(href.to_string()),
            label: label.to_string(),
            roles: roles.to_vec(),
            children: Vec::new(),
            separator: false,
        }
    }

    pub fn separator(id: &str, label: &str, roles: &[Role]) -> Self {
        MenuItem {
            id: id.to_string(),
            href: None,
            label: label.to_string(),
            roles: roles.to_vec(),
            children: Vec::new(),
            separator: true,
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// The href if this entry can be matched against a path at all
    pub fn matchable_href(&self) -> Option<&str> {
        if self.separator {
            return None;
        }
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

/// The full, role-annotated navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub items: Vec<MenuItem>,
}

impl MenuConfig {
    pub fn new(items: Vec<MenuItem>) -> Self {
        MenuConfig { items }
    }
}

impl Default for MenuConfig {
    /// The stock school dashboard navigation
    fn default() -> Self {
        use Role::{Admin, Parent, Staff, Student};

        MenuConfig::new(vec![
            MenuItem::new("dashboard", "/dashboard", "Dashboard", &Role::ALL),
            MenuItem::new("students", "/students", "Students", &[Admin, Staff]),
            MenuItem::new("staff", "/staff", "Staff", &[Admin]),
            MenuItem::new("classes", "/classes", "Classes", &[Admin, Staff, Student]),
            MenuItem::new("attendance", "/attendance", "Attendance", &Role::ALL),
            MenuItem::new("children", "/children", "My Children", &[Parent]),
            MenuItem::separator("finance-separator", "Finance", &Role::ALL),
            MenuItem::new("finance", "/finance", "Finance", &[Admin, Student, Parent])
                .with_children(vec![
                    MenuItem::new("wallet", "/wallet", "Wallet", &[Student, Parent]),
                    MenuItem::new("fees", "/fees", "School Fees", &[Admin, Parent]),
                    MenuItem::new("canteen", "/canteen", "Canteen", &[Admin, Student, Parent]),
                    MenuItem::new(
                        "transactions",
                        "/finance/transactions",
                        "Transactions",
                        &[Admin],
                    ),
                ]),
            MenuItem::new("messages", "/messages", "Messages", &Role::ALL),
            MenuItem::new("settings", "/settings", "Settings", &Role::ALL),
        ])
    }
}

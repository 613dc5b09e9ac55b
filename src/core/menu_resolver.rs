//! Role-scoped menu resolution
//!
//! The menu configuration stores generic hrefs (`/students`). Every role sees
//! its own copy of the tree, filtered to the entries it may access and with
//! hrefs prefixed by the role (`/admin/students`). The resolver also finds the
//! entry that should be highlighted for the current path.
//!
//! All functions borrow the configuration and never modify it.

use crate::types::{MenuConfig, MenuItem, Role};
use tracing::debug;

/// Generic path of every role's landing page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Rewrite a generic menu path into the role's path space
///
/// `/dashboard` becomes the role root (`/admin`, `/parent`, ...). Any other
/// path is nested under the role: `students` and `/students` both become
/// `/{role}/students`.
pub fn get_role_path(role: Role, base_path: &str) -> String {
    if base_path == DASHBOARD_PATH {
        return match role {
            Role::Admin => "/admin".to_string(),
            other => format!("/{}", other),
        };
    }
    let path = base_path.strip_prefix('/').unwrap_or(base_path);
    format!("/{}/{}", role, path)
}

/// The menu as seen by one role
///
/// Entries the role may not see are dropped together with their subtrees.
/// Surviving hrefs are rewritten with [`get_role_path`].
pub fn get_menu_items_by_role(config: &MenuConfig, role: Role) -> Vec<MenuItem> {
    scope_items(&config.items, role)
}

fn scope_items(items: &[MenuItem], role: Role) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.is_visible_to(role))
        .map(|item| MenuItem {
            id: item.id.clone(),
            href: item.href.as_deref().map(|href| get_role_path(role, href)),
            label: item.label.clone(),
            roles: item.roles.clone(),
            children: scope_items(&item.children, role),
            separator: item.separator,
        })
        .collect()
}

/// Find the menu entry to highlight for `pathname`
///
/// One trailing slash is ignored. Top-level entries are tried first, in
/// order: the role's dashboard matches only exactly, every other entry
/// matches exactly or as a whole-segment prefix (`/admin/students/42` matches
/// `/admin/students`, `/admin/students2` does not). If no top-level entry
/// matches, the children of all top-level entries are tried the same way.
/// Separators and entries without an href never match.
pub fn match_menu_item_by_path(
    config: &MenuConfig,
    pathname: &str,
    role: Role,
) -> Option<MenuItem> {
    let path = normalize_path(pathname);
    let items = get_menu_items_by_role(config, role);
    let dashboard = get_role_path(role, DASHBOARD_PATH);

    let top_level = items.iter().find(|item| match item.matchable_href() {
        Some(href) if href == dashboard => path == dashboard,
        Some(href) => path_matches(path, href),
        None => false,
    });

    let found = top_level
        .or_else(|| {
            items
                .iter()
                .flat_map(|item| item.children.iter())
                .find(|child| {
                    child
                        .matchable_href()
                        .is_some_and(|href| path_matches(path, href))
                })
        })
        .cloned();

    debug!(
        path,
        %role,
        matched = found.as_ref().map(|item| item.id.as_str()),
        "Resolved menu path"
    );
    found
}

/// Strip a single trailing slash; the root path stays `/`
fn normalize_path(pathname: &str) -> &str {
    if pathname.len() > 1 {
        pathname.strip_suffix('/').unwrap_or(pathname)
    } else {
        pathname
    }
}

/// Exact match or prefix match ending on a path segment boundary
fn path_matches(path: &str, href: &str) -> bool {
    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Resolver bound to one menu configuration
///
/// Convenience for callers that keep the configuration around for the
/// lifetime of the application.
#[derive(Debug, Clone, Copy)]
pub struct MenuResolver<'a> {
    config: &'a MenuConfig,
}

impl<'a> MenuResolver<'a> {
    pub fn new(config: &'a MenuConfig) -> Self {
        MenuResolver { config }
    }

    pub fn role_path(&self, role: Role, base_path: &str) -> String {
        get_role_path(role, base_path)
    }

    pub fn items_for(&self, role: Role) -> Vec<MenuItem> {
        get_menu_items_by_role(self.config, role)
    }

    pub fn match_path(&self, pathname: &str, role: Role) -> Option<MenuItem> {
        match_menu_item_by_path(self.config, pathname, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn matched_id(pathname: &str, role: Role) -> Option<String> {
        match_menu_item_by_path(&MenuConfig::default(), pathname, role).map(|item| item.id)
    }

    #[rstest]
    #[case::admin_dashboard(Role::Admin, "/dashboard", "/admin")]
    #[case::parent_dashboard(Role::Parent, "/dashboard", "/parent")]
    #[case::staff_dashboard(Role::Staff, "/dashboard", "/staff")]
    #[case::leading_slash(Role::Admin, "/students", "/admin/students")]
    #[case::no_leading_slash(Role::Student, "wallet", "/student/wallet")]
    #[case::nested(Role::Admin, "/finance/transactions", "/admin/finance/transactions")]
    #[case::dashboard_subpath(Role::Parent, "/dashboard/news", "/parent/dashboard/news")]
    #[case::empty(Role::Staff, "", "/staff/")]
    fn test_get_role_path(#[case] role: Role, #[case] base: &str, #[case] expected: &str) {
        assert_eq!(get_role_path(role, base), expected);
    }

    #[test]
    fn test_menu_items_filtered_and_rewritten_for_parent() {
        let items = get_menu_items_by_role(&MenuConfig::default(), Role::Parent);

        assert_eq!(
            ids(&items),
            vec![
                "dashboard",
                "attendance",
                "children",
                "finance-separator",
                "finance",
                "messages",
                "settings"
            ]
        );
        assert_eq!(items[0].href.as_deref(), Some("/parent"));
        assert_eq!(items[2].href.as_deref(), Some("/parent/children"));

        let finance = &items[4];
        assert_eq!(ids(&finance.children), vec!["wallet", "fees", "canteen"]);
        assert_eq!(finance.children[0].href.as_deref(), Some("/parent/wallet"));
    }

    #[test]
    fn test_menu_items_never_leak_other_roles() {
        let config = MenuConfig::default();
        for role in Role::ALL {
            fn check(items: &[MenuItem], role: Role) {
                for item in items {
                    assert!(item.is_visible_to(role), "{} leaked to {}", item.id, role);
                    check(&item.children, role);
                }
            }
            check(&get_menu_items_by_role(&config, role), role);
        }
    }

    #[test]
    fn test_scoping_does_not_mutate_config() {
        let config = MenuConfig::default();
        let before = config.clone();

        let _ = get_menu_items_by_role(&config, Role::Admin);
        let _ = match_menu_item_by_path(&config, "/admin/students", Role::Admin);

        assert_eq!(config, before);
    }

    #[rstest]
    #[case::exact("/admin/students", Role::Admin, Some("students"))]
    #[case::sub_path("/admin/students/42", Role::Admin, Some("students"))]
    #[case::sibling_prefix("/admin/students2", Role::Admin, None)]
    #[case::trailing_slash("/admin/students/", Role::Admin, Some("students"))]
    #[case::dashboard_root("/admin", Role::Admin, Some("dashboard"))]
    #[case::dashboard_trailing_slash("/parent/", Role::Parent, Some("dashboard"))]
    #[case::dashboard_not_prefix("/admin/unknown", Role::Admin, None)]
    #[case::other_role_path("/admin/students", Role::Staff, None)]
    #[case::hidden_from_role("/student/staff", Role::Student, None)]
    #[case::child_exact("/parent/wallet", Role::Parent, Some("wallet"))]
    #[case::child_sub_path("/student/canteen/menu/3", Role::Student, Some("canteen"))]
    #[case::parent_before_child("/admin/finance/transactions", Role::Admin, Some("finance"))]
    #[case::child_hidden("/student/fees", Role::Student, None)]
    #[case::root("/", Role::Admin, None)]
    #[case::empty("", Role::Admin, None)]
    fn test_match_menu_item_by_path(
        #[case] pathname: &str,
        #[case] role: Role,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(matched_id(pathname, role).as_deref(), expected);
    }

    #[test]
    fn test_matched_item_carries_role_href() {
        let item = match_menu_item_by_path(&MenuConfig::default(), "/staff/classes/7b", Role::Staff)
            .unwrap();
        assert_eq!(item.href.as_deref(), Some("/staff/classes"));
    }

    #[test]
    fn test_separator_never_matches() {
        let config = MenuConfig::new(vec![
            MenuItem {
                href: Some("/news".to_string()),
                ..MenuItem::separator("sep", "News", &[Role::Admin])
            },
            MenuItem::new("news", "/news", "News", &[Role::Admin]),
        ]);

        let found = match_menu_item_by_path(&config, "/admin/news", Role::Admin).unwrap();
        assert_eq!(found.id, "news");
    }

    #[test]
    fn test_first_match_wins_in_list_order() {
        let config = MenuConfig::new(vec![
            MenuItem::new("reports", "/reports", "Reports", &[Role::Staff]),
            MenuItem::new("report-cards", "/reports/cards", "Report Cards", &[Role::Staff]),
        ]);

        let found = match_menu_item_by_path(&config, "/staff/reports/cards", Role::Staff).unwrap();
        assert_eq!(found.id, "reports");
    }

    #[test]
    fn test_later_top_level_entry_beats_earlier_child() {
        let config = MenuConfig::new(vec![
            MenuItem::new("finance", "/finance", "Finance", &[Role::Admin]).with_children(vec![
                MenuItem::new("finance-reports", "/reports", "Finance Reports", &[Role::Admin]),
            ]),
            MenuItem::new("reports", "/reports", "Reports", &[Role::Admin]),
        ]);

        let found = match_menu_item_by_path(&config, "/admin/reports/2025", Role::Admin).unwrap();
        assert_eq!(found.id, "reports");

        let child_only = MenuConfig::new(vec![config.items[0].clone()]);
        let found =
            match_menu_item_by_path(&child_only, "/admin/reports/2025", Role::Admin).unwrap();
        assert_eq!(found.id, "finance-reports");
    }

    #[test]
    fn test_resolver_delegates_to_config() {
        let config = MenuConfig::default();
        let resolver = MenuResolver::new(&config);

        assert_eq!(resolver.role_path(Role::Parent, "/dashboard"), "/parent");
        assert_eq!(resolver.items_for(Role::Staff).len(), 7);
        assert_eq!(
            resolver.match_path("/staff/attendance", Role::Staff).map(|i| i.id),
            Some("attendance".to_string())
        );
    }
}

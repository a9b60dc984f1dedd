//! Sidebar navigation entries.

/// A feature screen reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Stable identifier.
    pub id: &'static str,
    /// Label shown in the sidebar.
    pub name: &'static str,
    /// Emoji shown next to the label.
    pub icon: &'static str,
    /// Screen the entry navigates to.
    pub route: &'static str,
    /// 1-based display position.
    pub order: u8,
}

/// Route shown when the app starts.
pub const DEFAULT_ROUTE: &str = "Home";

/// Sidebar entries in display order.
pub static NAVIGATION_ITEMS: [NavigationItem; 5] = [
    NavigationItem { id: "home", name: "Home", icon: "🏠", route: "Home", order: 1 },
    NavigationItem { id: "recipes", name: "Recipes", icon: "🍳", route: "Recipes", order: 2 },
    NavigationItem {
        id: "grocery-list",
        name: "Grocery List",
        icon: "🛒",
        route: "GroceryList",
        order: 3,
    },
    NavigationItem { id: "travel", name: "Travel", icon: "✈️", route: "Travel", order: 4 },
    NavigationItem {
        id: "home-projects",
        name: "Home Projects",
        icon: "🔨",
        route: "HomeProjects",
        order: 5,
    },
];

/// Looks up the entry for `route`.
#[must_use]
pub fn find_by_route(route: &str) -> Option<&'static NavigationItem> {
    NAVIGATION_ITEMS.iter().find(|item| item.route == route)
}

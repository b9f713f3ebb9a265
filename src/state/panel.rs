//! Panels
//!
//! The mutually-exclusive top-level views of the page. Rendering is an
//! exhaustive match over this enum, so exactly one panel is visible after
//! any switch; unknown panels are unrepresentable.

use crate::auth::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Login,
    Register,
    /// Review entry and per-review result (the customer home).
    Analyze,
    /// Aggregate sentiment chart over the full history.
    Graph,
    History,
    Search,
    /// Registered-customer listing, admin only.
    Customers,
}

impl Panel {
    /// Label used on this panel's navigation button.
    pub fn nav_label(self) -> &'static str {
        match self {
            Panel::Login => "Login",
            Panel::Register => "Register",
            Panel::Analyze => "Home",
            Panel::Graph => "Analyse",
            Panel::History => "History",
            Panel::Search => "Search",
            Panel::Customers => "Customer Info",
        }
    }
}

impl Role {
    /// Panels exposed in the navigation bar for this role.
    pub fn nav_panels(self) -> &'static [Panel] {
        match self {
            Role::Customer => &[Panel::Analyze, Panel::Search],
            Role::Admin => &[Panel::Graph, Panel::History, Panel::Customers],
        }
    }

    /// Panel shown immediately after login.
    pub fn landing_panel(self) -> Panel {
        self.nav_panels()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_nav_is_home_and_search() {
        assert_eq!(Role::Customer.nav_panels(), &[Panel::Analyze, Panel::Search]);
    }

    #[test]
    fn admin_nav_is_analyse_history_and_customers() {
        assert_eq!(
            Role::Admin.nav_panels(),
            &[Panel::Graph, Panel::History, Panel::Customers]
        );
    }

    #[test]
    fn landing_panel_is_the_first_nav_item() {
        assert_eq!(Role::Customer.landing_panel(), Panel::Analyze);
        assert_eq!(Role::Admin.landing_panel(), Panel::Graph);
    }
}

//! Tests for the routing table
//!
//! Covers path recognition, the role each route requires and the navbar
//! entries offered to each kind of session.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use shared::access::{Access, Landing};
    use shared::models::{Role, Session};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_recognizes_static_paths() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/products"), Some(MainRoute::Products));
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::Admin));
    }

    #[test]
    fn test_recognizes_store_id() {
        assert_eq!(
            MainRoute::recognize("/store/7"),
            Some(MainRoute::Store { id: "7".to_string() })
        );
        assert_eq!(MainRoute::Store { id: "42".to_string() }.to_path(), "/store/42");
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        assert_eq!(
            MainRoute::recognize("/definitely/not/here"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(MainRoute::Dashboard.required_role(), Some(Role::User));
        assert_eq!(MainRoute::Admin.required_role(), Some(Role::Admin));
        assert_eq!(MainRoute::Home.required_role(), None);
        assert_eq!(MainRoute::Store { id: "1".into() }.required_role(), None);
    }

    #[test]
    fn test_gated_routes_redirect_anonymous_visitors() {
        assert_eq!(
            Access::check(None, MainRoute::Admin.required_role()),
            Access::RedirectToLogin
        );
        assert_eq!(
            Access::check(None, MainRoute::Products.required_role()),
            Access::Granted
        );
    }

    #[test]
    fn test_user_cannot_open_admin_route() {
        let session = Session {
            token: Some("t".to_string()),
            email: Some("user@example.com".to_string()),
            role: Some(Role::User),
        };
        assert_eq!(
            Access::check(Some(&session), MainRoute::Admin.required_role()),
            Access::Forbidden
        );
        assert_eq!(
            Access::check(Some(&session), MainRoute::Dashboard.required_role()),
            Access::Granted
        );
    }

    #[test]
    fn test_landing_routes() {
        assert_eq!(MainRoute::from_landing(Landing::AdminDashboard), MainRoute::Admin);
        assert_eq!(MainRoute::from_landing(Landing::UserDashboard), MainRoute::Dashboard);
        for landing in [Landing::AdminDashboard, Landing::UserDashboard] {
            assert_eq!(MainRoute::from_landing(landing).to_path(), landing.path());
        }
    }

    #[test]
    fn test_header_routes_per_role() {
        assert_eq!(
            MainRoute::header_routes(None),
            vec![MainRoute::Home, MainRoute::Products]
        );
        assert!(MainRoute::header_routes(Some(Role::Admin)).contains(&MainRoute::Admin));
        assert!(!MainRoute::header_routes(Some(Role::Admin)).contains(&MainRoute::Dashboard));
        assert!(MainRoute::header_routes(Some(Role::User)).contains(&MainRoute::Dashboard));
    }

    #[test]
    fn test_every_route_has_a_nav_key() {
        for route in MainRoute::iter() {
            assert!(route.nav_key().starts_with("nav."), "{route:?}");
        }
    }
}

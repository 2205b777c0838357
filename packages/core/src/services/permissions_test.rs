//! Integration Tests for the Permission Model
//!
//! Covers the pure tier checks and the store-backed require/list queries.

#[cfg(test)]
mod permissions_tests {
    use crate::models::{MenuType, Page, PageKind, Tier};
    use crate::services::{PermissionChecker, ServiceError};
    use crate::store::{ContentStore, MemoryStore};
    use std::sync::Arc;

    fn page(name: &str, viewable_by: Tier, editable_by: Tier) -> Page {
        Page::new(name, name, None, MenuType::Primary, PageKind::General)
            .with_access(viewable_by, editable_by)
    }

    async fn seeded_checker() -> (PermissionChecker, Vec<Page>) {
        let store = Arc::new(MemoryStore::new());
        let mut pages = vec![
            page("open", Tier::Public, Tier::Admin),
            page("members-only", Tier::Members, Tier::Members),
            page("admin-only", Tier::Admin, Tier::Admin),
        ];
        for (index, p) in pages.iter_mut().enumerate() {
            p.position = index as i64 + 1;
            store.insert_page(p.clone()).await.unwrap();
        }
        (PermissionChecker::new(store), pages)
    }

    #[test]
    fn view_check_is_monotonic_in_tier() {
        let tiers = [Tier::Public, Tier::Members, Tier::Admin];
        for &minimum in &tiers {
            let p = page("p", minimum, minimum);
            let mut seen_allowed = false;
            for &tier in &tiers {
                let allowed = PermissionChecker::can_view(&p, tier);
                // Once a tier may view, every higher tier may too.
                assert!(!seen_allowed || allowed);
                seen_allowed |= allowed;
            }
            // The minimum tier itself always passes.
            assert!(PermissionChecker::can_view(&p, minimum));
        }
    }

    #[test]
    fn view_and_edit_minimums_are_independent() {
        let p = page("p", Tier::Public, Tier::Admin);
        assert!(PermissionChecker::can_view(&p, Tier::Public));
        assert!(!PermissionChecker::can_edit(&p, Tier::Public));
        assert!(!PermissionChecker::can_edit(&p, Tier::Members));
        assert!(PermissionChecker::can_edit(&p, Tier::Admin));
    }

    #[tokio::test]
    async fn require_view_returns_page_or_denies() {
        let (checker, pages) = seeded_checker().await;
        let members_page = &pages[1];

        let fetched = checker
            .require_view(&members_page.id, Tier::Members)
            .await
            .unwrap();
        assert_eq!(fetched.id, members_page.id);

        let denied = checker.require_view(&members_page.id, Tier::Public).await;
        assert!(matches!(
            denied,
            Err(ServiceError::PermissionDenied { .. })
        ));
    }

    #[tokio::test]
    async fn require_edit_denies_below_minimum() {
        let (checker, pages) = seeded_checker().await;
        let open_page = &pages[0];

        // Viewable by anyone, editable only by admins.
        checker.require_view(&open_page.id, Tier::Public).await.unwrap();
        let denied = checker.require_edit(&open_page.id, Tier::Members).await;
        assert!(matches!(
            denied,
            Err(ServiceError::PermissionDenied { .. })
        ));
        checker.require_edit(&open_page.id, Tier::Admin).await.unwrap();
    }

    #[tokio::test]
    async fn require_view_reports_missing_page() {
        let (checker, _pages) = seeded_checker().await;
        let missing = checker.require_view("no-such-page", Tier::Admin).await;
        assert!(matches!(missing, Err(ServiceError::PageNotFound { .. })));
    }

    #[tokio::test]
    async fn listings_filter_by_tier() {
        let (checker, _pages) = seeded_checker().await;

        let names = |pages: Vec<Page>| -> Vec<String> {
            pages.into_iter().map(|p| p.name).collect()
        };

        assert_eq!(names(checker.list_viewable(Tier::Public).await.unwrap()), ["open"]);
        assert_eq!(
            names(checker.list_viewable(Tier::Members).await.unwrap()),
            ["open", "members-only"]
        );
        assert_eq!(
            names(checker.list_viewable(Tier::Admin).await.unwrap()),
            ["open", "members-only", "admin-only"]
        );

        assert!(checker.list_editable(Tier::Public).await.unwrap().is_empty());
        assert_eq!(
            names(checker.list_editable(Tier::Members).await.unwrap()),
            ["members-only"]
        );
    }
}

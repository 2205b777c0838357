//! Integration Tests for Tree Structure and Ordering
//!
//! Validates sibling ordering across inserts, moves, removals, and
//! re-parenting, plus the protected home page and the cascading destroy.

#[cfg(test)]
mod tree_tests {
    use crate::config::SiteConfig;
    use crate::models::{
        Component, ComponentKind, ContentItem, ContentKind, Event, MenuType, Page, PageKind,
        ScopeKey,
    };
    use crate::services::{PageService, ServiceError};
    use crate::store::{ContentStore, MemoryStore};
    use chrono::NaiveDate;
    use std::sync::Arc;

    /// Helper to create a service with a persisted home page
    async fn create_test_service() -> (PageService, Arc<MemoryStore>, Page) {
        let store = Arc::new(MemoryStore::new());
        let home = Page::new("Home", "home", None, MenuType::Primary, PageKind::General);
        let config = SiteConfig::new(home.id.clone(), "https://example.org");
        let service = PageService::new(store.clone(), config);
        let home = service.create_page(home, None).await.unwrap();
        (service, store, home)
    }

    async fn add_top_level(service: &PageService, name: &str) -> Page {
        let page = Page::new(name, name, None, MenuType::Primary, PageKind::General);
        service.create_page(page, None).await.unwrap()
    }

    async fn add_child(service: &PageService, parent: &Page, name: &str) -> Page {
        let page = Page::new(
            name,
            name,
            Some(parent.id.clone()),
            MenuType::Primary,
            PageKind::General,
        );
        service.create_page(page, None).await.unwrap()
    }

    async fn scope_positions(store: &MemoryStore, scope: &ScopeKey) -> Vec<(String, i64)> {
        store
            .pages_in_scope(scope)
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.position))
            .collect()
    }

    #[tokio::test]
    async fn create_appends_and_insert_shifts() {
        let (service, store, _home) = create_test_service().await;
        add_top_level(&service, "about").await;
        add_top_level(&service, "news").await;

        // Insert between home and about.
        let contact = Page::new("Contact", "contact", None, MenuType::Primary, PageKind::General);
        service.create_page(contact, Some(2)).await.unwrap();

        let scope = ScopeKey::TopLevel(MenuType::Primary);
        assert_eq!(
            scope_positions(&store, &scope).await,
            vec![
                ("home".to_string(), 1),
                ("contact".to_string(), 2),
                ("about".to_string(), 3),
                ("news".to_string(), 4),
            ]
        );
    }

    #[tokio::test]
    async fn menus_are_separate_sibling_scopes() {
        let (service, store, _home) = create_test_service().await;
        let legal = Page::new("Legal", "legal", None, MenuType::Secondary, PageKind::General);
        let legal = service.create_page(legal, None).await.unwrap();

        // First of its own menu, not position 2 after home.
        assert_eq!(legal.position, 1);
        let secondary = scope_positions(&store, &ScopeKey::TopLevel(MenuType::Secondary)).await;
        assert_eq!(secondary, vec![("legal".to_string(), 1)]);
    }

    #[tokio::test]
    async fn move_page_renumbers_scope_contiguously() {
        let (service, store, home) = create_test_service().await;
        let a = add_child(&service, &home, "a").await;
        add_child(&service, &home, "b").await;
        add_child(&service, &home, "c").await;

        service.move_page(&a.id, 3).await.unwrap();

        let scope = ScopeKey::Children(home.id.clone());
        assert_eq!(
            scope_positions(&store, &scope).await,
            vec![
                ("b".to_string(), 1),
                ("c".to_string(), 2),
                ("a".to_string(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn move_of_unknown_page_is_a_precondition_violation() {
        let (service, _store, _home) = create_test_service().await;
        let err = service.move_page("ghost", 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::UnpersistedItem { .. }));
    }

    #[tokio::test]
    async fn reparent_renumbers_both_scopes() {
        let (service, store, home) = create_test_service().await;
        let about = add_top_level(&service, "about").await;
        add_top_level(&service, "news").await;
        add_child(&service, &home, "team").await;

        // Move "about" under home, in front of "team".
        service
            .reparent_page(&about.id, Some(home.id.clone()), None, Some(1))
            .await
            .unwrap();

        let top = scope_positions(&store, &ScopeKey::TopLevel(MenuType::Primary)).await;
        assert_eq!(
            top,
            vec![("home".to_string(), 1), ("news".to_string(), 2)]
        );

        let children = scope_positions(&store, &ScopeKey::Children(home.id.clone())).await;
        assert_eq!(
            children,
            vec![("about".to_string(), 1), ("team".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn reparent_under_own_descendant_is_rejected() {
        let (service, _store, home) = create_test_service().await;
        let section = add_child(&service, &home, "section").await;
        let leaf = add_child(&service, &section, "leaf").await;

        let err = service
            .reparent_page(&section.id, Some(leaf.id.clone()), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::CircularReparent { .. }));
    }

    #[tokio::test]
    async fn ancestor_chain_is_nearest_first() {
        let (service, _store, home) = create_test_service().await;
        let section = add_child(&service, &home, "section").await;
        let leaf = add_child(&service, &section, "leaf").await;

        let chain = service.ancestor_chain(&leaf.id).await.unwrap();
        let names: Vec<&str> = chain.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["section", "home"]);
    }

    #[tokio::test]
    async fn destroy_home_page_fails_and_changes_nothing() {
        let (service, store, home) = create_test_service().await;
        add_child(&service, &home, "child").await;

        let err = service.destroy_page(&home.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::ProtectedPage { .. }));

        // Store untouched: home and its child both survive.
        assert!(store.page(&home.id).await.unwrap().is_some());
        assert_eq!(
            store
                .pages_in_scope(&ScopeKey::Children(home.id.clone()))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn destroy_cascades_to_descendants_and_owned_content() {
        let (service, store, _home) = create_test_service().await;
        let section = add_top_level(&service, "section").await;
        let leaf = add_child(&service, &section, "leaf").await;

        service
            .add_component(
                Component::new(&section.id, "Feed", ComponentKind::PageFeed),
                None,
            )
            .await
            .unwrap();
        store
            .insert_event(Event::all_day(
                &leaf.id,
                "Fair",
                NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
                None,
            ))
            .await
            .unwrap();
        store
            .insert_item(ContentItem::new(
                &leaf.id,
                ContentKind::Article,
                "Article",
                "Body",
            ))
            .await
            .unwrap();

        service.destroy_page(&section.id).await.unwrap();

        assert!(store.page(&section.id).await.unwrap().is_none());
        assert!(store.page(&leaf.id).await.unwrap().is_none());
        assert!(store
            .components_for_page(&section.id)
            .await
            .unwrap()
            .is_empty());
        assert!(store.events_for_page(&leaf.id).await.unwrap().is_empty());
        assert!(store.items_for_page(&leaf.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn destroy_renumbers_surviving_peers() {
        let (service, store, _home) = create_test_service().await;
        let about = add_top_level(&service, "about").await;
        add_top_level(&service, "news").await;

        service.destroy_page(&about.id).await.unwrap();

        let top = scope_positions(&store, &ScopeKey::TopLevel(MenuType::Primary)).await;
        assert_eq!(
            top,
            vec![("home".to_string(), 1), ("news".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn component_ordering_lives_in_its_own_scope() {
        let (service, _store, home) = create_test_service().await;
        let first = service
            .add_component(Component::new(&home.id, "One", ComponentKind::Text), None)
            .await
            .unwrap();
        let second = service
            .add_component(Component::new(&home.id, "Two", ComponentKind::Text), None)
            .await
            .unwrap();
        assert_eq!((first.position, second.position), (1, 2));

        service.move_component(&second.id, 1).await.unwrap();
        let components = service.components_of(&home.id).await.unwrap();
        let titles: Vec<&str> = components.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "One"]);
    }

    #[tokio::test]
    async fn items_number_densely_within_their_kind_scope() {
        let (service, store, home) = create_test_service().await;

        for title in ["first", "second", "third"] {
            service
                .add_item(
                    ContentItem::new(&home.id, ContentKind::Article, title, "body"),
                    None,
                )
                .await
                .unwrap();
        }
        service
            .add_item(
                ContentItem::new(&home.id, ContentKind::Article, "between", "body"),
                Some(2),
            )
            .await
            .unwrap();

        // A post on the same page numbers in its own scope.
        let post = service
            .add_item(
                ContentItem::new(&home.id, ContentKind::Post, "a post", "body"),
                None,
            )
            .await
            .unwrap();
        assert_eq!(post.position, 1);

        let articles = store
            .items_in_scope(&home.id, ContentKind::Article)
            .await
            .unwrap();
        let listed: Vec<(String, i64)> = articles
            .iter()
            .map(|i| (i.title.clone(), i.position))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("first".to_string(), 1),
                ("between".to_string(), 2),
                ("second".to_string(), 3),
                ("third".to_string(), 4),
            ]
        );
    }

    #[tokio::test]
    async fn rejected_insert_leaves_sibling_positions_untouched() {
        let (service, store, _home) = create_test_service().await;
        let about = add_top_level(&service, "about").await;

        // Duplicate id: the store refuses the insert.
        let mut dup = Page::new("Dup", "dup", None, MenuType::Primary, PageKind::General);
        dup.id = about.id.clone();
        let err = service.create_page(dup, Some(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));

        let top = scope_positions(&store, &ScopeKey::TopLevel(MenuType::Primary)).await;
        assert_eq!(
            top,
            vec![("home".to_string(), 1), ("about".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn requires_sidebar_for_children_parents_or_components() {
        let (service, _store, home) = create_test_service().await;
        let about = add_top_level(&service, "about").await;
        assert!(!service.requires_sidebar(&about.id).await.unwrap());

        let child = add_child(&service, &home, "child").await;
        assert!(service.requires_sidebar(&home.id).await.unwrap());
        assert!(service.requires_sidebar(&child.id).await.unwrap());

        service
            .add_component(Component::new(&about.id, "Text", ComponentKind::Text), None)
            .await
            .unwrap();
        assert!(service.requires_sidebar(&about.id).await.unwrap());
    }

    #[tokio::test]
    async fn create_rejects_missing_parent_and_blank_title() {
        let (service, _store, _home) = create_test_service().await;

        let orphan = Page::new(
            "Orphan",
            "orphan",
            Some("missing".to_string()),
            MenuType::Primary,
            PageKind::General,
        );
        assert!(matches!(
            service.create_page(orphan, None).await.unwrap_err(),
            ServiceError::PageNotFound { .. }
        ));

        let blank = Page::new("", "blank", None, MenuType::Primary, PageKind::General);
        assert!(matches!(
            service.create_page(blank, None).await.unwrap_err(),
            ServiceError::ValidationFailed(_)
        ));
    }
}

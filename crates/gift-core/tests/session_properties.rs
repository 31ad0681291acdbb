use std::collections::{BTreeSet, HashSet};

use gift_core::{
    generate_gifts, query, reduce, Action, CatalogQuery, CoreError, Notice, Session,
};
use gift_domain::{Category, Gift, GiftId, Page, SortOrder};

fn register_and_login(session: &mut Session, username: &str, password: &str) {
    reduce(
        session,
        Action::Register {
            username: username.into(),
            password: password.into(),
            display_name: username.to_uppercase(),
        },
    )
    .expect("register");
    reduce(
        session,
        Action::Login {
            username: username.into(),
            password: password.into(),
        },
    )
    .expect("login");
}

#[test]
fn generated_catalog_has_unique_ids_and_linear_prices() {
    let gifts = generate_gifts();
    let ids: HashSet<u32> = gifts.iter().map(|gift| gift.id.0).collect();

    assert_eq!(gifts.len(), 30);
    assert_eq!(ids, (1..=30).collect::<HashSet<u32>>());
    assert!(gifts.iter().all(|gift| gift.price == 500 + 50 * gift.id.0));
    assert_eq!(generate_gifts(), gifts);
}

#[test]
fn price_filter_holds_for_every_threshold() {
    let gifts = generate_gifts();
    for threshold in (0..=2100).step_by(50) {
        let listed = query(&gifts, &CatalogQuery::new(threshold));
        assert!(listed.iter().all(|gift| gift.price <= threshold));
        let expected = gifts.iter().filter(|gift| gift.price <= threshold).count();
        assert_eq!(listed.len(), expected);
    }
}

#[test]
fn sorting_keeps_catalog_order_for_equal_keys() {
    let catalog = vec![
        Gift::new(GiftId(1), "Lamp", 900, Category::HomeDecor, "first"),
        Gift::new(GiftId(2), "Atlas", 700, Category::Books, "second"),
        Gift::new(GiftId(3), "Lamp", 700, Category::HomeDecor, "third"),
        Gift::new(GiftId(4), "Kite", 900, Category::Toys, "fourth"),
        Gift::new(GiftId(5), "Scarf", 700, Category::Fashion, "fifth"),
    ];
    let ids = |sort_by: SortOrder| -> Vec<u32> {
        query(&catalog, &CatalogQuery::new(1000).sorted_by(sort_by))
            .iter()
            .map(|gift| gift.id.0)
            .collect()
    };

    assert_eq!(ids(SortOrder::Name), vec![2, 4, 1, 3, 5]);
    assert_eq!(ids(SortOrder::PriceAsc), vec![2, 3, 5, 1, 4]);
    assert_eq!(ids(SortOrder::PriceDesc), vec![1, 4, 2, 3, 5]);
}

#[test]
fn removing_twice_matches_removing_once() {
    let mut session = Session::new();
    register_and_login(&mut session, "carol", "pw");
    for id in [7, 8, 7, 9] {
        reduce(&mut session, Action::AddToCart(GiftId(id))).unwrap();
    }

    reduce(&mut session, Action::RemoveFromCart(GiftId(7))).unwrap();
    let once = session.cart.clone();
    let notice = reduce(&mut session, Action::RemoveFromCart(GiftId(7))).unwrap();

    assert_eq!(session.cart, once);
    assert!(session.cart.iter().all(|gift| gift.id != GiftId(7)));
    assert_eq!(
        notice,
        Notice::RemovedFromCart {
            id: GiftId(7),
            removed: 0
        }
    );
}

#[test]
fn register_then_login_round_trip() {
    let mut session = Session::new();
    reduce(
        &mut session,
        Action::Register {
            username: "bob".into(),
            password: "pw".into(),
            display_name: "Bob".into(),
        },
    )
    .unwrap();
    assert!(session.logged_in_user.is_none());

    let wrong = reduce(
        &mut session,
        Action::Login {
            username: "bob".into(),
            password: "wrong".into(),
        },
    );
    assert_eq!(wrong, Err(CoreError::InvalidCredentials));

    reduce(
        &mut session,
        Action::Login {
            username: "bob".into(),
            password: "pw".into(),
        },
    )
    .unwrap();
    assert_eq!(session.logged_in_user.as_deref(), Some("bob"));
    assert_eq!(session.page, Page::Home);
}

#[test]
fn duplicate_cart_entries_are_removed_together() {
    let mut session = Session::new();
    register_and_login(&mut session, "dave", "pw");

    reduce(&mut session, Action::AddToCart(GiftId(3))).unwrap();
    reduce(&mut session, Action::AddToCart(GiftId(3))).unwrap();
    assert_eq!(session.cart.len(), 2);

    reduce(&mut session, Action::RemoveFromCart(GiftId(3))).unwrap();
    assert!(session.cart.is_empty());
}

#[test]
fn wishlist_is_independent_of_cart() {
    let mut session = Session::new();
    register_and_login(&mut session, "erin", "pw");

    reduce(&mut session, Action::AddToWishlist(GiftId(11))).unwrap();
    reduce(&mut session, Action::AddToCart(GiftId(11))).unwrap();
    reduce(&mut session, Action::RemoveFromWishlist(GiftId(11))).unwrap();

    assert!(session.wishlist.is_empty());
    assert_eq!(session.cart.len(), 1);
}

#[test]
fn search_for_gift_twelve_is_case_insensitive() {
    let mut session = Session::new();
    reduce(&mut session, Action::UpdateSearch("gIFT 12".into())).unwrap();

    let listed = session.visible_gifts();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, GiftId(12));
}

#[test]
fn category_filter_keeps_only_selected_category() {
    let mut session = Session::new();
    reduce(
        &mut session,
        Action::UpdateCategories(BTreeSet::from([Category::Books])),
    )
    .unwrap();

    let listed = session.visible_gifts();

    assert_eq!(listed.len(), 5);
    assert!(listed.iter().all(|gift| gift.category == Category::Books));
}

#[test]
fn navigation_switches_pages_and_logout_returns_to_login() {
    let mut session = Session::new();
    reduce(&mut session, Action::Navigate(Page::Register)).unwrap();
    assert_eq!(session.page, Page::Register);
    reduce(&mut session, Action::Navigate(Page::Login)).unwrap();

    register_and_login(&mut session, "fay", "pw");
    for page in [Page::Cart, Page::Wishlist, Page::Profile, Page::Home] {
        let notice = reduce(&mut session, Action::Navigate(page)).unwrap();
        assert!(matches!(notice, Notice::Navigated { to, .. } if to == page));
        assert_eq!(session.page, page);
    }

    reduce(&mut session, Action::Logout).unwrap();
    assert_eq!(session.page, Page::Login);
    assert!(session.logged_in_user.is_none());
}

#[test]
fn sessions_do_not_share_state() {
    let mut first = Session::new();
    let second = Session::new();
    register_and_login(&mut first, "gus", "pw");
    reduce(&mut first, Action::AddToCart(GiftId(1))).unwrap();

    assert!(second.users.is_empty());
    assert!(second.cart.is_empty());
    assert_ne!(first.id, second.id);
}

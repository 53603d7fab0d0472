use std::sync::Arc;

use storefront_app::input::{Input, parse_input};
use storefront_app::session::CartEnvelope;
use storefront_app::{Session, render};
use storefront_cart::{CartCommand, CartEvent, CartVisibility, Storefront};
use storefront_catalog::Catalog;
use storefront_core::{AggregateRoot, ProductId, SessionId};
use storefront_events::{Event, InMemoryEventBus};

type TestSession = Session<Arc<InMemoryEventBus<CartEnvelope>>>;

fn new_session() -> TestSession {
    Session::new(
        Storefront::new(SessionId::new(), Catalog::seed()),
        Arc::new(InMemoryEventBus::new()),
    )
}

/// Feed typed lines through the parser into the session, like the binary does.
fn type_lines(session: &mut TestSession, lines: &[&str]) {
    for line in lines {
        match parse_input(line).expect("test input is well-formed") {
            Some(Input::Command(command)) => {
                session.dispatch(command).expect("in-memory bus never fails");
            }
            Some(_) | None => {}
        }
    }
}

fn in_cart(session: &TestSession, raw: u32) -> bool {
    session
        .state()
        .catalog()
        .find(ProductId::new(raw))
        .expect("seed product")
        .in_cart()
}

#[test]
fn add_add_remove_walkthrough() {
    let mut session = new_session();

    type_lines(&mut session, &["add 1", "add 2", "remove 1"]);

    let ids: Vec<u32> = session
        .state()
        .cart()
        .iter()
        .map(|e| e.product_id().get())
        .collect();
    assert_eq!(ids, vec![2]);
    assert!(!in_cart(&session, 1));
    assert!(in_cart(&session, 2));
    assert!(!in_cart(&session, 3));
    assert!(session.state().is_consistent());
    assert_eq!(session.state().version(), 3);
}

#[test]
fn badge_count_tracks_cart_length() {
    let mut session = new_session();

    for (line, expected) in [("add 3", 1), ("add 1", 2), ("remove 3", 1), ("remove 3", 1)] {
        type_lines(&mut session, &[line]);
        let page = render(session.state());
        assert_eq!(session.state().cart_count(), expected);
        assert!(
            page.starts_with(&format!("Online Store | Cart 🛒 {expected}\n")),
            "after `{line}` page was:\n{page}"
        );
    }
}

#[test]
fn cart_icon_toggles_panel() {
    let mut session = new_session();
    assert_eq!(session.state().visibility(), CartVisibility::Hidden);

    type_lines(&mut session, &["cart"]);
    assert_eq!(session.state().visibility(), CartVisibility::Shown);
    assert!(render(session.state()).contains("Shopping Cart"));

    type_lines(&mut session, &["cart"]);
    assert_eq!(session.state().visibility(), CartVisibility::Hidden);
    assert!(!render(session.state()).contains("Shopping Cart"));
}

#[test]
fn subscriber_sees_one_event_per_effective_click() {
    let mut session = new_session();
    let sub = session.subscribe();

    type_lines(&mut session, &["add 2", "add 9", "cart", "remove 2", "remove 9"]);

    let types: Vec<&str> = sub
        .drain()
        .iter()
        .map(|env| env.payload().event_type())
        .collect();
    // `add 9` targets no product and emits nothing; `remove 9` still emits.
    assert_eq!(
        types,
        vec![
            "cart.product.added",
            "cart.visibility.toggled",
            "cart.product.removed",
            "cart.product.removed",
        ]
    );
}

#[test]
fn removing_absent_entry_reports_no_removal_but_clears_flag() {
    let flagged = Catalog::seed().set_in_cart(ProductId::new(1), true);
    let mut session = Session::new(
        Storefront::new(SessionId::new(), flagged),
        Arc::new(InMemoryEventBus::new()),
    );

    let envelopes = session
        .dispatch(CartCommand::RemoveFromCart(ProductId::new(1)))
        .unwrap();

    match envelopes[0].payload() {
        CartEvent::ProductRemoved(e) => assert_eq!(e.entries_removed, 0),
        other => panic!("Expected ProductRemoved, got {other:?}"),
    }
    assert!(session.state().cart().is_empty());
    assert!(!in_cart(&session, 1));
}

#[test]
fn double_add_quirk_is_preserved() {
    let mut session = new_session();

    type_lines(&mut session, &["add 1", "add 1"]);

    assert_eq!(session.state().cart().count_of(ProductId::new(1)), 2);
    assert!(in_cart(&session, 1));
    assert_eq!(render(session.state()).matches("[Remove from Cart]").count(), 1);

    type_lines(&mut session, &["remove 1"]);

    assert_eq!(session.state().cart().count_of(ProductId::new(1)), 0);
    assert!(!in_cart(&session, 1));
    assert!(render(session.state()).starts_with("Online Store | Cart 🛒 0\n"));
}

use gif_portal_client::{
    mock_helpers::{
        MockRuntime,
        MockWallet,
        RuntimeCall,
    },
    portal::{
        Portal,
        Screen,
    },
    render::{
        render,
        INITIALIZE_AFFORDANCE,
    },
    views::{
        grid_cells,
        ViewState,
    },
    wallet::ConnectOptions,
};

fn links(view: &ViewState) -> Vec<String> {
    view.entries()
        .expect("Should be loaded")
        .iter()
        .map(|entry| entry.link.clone())
        .collect()
}

#[tokio::test]
async fn startup_without_trusted_wallet_stays_disconnected() {
    let mut portal = Portal::new(Some(MockWallet::untrusted()), MockRuntime::default());
    portal.probe_existing_connection().await;

    assert_eq!(portal.screen(), Screen::Disconnected);
    assert!(portal.runtime().calls().is_empty());
    assert_eq!(
        *portal.wallet().unwrap().connect_calls.borrow(),
        [ConnectOptions::only_if_trusted()]
    );
}

#[tokio::test]
async fn startup_without_provider_stays_disconnected() {
    let mut portal: Portal<MockWallet, _> = Portal::new(None, MockRuntime::default());
    portal.probe_existing_connection().await;

    assert_eq!(portal.screen(), Screen::Disconnected);
    assert!(portal.runtime().calls().is_empty());
}

#[tokio::test]
async fn startup_with_trusted_wallet_fetches() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let runtime = MockRuntime::with_links(user, &["a.gif"]);
    let mut portal = Portal::new(Some(wallet), runtime);
    portal.probe_existing_connection().await;

    assert_eq!(portal.session().identifier(), Some(user));
    assert_eq!(portal.runtime().calls(), [RuntimeCall::Fetch]);
    assert_eq!(links(portal.view()), ["a.gif"]);
}

#[tokio::test]
async fn connect_renders_fetched_entries_in_order() {
    let wallet = MockWallet::untrusted();
    let user = wallet.address;
    let runtime = MockRuntime::with_links(user, &["a.gif", "b.gif"]);
    let mut portal = Portal::new(Some(wallet), runtime);

    portal.connect().await.unwrap();

    let Screen::Loaded { entries, .. } = portal.screen() else {
        panic!("Expected the loaded screen");
    };
    let cells: Vec<_> = grid_cells(entries).map(|cell| (cell.key, cell.src)).collect();
    assert_eq!(cells, [(0, "a.gif"), (1, "b.gif")]);
}

#[tokio::test]
async fn fetch_mirrors_remote_exactly() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let runtime = MockRuntime::with_links(user, &["b.gif", "a.gif", "b.gif"]);
    let mut portal = Portal::new(Some(wallet), runtime);
    portal.probe_existing_connection().await;

    assert_eq!(links(portal.view()), ["b.gif", "a.gif", "b.gif"]);
}

#[tokio::test]
async fn failed_fetch_never_keeps_stale_entries() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let runtime = MockRuntime::with_links(user, &["a.gif"]);
    let mut portal = Portal::new(Some(wallet), runtime);
    portal.probe_existing_connection().await;
    assert_eq!(links(portal.view()), ["a.gif"]);

    portal.runtime().fail_fetch.set(true);
    portal.refresh().await;
    assert_eq!(portal.view(), &ViewState::Uninitialized);
    assert_eq!(portal.screen(), Screen::Uninitialized { user });
}

#[tokio::test]
async fn blank_input_issues_no_remote_calls() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let mut portal = Portal::new(Some(wallet), MockRuntime::with_links(user, &[]));
    portal.probe_existing_connection().await;
    portal.runtime().clear_calls();

    for input in ["", " ", "\t", "  \n "] {
        portal.set_input(input);
        portal.submit().await;
        portal.append_entry(input).await;
    }

    assert!(portal.runtime().calls().is_empty());
}

#[tokio::test]
async fn submit_appends_literal_then_fetches() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let mut portal = Portal::new(Some(wallet), MockRuntime::with_links(user, &["a.gif"]));
    portal.probe_existing_connection().await;
    portal.runtime().clear_calls();

    portal.set_input("c.gif");
    portal.submit().await;

    assert_eq!(
        portal.runtime().calls(),
        [
            RuntimeCall::Append {
                user,
                link: "c.gif".into()
            },
            RuntimeCall::Fetch,
        ]
    );
    assert_eq!(links(portal.view()), ["a.gif", "c.gif"]);
    // The input is left as typed.
    assert_eq!(portal.input(), "c.gif");
}

#[tokio::test]
async fn failed_append_keeps_view_and_input() {
    let wallet = MockWallet::trusted();
    let user = wallet.address;
    let mut portal = Portal::new(Some(wallet), MockRuntime::with_links(user, &["a.gif"]));
    portal.probe_existing_connection().await;
    portal.runtime().clear_calls();
    portal.runtime().fail_append.set(true);

    portal.set_input("c.gif");
    portal.submit().await;

    assert_eq!(portal.runtime().num_mutating_calls(), 1);
    assert!(!portal.runtime().calls().contains(&RuntimeCall::Fetch));
    assert_eq!(links(portal.view()), ["a.gif"]);
    assert_eq!(portal.input(), "c.gif");
}

#[tokio::test]
async fn initialize_then_submit() {
    let wallet = MockWallet::untrusted();
    let user = wallet.address;
    let mut portal = Portal::new(Some(wallet), MockRuntime::default());

    portal.connect().await.unwrap();
    assert!(portal.view().is_uninitialized());

    portal.initialize_account().await;
    assert_eq!(portal.view(), &ViewState::Loaded(vec![]));

    portal.append_entry("c.gif").await;
    assert_eq!(links(portal.view()), ["c.gif"]);
    assert_eq!(portal.view().entries().unwrap()[0].submitter, user);

    // A second initialization fails remotely and changes nothing.
    portal.initialize_account().await;
    assert_eq!(links(portal.view()), ["c.gif"]);
}

#[tokio::test]
async fn failed_initialize_keeps_initialize_affordance() {
    colored::control::set_override(false);
    let wallet = MockWallet::untrusted();
    let user = wallet.address;
    let runtime = MockRuntime::default();
    runtime.fail_initialize.set(true);
    let mut portal = Portal::new(Some(wallet), runtime);

    portal.connect().await.unwrap();
    portal.initialize_account().await;

    assert_eq!(portal.view(), &ViewState::Uninitialized);
    assert_eq!(portal.screen(), Screen::Uninitialized { user });
    assert!(render(&portal.screen(), 3).contains(INITIALIZE_AFFORDANCE));
    // No re-fetch after a failed initialization.
    assert_eq!(
        portal.runtime().calls(),
        [RuntimeCall::Fetch, RuntimeCall::Initialize { user }]
    );
}

#[tokio::test]
async fn initialize_affordance_iff_null_with_session() {
    colored::control::set_override(false);
    let wallet = MockWallet::untrusted();
    let user = wallet.address;
    let mut portal = Portal::new(Some(wallet), MockRuntime::default());

    // No session: never shown.
    assert!(!render(&portal.screen(), 3).contains(INITIALIZE_AFFORDANCE));

    // Session and null view: shown.
    portal.connect().await.unwrap();
    assert!(render(&portal.screen(), 3).contains(INITIALIZE_AFFORDANCE));

    // Session and a loaded view: hidden.
    portal.initialize_account().await;
    assert!(!render(&portal.screen(), 3).contains(INITIALIZE_AFFORDANCE));
    assert_eq!(portal.session().identifier(), Some(user));
}

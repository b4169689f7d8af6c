//! Listing controller tests
//!
//! Fetch lifecycle (IDLE -> LOADING -> READY/ERROR), access guards,
//! cancellation and timeouts, and criteria/page bookkeeping.

mod utils;

use adota_lib::modules::animal::{
    adoption_listing, my_animals_listing, Animal, AnimalCriteria, AnimalListing,
};
use adota_lib::modules::listing::{ListingController, ListingProfile, ListingState, RecordSource};
use adota_lib::modules::ong::ongs_listing;
use adota_lib::shared::domain::value_objects::{Session, UserRole};
use adota_lib::shared::errors::{AppError, AppResult, ErrorKind};
use adota_lib::shared::infrastructure::{SessionProvider, SessionStore};
use adota_lib::shared::ClientConfig;
use async_trait::async_trait;
use mockall::{mock, Sequence};
use std::sync::Arc;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use utils::factories::{AnimalFactory, OngFactory};
use utils::fakes::{clock_at, utc_config, FakeBackend};

mock! {
    pub Source {}

    #[async_trait]
    impl RecordSource<Animal> for Source {
        fn describe(&self) -> String;
        async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Animal>>;
    }
}

/// Source that answers after `delay`
struct SlowSource {
    delay: Duration,
    animals: Vec<Animal>,
}

#[async_trait]
impl RecordSource<Animal> for SlowSource {
    fn describe(&self) -> String {
        "slow".to_string()
    }

    async fn fetch(&self, _session: Option<Session>) -> AppResult<Vec<Animal>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.animals.clone())
    }
}

fn public_listing(source: impl RecordSource<Animal> + 'static, config: &ClientConfig) -> AnimalListing {
    ListingController::new(
        ListingProfile::ADOPTION,
        Arc::new(source),
        Arc::new(SessionStore::new()),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        config,
    )
}

fn mock_returning(animals: Vec<Animal>) -> MockSource {
    let mut source = MockSource::new();
    source.expect_describe().return_const("GET /animais".to_string());
    source
        .expect_fetch()
        .times(1)
        .returning(move |_| Ok(animals.clone()));
    source
}

fn ong_session(user_id: i64) -> Session {
    Session::new("ong-token", UserRole::Ong, user_id)
}

// ================================================================================================
// FETCH LIFECYCLE
// ================================================================================================

#[tokio::test]
async fn test_load_moves_from_idle_to_ready() {
    let mut listing = public_listing(mock_returning(AnimalFactory::numbered(13)), &utc_config());
    assert_eq!(listing.state(), &ListingState::Idle);
    assert!(listing.view().page.items.is_empty());

    assert_eq!(listing.load().await, &ListingState::Ready);

    let view = listing.view();
    assert_eq!(view.page.items.len(), 6);
    assert_eq!(view.page.total_count, 13);
    assert_eq!(view.page.total_pages, 3);
    assert_eq!(view.page_size_options, &[6, 12, 24]);
}

#[tokio::test]
async fn test_scenario_thirteen_animals_with_page_size_twelve() {
    let mut listing = public_listing(mock_returning(AnimalFactory::numbered(13)), &utc_config());
    listing.load().await;

    assert_ok!(listing.set_page_size(12));
    assert_eq!(listing.page().items.len(), 12);
    assert_eq!(listing.page().total_pages, 2);

    assert!(listing.next_page());
    assert_eq!(listing.page().items.len(), 1);
    assert!(!listing.next_page());

    // changing the page size goes back to page 1
    assert_ok!(listing.set_page_size(24));
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.page().items.len(), 13);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let mut listing = public_listing(mock_returning(Vec::new()), &utc_config());
    listing.load().await;
    let error = assert_err!(listing.set_page_size(0));
    assert!(matches!(error, AppError::InvalidInput(_)));
    assert_eq!(listing.pagination().page_size(), 6);
}

#[tokio::test]
async fn test_error_keeps_previous_records() {
    let mut seq = Sequence::new();
    let mut source = MockSource::new();
    source.expect_describe().return_const("GET /animais".to_string());
    source
        .expect_fetch()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(AnimalFactory::numbered(3)));
    source
        .expect_fetch()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::Connectivity("connection refused".to_string())));

    let mut listing = public_listing(source, &utc_config());
    listing.load().await;
    assert_eq!(listing.records().len(), 3);

    listing.load().await;
    let error = listing.state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Connectivity);
    assert!(error.retryable);
    assert!(!error.redirect_to_login);
    assert_eq!(listing.records().len(), 3);
    assert!(listing.view().page.items.is_empty());
}

#[tokio::test]
async fn test_retry_after_error_recovers() {
    let mut seq = Sequence::new();
    let mut source = MockSource::new();
    source.expect_describe().return_const("GET /animais".to_string());
    source
        .expect_fetch()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Err(AppError::ServerError {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
    source
        .expect_fetch()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(AnimalFactory::numbered(2)));

    let mut listing = public_listing(source, &utc_config());
    listing.load().await;
    assert_eq!(listing.state().error().map(|e| e.kind), Some(ErrorKind::Server));

    assert_eq!(listing.retry().await, &ListingState::Ready);
    assert_eq!(listing.page().total_count, 2);
}

#[tokio::test]
async fn test_unclassified_status_shows_code_and_message() {
    let mut source = MockSource::new();
    source.expect_describe().return_const("GET /animais".to_string());
    source.expect_fetch().returning(|_| {
        Err(AppError::Unclassified {
            status: Some(418),
            message: "teapot".to_string(),
        })
    });

    let mut listing = public_listing(source, &utc_config());
    listing.load().await;
    let error = listing.state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Unclassified);
    assert_eq!(error.message, "Erro 418: teapot");
}

#[tokio::test]
async fn test_trigger_while_loading_is_ignored() {
    let mut listing = public_listing(mock_returning(AnimalFactory::numbered(4)), &utc_config());

    let request = listing.begin_fetch().unwrap();
    assert!(listing.state().is_loading());
    assert!(listing.begin_fetch().is_none());

    let outcome = request.run().await;
    listing.complete_fetch(outcome);
    assert_eq!(listing.state(), &ListingState::Ready);
    assert_eq!(listing.records().len(), 4);
}

// ================================================================================================
// CANCELLATION AND TIMEOUT
// ================================================================================================

#[tokio::test]
async fn test_cancelled_fetch_returns_to_idle() {
    let source = SlowSource {
        delay: Duration::from_secs(5),
        animals: AnimalFactory::numbered(1),
    };
    let mut listing = public_listing(source, &utc_config());

    let request = listing.begin_fetch().unwrap();
    let token = listing.cancellation_token();
    let (outcome, _) = tokio::join!(request.run(), async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });

    assert!(matches!(outcome.result, Err(AppError::Cancelled)));
    listing.complete_fetch(outcome);
    assert_eq!(listing.state(), &ListingState::Idle);
    assert!(listing.records().is_empty());

    // a later trigger gets a fresh token
    let request = listing.begin_fetch().unwrap();
    assert!(!listing.cancellation_token().is_cancelled());
    drop(request);
}

#[tokio::test]
async fn test_result_after_dispose_is_discarded() {
    let mut source = MockSource::new();
    source.expect_describe().return_const("GET /animais".to_string());
    source
        .expect_fetch()
        .returning(|_| Ok(AnimalFactory::numbered(3)));
    let mut listing = public_listing(source, &utc_config());

    let request = listing.begin_fetch().unwrap();
    listing.dispose();
    assert_eq!(listing.state(), &ListingState::Idle);

    let outcome = request.run().await;
    listing.complete_fetch(outcome);
    assert_eq!(listing.state(), &ListingState::Idle);
    assert!(listing.records().is_empty());
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let config = ClientConfig {
        request_timeout: Duration::from_millis(50),
        ..utc_config()
    };
    let source = SlowSource {
        delay: Duration::from_secs(5),
        animals: Vec::new(),
    };
    let mut listing = public_listing(source, &config);

    listing.load().await;
    let error = listing.state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Connectivity);
    assert!(error.retryable);
}

#[tokio::test]
async fn test_sub_second_timeout_reports_milliseconds() {
    let config = ClientConfig {
        request_timeout: Duration::from_millis(50),
        ..utc_config()
    };
    let source = SlowSource {
        delay: Duration::from_secs(5),
        animals: Vec::new(),
    };
    let mut listing = public_listing(source, &config);

    let outcome = listing.begin_fetch().unwrap().run().await;
    match &outcome.result {
        Err(error @ AppError::Timeout(50)) => {
            assert_eq!(error.to_string(), "Request timed out after 50ms")
        }
        other => panic!("expected a 50ms timeout, got {:?}", other.as_ref().map(Vec::len)),
    }

    listing.complete_fetch(outcome);
    assert_eq!(listing.state().error().unwrap().kind, ErrorKind::Connectivity);
}

// ================================================================================================
// ACCESS GUARDS
// ================================================================================================

#[tokio::test]
async fn test_my_animals_blocked_without_session() {
    let backend = Arc::new(FakeBackend::new().with_animals(AnimalFactory::numbered(3)));
    let mut listing = my_animals_listing(
        backend.clone(),
        Arc::new(SessionStore::new()),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    listing.load().await;
    let error = listing.state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Blocked);
    assert!(error.redirect_to_login);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_my_animals_blocked_for_person_role() {
    let backend = Arc::new(FakeBackend::new());
    let sessions = Arc::new(SessionStore::with_session(Session::new(
        "person-token",
        UserRole::Person,
        3,
    )));
    let mut listing = my_animals_listing(
        backend.clone(),
        sessions,
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    listing.load().await;
    assert_eq!(listing.state().error().map(|e| e.kind), Some(ErrorKind::Blocked));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_my_animals_fetches_with_ong_session() {
    let animals = vec![
        AnimalFactory::new().with_id(1).owned_by(42).build(),
        AnimalFactory::new().with_id(2).owned_by(42).adopted().build(),
        AnimalFactory::new().with_id(3).owned_by(8).build(),
    ];
    let backend = Arc::new(FakeBackend::new().with_animals(animals));
    let sessions = Arc::new(SessionStore::new());
    let mut listing = my_animals_listing(
        backend.clone(),
        sessions.clone(),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    sessions.sign_in(ong_session(42));
    assert_eq!(listing.load().await, &ListingState::Ready);

    // adopted animals stay visible in the organization's own listing
    assert_eq!(listing.page().total_count, 2);
    let calls = backend.calls();
    assert_eq!(calls[0].endpoint, "/animais/ong/42");
    assert_eq!(calls[0].token.as_deref(), Some("ong-token"));
    assert_eq!(sessions.current().map(|s| s.user_id), Some(42));
}

#[tokio::test]
async fn test_expired_token_redirects_to_login() {
    let backend = Arc::new(
        FakeBackend::new().failing(AppError::Unauthorized("token expired".to_string())),
    );
    let mut listing = my_animals_listing(
        backend,
        Arc::new(SessionStore::with_session(ong_session(42))),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    listing.load().await;
    let error = listing.state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Unauthorized);
    assert!(error.redirect_to_login);
}

#[tokio::test]
async fn test_ongs_listing_accepts_any_signed_in_user() {
    let backend = Arc::new(FakeBackend::new().with_ongs(vec![
        OngFactory::new().with_id(1).with_name("Patinhas").located_in("Recife", "PE").build(),
        OngFactory::new().with_id(2).with_name("Focinhos").located_in("Olinda", "PE").build(),
        OngFactory::new().with_id(3).with_name("Amigo Fiel").located_in("Natal", "RN").build(),
    ]));
    let sessions = Arc::new(SessionStore::new());
    let mut listing = ongs_listing(
        backend,
        sessions.clone(),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    listing.load().await;
    assert_eq!(listing.state().error().map(|e| e.kind), Some(ErrorKind::Blocked));

    sessions.sign_in(Session::new("person-token", UserRole::Person, 5));
    assert_eq!(listing.retry().await, &ListingState::Ready);

    listing.update_criteria(|c| c.state = Some("pe".to_string()));
    assert_eq!(listing.page().total_count, 2);
}

// ================================================================================================
// CRITERIA
// ================================================================================================

#[tokio::test]
async fn test_adoption_catalogue_hides_adopted_until_cleared_gate() {
    let animals = vec![
        AnimalFactory::new().with_id(1).with_name("Rex").build(),
        AnimalFactory::new().with_id(2).with_name("Mel").adopted().build(),
    ];
    let backend = Arc::new(FakeBackend::new().with_animals(animals));
    let mut listing = adoption_listing(
        backend,
        Arc::new(SessionStore::new()),
        Arc::new(clock_at(2030, 1, 1, 12, 0)),
        &utc_config(),
    );

    listing.load().await;
    assert_eq!(listing.page().total_count, 1);

    listing.update_criteria(|c| c.available_only = false);
    assert_eq!(listing.page().total_count, 2);

    // clearing returns to the catalogue's starting filters
    listing.clear_criteria();
    assert_eq!(listing.criteria(), &AnimalCriteria::for_adoption());
    assert_eq!(listing.page().total_count, 1);
}

#[tokio::test]
async fn test_narrowing_filter_resets_to_first_page() {
    let mut listing = public_listing(mock_returning(AnimalFactory::numbered(30)), &utc_config());
    listing.load().await;
    assert!(listing.go_to_page(5));

    listing.update_criteria(|c| c.search_name = Some("Animal 1".to_string()));
    assert_eq!(listing.page().total_count, 11);
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.page().page, 1);
}

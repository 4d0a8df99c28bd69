//! End-to-end tests for the full search stack.
//!
//! Wires the real service, repository, gateway, and executor over
//! scripted in-memory transports and walks the externally observable
//! scenarios: success, hang-until-timeout, validation fast-fail,
//! malformed payload, mid-flight cancellation, and the legitimate
//! empty result.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use etour_core::{SearchConfig, SiteRepository, SiteSearchService, SiteSearchServiceTrait};
use etour_remote::{
    GatewayConfig, RetryPolicy, SearchErrorKind, SearchTransport, SiteGateway, SiteQuery,
};

const TWO_SITES: &str = r#"{
    "sites": [
        {"id": 1, "name": "Museo Archeologico", "description": "National museum", "category": "museum", "latitude": 40.85, "longitude": 14.25},
        {"id": 2, "name": "Duomo di Salerno", "description": "Cathedral", "category": "church"}
    ]
}"#;

/// Transport double: counts sends and delegates to a closure.
struct CountingTransport<F> {
    send_count: AtomicU32,
    respond: F,
}

impl<F> CountingTransport<F>
where
    F: Fn(u32) -> io::Result<String> + Send + Sync,
{
    fn new(respond: F) -> Self {
        Self {
            send_count: AtomicU32::new(0),
            respond,
        }
    }

    fn sends(&self) -> u32 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl<F> SearchTransport for CountingTransport<F>
where
    F: Fn(u32) -> io::Result<String> + Send + Sync,
{
    fn send(&self, _payload: &str) -> io::Result<String> {
        let call = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        (self.respond)(call)
    }
}

fn stack_over<T: SearchTransport + 'static>(
    transport: Arc<T>,
    deadline: Duration,
    base_delay: Duration,
) -> SiteSearchService {
    let gateway = SiteGateway::new(transport, GatewayConfig { deadline });
    let repository = SiteRepository::new(Arc::new(gateway));
    SiteSearchService::new(
        Arc::new(repository),
        RetryPolicy::new(base_delay, Duration::from_secs(5)),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_search_returns_decoded_sites() {
    let transport = Arc::new(CountingTransport::new(|_| Ok(TWO_SITES.to_string())));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(1), Duration::ZERO);

    let sites = service
        .search(&SiteQuery::new("tourist-1", "museum"), 3, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].name, "Museo Archeologico");
    assert_eq!(transport.sends(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hanging_backend_exhausts_attempts_with_timeout() {
    let transport = Arc::new(CountingTransport::new(|_| {
        std::thread::sleep(Duration::from_millis(300));
        Ok(TWO_SITES.to_string())
    }));
    let service = stack_over(
        Arc::clone(&transport),
        Duration::from_millis(30),
        Duration::from_millis(1),
    );

    let error = service
        .search(&SiteQuery::new("tourist-1", "museum"), 3, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), SearchErrorKind::Timeout);
    assert_eq!(error.attempts(), 3);
    assert_eq!(error.suppressed().len(), 2);
    assert_eq!(transport.sends(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_query_never_reaches_the_transport() {
    let transport = Arc::new(CountingTransport::new(|_| Ok(TWO_SITES.to_string())));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(1), Duration::ZERO);

    let error = service
        .search(&SiteQuery::new("tourist-1", "   "), 3, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), SearchErrorKind::Validation);
    assert_eq!(transport.sends(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_payload_is_terminal_after_one_attempt() {
    let transport = Arc::new(CountingTransport::new(|_| {
        Ok("{\"sites\": [{\"id\": \"oops\"}]}".to_string())
    }));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(1), Duration::ZERO);

    let error = service
        .search(&SiteQuery::new("tourist-1", "museum"), 3, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), SearchErrorKind::Decode);
    assert_eq!(error.attempts(), 1);
    assert_eq!(transport.sends(), 1);
    let cause = std::error::Error::source(&error).expect("parse cause should be chained");
    assert!(cause.downcast_ref::<serde_json::Error>().is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_failure_cause_survives_all_layers() {
    let transport = Arc::new(CountingTransport::new(|_| {
        Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused by etour backend",
        ))
    }));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(1), Duration::ZERO);

    let error = service
        .search(&SiteQuery::new("tourist-1", "museum"), 1, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), SearchErrorKind::ConnectionInterrupted);
    let cause = std::error::Error::source(&error).expect("io cause should be chained");
    assert!(cause.to_string().contains("connection refused by etour backend"));
    assert!(error.log_message().contains("connection refused by etour backend"));
    assert!(!error.user_message().contains("etour backend"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cancelling_mid_flight_stops_further_attempts() {
    let transport = Arc::new(CountingTransport::new(|_| {
        std::thread::sleep(Duration::from_millis(500));
        Ok(TWO_SITES.to_string())
    }));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(5), Duration::ZERO);

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        canceller.cancel();
    });

    let error = service
        .search(&SiteQuery::new("tourist-1", "museum"), 5, &cancel)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), SearchErrorKind::Cancelled);
    assert_eq!(error.attempts(), 1);
    assert_eq!(transport.sends(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_matches_is_an_empty_success() {
    let transport = Arc::new(CountingTransport::new(|_| {
        Ok("{\"sites\": []}".to_string())
    }));
    let service = stack_over(Arc::clone(&transport), Duration::from_secs(1), Duration::ZERO);

    let sites = service
        .search(
            &SiteQuery::new("tourist-1", "no such place"),
            3,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(sites.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_recovery_on_a_later_attempt() {
    let transport = Arc::new(CountingTransport::new(|call| {
        if call < 3 {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        } else {
            Ok(TWO_SITES.to_string())
        }
    }));
    let service = stack_over(
        Arc::clone(&transport),
        Duration::from_secs(1),
        Duration::from_millis(1),
    );

    let sites = service
        .search(&SiteQuery::new("tourist-1", "museum"), 5, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(transport.sends(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_wires_the_same_stack() {
    let config = SearchConfig {
        deadline_ms: 1_000,
        max_attempts: 2,
        base_delay_ms: 0,
        max_delay_ms: 0,
    };
    let transport = Arc::new(CountingTransport::new(|_| Ok(TWO_SITES.to_string())));
    let gateway = SiteGateway::new(
        Arc::clone(&transport) as Arc<dyn SearchTransport>,
        config.gateway_config(),
    );
    let repository = SiteRepository::new(Arc::new(gateway));
    let service = SiteSearchService::new(Arc::new(repository), config.retry_policy());

    let sites = service
        .search(
            &SiteQuery::new("tourist-1", "museum"),
            config.max_attempts,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(sites.len(), 2);
}

use powerwall_reserve::app::ReserveOrchestrator;
use powerwall_reserve::config::{Credentials, ReserveConfig};
use powerwall_reserve::domain::{InvocationRequest, ReserveAck, SiteId};
use powerwall_reserve::error::{ConfigError, Error};
use powerwall_reserve::testkit::api::{ApiCall, ScriptedEnergyApi};
use powerwall_reserve::testkit::domain;

fn orchestrator(api: ScriptedEnergyApi) -> ReserveOrchestrator<ScriptedEnergyApi> {
    ReserveOrchestrator::new(api, domain::credentials(), ReserveConfig::default())
}

#[tokio::test]
async fn every_valid_percent_sends_exactly_one_update() {
    for percent in 0..=100u8 {
        let api = ScriptedEnergyApi::new();
        let log = api.log();

        let outcome = orchestrator(api)
            .update_backup_reserve(&InvocationRequest::with_percent(i64::from(percent)))
            .await
            .unwrap_or_else(|e| panic!("percent {percent} failed: {e}"));

        assert_eq!(outcome.new_reserve, percent);
        assert_eq!(log.reserve_updates(), vec![percent]);
    }
}

#[tokio::test]
async fn missing_percent_fails_before_any_call() {
    let api = ScriptedEnergyApi::new();
    let log = api.log();

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::empty())
        .await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert!(log.is_empty());
}

#[tokio::test]
async fn explicit_zero_passes_validation() {
    let api = ScriptedEnergyApi::new();
    let log = api.log();
    let request = InvocationRequest::from_json(r#"{"reservePercent": 0}"#).unwrap();

    let outcome = orchestrator(api).update_backup_reserve(&request).await.unwrap();

    assert_eq!(outcome.new_reserve, 0);
    assert_eq!(outcome.message, "Backup reserve set to 0%");
    assert_eq!(log.reserve_updates(), vec![0]);
}

#[test]
fn missing_secret_is_a_configuration_error() {
    // Credentials are validated before an orchestrator (and thus any call)
    // can exist.
    let result = Credentials::new(Some("rt".into()), None, Some("secret".into()));
    assert!(matches!(
        result,
        Err(ConfigError::MissingField {
            field: "TESLA_CLIENT_ID"
        })
    ));
}

#[tokio::test]
async fn auth_failure_stops_the_chain() {
    let api = ScriptedEnergyApi::new().with_token_result(Err(Error::Authentication {
        status: "401 Unauthorized".into(),
    }));
    let log = api.log();

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    match result {
        Err(e @ Error::Authentication { .. }) => {
            assert!(e.to_string().contains("401 Unauthorized"));
        }
        other => panic!("expected authentication error, got {other:?}"),
    }
    assert_eq!(log.calls(), vec![ApiCall::AccessToken]);
}

#[tokio::test]
async fn no_battery_products_means_no_site() {
    let api = ScriptedEnergyApi::new()
        .with_products(vec![domain::vehicle(), domain::solar("9", "Roof")]);
    let log = api.log();

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    assert!(matches!(result, Err(Error::NoSiteFound)));
    assert_eq!(log.calls(), vec![ApiCall::AccessToken, ApiCall::Products]);
}

#[tokio::test]
async fn site_list_failure_propagates() {
    let api = ScriptedEnergyApi::new().with_products_result(Err(Error::SiteList {
        status: "500 Internal Server Error".into(),
    }));

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    assert!(matches!(result, Err(Error::SiteList { .. })));
}

#[tokio::test]
async fn full_chain_reports_before_and_after() {
    let api = ScriptedEnergyApi::new()
        .with_products(vec![
            domain::vehicle(),
            domain::battery("123456", "Home Powerwall"),
            domain::battery("654321", "Cabin"),
        ])
        .with_status(domain::status(87.5, 100.0));
    let log = api.log();

    let outcome = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({
            "message": "Backup reserve set to 20%",
            "site": "Home Powerwall",
            "previousReserve": 100,
            "newReserve": 20,
            "currentCharge": 87.5,
        })
    );

    let site = SiteId::new("123456");
    assert_eq!(
        log.calls(),
        vec![
            ApiCall::AccessToken,
            ApiCall::Products,
            ApiCall::SiteStatus(site.clone()),
            ApiCall::SetBackupReserve(site, 20),
        ]
    );
}

#[tokio::test]
async fn status_failure_aborts_before_update() {
    let api = ScriptedEnergyApi::new().with_status_result(Err(Error::StatusRead {
        status: "408 Request Timeout".into(),
    }));
    let log = api.log();

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    assert!(matches!(result, Err(Error::StatusRead { .. })));
    assert!(log.reserve_updates().is_empty());
}

#[tokio::test]
async fn update_failure_carries_status_and_body() {
    let api = ScriptedEnergyApi::new().with_update_result(Err(Error::ReserveUpdate {
        status: "403 Forbidden".into(),
        body: "insufficient permissions".into(),
    }));

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    let err = result.expect_err("update should fail");
    assert!(matches!(err, Error::ReserveUpdate { .. }));
    let message = err.to_string();
    assert!(message.contains("403 Forbidden"), "{message}");
    assert!(message.contains("insufficient permissions"), "{message}");
}

#[tokio::test]
async fn malformed_battery_entry_is_reported() {
    let mut broken = domain::battery("1", "Home");
    broken.energy_site_id = None;
    let api = ScriptedEnergyApi::new().with_products(vec![broken]);

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[tokio::test]
async fn echo_mismatch_is_rejected_by_default() {
    let api = ScriptedEnergyApi::new().with_update_result(Ok(ReserveAck {
        backup_reserve_percent: Some(100.0),
    }));

    let result = orchestrator(api)
        .update_backup_reserve(&InvocationRequest::with_percent(20))
        .await;

    assert!(matches!(
        result,
        Err(Error::ReserveNotApplied {
            requested: 20,
            ..
        })
    ));
}

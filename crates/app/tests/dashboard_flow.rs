//! End-to-end dashboard flows against a scripted in-memory server.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;

use pkgtracker_app::error::{ApiError, DashboardError};
use pkgtracker_app::ports::{Endpoint, TrackerApi};
use pkgtracker_app::refresh::Refresh;
use pkgtracker_app::services::DashboardService;
use pkgtracker_domain::form::SettingsForm;
use pkgtracker_domain::id::PackageId;
use pkgtracker_domain::package::{NewPackage, Package};
use pkgtracker_domain::poll::PollAck;
use pkgtracker_domain::settings::Settings;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

type Reply = Result<Value, (u16, String)>;

/// Records every request and answers from per-route scripts.
///
/// Routes without a script answer `{"ok": true}`, except `GET /api/packages`
/// which answers `[]`.
#[derive(Default)]
struct ScriptedServer {
    calls: RefCell<Vec<Call>>,
    replies: RefCell<HashMap<(&'static str, String), VecDeque<Reply>>>,
}

impl ScriptedServer {
    fn reply(&self, method: &'static str, endpoint: Endpoint<'_>, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, endpoint.path()))
            .or_default()
            .push_back(reply);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn routes(&self) -> Vec<(&'static str, String)> {
        self.calls()
            .into_iter()
            .map(|call| (call.method, call.path))
            .collect()
    }

    fn handle<T: DeserializeOwned>(
        &self,
        method: &'static str,
        endpoint: Endpoint<'_>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let path = endpoint.path();
        self.calls.borrow_mut().push(Call {
            method,
            path: path.clone(),
            body,
        });
        let scripted = self
            .replies
            .borrow_mut()
            .get_mut(&(method, path.clone()))
            .and_then(VecDeque::pop_front);
        let reply = scripted.unwrap_or_else(|| match (method, path.as_str()) {
            ("GET", "/api/packages") => Ok(json!([])),
            _ => Ok(json!({"ok": true})),
        });
        match reply {
            Ok(value) => {
                serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
            }
            Err((status, body)) => Err(ApiError::RequestFailed { status, body }),
        }
    }
}

impl TrackerApi for &ScriptedServer {
    fn get_settings(&self) -> impl Future<Output = Result<Settings, ApiError>> {
        let result = self.handle("GET", Endpoint::Settings, None);
        async { result }
    }

    fn save_settings(&self, settings: &Settings) -> impl Future<Output = Result<(), ApiError>> {
        let body = serde_json::to_value(settings).unwrap();
        let result = self
            .handle::<Value>("POST", Endpoint::Settings, Some(body))
            .map(drop);
        async { result }
    }

    fn list_packages(&self) -> impl Future<Output = Result<Vec<Package>, ApiError>> {
        let result = self.handle("GET", Endpoint::Packages, None);
        async { result }
    }

    fn add_package(&self, package: &NewPackage) -> impl Future<Output = Result<(), ApiError>> {
        let body = serde_json::to_value(package).unwrap();
        let result = self
            .handle::<Value>("POST", Endpoint::Packages, Some(body))
            .map(drop);
        async { result }
    }

    fn delete_package(&self, id: &PackageId) -> impl Future<Output = Result<(), ApiError>> {
        let result = self
            .handle::<Value>("DELETE", Endpoint::Package(id), None)
            .map(drop);
        async { result }
    }

    fn trigger_poll(&self) -> impl Future<Output = Result<PollAck, ApiError>> {
        let result = self.handle("POST", Endpoint::TriggerPoll, None);
        async { result }
    }
}

fn route(method: &'static str, path: &str) -> (&'static str, String) {
    (method, path.to_string())
}

#[tokio::test]
async fn should_render_one_row_per_package_in_order() {
    let server = ScriptedServer::default();
    server.reply(
        "GET",
        Endpoint::Packages,
        Ok(json!([
            {"id": "b2", "carrier": "dhl", "number": "JD0001", "label": "Books",
             "detailed_status": "In transit", "summary_status": "In transit",
             "last_update": "2024-05-02T08:15:00"},
            {"id": 7, "carrier": "inpost", "number": "6200", "label": null,
             "detailed_status": null, "summary_status": null, "last_update": null},
            {"id": "a1", "carrier": "ups", "number": "1Z999"}
        ])),
    );
    let svc = DashboardService::new(&server);

    let rows = svc.refresh().await.unwrap().into_rows().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, "b2");
    assert_eq!(rows[0].carrier, "DHL");
    assert_eq!(rows[0].label, "Books");
    assert_eq!(rows[0].summary_status, "In transit");
    assert_eq!(rows[0].last_update, "2024-05-02T08:15:00+00:00");
    assert_eq!(rows[1].id, "7");
    assert_eq!(rows[1].carrier, "INPOST");
    assert_eq!(rows[1].label, "");
    assert_eq!(rows[1].detailed_status, "");
    assert_eq!(rows[1].summary_status, "");
    assert_eq!(rows[1].last_update, "");
    assert_eq!(rows[2].id, "a1");
    assert_eq!(rows[2].carrier, "UPS");
}

#[tokio::test]
async fn should_load_settings_then_packages() {
    let server = ScriptedServer::default();
    server.reply(
        "GET",
        Endpoint::Settings,
        Ok(json!({
            "poll_interval_minutes": 10,
            "mqtt": {"host": "core-mosquitto", "port": 1883, "username": "addons",
                     "password": "pw", "base_topic": "package_tracker"}
        })),
    );
    let svc = DashboardService::new(&server);

    let loaded = svc.load().await.unwrap();

    assert_eq!(
        server.routes(),
        [route("GET", "/api/settings"), route("GET", "/api/packages")]
    );
    assert_eq!(loaded.settings.poll_interval_minutes, "10");
    assert_eq!(loaded.settings.mqtt_host, "core-mosquitto");
    assert_eq!(loaded.settings.mqtt_port, "1883");
    assert_eq!(loaded.settings.mqtt_username, "addons");
    assert_eq!(loaded.settings.mqtt_password, "pw");
    assert_eq!(loaded.settings.mqtt_base_topic, "package_tracker");
    assert_eq!(loaded.packages, Ok(Refresh::Current(Vec::new())));
}

#[tokio::test]
async fn should_keep_settings_when_package_list_fails_on_load() {
    let server = ScriptedServer::default();
    server.reply(
        "GET",
        Endpoint::Settings,
        Ok(json!({
            "poll_interval_minutes": 42,
            "mqtt": {"host": "broker.lan", "port": 8883, "username": "",
                     "password": "", "base_topic": "parcels"}
        })),
    );
    server.reply("GET", Endpoint::Packages, Err((500, "db down".to_string())));
    let svc = DashboardService::new(&server);

    let loaded = svc.load().await.unwrap();

    assert_eq!(
        server.routes(),
        [route("GET", "/api/settings"), route("GET", "/api/packages")]
    );
    assert_eq!(loaded.settings.poll_interval_minutes, "42");
    assert_eq!(loaded.settings.mqtt_host, "broker.lan");
    assert_eq!(loaded.settings.mqtt_port, "8883");
    assert_eq!(loaded.settings.mqtt_base_topic, "parcels");
    assert_eq!(loaded.packages.unwrap_err().to_string(), "db down");
}

#[tokio::test]
async fn should_stop_load_when_settings_request_fails() {
    let server = ScriptedServer::default();
    server.reply("GET", Endpoint::Settings, Err((500, "boom".to_string())));
    let svc = DashboardService::new(&server);

    let err = svc.load().await.unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(server.routes(), [route("GET", "/api/settings")]);
}

#[tokio::test]
async fn should_delete_once_then_refresh_once() {
    let server = ScriptedServer::default();
    let svc = DashboardService::new(&server);

    svc.delete_package(&PackageId::from("7")).await.unwrap();

    assert_eq!(
        server.routes(),
        [route("DELETE", "/api/packages/7"), route("GET", "/api/packages")]
    );
}

#[tokio::test]
async fn should_post_new_package_verbatim_then_refresh() {
    let server = ScriptedServer::default();
    let svc = DashboardService::new(&server);

    let cleared = Cell::new(0);

    svc.add_package(&NewPackage::new("ups", "1Z999", "Gift"), || {
        assert_eq!(server.calls().len(), 1, "fields clear before the refresh");
        cleared.set(cleared.get() + 1);
    })
    .await
    .unwrap();

    assert_eq!(cleared.get(), 1);

    let calls = server.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/api/packages");
    assert_eq!(
        calls[0].body,
        Some(json!({"carrier": "ups", "number": "1Z999", "label": "Gift"}))
    );
    assert_eq!((calls[1].method, calls[1].path.as_str()), ("GET", "/api/packages"));
}

#[tokio::test]
async fn should_send_settings_integers_as_numbers() {
    let server = ScriptedServer::default();
    let svc = DashboardService::new(&server);
    let form = SettingsForm {
        poll_interval_minutes: "15".to_string(),
        mqtt_host: "broker".to_string(),
        mqtt_port: "1883".to_string(),
        mqtt_username: "user".to_string(),
        mqtt_password: "pass".to_string(),
        mqtt_base_topic: "pkgs".to_string(),
    };

    svc.save_settings(&form).await.unwrap();

    let calls = server.calls();
    assert_eq!(calls.len(), 1, "saving settings must not re-render the table");
    assert_eq!((calls[0].method, calls[0].path.as_str()), ("POST", "/api/settings"));
    assert_eq!(
        calls[0].body,
        Some(json!({
            "poll_interval_minutes": 15,
            "mqtt": {"host": "broker", "port": 1883, "username": "user",
                     "password": "pass", "base_topic": "pkgs"}
        }))
    );
}

#[tokio::test]
async fn should_not_send_settings_with_unparseable_port() {
    let server = ScriptedServer::default();
    let svc = DashboardService::new(&server);
    let form = SettingsForm {
        mqtt_port: "default".to_string(),
        ..SettingsForm::from(&Settings::default())
    };

    let err = svc.save_settings(&form).await.unwrap_err();

    assert!(matches!(err, DashboardError::Form(_)));
    assert!(server.calls().is_empty());
}

#[tokio::test]
async fn should_fail_with_body_text_and_skip_refresh() {
    let server = ScriptedServer::default();
    server.reply(
        "POST",
        Endpoint::Packages,
        Err((400, r#"{"detail":"Tracking number required"}"#.to_string())),
    );
    server.reply(
        "DELETE",
        Endpoint::Package(&PackageId::from("x")),
        Err((404, "Not found".to_string())),
    );
    server.reply(
        "POST",
        Endpoint::TriggerPoll,
        Err((502, "Bad gateway".to_string())),
    );
    server.reply("POST", Endpoint::Settings, Err((422, "invalid".to_string())));
    let svc = DashboardService::new(&server);

    let err = svc
        .add_package(&NewPackage::new("dhl", " ", ""), || {
            panic!("fields must keep their text when the server rejects the package")
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), r#"{"detail":"Tracking number required"}"#);

    let err = svc.delete_package(&PackageId::from("x")).await.unwrap_err();
    assert_eq!(err.to_string(), "Not found");

    let err = svc.trigger_poll().await.unwrap_err();
    assert_eq!(err.to_string(), "Bad gateway");

    let err = svc
        .save_settings(&SettingsForm::from(&Settings::default()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid");

    assert!(
        server
            .routes()
            .iter()
            .all(|(method, path)| !(*method == "GET" && path == "/api/packages")),
        "a failed call must not trigger a refresh"
    );
}

#[tokio::test]
async fn should_trigger_poll_then_refresh_once() {
    let server = ScriptedServer::default();
    server.reply(
        "POST",
        Endpoint::TriggerPoll,
        Ok(json!({"ok": true, "last_poll": "2024-05-02T09:00:00.000001"})),
    );
    let svc = DashboardService::new(&server);

    let polled = svc.trigger_poll().await.unwrap();

    assert_eq!(
        server.routes(),
        [route("POST", "/api/trigger-poll"), route("GET", "/api/packages")]
    );
    assert!(polled.ack.ok);
    assert!(polled.ack.last_poll.is_some());
    assert!(!polled.packages.is_stale());
}

#[tokio::test]
async fn should_report_decode_error_for_malformed_package_list() {
    let server = ScriptedServer::default();
    server.reply("GET", Endpoint::Packages, Ok(json!({"unexpected": true})));
    let svc = DashboardService::new(&server);

    let err = svc.refresh().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

//! In-process stand-in for the uinames service.
//!
//! An actix-web server on an ephemeral loopback port answers every path
//! through one handler and records each request target (path and query) so
//! tests can assert on what was sent.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::rt::System;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use reqwest::Url;
use serde_json::{json, Value};
use uinames::{ClientConfig, NamesClient};

pub const PERSON_FIXTURE: &str = include_str!("../fixtures/person.json");
pub const PEOPLE_FIXTURE: &str = include_str!("../fixtures/people.json");

type Handler = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

struct StubState {
    handler: Handler,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: ServerHandle,
}

impl StubServer {
    /// Start serving `handler` on an ephemeral local port.
    ///
    /// The server runs on its own actix system thread, so it works under any
    /// test runtime flavour.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(StubState {
            handler: Arc::new(handler),
            requests: Arc::clone(&requests),
        });

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(state.clone())
                        .default_service(web::to(respond))
                })
                .disable_signals()
                .workers(1)
                .listen(listener)
                .unwrap()
                .run();

                tx.send(server.handle()).unwrap();
                server.await
            })
        });
        let handle = rx.recv().unwrap();

        Self {
            base_url: format!("http://{addr}/api/"),
            requests,
            handle,
        }
    }

    /// Serve the same body with status 200 for every request.
    pub async fn fixed(body: &'static str) -> Self {
        Self::start(move |_| (200, body.to_string())).await
    }

    /// Serve the simulated service from [`simulated_service`].
    pub async fn simulated() -> Self {
        Self::start(simulated_service).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> NamesClient {
        NamesClient::new(local_config(&self.base_url)).unwrap()
    }

    /// Request targets received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Config for a loopback endpoint, bypassing any proxy set in the environment.
pub fn local_config(base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::with_base_url(base_url).unwrap();
    config.system_proxy = false;
    config
}

impl Drop for StubServer {
    fn drop(&mut self) {
        // The stop command is sent eagerly; the returned future only awaits completion.
        drop(self.handle.stop(false));
    }
}

async fn respond(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    let target = match req.query_string() {
        "" => req.path().to_string(),
        query => format!("{}?{query}", req.path()),
    };
    state.requests.lock().unwrap().push(target.clone());

    let (status, body) = (state.handler)(&target);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(body)
}

const KNOWN_REGIONS: &[&str] = &["canada", "new zealand", "sweden", "france", "japan"];

/// Mimics the service's own validation and response shapes.
///
/// - `amount` outside 1..=500, an unknown `gender` or an unknown `region`
///   answer 400 with an `error` object
/// - no `amount` or `amount=1` answers a bare object, otherwise an array
/// - `ext` adds the extended field set
pub fn simulated_service(target: &str) -> (u16, String) {
    let url = Url::parse(&format!("http://stub{target}")).unwrap();
    let param = |key: &str| {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    };

    let amount = match param("amount").map(|a| a.parse::<u32>()) {
        None => None,
        Some(Ok(a)) if (1..=500).contains(&a) => Some(a),
        Some(_) => return bad_request("Amount of requested names exceeds maximum allowed"),
    };

    let gender = param("gender");
    if let Some(ref g) = gender {
        if g != "male" && g != "female" {
            return bad_request("Invalid gender");
        }
    }

    let region = param("region");
    if let Some(ref r) = region {
        if !KNOWN_REGIONS.contains(&r.to_lowercase().as_str()) {
            return bad_request("Region or language not found");
        }
    }

    let extended = param("ext").is_some();
    let count = amount.unwrap_or(1);
    let people: Vec<Value> = (0..count)
        .map(|i| {
            let alternating = if i % 2 == 0 { "male" } else { "female" };
            let g = gender.clone().unwrap_or_else(|| alternating.to_string());
            identity(i, &g, region.as_deref().unwrap_or("New Zealand"), extended)
        })
        .collect();

    let body = if count == 1 {
        people.into_iter().next().unwrap_or(Value::Null)
    } else {
        Value::Array(people)
    };
    (200, body.to_string())
}

fn identity(index: u32, gender: &str, region: &str, extended: bool) -> Value {
    let mut person = json!({
        "name": format!("Name{index}"),
        "surname": format!("Surname{index}"),
        "gender": gender,
        "region": region,
    });
    if extended {
        let fields = person.as_object_mut().unwrap();
        fields.insert("age".into(), json!(20 + index % 40));
        let title = if gender == "male" { "mr" } else { "ms" };
        fields.insert("title".into(), json!(title));
        fields.insert("phone".into(), json!("(555) 010 0000"));
        fields.insert(
            "birthday".into(),
            json!({ "dmy": "01/01/1990", "mdy": "01/01/1990", "raw": 631152000 }),
        );
        fields.insert("email".into(), json!(format!("name{index}@example.com")));
        fields.insert("password".into(), json!("Secret90!"));
        fields.insert(
            "credit_card".into(),
            json!({ "expiration": "1/20", "number": "4000-0000-0000-0000", "pin": 1234, "security": 123 }),
        );
        fields.insert(
            "photo".into(),
            json!(format!("https://uinames.com/api/photos/{gender}/{index}.jpg")),
        );
    }
    person
}

fn bad_request(message: &str) -> (u16, String) {
    (400, json!({ "error": message }).to_string())
}

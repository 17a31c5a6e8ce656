//! Test transports: a scripted responder and a small in-memory OData service

use async_trait::async_trait;
use contracts::shared::record::EntityRecord;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

struct Rule {
    method: Method,
    pattern: String,
    reply: Reply,
}

/// Answers by the longest URL fragment registered for the method
#[derive(Default)]
pub struct ScriptedTransport {
    rules: Vec<Rule>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, method: Method, pattern: &str, status: u16, body: &str) -> Self {
        self.rules.push(Rule {
            method,
            pattern: pattern.to_string(),
            reply: Reply::Respond(HttpResponse::new(status, body)),
        });
        self
    }

    pub fn on_get(self, pattern: &str, status: u16, body: &str) -> Self {
        self.on(Method::Get, pattern, status, body)
    }

    /// The request fails before any response arrives
    pub fn fail(mut self, method: Method, pattern: &str, message: &str) -> Self {
        self.rules.push(Rule {
            method,
            pattern: pattern.to_string(),
            reply: Reply::Fail(message.to_string()),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        let rule = self
            .rules
            .iter()
            .filter(|r| r.method == request.method && request.url.contains(&r.pattern))
            .max_by_key(|r| r.pattern.len());
        match rule.map(|r| &r.reply) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(message)) => Err(TransportError(message.clone())),
            None => Ok(HttpResponse::new(404, r#"{"message":"no route"}"#)),
        }
    }
}

struct Collection {
    path: String,
    identity: String,
    records: Vec<EntityRecord>,
}

enum Target {
    Collection,
    Count,
    Item(String),
}

/// In-memory service answering `$count`, `$filter=contains(..)`, `$orderby`
/// and `$skip` the way the remote API does. It never pages on its own.
#[derive(Default)]
pub struct FakeODataService {
    collections: RefCell<Vec<Collection>>,
    sent: RefCell<Vec<HttpRequest>>,
    fail_next: Cell<bool>,
}

impl FakeODataService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(self, path: &str, identity: &str, records: Vec<Value>) -> Self {
        let records = records
            .into_iter()
            .map(|v| serde_json::from_value(v).expect("record object"))
            .collect();
        self.collections.borrow_mut().push(Collection {
            path: path.to_string(),
            identity: identity.to_string(),
            records,
        });
        self
    }

    /// The next request fails at the transport level
    pub fn fail_next_request(&self) {
        self.fail_next.set(true);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn record(&self, path: &str, id: &str) -> Option<EntityRecord> {
        let collections = self.collections.borrow();
        let collection = collections.iter().find(|c| c.path == path)?;
        collection
            .records
            .iter()
            .find(|r| r.id_string(&collection.identity).as_deref() == Some(id))
            .cloned()
    }

    fn route(&self, path: &str) -> Option<(usize, Target)> {
        let collections = self.collections.borrow();
        for (index, collection) in collections.iter().enumerate() {
            let Some(pos) = path.find(&collection.path) else {
                continue;
            };
            let rest = &path[pos + collection.path.len()..];
            let target = if rest.is_empty() {
                Target::Collection
            } else if rest == "/$count" {
                Target::Count
            } else if rest.starts_with('(') && rest.ends_with(')') {
                let raw = &rest[1..rest.len() - 1];
                Target::Item(urlencoding::decode(raw).ok()?.into_owned())
            } else {
                continue;
            };
            return Some((index, target));
        }
        None
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let (path, query) = request.url.split_once('?').unwrap_or((&request.url, ""));
        let params = parse_query(query);
        let Some((index, target)) = self.route(path) else {
            return not_found();
        };
        let mut collections = self.collections.borrow_mut();
        let collection = &mut collections[index];

        match (request.method, target) {
            (Method::Get, Target::Count) => {
                let count = filtered(&collection.records, &params).len();
                HttpResponse::new(200, count.to_string())
            }
            (Method::Get, Target::Collection) => {
                let mut rows = filtered(&collection.records, &params);
                if let Some(order) = params.get("$orderby") {
                    let (field, dir) = order.split_once(' ').unwrap_or((order, "asc"));
                    rows.sort_by(|a, b| compare(a.get(field), b.get(field)));
                    if dir == "desc" {
                        rows.reverse();
                    }
                }
                let skip = params
                    .get("$skip")
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(0);
                let value: Vec<EntityRecord> = rows.into_iter().skip(skip).collect();
                HttpResponse::new(200, json!({ "value": value }).to_string())
            }
            (method, Target::Item(id)) => {
                let identity = collection.identity.clone();
                let position = collection
                    .records
                    .iter()
                    .position(|r| r.id_string(&identity).as_deref() == Some(id.as_str()));
                let Some(position) = position else {
                    return not_found();
                };
                match method {
                    Method::Get => HttpResponse::new(
                        200,
                        serde_json::to_string(&collection.records[position]).unwrap_or_default(),
                    ),
                    Method::Patch => {
                        let patch: serde_json::Map<String, Value> =
                            match serde_json::from_str(request.body.as_deref().unwrap_or("{}")) {
                                Ok(p) => p,
                                Err(_) => return bad_request("malformed body"),
                            };
                        for (key, value) in patch {
                            collection.records[position].set(key, value);
                        }
                        HttpResponse::new(204, "")
                    }
                    Method::Delete => {
                        collection.records.remove(position);
                        HttpResponse::new(204, "")
                    }
                    Method::Post => bad_request("POST to an item"),
                }
            }
            (Method::Post, Target::Collection) => {
                match serde_json::from_str::<EntityRecord>(request.body.as_deref().unwrap_or("{}")) {
                    Ok(mut record) => {
                        if !record.contains_key(&collection.identity) {
                            let next = collection.records.len() as u64 + 1;
                            record.set(collection.identity.clone(), json!(next));
                        }
                        collection.records.push(record);
                        HttpResponse::new(201, "")
                    }
                    Err(_) => bad_request("malformed body"),
                }
            }
            _ => bad_request("unsupported"),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeODataService {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        if self.fail_next.replace(false) {
            return Err(TransportError("connection refused".into()));
        }
        Ok(self.handle(&request))
    }
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let value = urlencoding::decode(v).map(|s| s.into_owned()).unwrap_or_default();
            (k.to_string(), value)
        })
        .collect()
}

fn filtered(records: &[EntityRecord], params: &BTreeMap<String, String>) -> Vec<EntityRecord> {
    let contains = params.get("$filter").and_then(|f| parse_contains(f));
    records
        .iter()
        .filter(|r| match &contains {
            Some((field, term)) => r.text_value(field).contains(term.as_str()),
            None => true,
        })
        .cloned()
        .collect()
}

/// `contains(Field,'te''rm')` → (Field, te'rm)
fn parse_contains(filter: &str) -> Option<(String, String)> {
    let inner = filter.strip_prefix("contains(")?.strip_suffix(')')?;
    let (field, literal) = inner.split_once(',')?;
    let term = literal.strip_prefix('\'')?.strip_suffix('\'')?.replace("''", "'");
    Some((field.to_string(), term))
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::new(404, r#"{"message":"Not found"}"#)
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::new(400, json!({ "message": message }).to_string())
}

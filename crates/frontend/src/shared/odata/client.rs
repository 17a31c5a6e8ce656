use contracts::shared::metadata::EntitySchema;
use contracts::shared::odata::CollectionUrl;
use contracts::shared::record::{CollectionResponse, EntityRecord};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::FetchError;
use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Requests against one entity collection
pub struct EntityClient<'a, T: HttpTransport + ?Sized> {
    transport: &'a T,
    schema: &'static EntitySchema,
    urls: CollectionUrl,
}

impl<'a, T: HttpTransport + ?Sized> EntityClient<'a, T> {
    pub fn new(transport: &'a T, api_base: &str, schema: &'static EntitySchema) -> Self {
        Self {
            transport,
            schema,
            urls: CollectionUrl::new(api_base, schema.collection_path),
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn urls(&self) -> &CollectionUrl {
        &self.urls
    }

    /// `GET {base}/$count…` — the body is a bare integer, not JSON
    pub async fn count(&self, url: &str) -> Result<u64, FetchError> {
        let body = get_text(self.transport, url).await?;
        body.trim()
            .parse::<u64>()
            .map_err(|_| FetchError::Parse(format!("count is not an integer: '{}'", body.trim())))
    }

    /// `GET {base}…` — `{ "value": [...] }`; a body without `value` is malformed
    pub async fn list(&self, url: &str) -> Result<Vec<EntityRecord>, FetchError> {
        let body = get_text(self.transport, url).await?;
        serde_json::from_str::<PageBody>(&body)
            .map(|r| r.value)
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// `GET {base}(id)` — bare object
    pub async fn fetch_by_id(&self, id: &str) -> Result<EntityRecord, FetchError> {
        let body = get_text(self.transport, &self.urls.item(id)).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// `PATCH {base}(id)` with a partial record
    pub async fn patch(&self, id: &str, payload: &Map<String, Value>) -> Result<(), FetchError> {
        let body = encode(payload)?;
        let request = HttpRequest::with_json(Method::Patch, self.urls.item(id), body);
        self.write(request).await
    }

    /// `POST {base}`
    pub async fn create(&self, payload: &Map<String, Value>) -> Result<(), FetchError> {
        let body = encode(payload)?;
        let request = HttpRequest::with_json(Method::Post, self.urls.collection(), body);
        self.write(request).await
    }

    /// `DELETE {base}(id)`
    pub async fn delete(&self, id: &str) -> Result<(), FetchError> {
        self.write(HttpRequest::delete(self.urls.item(id))).await
    }

    async fn write(&self, request: HttpRequest) -> Result<(), FetchError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        ensure_ok(&response)
    }
}

/// Table page body; unlike [`CollectionResponse`] the array is required
#[derive(Deserialize)]
struct PageBody {
    value: Vec<EntityRecord>,
}

/// `GET` a collection URL and decode its `value` array, absent meaning empty
pub async fn get_collection<T: HttpTransport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<Vec<EntityRecord>, FetchError> {
    let body = get_text(transport, url).await?;
    serde_json::from_str::<CollectionResponse>(&body)
        .map(|r| r.value)
        .map_err(|e| FetchError::Parse(e.to_string()))
}

async fn get_text<T: HttpTransport + ?Sized>(transport: &T, url: &str) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = transport.send(HttpRequest::get(url)).await?;
    ensure_ok(&response)?;
    Ok(response.body)
}

fn ensure_ok(response: &HttpResponse) -> Result<(), FetchError> {
    if response.ok() {
        Ok(())
    } else {
        Err(FetchError::from_status(response.status, &response.body))
    }
}

fn encode(payload: &Map<String, Value>) -> Result<String, FetchError> {
    serde_json::to_string(payload).map_err(|e| FetchError::Parse(e.to_string()))
}

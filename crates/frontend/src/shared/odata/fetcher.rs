use contracts::shared::odata::build_query_urls;
use contracts::shared::query::{QueryRequest, QueryResult};

use super::client::EntityClient;
use super::error::FetchError;
use super::transport::HttpTransport;
use crate::shared::services::{Notifier, Severity};

/// Fetch one table page: the count first, then the rows.
///
/// A failed count skips the data request. Every failure is reported to the
/// user exactly once and returned; nothing is retried.
pub async fn fetch_page<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    notifier: &dyn Notifier,
    request: &QueryRequest,
) -> Result<QueryResult, FetchError> {
    let schema = client.schema();
    match query(client, request).await {
        Ok(result) => Ok(result),
        Err(e) => {
            log::error!("{} query failed: {}", schema.list_name, e);
            notifier.notify(
                &format!("{} API call Failed! - {}", schema.list_name, e),
                Severity::Error,
            );
            Err(e)
        }
    }
}

async fn query<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    request: &QueryRequest,
) -> Result<QueryResult, FetchError> {
    let urls = build_query_urls(client.urls(), client.schema().search_field, request)?;
    log::debug!("count: {} data: {}", urls.count, urls.data);

    let total_count = client.count(&urls.count).await?;
    let data = client.list(&urls.data).await?;

    if data.is_empty() {
        return Ok(QueryResult::empty(request.page));
    }
    Ok(QueryResult::page(
        data,
        request.page,
        request.page_size,
        total_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::odata::fake::{FakeODataService, ScriptedTransport};
    use crate::shared::odata::transport::{Method, TransportError};
    use crate::shared::services::testing::RecordingNotifier;
    use contracts::domain::a001_product_catalogue::schema::PRODUCT_CATALOGUE;
    use contracts::domain::a002_vendor::schema::VENDOR;
    use contracts::shared::query::{SortDirection, EMPTY_RESULT_ERROR};
    use serde_json::json;

    const BASE: &str = "http://api.local/odata";

    fn products(n: usize) -> Vec<serde_json::Value> {
        (1..=n)
            .map(|i| json!({ "ProductId": i, "ProductName": format!("Product {:02}", i) }))
            .collect()
    }

    #[tokio::test]
    async fn test_total_count_is_independent_of_page_length() {
        let service =
            FakeODataService::new().with_collection("/ProductCatalogues", "ProductId", products(12));
        let client = EntityClient::new(&service, BASE, &PRODUCT_CATALOGUE);
        let notifier = RecordingNotifier::default();

        let result = fetch_page(&client, &notifier, &QueryRequest::new(0, 5))
            .await
            .unwrap();
        assert_eq!(result.total_count, 12);
        assert_eq!(result.data.len(), 5);
        assert_eq!(result.error, None);

        let last = fetch_page(&client, &notifier, &QueryRequest::new(2, 5))
            .await
            .unwrap();
        assert_eq!(last.total_count, 12);
        assert_eq!(last.data.len(), 2);
        assert_eq!(last.page, 2);
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_search_and_sort_reach_the_server() {
        let service =
            FakeODataService::new().with_collection("/ProductCatalogues", "ProductId", products(12));
        let client = EntityClient::new(&service, BASE, &PRODUCT_CATALOGUE);
        let notifier = RecordingNotifier::default();
        let request = QueryRequest::new(0, 5)
            .with_order("ProductId", SortDirection::Desc)
            .with_search("Product 1");

        let result = fetch_page(&client, &notifier, &request).await.unwrap();
        // Product 10, 11 and 12
        assert_eq!(result.total_count, 3);
        assert_eq!(result.data[0].get("ProductId"), Some(&json!(12)));

        let sent = service.requests();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].url.contains("/$count?$filter="));
        assert!(sent[1].url.contains("$orderby=ProductId%20desc&$filter="));
    }

    #[tokio::test]
    async fn test_empty_dataset_is_a_soft_error() {
        let service = FakeODataService::new().with_collection("/Vendors", "Vendor", vec![]);
        let client = EntityClient::new(&service, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let result = fetch_page(&client, &notifier, &QueryRequest::new(0, 5))
            .await
            .unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.error.as_deref(), Some(EMPTY_RESULT_ERROR));
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_body_without_value_is_a_failure() {
        let transport = ScriptedTransport::new()
            .on_get("/Vendors/$count", 200, "3")
            .on_get("/Vendors", 200, r#"{"odata.error":"boom"}"#);
        let client = EntityClient::new(&transport, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let err = fetch_page(&client, &notifier, &QueryRequest::new(0, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));

        let messages = notifier.take();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].0.starts_with("Vendors API call Failed! - "));
        assert_eq!(messages[0].1, Severity::Error);
    }

    #[tokio::test]
    async fn test_count_failure_skips_data_and_notifies_once() {
        let transport = ScriptedTransport::new()
            .fail(Method::Get, "/Vendors/$count", "connection refused")
            .on_get("/Vendors", 200, r#"{"value":[{"Vendor":"V-1"}]}"#);
        let client = EntityClient::new(&transport, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let err = fetch_page(&client, &notifier, &QueryRequest::new(0, 5))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Transport(TransportError("connection refused".into()))
        );

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            notifier.take(),
            vec![(
                "Vendors API call Failed! - connection refused".to_string(),
                Severity::Error
            )]
        );
    }

    #[tokio::test]
    async fn test_malformed_rows_fail() {
        let transport = ScriptedTransport::new()
            .on_get("/Vendors/$count", 200, "3")
            .on_get("/Vendors", 200, "<html>");
        let client = EntityClient::new(&transport, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let err = fetch_page(&client, &notifier, &QueryRequest::new(0, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(notifier.count(Severity::Error), 1);
    }

    #[tokio::test]
    async fn test_oversize_page_is_truncated() {
        let transport = ScriptedTransport::new()
            .on_get("/Vendors/$count", 200, "7")
            .on_get(
                "/Vendors",
                200,
                r#"{"value":[{"Vendor":"a"},{"Vendor":"b"},{"Vendor":"c"}]}"#,
            );
        let client = EntityClient::new(&transport, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let result = fetch_page(&client, &notifier, &QueryRequest::new(0, 2))
            .await
            .unwrap();
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.total_count, 7);
    }

    #[tokio::test]
    async fn test_zero_page_size_sends_nothing() {
        let transport = ScriptedTransport::new();
        let client = EntityClient::new(&transport, BASE, &VENDOR);
        let notifier = RecordingNotifier::default();

        let err = fetch_page(&client, &notifier, &QueryRequest::new(0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidQuery(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_fetch_is_idempotent() {
        let service =
            FakeODataService::new().with_collection("/ProductCatalogues", "ProductId", products(12));
        let client = EntityClient::new(&service, BASE, &PRODUCT_CATALOGUE);
        let notifier = RecordingNotifier::default();
        let request = QueryRequest::new(1, 5).with_order("ProductName", SortDirection::Asc);

        let first = fetch_page(&client, &notifier, &request).await.unwrap();
        let second = fetch_page(&client, &notifier, &request).await.unwrap();
        assert_eq!(first, second);
    }
}

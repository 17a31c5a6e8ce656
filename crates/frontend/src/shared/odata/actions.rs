//! User-triggered flows over one record: load, submit, delete
//!
//! Each flow reports its outcome through the notifier; submit flows also
//! leave the form for the list on success.

use contracts::shared::form::{build_create, build_patch, Draft};
use contracts::shared::record::EntityRecord;

use super::client::EntityClient;
use super::error::FetchError;
use super::transport::HttpTransport;
use crate::shared::services::{AppServices, Notifier, Severity};

/// Fetch one record for the view or edit screen
pub async fn load_record<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    notifier: &dyn Notifier,
    id: &str,
) -> Result<EntityRecord, FetchError> {
    client.fetch_by_id(id).await.inspect_err(|e| {
        let schema = client.schema();
        log::error!("load {}({}) failed: {}", schema.entity_name, id, e);
        notifier.notify(
            &format!("{} API call Failed! - {}", schema.list_name, e),
            Severity::Error,
        );
    })
}

/// Delete one record. The caller refreshes the table on `Ok`.
pub async fn delete_record<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    notifier: &dyn Notifier,
    id: &str,
) -> Result<(), FetchError> {
    let schema = client.schema();
    match client.delete(id).await {
        Ok(()) => {
            log::info!("deleted {}({})", schema.entity_name, id);
            notifier.notify(
                &format!("Successfully deleted {}", schema.list_name),
                Severity::Success,
            );
            Ok(())
        }
        Err(e) => {
            log::error!("delete {}({}) failed: {}", schema.entity_name, id, e);
            notifier.notify(&format!("Failed! - {}", e), Severity::Error);
            Err(e)
        }
    }
}

/// PATCH the draft back and return to the list.
///
/// On failure the caller keeps the draft so the user can retry.
pub async fn submit_edit<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    services: &AppServices,
    id: &str,
    draft: &Draft,
) -> Result<(), FetchError> {
    let schema = client.schema();
    let payload = build_patch(schema, draft);
    let result = client.patch(id, &payload).await;
    finish_submit(services, schema.entity_name, schema.list_route(), "updated", result)
}

/// POST the draft as a new record and return to the list
pub async fn submit_create<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    services: &AppServices,
    draft: &Draft,
) -> Result<(), FetchError> {
    let schema = client.schema();
    if !schema.identity_server_generated && draft.record().id_string(schema.identity_key).is_none()
    {
        let e = FetchError::MissingIdentity(schema.identity_key);
        services.notify(&format!("Failed! - {}", e), Severity::Error);
        return Err(e);
    }
    let payload = build_create(schema, draft);
    let result = client.create(&payload).await;
    finish_submit(services, schema.entity_name, schema.list_route(), "created", result)
}

/// Edit when the draft was loaded by id, create otherwise
pub async fn submit_draft<T: HttpTransport + ?Sized>(
    client: &EntityClient<'_, T>,
    services: &AppServices,
    id: Option<&str>,
    draft: &Draft,
) -> Result<(), FetchError> {
    match id {
        Some(id) => submit_edit(client, services, id, draft).await,
        None => submit_create(client, services, draft).await,
    }
}

fn finish_submit(
    services: &AppServices,
    entity_name: &str,
    list_route: String,
    verb: &str,
    result: Result<(), FetchError>,
) -> Result<(), FetchError> {
    match result {
        Ok(()) => {
            log::info!("{} {}", verb, entity_name);
            services.notify(
                &format!("Successfully {} {}", verb, entity_name),
                Severity::Success,
            );
            services.navigate(&list_route);
            Ok(())
        }
        Err(e) => {
            log::error!("{} not {}: {}", entity_name, verb, e);
            services.notify(&format!("Failed! - {}", e), Severity::Error);
            Err(e)
        }
    }
}

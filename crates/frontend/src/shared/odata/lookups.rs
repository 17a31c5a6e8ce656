//! Secondary fetches that label foreign-key columns

use contracts::shared::lookup::{missing_reference_message, LookupMap};
use contracts::shared::metadata::{EntitySchema, LookupSpec};
use contracts::shared::odata::CollectionUrl;
use std::collections::BTreeMap;

use super::client::get_collection;
use super::transport::HttpTransport;
use crate::shared::services::{Notifier, Severity};

/// Lookup maps of one screen, keyed by the table column they label
pub type LookupMaps = BTreeMap<&'static str, LookupMap>;

/// Fetch the referenced collection and build its id → label map.
///
/// Never fails the screen: an empty source raises one warning, a failed
/// fetch one error, and both yield an empty map so raw ids are shown.
pub async fn load_lookup<T: HttpTransport + ?Sized>(
    transport: &T,
    api_base: &str,
    spec: &LookupSpec,
    notifier: &dyn Notifier,
) -> LookupMap {
    let url = CollectionUrl::new(api_base, spec.source_path);
    match get_collection(transport, url.collection()).await {
        Ok(records) if records.is_empty() => {
            log::warn!("lookup source {} is empty", spec.source_path);
            notifier.notify(&missing_reference_message(spec), Severity::Warning);
            LookupMap::default()
        }
        Ok(records) => LookupMap::from_records(&records, spec),
        Err(e) => {
            log::error!("lookup {} failed: {}", spec.source_path, e);
            notifier.notify(
                &format!("{} API call Failed! - {}", spec.source_label, e),
                Severity::Error,
            );
            LookupMap::default()
        }
    }
}

/// Load every lookup the schema declares, one after another
pub async fn load_lookups<T: HttpTransport + ?Sized>(
    transport: &T,
    api_base: &str,
    schema: &EntitySchema,
    notifier: &dyn Notifier,
) -> LookupMaps {
    let mut maps = LookupMaps::new();
    for spec in schema.lookups {
        let map = load_lookup(transport, api_base, spec, notifier).await;
        maps.insert(spec.column, map);
    }
    maps
}

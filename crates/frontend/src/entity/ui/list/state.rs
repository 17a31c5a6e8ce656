use contracts::shared::metadata::{ColumnConfig, EntitySchema};
use contracts::shared::query::{QueryRequest, QueryResult, SortDirection};
use contracts::shared::record::EntityRecord;

use crate::shared::odata::lookups::LookupMaps;

/// Paging, sort and search state of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<(String, SortDirection)>,
    pub search: String,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            sort: None,
            search: String::new(),
        }
    }

    pub fn to_request(&self) -> QueryRequest {
        let mut request = QueryRequest::new(self.page, self.page_size);
        if let Some((field, direction)) = &self.sort {
            request = request.with_order(field.clone(), *direction);
        }
        if !self.search.is_empty() {
            request = request.with_search(self.search.clone());
        }
        request
    }

    /// Ascending on a new column, flipped on the current one
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some((current, direction)) if current == field => Some((current, direction.toggled())),
            _ => Some((field.to_string(), SortDirection::Asc)),
        };
    }

    pub fn sorted(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|(f, d)| (f.as_str(), *d))
    }

    /// A new search starts from the first page
    pub fn set_search(&mut self, term: String) {
        if self.search != term {
            self.search = term;
            self.page = 0;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        if size > 0 && size != self.page_size {
            self.page_size = size;
            self.page = 0;
        }
    }
}

/// Text of one table cell.
///
/// Lookup columns show the label for the raw id, or the id itself when the
/// lookup has no entry; dates use the display format.
pub fn cell_text(
    schema: &EntitySchema,
    record: &EntityRecord,
    column: &ColumnConfig,
    lookups: &LookupMaps,
) -> String {
    let raw = record.text_value(column.field);
    if let Some(map) = lookups.get(column.field) {
        if raw.is_empty() {
            return raw;
        }
        return map.label_for(&raw);
    }
    match schema.field(column.field) {
        Some(field) => record.display(field),
        None => raw,
    }
}

/// Message shown under an empty table, if any
pub fn empty_state_message(loading: bool, result: Option<&QueryResult>) -> Option<String> {
    match result {
        None if loading => Some("Loading...".to_string()),
        None => None,
        Some(result) => result.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_inventory_stock::schema::INVENTORY_STOCK;
    use contracts::shared::lookup::LookupMap;
    use serde_json::json;

    fn record(value: serde_json::Value) -> EntityRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_reflects_state() {
        let mut state = ListState::new(5);
        assert_eq!(state.to_request(), QueryRequest::new(0, 5));

        state.page = 2;
        state.toggle_sort("Location");
        state.toggle_sort("Location");
        let request = state.to_request();
        assert_eq!(request.page, 2);
        assert_eq!(request.order_by.unwrap().field, "Location");
        assert_eq!(request.order_direction, Some(SortDirection::Desc));
        assert_eq!(request.search, None);
    }

    #[test]
    fn test_new_sort_column_starts_ascending() {
        let mut state = ListState::new(5);
        state.toggle_sort("Location");
        state.toggle_sort("Location");
        state.toggle_sort("InventoryId");
        assert_eq!(state.sorted(), Some(("InventoryId", SortDirection::Asc)));
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut state = ListState::new(5);
        state.page = 3;
        state.set_search("Shelf".into());
        assert_eq!(state.page, 0);
        assert_eq!(state.to_request().search.as_deref(), Some("Shelf"));

        state.page = 2;
        state.set_page_size(0);
        assert_eq!((state.page, state.page_size), (2, 5));
        state.set_page_size(20);
        assert_eq!((state.page, state.page_size), (0, 20));
    }

    #[test]
    fn test_lookup_cells_fall_back_to_raw_id() {
        let spec = &INVENTORY_STOCK.lookups[0];
        let products = vec![record(json!({ "ProductId": 1, "ProductName": "Tea" }))];
        let mut lookups = LookupMaps::new();
        lookups.insert(spec.column, LookupMap::from_records(&products, spec));
        let column = INVENTORY_STOCK
            .columns
            .iter()
            .find(|c| c.field == "ProductId")
            .unwrap();

        let known = record(json!({ "ProductId": 1 }));
        let unknown = record(json!({ "ProductId": 7 }));
        assert_eq!(cell_text(&INVENTORY_STOCK, &known, column, &lookups), "Tea");
        assert_eq!(cell_text(&INVENTORY_STOCK, &unknown, column, &lookups), "7");
    }

    #[test]
    fn test_date_cells_use_display_format() {
        let column = INVENTORY_STOCK
            .columns
            .iter()
            .find(|c| c.field == "ExpirtyDate")
            .unwrap();
        let row = record(json!({ "ExpirtyDate": "2024-05-06T07:08:09Z" }));
        assert_eq!(
            cell_text(&INVENTORY_STOCK, &row, column, &LookupMaps::new()),
            "06.05.2024 07:08:09"
        );
    }

    #[test]
    fn test_empty_state_message() {
        assert_eq!(empty_state_message(true, None).as_deref(), Some("Loading..."));
        assert_eq!(empty_state_message(false, None), None);

        let empty = QueryResult::empty(0);
        assert_eq!(
            empty_state_message(true, Some(&empty)).as_deref(),
            Some("Error fetching data")
        );

        let rows = QueryResult::page(vec![record(json!({ "ProductId": 1 }))], 0, 5, 1);
        assert_eq!(empty_state_message(false, Some(&rows)), None);
    }
}

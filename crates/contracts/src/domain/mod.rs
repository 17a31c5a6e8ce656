pub mod a001_product_catalogue;
pub mod a002_vendor;
pub mod a003_inventory_stock;
pub mod a004_product_category;
pub mod a005_purchase_order;

use crate::shared::metadata::EntitySchema;

static ALL_SCHEMAS: [&EntitySchema; 5] = [
    &a001_product_catalogue::schema::PRODUCT_CATALOGUE,
    &a002_vendor::schema::VENDOR,
    &a003_inventory_stock::schema::INVENTORY_STOCK,
    &a004_product_category::schema::PRODUCT_CATEGORY,
    &a005_purchase_order::schema::PURCHASE_ORDER,
];

/// Every entity with CRUD screens, in menu order
pub fn all_schemas() -> &'static [&'static EntitySchema] {
    &ALL_SCHEMAS
}

/// Resolve a route segment ("vendors") to its entity
pub fn schema_by_route(segment: &str) -> Option<&'static EntitySchema> {
    all_schemas()
        .iter()
        .copied()
        .find(|s| s.route_base.trim_start_matches('/') == segment)
}

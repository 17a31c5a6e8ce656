use crate::shared::metadata::{
    ColumnConfig, EntitySchema, FieldConfig, FieldKind, FieldSection, LookupSpec,
};

pub const COLLECTION_PATH: &str = "/InventoryStocks";

const STOCK_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("InventoryId", "Inventory Id", FieldKind::Number),
    FieldConfig::new("ProductId", "Product Id", FieldKind::Number).required(),
    FieldConfig::new("Location", "Location", FieldKind::Text),
    FieldConfig::new("QuantityOnHand", "Quantity On Hand", FieldKind::Number).required(),
    FieldConfig::new("ReorderLevel", "Reorder Level", FieldKind::Number),
    // Field name as exposed by the API
    FieldConfig::new("ExpirtyDate", "Expiry Date", FieldKind::Date),
    FieldConfig::new("IsPerishable", "Perishable", FieldKind::Boolean),
];

pub static INVENTORY_STOCK: EntitySchema = EntitySchema {
    entity_name: "InventoryStock",
    list_name: "InventoryStocks",
    collection_path: COLLECTION_PATH,
    route_base: "/inventory-stocks",
    identity_key: "InventoryId",
    identity_server_generated: true,
    search_field: "Location",
    sections: &[FieldSection {
        label: "Inventory",
        fields: STOCK_FIELDS,
    }],
    columns: &[
        ColumnConfig::new("InventoryId", "InventoryId"),
        ColumnConfig::new("Product", "ProductId"),
        ColumnConfig::new("Location", "Location"),
        ColumnConfig::new("On Hand", "QuantityOnHand"),
        ColumnConfig::new("Expiry", "ExpirtyDate"),
    ],
    lookups: &[LookupSpec {
        column: "ProductId",
        source_path: "/ProductCatalogues",
        source_label: "ProductCatalogues",
        key_field: "ProductId",
        label_field: "ProductName",
    }],
    integer_fields: &["ProductId", "QuantityOnHand", "ReorderLevel"],
    patch_excluded: &[],
    icon: Some("inventory"),
};

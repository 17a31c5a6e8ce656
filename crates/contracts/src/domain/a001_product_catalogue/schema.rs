use crate::shared::metadata::{
    ColumnConfig, EntitySchema, FieldConfig, FieldKind, FieldSection, LookupSpec,
};

pub const COLLECTION_PATH: &str = "/ProductCatalogues";

const PRODUCT_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("ProductId", "Product Id", FieldKind::Number),
    FieldConfig::new("ProductName", "Product Name", FieldKind::Text).required(),
    FieldConfig::new("CategoryId", "Category Id", FieldKind::Number).required(),
    FieldConfig::new("Description", "Description", FieldKind::Text),
    FieldConfig::new("IsAvailable", "Available", FieldKind::Boolean),
];

const STOCK_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("ProductCatalogueStock", "Stock", FieldKind::Text)
        .placeholder("Inventory id"),
    FieldConfig::new("ProductCatalogueCategory", "Category", FieldKind::Text)
        .placeholder("Product category id"),
    FieldConfig::new("ListedDate", "Listed Date", FieldKind::Date),
];

pub static PRODUCT_CATALOGUE: EntitySchema = EntitySchema {
    entity_name: "ProductCatalogue",
    list_name: "ProductCatalogues",
    collection_path: COLLECTION_PATH,
    route_base: "/product-catalogues",
    identity_key: "ProductId",
    identity_server_generated: true,
    search_field: "ProductName",
    sections: &[
        FieldSection {
            label: "Product",
            fields: PRODUCT_FIELDS,
        },
        FieldSection {
            label: "Stock",
            fields: STOCK_FIELDS,
        },
    ],
    columns: &[
        ColumnConfig::new("ProductId", "ProductId"),
        ColumnConfig::new("CategoryId", "CategoryId"),
        ColumnConfig::new("ProductName", "ProductName"),
        ColumnConfig::new("Stock", "ProductCatalogueStock"),
        ColumnConfig::new("Category", "ProductCatalogueCategory"),
    ],
    lookups: &[
        LookupSpec {
            column: "ProductCatalogueStock",
            source_path: "/InventoryStocks",
            source_label: "InventoryStocks",
            key_field: "InventoryId",
            label_field: "ExpirtyDate",
        },
        LookupSpec {
            column: "ProductCatalogueCategory",
            source_path: "/ProductCategories",
            source_label: "ProductCategories",
            key_field: "ProductCategoryId",
            label_field: "ProductName",
        },
    ],
    integer_fields: &["CategoryId"],
    patch_excluded: &[],
    icon: Some("products"),
};

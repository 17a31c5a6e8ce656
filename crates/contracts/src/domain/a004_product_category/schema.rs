use crate::shared::metadata::{ColumnConfig, EntitySchema, FieldConfig, FieldKind, FieldSection};

pub const COLLECTION_PATH: &str = "/ProductCategories";

const CATEGORY_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("ProductCategoryId", "Category Id", FieldKind::Number),
    FieldConfig::new("ProductName", "Category Name", FieldKind::Text).required(),
    FieldConfig::new("Description", "Description", FieldKind::Text),
    FieldConfig::new("IsActive", "Active", FieldKind::Boolean),
];

pub static PRODUCT_CATEGORY: EntitySchema = EntitySchema {
    entity_name: "ProductCategory",
    list_name: "ProductCategories",
    collection_path: COLLECTION_PATH,
    route_base: "/product-categories",
    identity_key: "ProductCategoryId",
    identity_server_generated: true,
    search_field: "ProductName",
    sections: &[FieldSection {
        label: "Category",
        fields: CATEGORY_FIELDS,
    }],
    columns: &[
        ColumnConfig::new("Id", "ProductCategoryId"),
        ColumnConfig::new("Name", "ProductName"),
        ColumnConfig::new("Description", "Description"),
    ],
    lookups: &[],
    integer_fields: &[],
    patch_excluded: &[],
    icon: Some("folder-closed"),
};

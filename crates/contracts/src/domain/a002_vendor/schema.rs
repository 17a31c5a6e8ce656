use crate::shared::metadata::{ColumnConfig, EntitySchema, FieldConfig, FieldKind, FieldSection};

pub const COLLECTION_PATH: &str = "/Vendors";

const DETAIL_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("Vendor", "Vendor", FieldKind::Text).required(),
    FieldConfig::new("VendorName", "Vendor Name", FieldKind::Text).required(),
    FieldConfig::new("Email", "Email", FieldKind::Email),
    FieldConfig::new("Phone", "Phone", FieldKind::Text),
    FieldConfig::new("IsPreferred", "Preferred", FieldKind::Boolean),
];

const PURCHASE_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("ProductUnitsPurchased", "Units Purchased", FieldKind::Number),
    FieldConfig::new("PricePerUnit", "Price Per Unit", FieldKind::Number),
    FieldConfig::new("TotalUnitsPurchasedPrice", "Total Price", FieldKind::Number),
    FieldConfig::new("LastPurchaseDate", "Last Purchase", FieldKind::Date),
];

pub static VENDOR: EntitySchema = EntitySchema {
    entity_name: "Vendor",
    list_name: "Vendors",
    collection_path: COLLECTION_PATH,
    route_base: "/vendors",
    identity_key: "Vendor",
    identity_server_generated: false,
    search_field: "VendorName",
    sections: &[
        FieldSection {
            label: "Vendor Details",
            fields: DETAIL_FIELDS,
        },
        FieldSection {
            label: "Purchases",
            fields: PURCHASE_FIELDS,
        },
    ],
    columns: &[
        ColumnConfig::new("Vendor", "Vendor"),
        ColumnConfig::new("Vendor Name", "VendorName"),
        ColumnConfig::new("Email", "Email"),
        ColumnConfig::new("Units Purchased", "ProductUnitsPurchased"),
        ColumnConfig::new("Price Per Unit", "PricePerUnit"),
    ],
    lookups: &[],
    integer_fields: &["ProductUnitsPurchased", "TotalUnitsPurchasedPrice", "PricePerUnit"],
    patch_excluded: &[],
    icon: Some("suppliers"),
};

use crate::shared::metadata::{
    ColumnConfig, EntitySchema, FieldConfig, FieldKind, FieldSection, LookupSpec,
};

pub const COLLECTION_PATH: &str = "/PurchaseOrders";

const ORDER_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("PurchaseOrderId", "Order Id", FieldKind::Number),
    FieldConfig::new("Vendor", "Vendor", FieldKind::Text).required(),
    FieldConfig::new("ProductId", "Product Id", FieldKind::Number).required(),
    FieldConfig::new("OrderDate", "Order Date", FieldKind::Date).required(),
    FieldConfig::new("ExpectedDeliveryDate", "Expected Delivery", FieldKind::Date),
    FieldConfig::new("IsReceived", "Received", FieldKind::Boolean),
];

const AMOUNT_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("Quantity", "Quantity", FieldKind::Number).required(),
    FieldConfig::new("UnitPrice", "Unit Price", FieldKind::Number),
    FieldConfig::new("TotalAmount", "Total Amount", FieldKind::Number),
];

pub static PURCHASE_ORDER: EntitySchema = EntitySchema {
    entity_name: "PurchaseOrder",
    list_name: "PurchaseOrders",
    collection_path: COLLECTION_PATH,
    route_base: "/purchase-orders",
    identity_key: "PurchaseOrderId",
    identity_server_generated: true,
    search_field: "Vendor",
    sections: &[
        FieldSection {
            label: "Order",
            fields: ORDER_FIELDS,
        },
        FieldSection {
            label: "Amounts",
            fields: AMOUNT_FIELDS,
        },
    ],
    columns: &[
        ColumnConfig::new("Order", "PurchaseOrderId"),
        ColumnConfig::new("Vendor", "Vendor"),
        ColumnConfig::new("Product", "ProductId"),
        ColumnConfig::new("Quantity", "Quantity"),
        ColumnConfig::new("Order Date", "OrderDate"),
    ],
    lookups: &[
        LookupSpec {
            column: "Vendor",
            source_path: "/Vendors",
            source_label: "Vendors",
            key_field: "Vendor",
            label_field: "VendorName",
        },
        LookupSpec {
            column: "ProductId",
            source_path: "/ProductCatalogues",
            source_label: "ProductCatalogues",
            key_field: "ProductId",
            label_field: "ProductName",
        },
    ],
    integer_fields: &["ProductId", "Quantity"],
    // Computed server-side from quantity and unit price
    patch_excluded: &["TotalAmount"],
    icon: Some("orders"),
};

//! Shared fixtures: dummy aggregates, requests and a counting cache double
//!
//! The aggregates cover each terminal branch of the factory flow: a plain
//! success path, a tag-correct routine, a missing marker, a mistagged
//! routine, a missing initializer and a routine that produces nothing.

use agf_application::registry::factory_methods::{FactoryMethodEntry, FACTORY_METHODS};
use agf_domain::{
    AggregateDescriptor, AggregateMetadata, CacheProvider, CacheValue, DynValue, FactoryArg,
    FactoryRequest, ReadCache, RequestField,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Order: tag-correct routine, nullable field, exclude/extra exercise
// ============================================================================

#[derive(Debug, Default, PartialEq)]
pub struct Order {
    pub customer: String,
    pub sku: String,
    pub quantity: u32,
    pub note: Option<String>,
    pub order_number: u64,
}

static ORDER_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Order",
    aggregate_root: true,
    initializer: Some(order_seed),
};

fn order_seed() -> DynValue {
    Box::new(Order::default())
}

impl AggregateMetadata for Order {
    fn descriptor() -> &'static AggregateDescriptor {
        &ORDER_DESCRIPTOR
    }
}

fn create_order(_receiver: DynValue, args: Vec<FactoryArg>) -> Option<DynValue> {
    let mut args = args.into_iter();
    let customer = args
        .next()
        .expect("missing argument")
        .into_value::<String>("customer");
    let sku = args
        .next()
        .expect("missing argument")
        .into_value::<String>("sku");
    let quantity = args
        .next()
        .expect("missing argument")
        .into_value::<u32>("quantity");
    let note = args
        .next()
        .expect("missing argument")
        .into_optional::<String>("note");
    let order_number = args
        .next()
        .expect("missing argument")
        .into_value::<u64>("order_number");

    Some(Box::new(Order {
        customer,
        sku,
        quantity,
        note,
        order_number,
    }))
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static ORDER_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Order",
    method_for: Some("Order"),
    method_name: "create_order",
    construct: create_order,
};

/// Request carrying one field the routine does not take (`audit_comment`)
/// and omitting one it does (`order_number`).
pub struct PlaceOrder {
    pub customer: String,
    pub sku: String,
    pub quantity: u32,
    pub audit_comment: String,
    pub note: Option<String>,
}

impl FactoryRequest for PlaceOrder {
    fn type_name(&self) -> &'static str {
        "PlaceOrder"
    }

    fn fields(&self) -> Vec<RequestField> {
        vec![
            RequestField::required("customer", self.customer.clone()),
            RequestField::required("sku", self.sku.clone()),
            RequestField::required("quantity", self.quantity),
            RequestField::required("audit_comment", self.audit_comment.clone()),
            RequestField::nullable("note", self.note.clone()),
        ]
    }
}

// ============================================================================
// Customer: untagged routine, two matching fields, no options
// ============================================================================

#[derive(Debug, Default, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

static CUSTOMER_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Customer",
    aggregate_root: true,
    initializer: Some(customer_seed),
};

fn customer_seed() -> DynValue {
    Box::new(Customer::default())
}

impl AggregateMetadata for Customer {
    fn descriptor() -> &'static AggregateDescriptor {
        &CUSTOMER_DESCRIPTOR
    }
}

fn create_customer(_receiver: DynValue, args: Vec<FactoryArg>) -> Option<DynValue> {
    let mut args = args.into_iter();
    let name = args
        .next()
        .expect("missing argument")
        .into_value::<String>("name");
    let email = args
        .next()
        .expect("missing argument")
        .into_value::<String>("email");

    Some(Box::new(Customer { name, email }))
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static CUSTOMER_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Customer",
    method_for: None,
    method_name: "create_customer",
    construct: create_customer,
};

pub struct RegisterCustomer {
    pub name: String,
    pub email: String,
}

impl FactoryRequest for RegisterCustomer {
    fn type_name(&self) -> &'static str {
        "RegisterCustomer"
    }

    fn fields(&self) -> Vec<RequestField> {
        vec![
            RequestField::required("name", self.name.clone()),
            RequestField::required("email", self.email.clone()),
        ]
    }
}

// ============================================================================
// Draft: aggregate-root marker missing
// ============================================================================

#[derive(Debug, Default)]
pub struct Draft;

static DRAFT_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Draft",
    aggregate_root: false,
    initializer: Some(draft_seed),
};

fn draft_seed() -> DynValue {
    Box::new(Draft)
}

impl AggregateMetadata for Draft {
    fn descriptor() -> &'static AggregateDescriptor {
        &DRAFT_DESCRIPTOR
    }
}

// ============================================================================
// Shipment: only routine carries a tag naming a different type
// ============================================================================

#[derive(Debug, Default)]
pub struct Shipment;

static SHIPMENT_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Shipment",
    aggregate_root: true,
    initializer: Some(shipment_seed),
};

fn shipment_seed() -> DynValue {
    Box::new(Shipment)
}

impl AggregateMetadata for Shipment {
    fn descriptor() -> &'static AggregateDescriptor {
        &SHIPMENT_DESCRIPTOR
    }
}

fn create_shipment(_receiver: DynValue, _args: Vec<FactoryArg>) -> Option<DynValue> {
    Some(Box::new(Shipment))
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static SHIPMENT_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Shipment",
    method_for: Some("Parcel"),
    method_name: "create_shipment",
    construct: create_shipment,
};

// ============================================================================
// Invoice: routine registered, but no public parameterless initializer
// ============================================================================

#[derive(Debug)]
pub struct Invoice;

static INVOICE_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Invoice",
    aggregate_root: true,
    initializer: None,
};

impl AggregateMetadata for Invoice {
    fn descriptor() -> &'static AggregateDescriptor {
        &INVOICE_DESCRIPTOR
    }
}

fn create_invoice(_receiver: DynValue, _args: Vec<FactoryArg>) -> Option<DynValue> {
    Some(Box::new(Invoice))
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static INVOICE_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Invoice",
    method_for: None,
    method_name: "create_invoice",
    construct: create_invoice,
};

// ============================================================================
// Voucher: routine invokes but produces nothing
// ============================================================================

#[derive(Debug, Default)]
pub struct Voucher;

static VOUCHER_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Voucher",
    aggregate_root: true,
    initializer: Some(voucher_seed),
};

fn voucher_seed() -> DynValue {
    Box::new(Voucher)
}

impl AggregateMetadata for Voucher {
    fn descriptor() -> &'static AggregateDescriptor {
        &VOUCHER_DESCRIPTOR
    }
}

fn create_voucher(_receiver: DynValue, _args: Vec<FactoryArg>) -> Option<DynValue> {
    None
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static VOUCHER_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Voucher",
    method_for: None,
    method_name: "create_voucher",
    construct: create_voucher,
};

// ============================================================================
// Counting cache double
// ============================================================================

/// Cache provider double recording get/insert call counts
#[derive(Default)]
pub struct CountingCache {
    entries: Mutex<HashMap<String, CacheValue>>,
    gets: AtomicUsize,
    inserts: AtomicUsize,
}

impl CountingCache {
    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for CountingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingCache").finish_non_exhaustive()
    }
}

impl ReadCache for CountingCache {
    fn get(&self, key: &str) -> Option<CacheValue> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl CacheProvider for CountingCache {
    fn insert(&self, key: &str, value: CacheValue) -> Option<CacheValue> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if key.is_empty() {
            return None;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Some(value)
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().unwrap().remove(key).is_some()
    }
}

pub fn place_order() -> PlaceOrder {
    PlaceOrder {
        customer: "acme".into(),
        sku: "SKU-7".into(),
        quantity: 2,
        audit_comment: "checked by qa".into(),
        note: None,
    }
}

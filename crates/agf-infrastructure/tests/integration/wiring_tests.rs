//! End-to-end wiring tests: configuration to constructed aggregate

use agf_application::registry::factory_methods::{FactoryMethodEntry, FACTORY_METHODS};
use agf_domain::{
    AggregateDescriptor, AggregateMetadata, DynValue, FactoryArg, FactoryRequest, RequestField,
};
use agf_infrastructure::config::FactoryConfig;
use agf_infrastructure::wiring::build_entity_factory;

#[derive(Debug, Default)]
struct Ticket {
    subject: String,
}

static TICKET_DESCRIPTOR: AggregateDescriptor = AggregateDescriptor {
    type_name: "Ticket",
    aggregate_root: true,
    initializer: Some(ticket_seed),
};

fn ticket_seed() -> DynValue {
    Box::new(Ticket::default())
}

impl AggregateMetadata for Ticket {
    fn descriptor() -> &'static AggregateDescriptor {
        &TICKET_DESCRIPTOR
    }
}

fn create_ticket(_receiver: DynValue, args: Vec<FactoryArg>) -> Option<DynValue> {
    let mut args = args.into_iter();
    let subject = args.next()?.into_value::<String>("subject");
    Some(Box::new(Ticket { subject }))
}

#[linkme::distributed_slice(FACTORY_METHODS)]
static TICKET_FACTORY: FactoryMethodEntry = FactoryMethodEntry {
    aggregate: "Ticket",
    method_for: None,
    method_name: "create_ticket",
    construct: create_ticket,
};

struct OpenTicket {
    subject: String,
}

impl FactoryRequest for OpenTicket {
    fn type_name(&self) -> &'static str {
        "OpenTicket"
    }

    fn fields(&self) -> Vec<RequestField> {
        vec![RequestField::required("subject", self.subject.clone())]
    }
}

#[test]
fn configured_factory_builds_and_memoizes() {
    let factory = build_entity_factory(&FactoryConfig::default()).expect("factory must wire");
    let request = OpenTicket {
        subject: "printer on fire".into(),
    };

    let first = factory.create_entity::<_, Ticket>(&request).unwrap();
    let second = factory.create_entity::<_, Ticket>(&request).unwrap();

    assert_eq!(first.entity.subject, "printer on fire");
    assert!(!first.cache_lookup.hit);
    assert!(second.cache_lookup.hit);
}

#[test]
fn disabled_cache_wires_the_null_provider() {
    let mut config = FactoryConfig::default();
    config.cache.enabled = false;

    let factory = build_entity_factory(&config).expect("factory must wire");
    let request = OpenTicket {
        subject: "lost badge".into(),
    };

    let first = factory.create_entity::<_, Ticket>(&request).unwrap();
    let second = factory.create_entity::<_, Ticket>(&request).unwrap();

    // Every resolution takes the scan path when caching is off
    assert!(!first.cache_lookup.hit);
    assert!(!second.cache_lookup.hit);
}

#[test]
fn unknown_provider_surfaces_as_configuration_error() {
    let mut config = FactoryConfig::default();
    config.cache.provider = "redis".to_string();

    let err = build_entity_factory(&config).unwrap_err();
    assert!(err.to_string().contains("Unknown cache provider"));
}

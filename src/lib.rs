//! Typed records for the Routing Policy Specification Language.
//!
//! This crate models the records kept by Internet registries in WHOIS
//! databases, such as address ranges, autonomous systems, routes, and the
//! contacts and maintainers responsible for them, and reads them from the
//! text form WHOIS servers respond with.
//!
//! # Modules
//!
//! * [base] contains the generic record model: schemas describing record
//!   types, the records themselves with their fields, and the registry
//!   mapping type names to schemas,
//! * [whois] contains the decoder turning WHOIS responses into records, and
//! * [types] contains the schemas of the record types of the APNIC
//!   database together with the validators for their attributes.
//!
//! # Example
//!
//! ```
//! use rpsl::base::Value;
//!
//! let registry = rpsl::types::standard().unwrap();
//! let mut route = registry
//!     .schema("route")
//!     .unwrap()
//!     .new_record("AS64500 192.0.2.0/24")
//!     .unwrap();
//! route.add("descr", "Example route").unwrap();
//! route.add("mnt-by", "maint-example").unwrap();
//! route.set("source", "apnic").unwrap();
//! assert!(route.is_valid());
//! assert_eq!(
//!     route.to_string(),
//!     "route:           192.0.2.0/24\n\
//!      descr:           Example route\n\
//!      origin:          AS64500\n\
//!      mnt-by:          MAINT-EXAMPLE\n\
//!      source:          APNIC\n"
//! );
//! route.set("descr", Value::Null).unwrap();
//! assert!(!route.is_valid());
//! ```
//!
//! # Features
//!
//! * `serde`: enables serialization of records as the list of their
//!   attributes, each a map with a `name` and a `value` entry.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod types;
pub mod whois;

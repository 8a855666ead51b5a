//! The record types of the APNIC WHOIS database.
//!
//! Each function in the submodules returns the [`Schema`] of one record
//! type. The attributes, their cardinality, and whether they are required
//! follow the APNIC database documentation. Attributes that appear in many
//! types, such as `country`, `mnt-by`, or `e-mail`, get the same validator
//! everywhere, as provided by [`check::common`].
//!
//! All types end with an optional `changed` attribute, the `source`
//! attribute, and the generated `last-modified` attribute.
//!
//! [`standard`] returns a [`Registry`] with all the types:
//!
//! ```
//! let registry = rpsl::types::standard().unwrap();
//! let mut person = registry.create("person").unwrap();
//! person.set("nic-hdl", "xl1-ap").unwrap();
//! assert_eq!(person.primary_key().as_deref(), Some("XL1-AP"));
//! ```

use crate::base::error::SchemaError;
use crate::base::field::FieldDef;
use crate::base::registry::Registry;
use crate::base::schema::{Schema, SchemaBuilder};
use std::sync::Arc;

pub use self::contact::{irt, key_cert, mntner, organisation, person, role};
pub use self::network::{
    as_block, aut_num, domain, inet6num, inet_rtr, inetnum, route, route6,
};
pub use self::poem::{poem, poetic_form};
pub use self::set::{as_set, filter_set, peering_set, route_set, rtr_set};

pub mod check;
pub mod contact;
pub mod network;
pub mod poem;
pub mod set;

//------------ Catalogue -----------------------------------------------------

/// The schema constructors of all standard types.
const CATALOGUE: &[fn() -> Result<Arc<Schema>, SchemaError>] = &[
    as_block,
    as_set,
    aut_num,
    domain,
    filter_set,
    inet6num,
    inet_rtr,
    inetnum,
    irt,
    key_cert,
    mntner,
    organisation,
    peering_set,
    person,
    poem,
    poetic_form,
    role,
    route,
    route6,
    route_set,
    rtr_set,
];

/// Returns the schemas of all standard types.
pub fn schemas() -> Result<Vec<Arc<Schema>>, SchemaError> {
    CATALOGUE.iter().map(|schema| schema()).collect()
}

/// Returns a registry containing all standard types.
pub fn standard() -> Result<Registry, SchemaError> {
    Ok(schemas()?.into_iter().collect())
}

//------------ Helpers -------------------------------------------------------

/// Attaches the common validator for the attribute, if there is one.
fn common(def: FieldDef) -> FieldDef {
    match check::common(def.name()) {
        Some(validator) => def.validate(validator),
        None => def,
    }
}

/// Creates an optional, single-valued attribute.
fn single(name: &str) -> FieldDef {
    common(FieldDef::single(name))
}

/// Creates a primary key attribute.
///
/// Once defined, the value of the attribute can only be changed by
/// resetting it.
fn key(name: &str) -> FieldDef {
    single(name).required().locked()
}

/// Creates an optional, multi-valued attribute.
fn multiple(name: &str) -> FieldDef {
    common(FieldDef::multiple(name))
}

/// Adds the trailing attributes and builds the schema.
fn finish(builder: SchemaBuilder) -> Result<Arc<Schema>, SchemaError> {
    builder
        .field(multiple("changed"))
        .field(single("source").required())
        .field(FieldDef::single("last-modified").generated().locked())
        .build()
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalogue() {
        let registry = standard().unwrap();
        assert_eq!(registry.len(), 21);
        for name in registry.type_names() {
            let schema = registry.schema(name).unwrap();
            let names: Vec<_> = schema.fields().map(FieldDef::name).collect();
            assert!(
                names.ends_with(&["changed", "source", "last-modified"]),
                "{}",
                name
            );
            assert!(schema.field("source").unwrap().is_required());
            assert!(schema.field("last-modified").unwrap().is_generated());
            assert!(schema.field("last-modified").unwrap().is_locked());
            for key in schema.primary_key() {
                assert!(schema.field(key).unwrap().is_locked(), "{}", name);
            }
        }
    }

    #[test]
    fn locked_key() {
        let registry = standard().unwrap();
        let mut rec = registry.create("person").unwrap();
        rec.set("nic-hdl", "xl1-ap").unwrap();
        rec.set("nic-hdl", "xl2-ap").unwrap();
        rec.add("last-modified", "2017-01-01T00:00:00Z").unwrap();
        rec.add("last-modified", "2018-01-01T00:00:00Z").unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("XL1-AP"));
        assert_eq!(
            rec.get("last-modified").unwrap().unwrap(),
            "2017-01-01T00:00:00Z"
        );
        rec.reset("nic-hdl").unwrap();
        rec.set("nic-hdl", "xl2-ap").unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("XL2-AP"));

        let mut rec = registry.create("key-cert").unwrap();
        rec.add("owner", "First Owner").unwrap();
        rec.add("owner", "Second Owner").unwrap();
        assert_eq!(rec.get("owner").unwrap().unwrap().to_vec().len(), 2);
    }

    #[test]
    fn type_dispatch() {
        let registry = standard().unwrap();
        for name in registry.type_names() {
            if name == "person" || name == "role" {
                continue;
            }
            let schema = registry.schema(name).unwrap();
            assert_eq!(schema.primary_key()[0], name);
            assert_eq!(schema.fields().next().unwrap().name(), name);
        }
    }

    #[test]
    fn common_validators() {
        let mut rec = standard().unwrap().create("mntner").unwrap();
        rec.set("country", "hk").unwrap();
        rec.set("mnt-by", "maint-example-hk").unwrap();
        rec.set("source", "apnic").unwrap();
        assert_eq!(rec.get("country").unwrap().unwrap(), "HK");
        assert_eq!(rec.get("mnt-by").unwrap().unwrap(), ["MAINT-EXAMPLE-HK"]);
        assert_eq!(rec.get("source").unwrap().unwrap(), "APNIC");
        assert!(rec.set("upd-to", "nobody").is_err());
    }
}

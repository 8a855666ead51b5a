//! Record types describing sets of other objects.

use super::check;
use super::{finish, key, multiple, single};
use crate::base::error::SchemaError;
use crate::base::field::Field;
use crate::base::record::Record;
use crate::base::schema::{Schema, SchemaBuilder};
use std::sync::Arc;

/// Returns the builder for a set type with the common set attributes.
fn set_builder(type_name: &str) -> SchemaBuilder {
    Schema::builder(type_name)
        .field(key(type_name))
        .field(multiple("descr").required())
}

/// Adds the contact and maintainer attributes shared by all sets.
fn set_contacts(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .field(multiple("remarks"))
        .field(multiple("org"))
        .field(multiple("tech-c").required())
        .field(multiple("admin-c").required())
        .field(multiple("notify"))
        .field(multiple("mnt-by").required())
        .field(multiple("mnt-lower"))
}

/// A set of autonomous systems.
pub fn as_set() -> Result<Arc<Schema>, SchemaError> {
    finish(
        set_contacts(
            set_builder("as-set")
                .field(multiple("members"))
                .field(multiple("mbrs-by-ref")),
        )
        .primary_key(["as-set"]),
    )
}

/// A set of routes described by a filter expression.
pub fn filter_set() -> Result<Arc<Schema>, SchemaError> {
    finish(
        set_contacts(
            Schema::builder("filter-set")
                .field(key("filter-set").validate(check::filter_set))
                .field(multiple("descr").required())
                .field(single("filter"))
                .field(single("mp-filter")),
        )
        .primary_key(["filter-set"]),
    )
}

/// A set of peerings.
///
/// A peering-set is only valid if it has at least one `peering` or
/// `mp-peering` attribute.
pub fn peering_set() -> Result<Arc<Schema>, SchemaError> {
    finish(
        set_contacts(
            Schema::builder("peering-set")
                .field(key("peering-set").validate(check::peering_set))
                .field(multiple("descr").required())
                .field(multiple("peering"))
                .field(multiple("mp-peering")),
        )
        .primary_key(["peering-set"])
        .check(has_peering),
    )
}

fn has_peering(record: &Record) -> bool {
    ["peering", "mp-peering"]
        .iter()
        .any(|name| record.field(name).map_or(false, Field::is_defined))
}

/// A set of routes.
pub fn route_set() -> Result<Arc<Schema>, SchemaError> {
    finish(
        set_contacts(
            set_builder("route-set")
                .field(multiple("members"))
                .field(multiple("mp-members"))
                .field(multiple("mbrs-by-ref")),
        )
        .primary_key(["route-set"]),
    )
}

/// A set of routers.
pub fn rtr_set() -> Result<Arc<Schema>, SchemaError> {
    finish(
        set_contacts(
            set_builder("rtr-set")
                .field(multiple("members"))
                .field(multiple("mp-members"))
                .field(multiple("mbrs-by-ref")),
        )
        .primary_key(["rtr-set"]),
    )
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn peering_required() {
        let mut rec = peering_set().unwrap().new_record("prng-example").unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("PRNG-EXAMPLE"));
        rec.add("descr", "Example peerings").unwrap();
        rec.add("tech-c", "XL1-AP").unwrap();
        rec.add("admin-c", "XL1-AP").unwrap();
        rec.add("mnt-by", "MAINT-EXAMPLE-HK").unwrap();
        rec.set("source", "APNIC").unwrap();
        assert!(!rec.is_valid());
        rec.add("mp-peering", "AS135 at 2001:db8::1").unwrap();
        assert!(rec.is_valid());
    }

    #[test]
    fn set_names() {
        assert!(filter_set().unwrap().new_record("example").is_err());
        let rec = as_set().unwrap().new_record("AS-EXAMPLE").unwrap();
        assert_eq!(
            rec.names().take(4).collect::<Vec<_>>(),
            ["as-set", "descr", "members", "mbrs-by-ref"]
        );
    }
}

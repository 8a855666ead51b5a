//! Record types describing number resources and routing.

use super::check;
use super::{finish, key, multiple, single};
use crate::base::error::SchemaError;
use crate::base::schema::Schema;
use std::sync::Arc;

/// A range of AS numbers.
pub fn as_block() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("as-block")
            .field(key("as-block"))
            .field(multiple("descr"))
            .field(multiple("remarks"))
            .field(single("country"))
            .field(multiple("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .field(multiple("mnt-lower"))
            .primary_key(["as-block"]),
    )
}

/// An autonomous system and its routing policy.
pub fn aut_num() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("aut-num")
            .field(key("aut-num").validate(check::as_number))
            .field(single("as-name").required())
            .field(multiple("descr").required())
            .field(single("country").required())
            .field(multiple("member-of"))
            .field(multiple("import-via"))
            .field(multiple("import"))
            .field(multiple("mp-import"))
            .field(multiple("export-via"))
            .field(multiple("export"))
            .field(multiple("mp-export"))
            .field(multiple("default"))
            .field(multiple("mp-default"))
            .field(multiple("remarks"))
            .field(single("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(single("abuse-c"))
            .field(multiple("notify"))
            .field(multiple("mnt-lower"))
            .field(multiple("mnt-routes"))
            .field(multiple("mnt-by").required())
            .field(multiple("mnt-irt").required())
            .primary_key(["aut-num"]),
    )
}

/// A reverse DNS delegation.
pub fn domain() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("domain")
            .field(key("domain").validate(check::reverse_domain))
            .field(multiple("descr").required())
            .field(single("country"))
            .field(multiple("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(multiple("zone-c").required())
            .field(multiple("nserver"))
            .field(multiple("ds-rdata"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .field(multiple("mnt-lower"))
            .primary_key(["domain"]),
    )
}

/// A range of IPv6 addresses.
pub fn inet6num() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("inet6num")
            .field(key("inet6num").validate(check::ipv6_range))
            .field(single("netname").required())
            .field(multiple("descr").required())
            .field(multiple("country").required())
            .field(single("geoloc"))
            .field(multiple("language"))
            .field(single("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(single("abuse-c"))
            .field(single("status").required().validate(check::inet6num_status))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .field(multiple("mnt-lower"))
            .field(multiple("mnt-routes"))
            .field(multiple("mnt-irt").required())
            .primary_key(["inet6num"]),
    )
}

/// A router.
pub fn inet_rtr() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("inet-rtr")
            .field(key("inet-rtr"))
            .field(multiple("descr").required())
            .field(multiple("alias"))
            .field(single("local-as").required().validate(check::as_number))
            .field(multiple("ifaddr").required())
            .field(multiple("interface"))
            .field(multiple("peer"))
            .field(multiple("mp-peer"))
            .field(multiple("member-of"))
            .field(multiple("remarks"))
            .field(multiple("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .primary_key(["inet-rtr"]),
    )
}

/// A range of IPv4 addresses.
///
/// The range may be given as a CIDR prefix, it is stored as a range.
pub fn inetnum() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("inetnum")
            .field(key("inetnum").validate(check::ipv4_range))
            .field(single("netname").required())
            .field(multiple("descr").required())
            .field(multiple("country").required())
            .field(single("geoloc"))
            .field(multiple("language"))
            .field(single("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(single("abuse-c"))
            .field(single("status").required().validate(check::inetnum_status))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .field(multiple("mnt-lower"))
            .field(multiple("mnt-routes"))
            .field(multiple("mnt-domains"))
            .field(multiple("mnt-irt").required())
            .primary_key(["inetnum"]),
    )
}

/// An IPv4 route and its originating AS.
///
/// The primary key is the prefix followed by the origin. A record can be
/// created from both in a single string, in either order.
pub fn route() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("route")
            .field(key("route").validate(check::ipv4_route))
            .field(multiple("descr").required())
            .field(single("country"))
            .field(key("origin").validate(check::as_number))
            .field(multiple("holes"))
            .field(multiple("member-of"))
            .field(multiple("inject"))
            .field(single("aggr-mtd"))
            .field(single("aggr-bndry"))
            .field(single("export-comps"))
            .field(single("components"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("mnt-lower"))
            .field(multiple("mnt-routes"))
            .field(multiple("mnt-by").required())
            .primary_key(["route", "origin"])
            .key_parser(check::route_key),
    )
}

/// An IPv6 route and its originating AS.
pub fn route6() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("route6")
            .field(key("route6").validate(check::ipv6_route))
            .field(multiple("descr").required())
            .field(single("country"))
            .field(key("origin").validate(check::as_number))
            .field(multiple("holes"))
            .field(multiple("member-of"))
            .field(multiple("inject"))
            .field(single("aggr-mtd"))
            .field(single("aggr-bndry"))
            .field(single("export-comps"))
            .field(single("components"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("mnt-lower"))
            .field(multiple("mnt-routes"))
            .field(multiple("mnt-by").required())
            .primary_key(["route6", "origin"])
            .key_parser(check::route_key),
    )
}

//============ Testing =======================================================

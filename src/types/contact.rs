//! Record types describing people, roles, and authorisation.

use super::check;
use super::{finish, key, multiple, single};
use crate::base::error::SchemaError;
use crate::base::field::FieldDef;
use crate::base::schema::Schema;
use std::sync::Arc;

/// An incident response team.
pub fn irt() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("irt")
            .field(key("irt").validate(check::upper))
            .field(multiple("address").required())
            .field(multiple("phone"))
            .field(multiple("fax-no"))
            .field(multiple("e-mail").required())
            .field(multiple("abuse-mailbox").required())
            .field(multiple("signature"))
            .field(multiple("encryption"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(multiple("auth").required())
            .field(multiple("remarks"))
            .field(multiple("irt-nfy"))
            .field(multiple("notify"))
            .field(multiple("mnt-by").required())
            .primary_key(["irt"]),
    )
}

/// A public key certificate.
///
/// The `method`, `owner`, and `fingerpr` attributes are derived from the
/// certificate by the registry.
pub fn key_cert() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("key-cert")
            .field(key("key-cert").validate(check::key_cert))
            .field(FieldDef::single("method").generated().locked())
            .field(FieldDef::multiple("owner").generated())
            .field(FieldDef::single("fingerpr").generated().locked())
            .field(multiple("certif").required())
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("admin-c"))
            .field(multiple("tech-c"))
            .field(multiple("mnt-by").required())
            .primary_key(["key-cert"]),
    )
}

/// A maintainer authorising changes to other records.
pub fn mntner() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("mntner")
            .field(key("mntner"))
            .field(multiple("descr").required())
            .field(single("country"))
            .field(multiple("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c"))
            .field(multiple("upd-to").required())
            .field(multiple("mnt-nfy"))
            .field(multiple("auth").required())
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("abuse-mailbox"))
            .field(multiple("mnt-by").required())
            .field(single("referral-by"))
            .primary_key(["mntner"]),
    )
}

/// An organisation holding resources.
pub fn organisation() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("organisation")
            .field(key("organisation"))
            .field(single("org-name").required())
            .field(single("org-type"))
            .field(multiple("descr"))
            .field(single("country").required())
            .field(multiple("remarks"))
            .field(multiple("address").required())
            .field(multiple("phone"))
            .field(multiple("fax-no"))
            .field(multiple("e-mail").required())
            .field(multiple("org"))
            .field(multiple("admin-c"))
            .field(multiple("tech-c"))
            .field(multiple("ref-nfy"))
            .field(multiple("mnt-ref").required())
            .field(multiple("notify"))
            .field(multiple("abuse-mailbox"))
            .field(multiple("mnt-by").required())
            .primary_key(["organisation"]),
    )
}

/// A contact person.
///
/// The primary key is the NIC handle which is usually assigned by the
/// registry.
pub fn person() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("person")
            .field(single("person").required())
            .field(multiple("address").required())
            .field(single("country").required())
            .field(multiple("phone").required())
            .field(multiple("fax-no"))
            .field(multiple("e-mail").required())
            .field(multiple("org"))
            .field(key("nic-hdl"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("abuse-mailbox"))
            .field(multiple("mnt-by").required())
            .primary_key(["nic-hdl"]),
    )
}

/// A role played by one or more people.
pub fn role() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("role")
            .field(single("role").required())
            .field(multiple("address").required())
            .field(single("country").required())
            .field(multiple("phone").required())
            .field(multiple("fax-no"))
            .field(multiple("e-mail").required())
            .field(multiple("org"))
            .field(multiple("admin-c").required())
            .field(multiple("tech-c").required())
            .field(key("nic-hdl"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(multiple("abuse-mailbox"))
            .field(multiple("mnt-by").required())
            .primary_key(["nic-hdl"]),
    )
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::value::Value;

    #[test]
    fn person_without_handle() {
        let mut rec = person().unwrap().new_record(Value::Null).unwrap();
        assert_eq!(rec.primary_key(), None);
        rec.set("nic-hdl", "auto-1").unwrap();
        assert_eq!(rec.primary_key().as_deref(), Some("AUTO-1"));
    }

    #[test]
    fn person_validity() {
        let mut rec = person().unwrap().new_record("XL1-AP").unwrap();
        rec.set("person", "Example Contact").unwrap();
        rec.add("address", "1 Example Road\nHong Kong").unwrap();
        rec.set("country", "hk").unwrap();
        rec.add("phone", "+852 2123 4567").unwrap();
        rec.add("e-mail", "contact@example.com").unwrap();
        assert!(!rec.is_valid());
        rec.add("mnt-by", "MAINT-EXAMPLE-HK").unwrap();
        assert!(!rec.is_valid());
        rec.set("source", "apnic").unwrap();
        assert!(rec.is_valid());
        assert_eq!(rec.get("address").unwrap().unwrap().to_vec().len(), 2);
    }

    #[test]
    fn key_cert_generated() {
        let mut rec = key_cert().unwrap().new_record("pgpkey-1a2b3c4d").unwrap();
        rec.set("method", "PGP").unwrap();
        rec.add("owner", "Example Contact <contact@example.com>").unwrap();
        rec.add("certif", "-----BEGIN PGP PUBLIC KEY BLOCK-----").unwrap();
        assert_eq!(
            rec.attributes().iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            ["key-cert", "certif"]
        );
        assert_eq!(rec.get("method").unwrap().unwrap(), "PGP");
    }
}

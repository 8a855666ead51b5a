//! The poem and poetic-form record types.

use super::check;
use super::{finish, key, multiple, single};
use crate::base::error::SchemaError;
use crate::base::schema::Schema;
use std::sync::Arc;

/// A poem.
pub fn poem() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("poem")
            .field(key("poem").validate(check::upper))
            .field(multiple("descr"))
            .field(single("form").required().validate(check::poetic_form))
            .field(multiple("text").required())
            .field(multiple("author"))
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(single("mnt-by").required())
            .primary_key(["poem"]),
    )
}

/// A poetic form.
pub fn poetic_form() -> Result<Arc<Schema>, SchemaError> {
    finish(
        Schema::builder("poetic-form")
            .field(key("poetic-form").validate(check::poetic_form))
            .field(multiple("descr"))
            .field(multiple("admin-c").required())
            .field(multiple("remarks"))
            .field(multiple("notify"))
            .field(single("mnt-by").required())
            .primary_key(["poetic-form"]),
    )
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn poem_text() {
        let mut rec = poem().unwrap().new_record("poem-example").unwrap();
        rec.set("form", "form-haiku").unwrap();
        rec.set("text", "an old silent pond\na frog jumps into the pond\nsplash! silence again")
            .unwrap();
        rec.set("mnt-by", "maint-example").unwrap();
        rec.set("source", "apnic").unwrap();
        assert!(rec.is_valid());
        assert_eq!(rec.field("text").unwrap().count(), 3);
        assert_eq!(rec.get("mnt-by").unwrap().unwrap(), "MAINT-EXAMPLE");
    }
}

//! Reading records from WHOIS responses.
//!
//! A WHOIS response is text made of blocks of `name: value` lines separated
//! by blank lines. Each block describes one record. The first attribute
//! of a block names its type and the block conventionally ends with a
//! `source` attribute. Lines starting with `%` are comments, except for
//! error markers such as `%ERROR:101: no entries found` which turn into
//! [`Error::RemoteError`][crate::base::Error::RemoteError].
//!
//! The [`Decoder`] turns such text into [`Record`][crate::base::Record]s
//! using the record types of a [`Registry`][crate::base::Registry]:
//!
//! ```
//! use rpsl::whois::Decoder;
//!
//! let registry = rpsl::types::standard().unwrap();
//! let text = "\
//!     % Information related to 'AS135'\n\
//!     \n\
//!     aut-num:        AS135\n\
//!     as-name:        EXAMPLE-AS\n\
//!     descr:          Example network\n\
//!     country:        HK\n\
//!     admin-c:        XL1-AP\n\
//!     tech-c:         XL1-AP\n\
//!     mnt-by:         MAINT-EXAMPLE-HK\n\
//!     mnt-irt:        IRT-EXAMPLE-HK\n\
//!     last-modified:  2017-11-06T05:02:44Z\n\
//!     source:         APNIC\n\
//! ";
//! let record = Decoder::new(&registry).decode(text, None).unwrap().unwrap();
//! assert_eq!(record.type_name(), "aut-num");
//! assert_eq!(record.primary_key().as_deref(), Some("AS135"));
//! assert!(record.is_valid());
//! ```

pub use self::decoder::Decoder;
pub use self::scan::Line;
pub use self::set::{Iter, RecordSet};

pub mod decoder;
pub mod scan;
pub mod set;

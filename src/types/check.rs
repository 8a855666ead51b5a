//! Validators for attribute values.
//!
//! Each function takes the textual form of a value and returns the value to
//! store, normalized where the attribute has a canonical form, or an
//! [`InvalidValue`] describing why the value was rejected.

use crate::base::error::InvalidValue;
use crate::base::field::Validator;
use std::net::{Ipv4Addr, Ipv6Addr};
use time::OffsetDateTime;

type Result = std::result::Result<String, InvalidValue>;

//------------ Common Attributes ---------------------------------------------

/// Returns the validator used for an attribute by all record types.
pub fn common(name: &str) -> Option<Validator> {
    match name {
        "country" => Some(country),
        "notify" | "e-mail" | "abuse-mailbox" | "upd-to" | "mnt-nfy"
        | "irt-nfy" | "ref-nfy" => Some(email),
        "phone" | "fax-no" => Some(phone),
        "admin-c" | "tech-c" | "zone-c" | "abuse-c" | "mnt-by"
        | "mnt-lower" | "mnt-irt" | "mnt-ref" | "mnt-domains" | "org"
        | "referral-by" | "nic-hdl" | "mntner" | "organisation" => {
            Some(handle)
        }
        "changed" => Some(changed),
        "source" => Some(upper),
        _ => None,
    }
}

/// Converts the value to upper case.
pub fn upper(input: &str) -> Result {
    Ok(input.to_uppercase())
}

/// A two-letter country code, converted to upper case.
pub fn country(input: &str) -> Result {
    if input.len() == 2 && input.bytes().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(input.to_ascii_uppercase())
    } else {
        Err(InvalidValue::new("Invalid country code"))
    }
}

/// An e-mail address.
pub fn email(input: &str) -> Result {
    if is_email(input) {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid email address"))
    }
}

fn is_email(input: &str) -> bool {
    const LOCAL: &str = ".!#$%&'*+/=?^_`{|}~-";

    let (local, domain) = match input.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || LOCAL.contains(ch))
    {
        return false;
    }
    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty()
            || label.starts_with('-')
            || label.ends_with('-')
            || !label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        {
            return false;
        }
        labels += 1;
    }
    labels > 1
}

/// An international phone or fax number.
///
/// The number starts with `+` and the country code and consists of groups
/// of digits separated by a single space, dot, or dash. It may be followed
/// by an extension, e.g., `+681 368 0844 ext. 32`.
pub fn phone(input: &str) -> Result {
    let (number, ext) = match input.split_once(" ext. ") {
        Some((number, ext)) => (number, Some(ext)),
        None => (input, None),
    };
    let valid_number = match number.strip_prefix('+') {
        Some(digits) => {
            digits.starts_with(|ch: char| ('1'..='9').contains(&ch))
                && digits
                    .split(|ch: char| ch == ' ' || ch == '.' || ch == '-')
                    .all(|group| {
                        !group.is_empty()
                            && group.bytes().all(|ch| ch.is_ascii_digit())
                    })
        }
        None => false,
    };
    let valid_ext = ext.map_or(true, |ext| {
        !ext.is_empty() && ext.bytes().all(|ch| ch.is_ascii_digit())
    });
    if valid_number && valid_ext {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid phone/fax number"))
    }
}

/// The handle of another record, converted to upper case.
pub fn handle(input: &str) -> Result {
    if !input.is_empty()
        && input.bytes().all(|ch| ch.is_ascii_alphanumeric() || ch == b'-')
    {
        Ok(input.to_ascii_uppercase())
    } else {
        Err(InvalidValue::new("Invalid RPSL object handle"))
    }
}

/// An e-mail address followed by an optional date.
///
/// The date is given as `YYYYMMDD` or `YYMMDD`. If it is missing, the
/// current date is appended.
pub fn changed(input: &str) -> Result {
    let err = || InvalidValue::new("Invalid email or date format");
    let input = input.trim();
    let address =
        input.trim_end_matches(|ch: char| ch.is_ascii_digit()).trim_end();
    let date = &input[input
        .trim_end_matches(|ch: char| ch.is_ascii_digit())
        .len()..];
    if !is_email(address) {
        return Err(err());
    }
    match date.len() {
        0 => Ok(format!("{} {}", address, today())),
        6 | 8 => Ok(input.into()),
        _ => Err(err()),
    }
}

/// Returns the current UTC date as `YYYYMMDD`.
fn today() -> String {
    let date = OffsetDateTime::now_utc().date();
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

//------------ Numbers -------------------------------------------------------

/// An AS number such as `AS135`, converted to upper case.
pub fn as_number(input: &str) -> Result {
    let input = input.to_ascii_uppercase();
    let valid = match input.strip_prefix("AS") {
        Some(num) => !num.is_empty() && num.bytes().all(|ch| ch.is_ascii_digit()),
        None => false,
    };
    if valid {
        Ok(input)
    } else {
        Err(InvalidValue::new("Invalid AS number"))
    }
}

/// An IPv4 address range.
///
/// The range is either given as two addresses separated by a dash, which
/// is normalized to `first - last`, or as a CIDR prefix which is converted
/// into such a range.
pub fn ipv4_range(input: &str) -> Result {
    let range = if input.contains('/') {
        ipv4_cidr(input)?
    } else {
        input.into()
    };
    let mut parts = range.split('-').map(str::trim);
    if let (Some(first), Some(last), None) = (parts.next(), parts.next(), parts.next()) {
        if let (Ok(first), Ok(last)) =
            (first.parse::<Ipv4Addr>(), last.parse::<Ipv4Addr>())
        {
            return Ok(format!("{} - {}", first, last));
        }
    }
    Err(InvalidValue::new("Invalid IPv4 address range"))
}

fn ipv4_cidr(input: &str) -> Result {
    let err = || InvalidValue::new("Invalid IPv4 CIDR");
    let (addr, len) = input.split_once('/').ok_or_else(err)?;
    let addr = addr.trim().parse::<Ipv4Addr>().map_err(|_| err())?;
    let len = len.trim().parse::<u32>().map_err(|_| err())?;
    if len > 32 {
        return Err(err());
    }
    let end = u64::from(u32::from(addr)) + (1u64 << (32 - len)) - 1;
    let end = u32::try_from(end).map_err(|_| err())?;
    Ok(format!("{} - {}", addr, Ipv4Addr::from(end)))
}

/// Returns whether the input is `addr/len` with an address of type `A`.
fn is_prefix<A: std::str::FromStr>(input: &str, max_len: u8) -> bool {
    match input.split_once('/') {
        Some((addr, len)) => {
            addr.parse::<A>().is_ok()
                && len.parse::<u8>().map_or(false, |len| len <= max_len)
        }
        None => false,
    }
}

/// An IPv6 address range given as a prefix.
pub fn ipv6_range(input: &str) -> Result {
    if is_prefix::<Ipv6Addr>(input, 128) {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid IPv6 address range"))
    }
}

/// An IPv4 route prefix.
pub fn ipv4_route(input: &str) -> Result {
    if is_prefix::<Ipv4Addr>(input, 32) {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid IPv4 route"))
    }
}

/// An IPv6 route prefix.
pub fn ipv6_route(input: &str) -> Result {
    if is_prefix::<Ipv6Addr>(input, 128) {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid IPv6 route"))
    }
}

const STATUS: &[&str] = &[
    "ALLOCATED PORTABLE",
    "ALLOCATED NON-PORTABLE",
    "ASSIGNED PORTABLE",
    "ASSIGNED NON-PORTABLE",
];

fn status(input: &str, msg: &'static str) -> Result {
    let input = input.to_uppercase();
    if STATUS.contains(&input.as_str()) {
        Ok(input)
    } else {
        Err(InvalidValue::new(msg))
    }
}

/// The status of an inetnum record.
pub fn inetnum_status(input: &str) -> Result {
    status(input, "Invalid status for the Inetnum object")
}

/// The status of an inet6num record.
pub fn inet6num_status(input: &str) -> Result {
    status(input, "Invalid status for the Inet6num object")
}

/// A reverse delegation domain.
pub fn reverse_domain(input: &str) -> Result {
    if input.contains(".in-addr.arpa") || input.contains(".ip6.arpa") {
        Ok(input.into())
    } else {
        Err(InvalidValue::new("Invalid reverse delegation"))
    }
}

//------------ Names ---------------------------------------------------------

fn prefixed(input: &str, prefix: &str, msg: &'static str) -> Result {
    let input = input.to_uppercase();
    if input.starts_with(prefix) {
        Ok(input)
    } else {
        Err(InvalidValue::new(msg))
    }
}

/// The name of a filter-set, starting with `FLTR-`.
pub fn filter_set(input: &str) -> Result {
    prefixed(input, "FLTR-", "Invalid filter-set name")
}

/// The name of a peering-set, starting with `PRNG-`.
pub fn peering_set(input: &str) -> Result {
    prefixed(input, "PRNG-", "Invalid peering-set name")
}

/// The handle of a poetic form, starting with `FORM-`.
pub fn poetic_form(input: &str) -> Result {
    prefixed(input, "FORM-", "Invalid poetic-form handle")
}

/// The ID of a key-cert, `PGPKEY-` followed by eight hex digits.
pub fn key_cert(input: &str) -> Result {
    let input = input.to_uppercase();
    let valid = match input.strip_prefix("PGPKEY-") {
        Some(id) => id.len() == 8 && id.bytes().all(|ch| ch.is_ascii_hexdigit()),
        None => false,
    };
    if valid {
        Ok(input)
    } else {
        Err(InvalidValue::new("Invalid key-cert ID"))
    }
}

//------------ Keys ----------------------------------------------------------

/// Splits the combined key of a route into prefix and origin.
///
/// The origin is the first AS number anywhere in the input. The prefix is
/// what remains once it is removed. Both are returned unvalidated.
pub fn route_key(
    input: &str,
) -> std::result::Result<Vec<String>, InvalidValue> {
    let upper = input.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let start = (0..bytes.len().saturating_sub(2))
        .find(|&i| bytes[i..].starts_with(b"AS") && bytes[i + 2].is_ascii_digit())
        .ok_or_else(|| InvalidValue::new("Invalid AS number"))?;
    let end = start
        + 2
        + bytes[start + 2..]
            .iter()
            .take_while(|ch| ch.is_ascii_digit())
            .count();
    let prefix = format!("{}{}", &input[..start], &input[end..]);
    Ok(vec![prefix.trim().into(), upper[start..end].into()])
}

//============ Testing =======================================================

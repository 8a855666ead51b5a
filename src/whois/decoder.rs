//! Decoding records from WHOIS responses.

use super::scan::Line;
use super::set::RecordSet;
use crate::base::error::{Error, Result};
use crate::base::record::Record;
use crate::base::registry::Registry;
use tracing::{debug, trace, warn};

//------------ Decoder -------------------------------------------------------

/// A decoder for the text form of records.
///
/// The decoder creates records of the types found in its [`Registry`].
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    registry: &'a Registry,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder using the given registry.
    pub fn new(registry: &'a Registry) -> Self {
        Decoder { registry }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Decodes the first record found in the text.
    ///
    /// The type of the record is determined by the name of the first
    /// attribute line unless a `target` record is given, in which case
    /// all attributes are added to it. Decoding ends after the `source`
    /// attribute or at the end of the text.
    ///
    /// If the text contains no attribute lines at all, the `target` is
    /// returned unchanged, or `Ok(None)` if there is none.
    /// An error line in the text results in [`Error::RemoteError`].
    pub fn decode(
        &self,
        text: &str,
        mut target: Option<Record>,
    ) -> Result<Option<Record>> {
        let text = normalize(text);
        let mut record: Option<Record> = None;
        let mut complete = false;

        for line in text.split('\n') {
            let (name, value) = match Line::classify(line) {
                Line::Error { code, message } => {
                    return Err(Error::RemoteError {
                        code,
                        message: message.into(),
                    })
                }
                Line::Attribute { name, value } => (name, value),
                Line::Filtered { name } => {
                    trace!("skipping filtered attribute '{}'", name);
                    continue;
                }
                Line::Comment | Line::Blank | Line::Other => {
                    trace!("skipping line '{}'", line);
                    continue;
                }
            };
            if record.is_none() {
                record = Some(match target.take() {
                    Some(target) => target,
                    None => {
                        let new = self.registry.create(name)?;
                        debug!("decoding {} record", new.type_name());
                        new
                    }
                });
            }
            if let Some(ref mut current) = record {
                current.add(name, value)?;
            }
            if name == "source" {
                complete = true;
                break;
            }
        }

        if let Some(ref record) = record {
            if !complete {
                warn!(
                    "{} record ended without a source attribute",
                    record.type_name()
                );
            }
        }
        Ok(record.or(target))
    }

    /// Decodes all records found in the text.
    ///
    /// The text is split into blocks separated by blank lines and each
    /// block is decoded separately. Blocks without attribute lines are
    /// skipped. The records are keyed by their primary key, with records
    /// lacking one keyed by the empty string. If a key appears more than
    /// once, the last record wins.
    pub fn decode_all(&self, text: &str) -> Result<RecordSet> {
        let mut res = RecordSet::new();
        for block in blocks(&normalize(text)) {
            if let Some(record) = self.decode(&block, None)? {
                res.push(record);
            }
        }
        debug!("decoded {} records", res.len());
        Ok(res)
    }
}

/// Converts all line endings to `\n`.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits normalized text into blocks separated by blank lines.
fn blocks(text: &str) -> Vec<String> {
    let mut res = Vec::new();
    let mut block = String::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !block.is_empty() {
                res.push(std::mem::take(&mut block));
            }
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    if !block.is_empty() {
        res.push(block);
    }
    res
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_blocks() {
        assert_eq!(
            blocks("a: 1\nb: 2\n\n\n  \nc: 3\n\nd: 4"),
            ["a: 1\nb: 2\n", "c: 3\n", "d: 4\n"]
        );
        assert!(blocks("\n\n").is_empty());
    }

    #[test]
    fn line_endings() {
        assert_eq!(normalize("a\r\nb\rc\n"), "a\nb\nc\n");
    }
}

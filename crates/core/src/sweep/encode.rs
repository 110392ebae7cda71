//! Canonical Encoder.
//!
//! Renders a combination as `key1:value1,key2:value2,...`. The same string is used as
//! the registered run name and as the generic payload decoded by the testbench, so
//! every producer in the crate goes through [`encode_pairs`].
//!
//! No escaping is performed: values containing `:` or `,` produce identifiers that
//! [`decode`] splits differently than they were built.

use std::fmt::{self, Display, Write};

use crate::common::DecodeError;
use crate::sweep::enumerate::Combination;

/// Separates one `name:value` pair from the next.
pub const PAIR_DELIMITER: char = ',';

/// Separates a name from its value.
pub const KEY_VALUE_DELIMITER: char = ':';

/// Testbench generic that receives the encoded configuration.
pub const DEFAULT_GENERIC: &str = "encoded_tb_cfg";

/// Writes `pairs` in canonical form into `out`.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn write_pairs<W, I, K, V>(out: &mut W, pairs: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    for (i, (k, v)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.write_char(PAIR_DELIMITER)?;
        }
        write!(out, "{k}{KEY_VALUE_DELIMITER}{v}")?;
    }
    Ok(())
}

/// Encodes arbitrary displayable `(name, value)` pairs in canonical form.
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_pairs(&mut out, pairs);
    out
}

/// Encodes one combination.
pub fn encode(combination: &Combination) -> String {
    encode_pairs(combination.iter())
}

impl Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())
    }
}

/// Splits an encoded identifier back into `(name, value)` pairs.
///
/// The value of each pair is everything after its first `:`. An empty string
/// decodes to no pairs.
///
/// # Errors
///
/// Returns [`DecodeError::MissingSeparator`] for a pair without `:` and
/// [`DecodeError::EmptyKey`] for a pair whose name is empty.
pub fn decode(encoded: &str) -> Result<Vec<(String, String)>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    encoded
        .split(PAIR_DELIMITER)
        .enumerate()
        .map(|(index, pair)| {
            let (k, v) = pair.split_once(KEY_VALUE_DELIMITER).ok_or_else(|| {
                DecodeError::MissingSeparator {
                    index,
                    pair: pair.to_string(),
                }
            })?;
            if k.is_empty() {
                return Err(DecodeError::EmptyKey { index });
            }
            Ok((k.to_string(), v.to_string()))
        })
        .collect()
}

/// Returns the value of the first pair named `key`, without allocating.
///
/// Malformed pairs are skipped, matching how a testbench-side lookup scans for its key.
pub fn lookup<'a>(encoded: &'a str, key: &str) -> Option<&'a str> {
    encoded
        .split(PAIR_DELIMITER)
        .filter_map(|pair| pair.split_once(KEY_VALUE_DELIMITER))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

//! Tag list parsing
//!
//! Tags are given on the command line as `key1=value1,key2=value2`.

use std::collections::HashMap;

/// Parse a comma separated `key=value` list into a tag map
///
/// Each pair is split on its first `=` and both sides are trimmed. Pairs
/// without `=`, or with an empty key or value after trimming, are dropped.
/// A repeated key keeps its last value. This never fails.
pub fn parse_tags(input: &str) -> HashMap<String, String> {
    input.split(',').filter_map(parse_pair).collect()
}

fn parse_pair(pair: &str) -> Option<(String, String)> {
    let (key, value) = pair.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key.to_owned(), value.to_owned()))
}

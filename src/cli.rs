// src/cli.rs
//! Command-line token parsing for the generator binary
//!
//! Tokens are either `key=value` pairs or bare flags; flags are stored with
//! the value `"1"`. The start point is a bracketed comma-separated coordinate
//! list, e.g. `start=[0.5,-1.0]`. All parse failures are fatal at this
//! boundary; the core never sees malformed input.

use crate::error::{BrownianError, BrownianResult};
use std::collections::HashMap;
use std::str::FromStr;

/// Split raw argv tokens into a key → value map.
pub fn parse_args<I>(tokens: I) -> HashMap<String, String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut params = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        match token.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => {
                params.insert(token.to_string(), "1".to_string());
            }
        }
    }
    params
}

/// Parse one option value, naming the option and expected type on failure.
pub fn parse_value<T: FromStr>(key: &str, value: &str, ty: &str) -> BrownianResult<T> {
    value.parse().map_err(|_| BrownianError::ParseError {
        token: value.to_string(),
        reason: format!("option {} is not parseable into {}", key, ty),
    })
}

/// Parse a bracketed comma-separated coordinate list: `[x1,x2,...]`.
pub fn parse_start_point(s: &str) -> BrownianResult<Vec<f64>> {
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| BrownianError::ParseError {
            token: s.to_string(),
            reason: "the start point must be formatted with \"[\" as starting character and \
                     with \"]\" as last character"
                .to_string(),
        })?;

    inner
        .split(',')
        .map(|piece| {
            piece
                .trim()
                .parse::<f64>()
                .map_err(|_| BrownianError::ParseError {
                    token: piece.to_string(),
                    reason: "one coordinate of the start point is not parseable into double"
                        .to_string(),
                })
        })
        .collect()
}

pub fn usage() -> String {
    "Manual:\n\
     > Command line:\n\
     >> generate  kt=...\n\
     >>          [d=...]\n\
     >>          [c=...]\n\
     >>          [n=...]\n\
     >>          [start=...]\n\
     >>          [seed=...]\n\
     >>          [output=...]\n\
     > Options:\n\
     >> kt : wanted number of discretisation points (mandatory),\n\
     >> d : wanted Brownian motion dimension (optional, default at 1),\n\
     >> c : wanted Brownian motion time-scale (optional, default at 1),\n\
     >> n : wanted cutting point in the decomposition (optional, default at 15),\n\
     >> start : starting point ([...,...,...] format, matching the wanted dimension, \
     optional, default at [0]),\n\
     >> seed : RNG seed for reproducible output (optional, default from entropy),\n\
     >> output : optional destination file."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_pairs_and_flags() {
        let params = parse_args(["kt=100", "d=2", "help", "c=0.5"]);
        assert_eq!(params.get("kt").map(String::as_str), Some("100"));
        assert_eq!(params.get("d").map(String::as_str), Some("2"));
        assert_eq!(params.get("c").map(String::as_str), Some("0.5"));
        assert_eq!(params.get("help").map(String::as_str), Some("1"));
        assert!(!params.contains_key("output"));
    }

    #[test]
    fn test_parse_args_splits_on_first_equals() {
        let params = parse_args(["output=dir/name=weird.txt"]);
        assert_eq!(
            params.get("output").map(String::as_str),
            Some("dir/name=weird.txt")
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<usize>("kt", "100", "integer").unwrap(), 100);
        assert_eq!(parse_value::<f64>("c", "0.25", "double").unwrap(), 0.25);
        assert!(parse_value::<usize>("kt", "ten", "integer").is_err());
        assert!(parse_value::<u32>("n", "-3", "integer").is_err());
    }

    #[test]
    fn test_parse_start_point() {
        assert_eq!(parse_start_point("[0.5]").unwrap(), vec![0.5]);
        assert_eq!(
            parse_start_point("[1.0, -2.5, 3]").unwrap(),
            vec![1.0, -2.5, 3.0]
        );
    }

    #[test]
    fn test_parse_start_point_rejects_malformed_input() {
        assert!(parse_start_point("0.5").is_err());
        assert!(parse_start_point("[0.5").is_err());
        assert!(parse_start_point("0.5]").is_err());
        assert!(parse_start_point("[a,b]").is_err());
        assert!(parse_start_point("[]").is_err());
    }

    #[test]
    fn test_usage_names_every_option() {
        let text = usage();
        for key in ["kt", "d", "c", "n", "start", "seed", "output"] {
            assert!(text.contains(key), "usage text misses {}", key);
        }
    }
}

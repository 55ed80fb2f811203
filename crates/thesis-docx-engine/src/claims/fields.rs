use std::sync::OnceLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

/// The fields of a claim block consumed by the exporter.
///
/// `None` marks a field that is not available in the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFields {
    pub id: Option<String>,
    pub text: Option<String>,
    pub claim_type: Option<String>,
    pub confidence: Option<i64>,
    pub ptcs: Option<i64>,
}

const ID: &str = "id";
const TEXT: &str = "text";
const CLAIM_TYPE: &str = "claim_type";
const CONFIDENCE: &str = "confidence";
const PTCS: &str = "pTCS";

/// Reads the claim fields from the body of a fenced block.
///
/// The body is parsed as YAML. Fields are read from the first mapping (depth
/// first) that has an `id` key; fields missing there are looked up anywhere
/// in the document. Bodies that are not valid YAML are scanned line by line
/// for `key: value` patterns instead.
pub fn parse_fields(body: &str) -> ClaimFields {
    match serde_yaml::from_str::<Value>(body) {
        Ok(doc) => from_yaml(&doc),
        Err(e) => {
            log::debug!("claim block is not valid YAML ({e}), scanning lines");
            scan_lines(body)
        }
    }
}

fn from_yaml(doc: &Value) -> ClaimFields {
    let claim = find_mapping_with(doc, ID);

    ClaimFields {
        id: lookup(claim, doc, ID).and_then(token),
        text: lookup(claim, doc, TEXT).and_then(string),
        claim_type: lookup(claim, doc, CLAIM_TYPE).and_then(token),
        confidence: lookup(claim, doc, CONFIDENCE).and_then(integer),
        ptcs: lookup(claim, doc, PTCS).and_then(integer),
    }
}

fn lookup<'a>(claim: Option<&'a Mapping>, doc: &'a Value, key: &str) -> Option<&'a Value> {
    claim
        .and_then(|m| m.get(key))
        .or_else(|| find_value(doc, key))
}

/// First mapping, depth first, that contains `key`.
fn find_mapping_with<'a>(value: &'a Value, key: &str) -> Option<&'a Mapping> {
    match value {
        Value::Mapping(m) => {
            if m.contains_key(key) {
                return Some(m);
            }
            m.values().find_map(|v| find_mapping_with(v, key))
        }
        Value::Sequence(items) => items.iter().find_map(|v| find_mapping_with(v, key)),
        Value::Tagged(tagged) => find_mapping_with(&tagged.value, key),
        _ => None,
    }
}

fn find_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    find_mapping_with(value, key).and_then(|m| m.get(key))
}

fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Strings, plus numbers and booleans written without quotes.
fn token(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => string(other),
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| (f + 0.5).floor() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

struct LinePatterns {
    id: Regex,
    text: Regex,
    claim_type: Regex,
    confidence: Regex,
    ptcs: Regex,
}

fn patterns() -> &'static LinePatterns {
    static PATTERNS: OnceLock<LinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LinePatterns {
        id: Regex::new(r#"id:\s*"([^"]+)""#).expect("Invalid id regex"),
        text: Regex::new(r#"text:\s*"([^"]+)""#).expect("Invalid text regex"),
        claim_type: Regex::new(r"claim_type:\s*([A-Za-z0-9_]+)").expect("Invalid type regex"),
        confidence: Regex::new(r"confidence:\s*([0-9]+)").expect("Invalid confidence regex"),
        ptcs: Regex::new(r"pTCS:\s*([0-9]+)").expect("Invalid pTCS regex"),
    })
}

fn scan_lines(body: &str) -> ClaimFields {
    let p = patterns();
    let capture = |re: &Regex| {
        re.captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    };

    ClaimFields {
        id: capture(&p.id),
        text: capture(&p.text),
        claim_type: capture(&p.claim_type),
        confidence: capture(&p.confidence).and_then(|s| s.parse().ok()),
        ptcs: capture(&p.ptcs).and_then(|s| s.parse().ok()),
    }
}

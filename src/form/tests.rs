//! Tests for form encoding

use super::{encode_value, FormEncodable};
use crate::SourceError;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct TestCustomerParams {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    tags: Vec<String>,
    livemode: bool,
}

impl FormEncodable for TestCustomerParams {
    fn root_object_name(&self) -> Option<&'static str> {
        Some("customer")
    }
}

#[derive(Serialize)]
struct TestPlainParams {
    note: Option<String>,
    count: u32,
}

impl FormEncodable for TestPlainParams {}

fn to_pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn decode(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

#[test]
fn test_encode_nested_mappings() {
    let value = json!({
        "type": "sepa_debit",
        "owner": { "address": { "city": "Berlin", "country": "DE" } },
    });

    assert_eq!(
        decode(&encode_value(&value).unwrap()),
        to_pairs(&[
            ("type", "sepa_debit"),
            ("owner[address][city]", "Berlin"),
            ("owner[address][country]", "DE"),
        ])
    );
}

#[test]
fn test_encode_scalars() {
    let value = json!({ "amount": 1099, "livemode": false });

    assert_eq!(
        encode_value(&value).unwrap(),
        "amount=1099&livemode=false"
    );
}

#[test]
fn test_encode_arrays() {
    let value = json!({
        "expand": ["owner", "redirect"],
        "items": [{ "plan": "gold" }, { "plan": "silver" }],
    });

    assert_eq!(
        decode(&encode_value(&value).unwrap()),
        to_pairs(&[
            ("expand[0]", "owner"),
            ("expand[1]", "redirect"),
            ("items[0][plan]", "gold"),
            ("items[1][plan]", "silver"),
        ])
    );
}

#[test]
fn test_encode_rejects_non_mapping() {
    let err = encode_value(&json!("card")).unwrap_err();
    assert!(matches!(err, SourceError::Encoding { .. }));
}

#[test]
fn test_root_object_name_wraps_value() {
    let params = TestCustomerParams {
        email: "jane@example.com".to_string(),
        description: None,
        tags: vec!["vip".to_string()],
        livemode: true,
    };

    assert_eq!(
        params.to_form_value().unwrap(),
        json!({
            "customer": {
                "email": "jane@example.com",
                "tags": ["vip"],
                "livemode": true,
            }
        })
    );
    assert_eq!(
        params.to_form_pairs().unwrap(),
        to_pairs(&[
            ("customer[email]", "jane@example.com"),
            ("customer[tags][0]", "vip"),
            ("customer[livemode]", "true"),
        ])
    );
}

#[test]
fn test_nulls_are_pruned_from_value() {
    let params = TestPlainParams {
        note: None,
        count: 3,
    };

    assert_eq!(params.to_form_value().unwrap(), json!({ "count": 3 }));
    assert_eq!(params.to_form_body().unwrap(), "count=3");
}

#[test]
fn test_body_escapes_reserved_characters() {
    let params = TestPlainParams {
        note: Some("a&b=c d".to_string()),
        count: 1,
    };

    let body = params.to_form_body().unwrap();
    assert!(!body.contains("a&b"));
    assert_eq!(
        params.to_form_pairs().unwrap(),
        to_pairs(&[("note", "a&b=c d"), ("count", "1")])
    );
}

#[test]
fn test_pairs_are_decoded_from_body() {
    let params = TestCustomerParams {
        email: "jane@example.com".to_string(),
        description: Some("first / second".to_string()),
        tags: vec![],
        livemode: false,
    };

    assert_eq!(
        params.to_form_pairs().unwrap(),
        decode(&params.to_form_body().unwrap())
    );
    assert!(params
        .to_form_pairs()
        .unwrap()
        .contains(&("customer[email]".to_string(), "jane@example.com".to_string())));
}

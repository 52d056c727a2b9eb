//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use faq_core::entities::*;
use faq_core::enums::*;
use faq_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_faq() -> Faq {
    Faq {
        id: "1".into(),
        question: "How do I reset my password?".into(),
        answer: "Use the link on the sign-in page.".into(),
        tags: vec!["account".into()],
        likes: 2,
        dislikes: 0,
        helpful_count: Some(12),
        unhelpful_count: None,
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
        updated_at: None,
    }
}

roundtrip_and_validate!(faq_roundtrip, Faq, sample_faq());

roundtrip_and_validate!(
    faq_without_timestamps_roundtrip,
    Faq,
    Faq {
        created_at: None,
        helpful_count: None,
        tags: Vec::new(),
        ..sample_faq()
    }
);

roundtrip_and_validate!(vote_counts_roundtrip, VoteCounts, VoteCounts::new(3, 1));

roundtrip_and_validate!(
    new_question_roundtrip,
    NewQuestion,
    NewQuestion {
        question: "Do you ship abroad?".into(),
        email: Some("me@example.com".into()),
        name: None,
    }
);

roundtrip_and_validate!(
    vote_summary_roundtrip,
    VoteSummary,
    VoteSummary {
        id: "1".into(),
        likes_count: 3,
        dislikes_count: 0,
        status: VoteStatus::Voted,
        has_voted: true,
        last_vote_type: Some(VoteKind::Like),
        vote_error: None,
    }
);

roundtrip_and_validate!(
    list_response_roundtrip,
    FaqListResponse,
    FaqListResponse {
        state: ListState::Populated,
        summary: Some("Showing 1 result".into()),
        error: None,
        search_term: String::new(),
        selected_category: Some("account".into()),
        categories: vec![CategoryEntry {
            tag: "account".into(),
            count: 1,
        }],
        left_column: vec![FaqCard {
            faq: sample_faq(),
            is_open: true,
        }],
        right_column: Vec::new(),
    }
);

#[test]
fn faq_reads_backend_payload() {
    let payload = r#"{
        "id": 7,
        "question": "Billing cycle?",
        "answer": "Monthly.",
        "tags": null,
        "likes": null,
        "dislikes": 1,
        "createdAt": "2024-05-01T10:00:00",
        "helpfulCount": 4
    }"#;

    let faq: Faq = serde_json::from_str(payload).unwrap();
    assert_eq!(faq.id, "7");
    assert!(faq.tags.is_empty());
    assert_eq!(faq.likes, 0);
    assert_eq!(faq.dislikes, 1);
    assert_eq!(faq.helpful_count, Some(4));
    assert_eq!(
        faq.created_at,
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
    );
    assert!(faq.updated_at.is_none());
}

#[test]
fn faq_tolerates_unparseable_timestamp() {
    let payload = r#"{"id":"1","question":"q","answer":"a","createdAt":"soon"}"#;
    let faq: Faq = serde_json::from_str(payload).unwrap();
    assert!(faq.created_at.is_none());
}

#[test]
fn faq_with_missing_text_still_parses() {
    let payload = r#"{"id":"1","question":null,"likes":1,"helpfulCount":"many"}"#;
    let faq: Faq = serde_json::from_str(payload).unwrap();
    assert_eq!(faq.question, "");
    assert_eq!(faq.answer, "");
    assert_eq!(faq.likes, 1);
    assert_eq!(faq.helpful_count, None);
}

#[test]
fn faq_requires_id() {
    let payload = r#"{"question":"q","answer":"a"}"#;
    assert!(serde_json::from_str::<Faq>(payload).is_err());
}

#[test]
fn faq_serializes_camel_case() {
    let json = serde_json::to_value(sample_faq()).unwrap();
    assert_eq!(json["helpfulCount"], 12);
    assert!(json.get("unhelpfulCount").is_none());
    assert_eq!(json["createdAt"], "2024-05-01T10:00:00Z");
}

use super::*;

fn make_id(s: &str) -> CandidateId {
    CandidateId::try_from(s).unwrap()
}

#[test]
fn candidate_id_is_trimmed() {
    let id = make_id("  b-17 ");
    assert_eq!(id.as_str(), "b-17");
}

#[test]
fn candidate_id_rejects_blank() {
    CandidateId::try_from("   ").unwrap_err();
}

#[test]
fn label_joins_primary_and_secondary() {
    let candidate = Candidate::new(make_id("1"), "Main Street", "Springfield");
    assert_eq!(candidate.label(), "Main Street, Springfield");
}

#[test]
fn label_without_secondary_is_primary_only() {
    let candidate = Candidate::new(make_id("1"), "Main Street", "  ");
    assert_eq!(candidate.label(), "Main Street");
}

#[test]
fn list_from_json_decodes_array() {
    let payload = r#"[
        {"id": "a", "primary_label": "Alpha", "secondary_label": "North"},
        {"id": "b", "primary_label": "Beta"}
    ]"#;

    let candidates = Candidate::list_from_json(payload).unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].id().as_str(), "a");
    assert_eq!(candidates[0].secondary_label(), "North");
    assert_eq!(candidates[1].secondary_label(), "");
}

#[test]
fn list_from_json_rejects_blank_id() {
    let payload = r#"[{"id": "  ", "primary_label": "Alpha"}]"#;
    Candidate::list_from_json(payload).unwrap_err();
}

#[test]
fn list_from_json_rejects_non_array() {
    Candidate::list_from_json(r#"{"id": "a"}"#).unwrap_err();
}

#[test]
fn try_new_builds_candidate() {
    let candidate = Candidate::try_new(" 42 ", "Alpha", "North").unwrap();
    assert_eq!(candidate.id().as_str(), "42");
    assert_eq!(candidate.label(), "Alpha, North");
}

#[test]
fn try_new_rejects_blank_id() {
    let err = Candidate::try_new("  ", "Alpha", "").unwrap_err();
    assert!(matches!(err, CandidateError::InvalidId(_)));
}

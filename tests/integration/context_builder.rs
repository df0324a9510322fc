//! Integration tests for the context builder pipeline.

use super::test_utils::record;
use briefing_context::business_case::BusinessCase;
use briefing_context::context::REDACTED_FIELD;
use briefing_context::normalize::normalize_answers;
use briefing_context::{build_context, ContextBuilder, FinancialDefaults, Value};
use serde_json::json;

fn sample_form() -> serde_json::Value {
    json!({
        "branche": "it",
        "unternehmensgroesse": "team",
        "stundensatz_eur": 50,
        "qw1_monat_stunden": 2,
        "qw2_monat_stunden": 3
    })
}

#[test]
fn test_reference_submission() {
    let ctx = build_context(&record(sample_form()), None);

    assert_eq!(ctx["BRANCHE_LABEL"], Value::from("IT & Software"));
    assert_eq!(ctx["UNTERNEHMENSGROESSE_LABEL"], Value::from("2–10 (Kleines Team)"));
    assert_eq!(ctx["BUNDESLAND_LABEL"], Value::from(""));
    assert_eq!(ctx["monatsersparnis_stunden"], Value::from(5.0));
    assert_eq!(ctx["monatsersparnis_eur"], Value::from(250.0));
    assert_eq!(ctx["jahresersparnis_stunden"], Value::from(60.0));
    assert_eq!(ctx["jahresersparnis_eur"], Value::from(3000.0));
    assert_eq!(ctx["capex_konservativ_eur"], Value::from(2000.0));
    assert_eq!(ctx["opex_konservativ_eur"], Value::from(600.0));
    assert_eq!(ctx["capex_realistisch_eur"], Value::from(2000.0));
    assert_eq!(ctx["opex_realistisch_eur"], Value::from(600.0));
}

#[test]
fn test_explicit_zero_quick_win_is_kept() {
    let mut form = sample_form();
    form["qw2_monat_stunden"] = json!(0);
    let ctx = build_context(&record(form), None);
    assert_eq!(ctx["monatsersparnis_stunden"], Value::from(2.0));
    assert_eq!(ctx["monatsersparnis_eur"], Value::from(100.0));
}

#[test]
fn test_explicit_zero_overrides_are_kept() {
    let mut form = sample_form();
    form["monatsersparnis_stunden"] = json!(0);
    form["monatsersparnis_eur"] = json!(0);
    form["jahresersparnis_stunden"] = json!(0);
    form["jahresersparnis_eur"] = json!(0);
    let ctx = build_context(&record(form), None);
    for key in [
        "monatsersparnis_stunden",
        "monatsersparnis_eur",
        "jahresersparnis_stunden",
        "jahresersparnis_eur",
    ] {
        assert_eq!(ctx[key], Value::from(0.0), "{} must keep its explicit 0", key);
    }
}

#[test]
fn test_organization_name_never_reaches_context() {
    let form = record(json!({ "unternehmen_name": "Acme GmbH", "branche": "bau" }));
    let extras = record(json!({ "unternehmen_name": "Acme" }));

    let ctx = build_context(&form, Some(&extras));
    assert!(!ctx.contains_key(REDACTED_FIELD));
    assert_eq!(ctx["BRANCHE_LABEL"], Value::from("Bauwesen & Architektur"));
}

#[test]
fn test_context_is_superset_of_form() {
    let form = record(json!({
        "branche": "unbekannt",
        "bundesland": "nw",
        "ki_hemmnisse": ["Kosten", "Datenschutz"],
        "freitext": "bleibt erhalten",
        "unternehmen_name": "Acme"
    }));
    let ctx = build_context(&form, None);

    for key in form.keys().filter(|k| k.as_str() != REDACTED_FIELD) {
        assert!(ctx.contains_key(key), "context lost form field {}", key);
    }
    assert_eq!(ctx["ki_hemmnisse"], Value::from(vec!["Kosten", "Datenschutz"]));
    assert_eq!(ctx["KI_HEMMNISSE"], Value::from("Kosten, Datenschutz"));
    assert_eq!(ctx["BRANCHE_LABEL"], Value::from("unbekannt"));
    assert_eq!(ctx["BUNDESLAND_LABEL"], Value::from("Nordrhein-Westfalen"));
    assert_eq!(ctx["BUNDESLAND"], Value::from("nw"));
}

#[test]
fn test_all_derived_keys_present_for_empty_form() {
    let ctx = build_context(&record(json!({})), None);
    let expected = [
        "BRANCHE_LABEL",
        "UNTERNEHMENSGROESSE_LABEL",
        "BUNDESLAND_LABEL",
        "BRANCHE",
        "UNTERNEHMENSGROESSE",
        "BUNDESLAND",
        "HAUPTLEISTUNG",
        "VISION_PRIORITAET",
        "ZEITBUDGET",
        "KI_KNOWHOW",
        "PROJEKTZIEL",
        "DATENSCHUTZ",
        "GOVERNANCE",
        "DATENSCHUTZBEAUFTRAGTER",
        "AI_ACT_KENNTNIS",
        "LOECHREGELN",
        "LOESCHREGELN",
        "KI_HEMMNISSE",
        "TRAININGS_INTERESSEN",
        "ZIELGRUPPEN",
        "DATENQUELLEN",
        "PROZESSE_PAPIERLOS",
        "vision",
        "projektziele",
        "ki_usecases",
        "stundensatz_eur",
        "qw1_monat_stunden",
        "qw2_monat_stunden",
        "monatsersparnis_stunden",
        "monatsersparnis_eur",
        "jahresersparnis_stunden",
        "jahresersparnis_eur",
        "capex_konservativ_eur",
        "opex_konservativ_eur",
        "capex_realistisch_eur",
        "opex_realistisch_eur",
    ];
    for key in expected {
        assert!(ctx.contains_key(key), "missing derived key {}", key);
    }
    assert_eq!(ctx.len(), expected.len());
}

#[test]
fn test_extras_take_precedence_over_everything() {
    let form = record(json!({ "branche": "it", "vision_3_jahre": "Marktführer" }));
    let extras = record(json!({
        "vision": "aus Analyse",
        "branche": "override",
        "monatsersparnis_eur": null,
        "score_gesamt": 81
    }));
    let ctx = build_context(&form, Some(&extras));
    assert_eq!(ctx["vision"], Value::from("aus Analyse"));
    assert_eq!(ctx["branche"], Value::from("override"));
    assert_eq!(ctx["monatsersparnis_eur"], Value::Null);
    assert_eq!(ctx["score_gesamt"], Value::from(81.0));
    // Derivation reads the form, not the merged extras.
    assert_eq!(ctx["BRANCHE_LABEL"], Value::from("IT & Software"));
}

#[test]
fn test_non_numeric_rate_yields_null_in_json() {
    let form = record(json!({ "stundensatz_eur": "sechzig", "qw1_monat_stunden": 1 }));
    let ctx = build_context(&form, None);
    assert!(ctx["monatsersparnis_eur"].as_number().unwrap().is_nan());
    assert_eq!(ctx["monatsersparnis_stunden"], Value::from(1.0));

    let json: serde_json::Value = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["monatsersparnis_eur"], serde_json::Value::Null);
    assert_eq!(json["jahresersparnis_eur"], serde_json::Value::Null);
    assert_eq!(json["jahresersparnis_stunden"], json!(12));
}

#[test]
fn test_serialized_context_uses_integers() {
    let ctx = build_context(&record(sample_form()), None);
    let text = serde_json::to_string(&ctx).unwrap();
    assert!(text.contains(r#""monatsersparnis_eur":250"#), "{}", text);
    assert!(text.contains(r#""capex_konservativ_eur":2000"#), "{}", text);
}

#[test]
fn test_normalized_labels_resolve() {
    let form = record(json!({
        "branche": "Gesundheit & Pflege",
        "unternehmensgroesse": "11-100",
        "bundesland": "Sachsen-Anhalt"
    }));
    let ctx = build_context(&normalize_answers(&form), None);
    assert_eq!(ctx["BRANCHE"], Value::from("gesundheit"));
    assert_eq!(ctx["BRANCHE_LABEL"], Value::from("Gesundheit & Pflege"));
    assert_eq!(ctx["UNTERNEHMENSGROESSE_LABEL"], Value::from("11–100 (KMU)"));
    assert_eq!(ctx["BUNDESLAND"], Value::from("st"));
}

#[test]
fn test_business_case_merges_as_extras() {
    let builder = ContextBuilder::new(FinancialDefaults::default());
    let form = record(sample_form());
    let draft = builder.build(&form, None);
    let extras = BusinessCase::from_context(&draft).into_extras();
    let ctx = builder.build(&form, Some(&extras));

    assert_eq!(ctx["roi_investition_eur"], Value::from(2000.0));
    assert_eq!(ctx["roi_break_even_monate"], Value::from(8.0));
    assert_eq!(ctx["roi_12m_prozent"], Value::from(50.0));
}

#[test]
fn test_builder_is_shareable_across_threads() {
    let builder = std::sync::Arc::new(ContextBuilder::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let builder = std::sync::Arc::clone(&builder);
            std::thread::spawn(move || {
                let form = record(json!({ "qw1_monat_stunden": i }));
                builder.build(&form, None)["monatsersparnis_eur"].clone()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Value::from(i as f64 * 60.0));
    }
}

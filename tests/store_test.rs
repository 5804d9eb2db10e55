use std::fs;

use meal_plan_scaler_rs::interface::{write_audit_csv, write_result_json};
use meal_plan_scaler_rs::scaler::ScalingEngine;
use meal_plan_scaler_rs::store::{load_plans, load_references, load_target, save_plan};
use meal_plan_scaler_rs::ScaleError;

const REFERENCES_CSV: &str = "name,unit_type,calories,protein,carbs,fat
Chicken Breast,per_100g,165,31,0,3.6
Rice,per_100g,350,7,78,0.6
Egg,per_piece,78,6.3,0.6,5.3
Whole Milk,per_ml,61,3.2,4.8,3.3
";

const PLANS_JSON: &str = r#"{
    "lean-week": {
        "monday": {
            "breakfast": [
                {"name": "Egg", "amount": 2, "unit": "stuk"},
                {"name": "Whole Milk", "amount": 250, "unit": "ml"}
            ],
            "dinner": [
                {"name": "chicken breast", "amount": 120, "unit": "g"},
                {"name": "Rice", "amount": 75, "unit": "g"}
            ]
        },
        "tuesday": {
            "lunch": [
                {"name": "Chicken Breast", "amount": 150, "unit": "g"},
                {"name": "Rice", "amount": 100, "unit": "g"},
                {"name": "Ricotta", "amount": 50, "unit": "g"}
            ]
        },
        "saturday": {}
    }
}"#;

const TARGET_JSON: &str = r#"{"calories": 1, "protein": 90, "carbs": 120, "fat": 20}"#;

#[test]
fn test_file_inputs_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let refs_path = dir.path().join("references.csv");
    let plans_path = dir.path().join("plans.json");
    let target_path = dir.path().join("target.json");
    fs::write(&refs_path, REFERENCES_CSV).unwrap();
    fs::write(&plans_path, PLANS_JSON).unwrap();
    fs::write(&target_path, TARGET_JSON).unwrap();

    let references = load_references(&refs_path).unwrap();
    let plans = load_plans(&plans_path).unwrap();
    let target = load_target(&target_path).unwrap();

    // stored calories ignored: 4*90 + 4*120 + 9*20
    assert_eq!(target.calories(), 1020.0);

    let result = ScalingEngine::default()
        .run("lean-week", Some(&target), &plans, &references)
        .unwrap();

    assert_eq!(result.info.day_totals.len(), 2);
    assert_eq!(result.info.warnings.len(), 1);
    assert!(result.info.warnings[0].to_string().contains("Ricotta"));
    assert!(!result.info.per_ingredient_audit.is_empty());

    let json_path = dir.path().join("result.json");
    write_result_json(&result, &json_path).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert!(written["scaled_plan"]["monday"]["dinner"].is_array());
    assert_eq!(written["info"]["warnings"][0]["kind"], "missing_ingredient_reference");
    assert_eq!(written["info"]["target_profile"]["calories"], 1020.0);

    let csv_path = dir.path().join("audit.csv");
    write_audit_csv(&result.info.per_ingredient_audit, &csv_path).unwrap();
    let rows = fs::read_to_string(&csv_path).unwrap().lines().count();
    assert_eq!(rows, result.info.per_ingredient_audit.len() + 1);

    let plan_path = dir.path().join("scaled.json");
    save_plan(&plan_path, &result.scaled_plan).unwrap();
    let reloaded: meal_plan_scaler_rs::WeekPlan =
        serde_json::from_str(&fs::read_to_string(&plan_path).unwrap()).unwrap();
    assert_eq!(reloaded, result.scaled_plan);
}

#[test]
fn test_unknown_plan_id_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let plans_path = dir.path().join("plans.json");
    fs::write(&plans_path, PLANS_JSON).unwrap();
    let refs_path = dir.path().join("references.csv");
    fs::write(&refs_path, REFERENCES_CSV).unwrap();

    let plans = load_plans(&plans_path).unwrap();
    let references = load_references(&refs_path).unwrap();
    let target = meal_plan_scaler_rs::MacroProfile::new(90.0, 120.0, 20.0);

    let err = ScalingEngine::default()
        .run("bulk-week", Some(&target), &plans, &references)
        .unwrap_err();
    assert!(matches!(err, ScaleError::MissingPlan(ref id) if id == "bulk-week"));
    assert_eq!(err.to_string(), "Plan not found: bulk-week");
}

#[test]
fn test_malformed_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let plans_path = dir.path().join("plans.json");
    fs::write(&plans_path, r#"{"p": {"monday": {"brunch": []}}}"#).unwrap();

    assert!(matches!(load_plans(&plans_path), Err(ScaleError::Json(_))));
}

#[test]
fn test_partial_target_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let target_path = dir.path().join("target.json");

    fs::write(&target_path, r#"{"protein": 50, "carb": 120, "fat": 10}"#).unwrap();
    assert!(matches!(load_target(&target_path), Err(ScaleError::Json(_))));

    fs::write(&target_path, r#"{"protein": 50, "fat": 10}"#).unwrap();
    assert!(matches!(load_target(&target_path), Err(ScaleError::Json(_))));
}

#[test]
fn test_negative_plan_amount_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let plans_path = dir.path().join("plans.json");
    fs::write(
        &plans_path,
        r#"{"p": {"monday": {"lunch": [{"name": "Rice", "amount": -75, "unit": "g"}]}}}"#,
    )
    .unwrap();

    assert!(matches!(
        load_plans(&plans_path),
        Err(ScaleError::InvalidInput(ref msg)) if msg.contains("Rice")
    ));
}

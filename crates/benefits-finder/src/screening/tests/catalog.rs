use super::common::*;
use crate::screening::domain::ProgramId;
use crate::screening::{BenefitCatalog, CatalogError};

#[test]
fn california_catalog_lists_three_programs_in_order() {
    let catalog = BenefitCatalog::california();

    let ids: Vec<&str> = catalog.iter().map(|program| program.id.as_str()).collect();
    assert_eq!(ids, vec!["calfresh", "liheap", "calworks"]);
    assert!(BenefitCatalog::new(catalog.programs().to_vec()).is_ok());
}

#[test]
fn lookup_by_id() {
    let catalog = BenefitCatalog::california();

    let program = catalog
        .get(&ProgramId::new("liheap"))
        .expect("energy assistance listed");
    assert_eq!(program.name, "LIHEAP (Energy Assistance)");
    assert_eq!(program.documents_needed.len(), 4);
    assert!(catalog.get(&ProgramId::new("medi-cal")).is_none());
}

#[test]
fn rejects_duplicate_program_ids() {
    let error = BenefitCatalog::new(vec![program("calfresh"), program("calfresh")])
        .expect_err("duplicate rejected");

    match error {
        CatalogError::DuplicateProgramId(id) => assert_eq!(id.as_str(), "calfresh"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn rejects_blank_program_ids() {
    let error =
        BenefitCatalog::new(vec![program("calfresh"), program(" ")]).expect_err("blank rejected");

    assert!(matches!(error, CatalogError::EmptyProgramId { position: 1 }));
}

#[test]
fn decodes_json_catalog() {
    let json = r#"[
        {
            "id": "wic",
            "name": "WIC",
            "description": "Nutrition support for women, infants, and children",
            "estimated_amount": "$50-$100/month",
            "requirements": ["Pregnant or caring for a child under 5"],
            "application_url": "https://www.cdph.ca.gov/wic",
            "documents_needed": ["Photo ID", "Proof of income"]
        }
    ]"#;

    let catalog = BenefitCatalog::from_json_reader(json.as_bytes()).expect("catalog decodes");

    assert_eq!(catalog.len(), 1);
    let program = catalog.get(&ProgramId::new("wic")).expect("wic listed");
    assert_eq!(program.requirements.len(), 1);
}

#[test]
fn json_catalog_is_validated() {
    let json = serde_json::to_string(&vec![program("wic"), program("wic")]).expect("serializes");

    let error = BenefitCatalog::from_json_reader(json.as_bytes()).expect_err("duplicate rejected");

    assert!(matches!(error, CatalogError::DuplicateProgramId(_)));
}

#[test]
fn malformed_json_is_reported() {
    let error = BenefitCatalog::from_json_reader("{\"id\": 4}".as_bytes()).expect_err("rejected");

    assert!(matches!(error, CatalogError::Json(_)));
}

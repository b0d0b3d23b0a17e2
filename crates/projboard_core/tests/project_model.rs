use projboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Board", "Build the board", 4);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], project.id.to_string());
    assert_eq!(json["title"], "Board");
    assert_eq!(json["description"], "Build the board");
    assert_eq!(json["people"], 4);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn unknown_status_is_rejected_on_deserialize() {
    let value = serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "title": "t",
        "description": "d",
        "people": 1,
        "status": "archived"
    });
    assert!(serde_json::from_value::<Project>(value).is_err());
}

#[test]
fn status_display_matches_wire_name() {
    assert_eq!(ProjectStatus::Active.to_string(), "active");
    assert_eq!(ProjectStatus::Finished.to_string(), "finished");
}

use projboard_core::{
    Alert, InputField, ProjectInput, ProjectInputError, ProjectStatus, ProjectStore,
    INVALID_INPUT_MESSAGE,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingAlert {
    messages: RefCell<Vec<String>>,
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn setup() -> (Rc<ProjectStore>, Rc<RecordingAlert>, ProjectInput) {
    let store = Rc::new(ProjectStore::new());
    let alert = Rc::new(RecordingAlert::default());
    let input = ProjectInput::new(Rc::clone(&store), alert.clone());
    (store, alert, input)
}

fn fill(input: &mut ProjectInput, title: &str, description: &str, people: &str) {
    input.set_title(title);
    input.set_description(description);
    input.set_people(people);
}

#[test]
fn valid_submit_adds_project_and_clears_fields() {
    let (store, alert, mut input) = setup();
    fill(&mut input, "Launch", "launch the board", "3");

    let id = input.submit().expect("valid input should submit");

    let project = store.get(id).expect("project stored");
    assert_eq!(project.title, "Launch");
    assert_eq!(project.description, "launch the board");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(input.title(), "");
    assert_eq!(input.description(), "");
    assert_eq!(input.people(), "");
    assert!(alert.messages.borrow().is_empty());
}

#[test]
fn boundary_lengths_match_strict_rules() {
    let (store, _alert, mut input) = setup();

    fill(&mut input, "ab", "123456", "1");
    input.submit().expect("two-char title and six-char description pass");

    fill(&mut input, "a", "123456", "1");
    assert_eq!(
        input.submit(),
        Err(ProjectInputError::InvalidInput {
            field: InputField::Title
        })
    );

    fill(&mut input, "ab", "12345", "1");
    assert_eq!(
        input.submit(),
        Err(ProjectInputError::InvalidInput {
            field: InputField::Description
        })
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn invalid_people_is_rejected() {
    let (store, alert, mut input) = setup();

    for people in ["0", "-2", "abc", "", "99999999999"] {
        fill(&mut input, "Title", "long description", people);
        let err = input.submit().expect_err("people must be a positive count");
        assert_eq!(
            err,
            ProjectInputError::InvalidInput {
                field: InputField::People
            }
        );
    }

    assert!(store.is_empty());
    assert_eq!(alert.messages.borrow().len(), 5);
}

#[test]
fn people_uses_leading_integer() {
    let (store, _alert, mut input) = setup();
    fill(&mut input, "Title", "long description", " 4 devs");

    let id = input.submit().expect("leading integer is accepted");
    assert_eq!(store.get(id).expect("stored").people, 4);
}

#[test]
fn rejected_submit_alerts_once_and_keeps_fields() {
    let (store, alert, mut input) = setup();
    fill(&mut input, "   ", "long description", "2");

    let err = input.submit().expect_err("blank title must fail");

    assert_eq!(err.to_string(), "invalid input in field `title`");
    assert_eq!(*alert.messages.borrow(), vec![INVALID_INPUT_MESSAGE]);
    assert_eq!(input.title(), "   ");
    assert_eq!(input.people(), "2");
    assert!(store.is_empty());
}

use pretty_assertions::assert_eq;
use projectboard::domain::team_member::{MemberPatch, NewMember};
use projectboard::services::{BoardError, ProjectService, TeamService};
use projectboard::test_helpers::TestContext;
use rstest::rstest;

#[test]
fn test_duplicate_email_is_rejected_case_insensitively() {
    let mut ctx = TestContext::new_for_test();
    let before = ctx.repository.members.len();

    let result = TeamService::new(&mut ctx.repository).add(&NewMember::new("Johnny", "JOHN.DOE@example.com", "Developer"));

    match result {
        Err(error @ BoardError::DuplicateEmail { .. }) => {
            assert_eq!(error.to_string(), "A team member with this email already exists");
        }
        other => panic!("expected duplicate email rejection, got {:?}", other),
    }
    assert_eq!(ctx.repository.members.len(), before);
}

#[rstest]
#[case("", "new@example.com", "Designer")]
#[case("New Person", "", "Designer")]
#[case("New Person", "new@example.com", "  ")]
fn test_missing_required_fields(#[case] name: &str, #[case] email: &str, #[case] role: &str) {
    let mut ctx = TestContext::new_for_test();

    let error = TeamService::new(&mut ctx.repository)
        .add(&NewMember::new(name, email, role))
        .unwrap_err();

    assert_eq!(error.to_string(), "Please fill in all required fields");
    assert_eq!(ctx.repository.members.len(), 5);
}

#[test]
fn test_new_member_gets_avatar_and_projects() {
    let mut ctx = TestContext::new_for_test();

    let member = TeamService::new(&mut ctx.repository)
        .add(&NewMember::new("Alex Green", "alex@example.com", "QA Tester").with_projects(vec!["2".into()]))
        .unwrap();

    assert!(member.id.starts_with("member-"));
    assert!(member.avatar.contains("alex@example.com"));
    assert_eq!(
        TeamService::project_names(&ctx.repository, &member),
        vec!["Mobile App Development".to_string()]
    );
}

#[test]
fn test_editing_keeps_own_email_but_not_someone_elses() {
    let mut ctx = TestContext::new_for_test();

    let renamed = TeamService::new(&mut ctx.repository)
        .update("1", &MemberPatch { name: Some("John D.".into()), email: Some("john.doe@example.com".into()), ..Default::default() })
        .unwrap();
    assert_eq!(renamed.name, "John D.");

    let clash = TeamService::new(&mut ctx.repository)
        .update("1", &MemberPatch { email: Some("Jane.Smith@example.com".into()), ..Default::default() });
    assert!(matches!(clash, Err(BoardError::DuplicateEmail { .. })));
}

#[test]
fn test_toggle_invite_and_remove() {
    let mut ctx = TestContext::new_for_test();

    let member = TeamService::new(&mut ctx.repository).toggle_project("3", "2").unwrap();
    assert_eq!(member.project_ids, vec!["1".to_string(), "2".to_string()]);
    let member = TeamService::new(&mut ctx.repository).toggle_project("3", "1").unwrap();
    assert_eq!(member.project_ids, vec!["2".to_string()]);

    let message = TeamService::new(&mut ctx.repository).invite("4").unwrap();
    assert_eq!(message, "Invitation sent to sarah.williams@example.com");

    TeamService::new(&mut ctx.repository).remove("2").unwrap();
    let names: Vec<_> = ctx.repository.members.values().map(|m| m.name.clone()).collect();
    assert_eq!(names, vec!["John Doe", "Mike Johnson", "Sarah Williams", "David Brown"]);
}

#[rstest]
#[case("developer", 2)]
#[case("JANE", 1)]
#[case("example.com", 5)]
#[case("nobody", 0)]
fn test_search(#[case] query: &str, #[case] expected: usize) {
    let ctx = TestContext::new_for_test();
    assert_eq!(TeamService::search(&ctx.repository, query).len(), expected);
}

#[test]
fn test_member_stays_editable_after_one_of_their_projects_is_removed() {
    let mut ctx = TestContext::new_for_test();
    ProjectService::new(&mut ctx.repository).remove("3").unwrap();

    let current = ctx.repository.members.get("1").unwrap().as_ref().clone();
    let mut edited = MemberPatch::from_member(&current);
    edited.name = Some("John D.".into());
    let renamed = TeamService::new(&mut ctx.repository).update("1", &edited).unwrap();
    assert_eq!(renamed.name, "John D.");
    assert_eq!(renamed.project_ids, vec!["1".to_string(), "3".to_string()]);

    let toggled = TeamService::new(&mut ctx.repository).toggle_project("1", "2").unwrap();
    assert_eq!(toggled.project_ids, vec!["1".to_string(), "3".to_string(), "2".to_string()]);

    let cleared = TeamService::new(&mut ctx.repository).toggle_project("1", "3").unwrap();
    assert_eq!(cleared.project_ids, vec!["1".to_string(), "2".to_string()]);

    // Once dropped, the removed project cannot be added back.
    let re_added = TeamService::new(&mut ctx.repository).toggle_project("1", "3");
    assert!(matches!(re_added, Err(BoardError::DanglingReference { .. })));
}

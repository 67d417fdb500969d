use crate::core::errors::UserDeskError;
use crate::core::models::{AuditAction, User};
use crate::core::services::{IdStrategy, UserService};
use crate::infrastructure::logging::in_memory::InMemoryAuditLogger;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{create_test_service, new_user};

fn user(id: u32, name: &str, email: &str, role: &str, password: &str) -> User {
    new_user(name, email, role, password).with_id(id)
}

#[test]
fn test_seeded_store_has_four_users() {
    let service = create_test_service();
    assert_eq!(service.count_users(), 4);
    let ids: Vec<u32> = service.list_users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(service.get_user(3).unwrap().name, "Thiago Jun Honma");
}

#[test]
fn test_get_user_miss_is_none() {
    let service = create_test_service();
    assert!(service.get_user(42).is_none());
    assert!(service.get_user(0).is_none());
}

#[test]
fn test_add_user_assigns_next_id() {
    let mut service = create_test_service();
    let input = new_user("N", "n@e.com", "R", "secret");

    let created = service.add_user(input.clone()).unwrap();

    assert_eq!(created.id, 5);
    assert_eq!(service.count_users(), 5);
    assert_eq!(service.get_user(5), Some(input.with_id(5)));
}

#[test]
fn test_update_user_replaces_record() {
    let mut service = create_test_service();
    let edited = user(2, "X", "x@y.com", "R", "abcdef");

    assert!(service.update_user(edited.clone()));

    assert_eq!(service.get_user(2), Some(edited));
    assert_eq!(service.list_users().len(), 4);
    assert_eq!(service.get_user(1).unwrap().name, "Lucas Jeronymo Ribeiro");
}

#[test]
fn test_update_missing_user_is_silent_noop() {
    let mut service = create_test_service();
    let before = service.list_users();
    let mut changes = service.subscribe_to_changes();

    assert!(!service.update_user(user(99, "Ghost", "g@h.com", "R", "abcdef")));

    assert_eq!(service.list_users(), before);
    assert_eq!(changes.try_next(), None);
    assert!(service.audit_logger().get_logs().is_empty());
}

#[test]
fn test_delete_user_removes_record() {
    let mut service = create_test_service();

    let removed = service.delete_user(3);

    assert_eq!(removed.map(|u| u.id), Some(3));
    let users = service.list_users();
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u.id != 3));
}

#[test]
fn test_delete_missing_user_leaves_collection_unchanged() {
    let mut service = create_test_service();
    let before = service.list_users();

    assert!(service.delete_user(7).is_none());

    assert_eq!(service.list_users(), before);
}

#[test]
fn test_delete_publishes_even_on_miss() {
    let mut service = create_test_service();
    let mut changes = service.subscribe_to_changes();

    service.delete_user(7);

    assert_eq!(changes.try_next().map(|users| users.len()), Some(4));
}

#[test]
fn test_count_users_by_role() {
    let mut service = create_test_service();
    assert_eq!(service.count_users_by_role("Engenheiro de FE"), 1);
    assert_eq!(service.count_users_by_role("Designer"), 0);

    service.add_user(new_user("Ana", "ana@gmail.com", "Engenheiro de FE", "Aadmin")).unwrap();
    assert_eq!(service.count_users_by_role("Engenheiro de FE"), 2);
    // Role labels are compared exactly
    assert_eq!(service.count_users_by_role("engenheiro de fe"), 0);
}

#[test]
fn test_list_users_sorted_by_name() {
    let mut service = create_test_service();
    service.add_user(new_user("ana", "ana@gmail.com", "QA", "Aadmin")).unwrap();

    let names: Vec<String> = service
        .list_users_sorted_by_name()
        .into_iter()
        .map(|u| u.name)
        .collect();

    assert_eq!(
        names,
        vec![
            "ana",
            "Leonardo Almeida Proença",
            "Lucas Jeronymo Ribeiro",
            "Thiago Jun Honma",
            "Vinicius Matheus Nunes Araujo",
        ]
    );
    // Storage order is untouched
    assert_eq!(service.list_users()[0].id, 1);
}

#[test]
fn test_list_users_is_a_copy() {
    let mut service = create_test_service();
    let mut users = service.list_users();
    users.clear();
    assert_eq!(service.count_users(), 4);

    service.add_user(new_user("N", "n@e.com", "R", "secret")).unwrap();
    assert!(users.is_empty());
}

#[test]
fn test_monotonic_ids_are_not_reused_after_delete() {
    let mut service = create_test_service();
    service.delete_user(4);

    let first = service.add_user(new_user("A", "a@e.com", "R", "secret")).unwrap();
    let second = service.add_user(new_user("B", "b@e.com", "R", "secret")).unwrap();

    assert_eq!(first.id, 5);
    assert_eq!(second.id, 6);
}

#[test]
fn test_collection_length_ids_can_collide() {
    let mut service = create_test_service().with_id_strategy(IdStrategy::CollectionLength);
    service.delete_user(2);

    let created = service.add_user(new_user("A", "a@e.com", "R", "secret")).unwrap();

    assert_eq!(created.id, 4);
    let with_id_4 = service.list_users().iter().filter(|u| u.id == 4).count();
    assert_eq!(with_id_4, 2);
}

#[test]
fn test_empty_store_starts_at_one() {
    let _ = env_logger::try_init();
    let mut service = UserService::in_memory();
    assert_eq!(service.count_users(), 0);
    assert_eq!(service.add_user(new_user("A", "a@e.com", "R", "secret")).unwrap().id, 1);
}

#[test]
fn test_id_strategy_from_str() {
    assert_eq!("monotonic".parse::<IdStrategy>().unwrap(), IdStrategy::Monotonic);
    assert_eq!(" LENGTH ".parse::<IdStrategy>().unwrap(), IdStrategy::CollectionLength);
    assert!("random".parse::<IdStrategy>().is_err());
}

#[test]
fn test_mutations_are_audited_without_password() {
    let mut service = create_test_service();
    service.add_user(new_user("N", "n@e.com", "R", "secret")).unwrap();
    service.update_user(user(1, "L", "l@e.com", "R", "hunter22"));
    service.delete_user(2);
    service.delete_user(2);

    let logs = service.audit_logger().get_logs();
    let actions: Vec<AuditAction> = logs.iter().map(|l| l.action).collect();
    assert_eq!(
        actions,
        vec![AuditAction::AddUser, AuditAction::UpdateUser, AuditAction::DeleteUser]
    );
    assert_eq!(logs[0].user_id, 5);
    assert!(logs.iter().all(|l| !l.payload.contains("password")));
    assert!(!logs[1].payload.contains("hunter22"));
}

#[test]
fn test_user_debug_redacts_password() {
    let rendered = format!("{:?}", user(1, "L", "l@e.com", "R", "hunter22"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter22"));
}

#[test]
fn test_add_user_refuses_when_ids_are_exhausted() {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::with_users(vec![user(u32::MAX, "Last", "last@e.com", "R", "secret")]);
    let mut service = UserService::new(storage, InMemoryAuditLogger::new());
    let mut changes = service.subscribe_to_changes();

    let result = service.add_user(new_user("A", "a@e.com", "R", "secret"));

    assert_eq!(result, Err(UserDeskError::IdSpaceExhausted));
    assert_eq!(service.count_users(), 1);
    assert_eq!(changes.try_next(), None);
    assert!(service.audit_logger().get_logs().is_empty());
}

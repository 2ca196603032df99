use chrono::NaiveDate;
use student_core::{
    InMemoryStudentRepository, ServiceError, Student, StudentRepository, StudentService,
};

fn john_doe() -> Student {
    Student::new(
        "John Doe",
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        "123 Main St, City",
        "123-456-7890",
    )
}

fn new_service() -> StudentService<InMemoryStudentRepository> {
    StudentService::new(InMemoryStudentRepository::new())
}

#[test]
fn add_get_remove_scenario() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    let loaded = service.get_info("John Doe").unwrap().unwrap();
    assert_eq!(loaded, &john_doe());

    assert!(service.remove_existing("John Doe").unwrap());
    assert!(service.get_info("John Doe").unwrap().is_none());
}

#[test]
fn add_accepts_some_and_rejects_none() {
    let mut service = new_service();
    service.add_new(Some(john_doe())).unwrap();
    assert_eq!(service.get_all_info().len(), 1);

    let err = service.add_new(None::<Student>).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidArgument {
            param: "student",
            ..
        }
    ));
    assert_eq!(service.get_all_info().len(), 1);
}

#[test]
fn blank_names_are_rejected_by_every_name_operation() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    for name in ["", "   "] {
        assert!(matches!(
            service.remove_existing(name),
            Err(ServiceError::InvalidArgument { .. })
        ));
        assert!(matches!(
            service.update_info(name, &john_doe()),
            Err(ServiceError::InvalidArgument { .. })
        ));
        assert!(matches!(
            service.get_info(name),
            Err(ServiceError::InvalidArgument { .. })
        ));
    }

    assert_eq!(service.get_all_info(), &[john_doe()]);
}

#[test]
fn remove_missing_name_is_noop() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    assert!(!service.remove_existing("Nobody").unwrap());
    assert_eq!(service.get_all_info(), &[john_doe()]);
}

#[test]
fn remove_then_get_returns_none_for_never_added_name() {
    let mut service = new_service();
    assert!(!service.remove_existing("Ghost").unwrap());
    assert!(service.get_info("Ghost").unwrap().is_none());
}

#[test]
fn update_overwrites_all_fields() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    let updated = Student::new(
        "Johnny Doe",
        NaiveDate::from_ymd_opt(2000, 2, 29).unwrap(),
        "456 Side Ave, Town",
        "987-654-3210",
    );
    assert!(service.update_info("John Doe", &updated).unwrap());

    assert!(service.get_info("John Doe").unwrap().is_none());
    assert_eq!(service.get_info("Johnny Doe").unwrap(), Some(&updated));
    assert_eq!(service.get_all_info().len(), 1);
}

#[test]
fn update_keeping_name_reflects_new_fields() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    let mut updated = john_doe();
    updated.address = "1 New Rd".to_string();
    updated.phone_number = "000-000-0000".to_string();
    assert!(service.update_info("John Doe", &updated).unwrap());

    assert_eq!(service.get_info("John Doe").unwrap(), Some(&updated));
}

#[test]
fn update_missing_name_leaves_store_unchanged() {
    let mut service = new_service();
    service.add_new(john_doe()).unwrap();

    let other = Student::new(
        "Jane Roe",
        NaiveDate::from_ymd_opt(1998, 7, 4).unwrap(),
        "9 Elm Rd",
        "555-0100",
    );
    assert!(!service.update_info("Jane Roe", &other).unwrap());
    assert_eq!(service.get_all_info(), &[john_doe()]);
}

#[test]
fn duplicate_names_only_affect_first_match() {
    let mut service = new_service();
    let first = john_doe();
    let mut second = john_doe();
    second.phone_number = "111-111-1111".to_string();

    service.add_new(first.clone()).unwrap();
    service.add_new(second.clone()).unwrap();
    assert_eq!(service.get_all_info(), &[first.clone(), second.clone()]);

    assert_eq!(service.get_info("John Doe").unwrap(), Some(&first));

    assert!(service.remove_existing("John Doe").unwrap());
    assert_eq!(service.get_all_info(), &[second.clone()]);
    assert_eq!(service.get_info("John Doe").unwrap(), Some(&second));
}

#[test]
fn get_all_preserves_insertion_order() {
    let mut service = new_service();
    let names = ["Charlie", "Alice", "Bob"];
    for name in names {
        let mut student = john_doe();
        student.name = name.to_string();
        service.add_new(student).unwrap();
    }

    let listed: Vec<&str> = service
        .get_all_info()
        .iter()
        .map(|student| student.name.as_str())
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn service_reads_through_to_repository() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add(john_doe());

    let service = StudentService::new(repo);
    assert_eq!(service.repository().len(), 1);
    assert_eq!(service.get_info("John Doe").unwrap(), Some(&john_doe()));
}

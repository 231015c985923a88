use tabula::prelude::*;

#[test]
fn test_title_without_group() {
    let groups = GroupRegistry::new();
    let column = Column::new("Age", "age", NumberType::new());

    assert_eq!(column.title_with_group(&groups), "Age");
}

#[test]
fn test_title_with_single_group() {
    let mut groups = GroupRegistry::new();
    let personal = groups
        .add_root(GroupSpec::new("Personal").fields(["age", "name"]))
        .unwrap();
    let column = Column::new("Age", "age", NumberType::new()).group(personal);

    assert_eq!(column.title_with_group(&groups), "Personal Age");
}

#[test]
fn test_title_with_parent_group() {
    let mut groups = GroupRegistry::new();
    let info = groups.add_root(GroupSpec::new("Info")).unwrap();
    let personal = groups
        .add_child(info, GroupSpec::new("Personal").fields(["age"]))
        .unwrap();
    let column = Column::new("Age", "age", NumberType::new()).group(personal);

    assert_eq!(column.title_with_group(&groups), "Info Personal Age");
}

#[test]
fn test_expanded_group_contributes_no_segment() {
    let mut groups = GroupRegistry::new();
    let info = groups.add_root(GroupSpec::new("Info")).unwrap();
    let age = groups
        .add_child(info, GroupSpec::new("Age group").fields(["age"]).expanded())
        .unwrap();
    let column = Column::new("Age", "age", NumberType::new()).group(age);

    assert_eq!(column.title_with_group(&groups), "Info Age");
}

#[test]
fn test_deep_group_chain() {
    let mut groups = GroupRegistry::new();
    let mut parent = groups.add_root(GroupSpec::new("L0")).unwrap();
    for level in 1..50 {
        parent = groups
            .add_child(parent, GroupSpec::new(format!("L{level}")))
            .unwrap();
    }
    let column = Column::new("Leaf", "leaf", TextType::new()).group(parent);

    let title = column.title_with_group(&groups);
    let parts: Vec<&str> = title.split(' ').collect();

    assert_eq!(parts.len(), 51);
    assert_eq!(parts.first(), Some(&"L0"));
    assert_eq!(parts[49], "L49");
    assert_eq!(parts.last(), Some(&"Leaf"));
    assert_eq!(groups.depth(parent), 49);
}

#[test]
fn test_unknown_group_uses_bare_title() {
    let mut other = GroupRegistry::new();
    let foreign = other.add_root(GroupSpec::new("Elsewhere")).unwrap();

    let column = Column::new("Age", "age", NumberType::new()).group(foreign);

    assert_eq!(column.title_with_group(&GroupRegistry::new()), "Age");
}

#[test]
fn test_title_follows_group_rename() {
    let mut groups = GroupRegistry::new();
    let personal = groups.add_root(GroupSpec::new("Personal").fields(["age"])).unwrap();
    let column = Column::new("Age", "age", NumberType::new()).group(personal);

    groups.get_mut(personal).unwrap().title = "Private".to_string();

    assert_eq!(column.title_with_group(&groups), "Private Age");
}

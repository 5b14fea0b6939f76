//! Member selection for memberwise comparison.

use crate::descriptor::{MemberDescriptor, MemberKind, TypeDescriptor};

/// Returns the members that take part in memberwise comparison.
///
/// Fields participate only when marked include, properties unless marked
/// exclude. When two declarations share a name the later one wins. Fields
/// come first, then properties, each in declaration order.
pub fn select_members<T: ?Sized + 'static>(
    descriptor: &TypeDescriptor<T>,
) -> Vec<&MemberDescriptor<T>> {
    let declared = descriptor.members();

    let visible: Vec<&MemberDescriptor<T>> = declared
        .iter()
        .enumerate()
        .filter(|(index, member)| {
            !declared[index + 1..]
                .iter()
                .any(|later| later.name == member.name)
        })
        .map(|(_, member)| member)
        .collect();

    let fields = visible
        .iter()
        .copied()
        .filter(|m| m.kind == MemberKind::Field && m.is_included());
    let properties = visible
        .iter()
        .copied()
        .filter(|m| m.kind == MemberKind::Property && m.is_included());

    fields.chain(properties).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Inclusion;

    struct Sample {
        a: i32,
        b: i32,
        c: i32,
        d: i32,
    }

    fn names(members: &[&MemberDescriptor<Sample>]) -> Vec<&'static str> {
        members.iter().map(|m| m.name).collect()
    }

    #[test]
    fn test_fields_need_include() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample")
            .with_field::<i32>("a", |s| &s.a, Inclusion::Default)
            .with_field::<i32>("b", |s| &s.b, Inclusion::Include)
            .with_field::<i32>("c", |s| &s.c, Inclusion::Exclude);

        assert_eq!(names(&select_members(&descriptor)), vec!["b"]);
    }

    #[test]
    fn test_properties_need_no_mark() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample")
            .with_property::<i32>("a", |s| &s.a, Inclusion::Default)
            .with_property::<i32>("b", |s| &s.b, Inclusion::Exclude)
            .with_property::<i32>("c", |s| &s.c, Inclusion::Include);

        assert_eq!(names(&select_members(&descriptor)), vec!["a", "c"]);
    }

    #[test]
    fn test_fields_precede_properties() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample")
            .with_property::<i32>("d", |s| &s.d, Inclusion::Default)
            .with_field::<i32>("a", |s| &s.a, Inclusion::Include)
            .with_property::<i32>("c", |s| &s.c, Inclusion::Default)
            .with_field::<i32>("b", |s| &s.b, Inclusion::Include);

        assert_eq!(
            names(&select_members(&descriptor)),
            vec!["a", "b", "d", "c"]
        );
    }

    #[test]
    fn test_later_declaration_shadows_earlier() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample")
            .with_property::<i32>("a", |s| &s.a, Inclusion::Default)
            .with_property::<i32>("b", |s| &s.b, Inclusion::Default)
            .with_property::<i32>("a", |s| &s.c, Inclusion::Exclude);

        assert_eq!(names(&select_members(&descriptor)), vec!["b"]);
    }

    #[test]
    fn test_shadowing_can_change_kind() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample")
            .with_property::<i32>("a", |s| &s.a, Inclusion::Default)
            .with_field::<i32>("a", |s| &s.b, Inclusion::Include);

        let selected = select_members(&descriptor);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].kind, MemberKind::Field);
    }

    #[test]
    fn test_no_members() {
        let descriptor = TypeDescriptor::<Sample>::new("Sample");
        assert!(select_members(&descriptor).is_empty());
    }
}

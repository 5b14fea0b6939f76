//! Tests for type and member descriptors.

use super::*;

// ============================================================================
// Member Descriptor Tests
// ============================================================================

mod member_tests {
    use super::*;

    struct Holder {
        count: u32,
        label: String,
    }

    fn count(inclusion: Inclusion) -> MemberDescriptor<Holder> {
        MemberDescriptor::field::<u32>("count", |h| &h.count, inclusion)
    }

    fn label(inclusion: Inclusion) -> MemberDescriptor<Holder> {
        MemberDescriptor::property::<String>("label", |h| &h.label, inclusion)
    }

    #[test]
    fn test_field_inclusion() {
        assert!(!count(Inclusion::Default).is_included());
        assert!(count(Inclusion::Include).is_included());
        assert!(!count(Inclusion::Exclude).is_included());
    }

    #[test]
    fn test_property_inclusion() {
        assert!(label(Inclusion::Default).is_included());
        assert!(label(Inclusion::Include).is_included());
        assert!(!label(Inclusion::Exclude).is_included());
    }

    #[test]
    fn test_member_metadata() {
        let member = label(Inclusion::Default);

        assert_eq!(member.name, "label");
        assert_eq!(member.kind, MemberKind::Property);
        assert_eq!(member.member_type, std::any::type_name::<String>());
        assert_eq!(member.inclusion, Inclusion::Default);
    }

    #[test]
    fn test_debug_omits_binder() {
        let member = count(Inclusion::Include);
        let debug = format!("{member:?}");

        assert!(debug.contains("count"));
        assert!(debug.contains("Field"));
        assert!(debug.contains("Include"));
    }
}

// ============================================================================
// Type Descriptor Tests
// ============================================================================

mod type_descriptor_tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Bag {
        items: Vec<u8>,
        owner: String,
    }

    impl crate::sequence::Iterable<u8> for Bag {
        fn items(&self) -> Box<dyn Iterator<Item = &u8> + '_> {
            Box::new(self.items.iter())
        }
    }

    #[test]
    fn test_new_has_no_declarations() {
        let descriptor = TypeDescriptor::<Bag>::new("Bag");

        assert_eq!(descriptor.type_name, "Bag");
        assert!(!descriptor.is_primitive());
        assert!(!descriptor.is_equatable());
        assert!(!descriptor.is_engine_dependent());
        assert_eq!(descriptor.item_type(), None);
        assert!(!descriptor.is_sequence_opted_out());
        assert_eq!(descriptor.opaque_reason(), None);
        assert!(descriptor.members().is_empty());
    }

    #[test]
    fn test_builder_records_declarations() {
        let descriptor = TypeDescriptor::<Bag>::new("Bag")
            .with_equatable()
            .with_engine_dependency()
            .with_sequence::<u8>()
            .without_sequence()
            .with_operand_debug()
            .with_property::<String>("owner", |b| &b.owner, Inclusion::Default)
            .with_field::<Vec<u8>>("items", |b| &b.items, Inclusion::Include);

        assert!(descriptor.is_equatable());
        assert!(descriptor.is_engine_dependent());
        assert_eq!(descriptor.item_type(), Some("u8"));
        assert!(descriptor.is_sequence_opted_out());
        assert!(descriptor.render.is_some());

        let names: Vec<_> = descriptor.members().iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["owner", "items"]);
    }

    #[test]
    fn test_opaque_reason() {
        let descriptor = TypeDescriptor::<Bag>::new("Bag").opaque("handle to a socket");
        assert_eq!(descriptor.opaque_reason(), Some("handle to a socket"));
    }

    #[test]
    fn test_operand_debug_renders() {
        let descriptor = TypeDescriptor::<Bag>::new("Bag").with_operand_debug();
        let render = descriptor.render.unwrap();
        let bag = Bag {
            items: vec![1],
            owner: "ann".to_string(),
        };

        assert_eq!(render(&bag), format!("{bag:?}"));
    }

    #[test]
    fn test_primitive_uses_native_equality() {
        let descriptor = TypeDescriptor::<u8>::new("u8").primitive();
        let eq = descriptor.primitive.unwrap();

        assert!(eq(&3, &3));
        assert!(!eq(&3, &4));
    }
}

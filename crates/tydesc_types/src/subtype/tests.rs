use super::*;
use tydesc_value::Value;

fn samples() -> Vec<Descriptor> {
    vec![
        Descriptor::Nil,
        Descriptor::Boolean,
        Descriptor::Number,
        Descriptor::String,
        Descriptor::Function,
        Descriptor::Thread,
        Descriptor::literal("x"),
        Descriptor::optional(Descriptor::Number),
        Descriptor::tuple([Descriptor::Number]),
        Descriptor::union([Descriptor::Number, Descriptor::String]),
        Descriptor::union([]),
        Descriptor::map(Some(Descriptor::String), None),
        Descriptor::field("k", Some(Descriptor::Number)),
        Descriptor::table([], [FieldType::named("a", Descriptor::Number)]),
        Descriptor::custom("Widget"),
    ]
}

#[test]
fn everything_is_a_subtype_of_any() {
    for d in samples() {
        assert!(d.is_subtype(&Descriptor::Any), "{d:?}");
    }
    assert!(Descriptor::Any.is_subtype(&Descriptor::Any));
}

#[test]
fn any_is_a_subtype_of_any_only() {
    for d in samples() {
        assert!(!Descriptor::Any.is_subtype(&d), "{d:?}");
    }
    assert!(!Descriptor::Any.is_subtype(&Descriptor::optional(Descriptor::Any)));
    assert!(!Descriptor::Any.is_subtype(&Descriptor::union([Descriptor::Any])));
}

#[test]
fn subtyping_is_reflexive() {
    for d in samples() {
        assert!(d.is_subtype(&d), "{d:?}");
    }
}

#[test]
fn is_type_of_is_the_inverse_query() {
    let n = Descriptor::Number;
    let opt = Descriptor::optional(Descriptor::Number);
    assert!(n.is_subtype(&opt));
    assert!(opt.is_type_of(&n));
    assert!(!n.is_type_of(&opt));
}

#[test]
fn primitives_relate_only_to_themselves() {
    assert!(Descriptor::Number.is_subtype(&Descriptor::Number));
    assert!(!Descriptor::Number.is_subtype(&Descriptor::String));
    assert!(!Descriptor::Nil.is_subtype(&Descriptor::Boolean));
}

#[test]
fn literals_refine_their_primitive() {
    assert!(Descriptor::literal(true).is_subtype(&Descriptor::Boolean));
    assert!(Descriptor::literal("a").is_subtype(&Descriptor::String));
    assert!(!Descriptor::literal(1).is_subtype(&Descriptor::String));
    assert!(!Descriptor::Boolean.is_subtype(&Descriptor::literal(true)));

    assert!(Descriptor::literal(1).is_subtype(&Descriptor::literal(1.0)));
    assert!(!Descriptor::literal(1).is_subtype(&Descriptor::literal(2)));
    let nan = Descriptor::literal(f64::NAN);
    assert!(nan.is_subtype(&nan.clone()));
}

#[test]
fn optional_absorption() {
    let opt = Descriptor::optional(Descriptor::String);
    assert!(Descriptor::Nil.is_subtype(&opt));
    assert!(Descriptor::String.is_subtype(&opt));
    assert!(Descriptor::literal("x").is_subtype(&opt));
    assert!(!Descriptor::Number.is_subtype(&opt));

    // Absence is not covered by the bare inner type
    assert!(!opt.is_subtype(&Descriptor::String));
    assert!(opt.is_subtype(&Descriptor::optional(Descriptor::String)));
    assert!(Descriptor::optional(Descriptor::literal("x")).is_subtype(&opt));
    assert!(!opt.is_subtype(&Descriptor::optional(Descriptor::Number)));
}

#[test]
fn tuples_are_covariant_per_position() {
    let narrow = Descriptor::tuple([Descriptor::literal(1), Descriptor::String]);
    let wide = Descriptor::tuple([Descriptor::Number, Descriptor::String]);
    assert!(narrow.is_subtype(&wide));
    assert!(!wide.is_subtype(&narrow));
}

#[test]
fn tuples_need_equal_arity() {
    let one = Descriptor::tuple([Descriptor::Number]);
    let two = Descriptor::tuple([Descriptor::Number, Descriptor::Number]);
    assert!(!one.is_subtype(&two));
    assert!(!two.is_subtype(&one));
}

#[test]
fn tuples_relate_to_nothing_else() {
    let t = Descriptor::tuple([Descriptor::Number]);
    assert!(!t.is_subtype(&Descriptor::Number));
    assert!(!t.is_subtype(&Descriptor::union([t.clone()])));
    assert!(!t.is_subtype(&Descriptor::optional(t.clone())));
}

#[test]
fn union_on_the_left_needs_one_member_against_non_union() {
    let u = Descriptor::union([Descriptor::Number, Descriptor::String]);
    assert!(u.is_subtype(&Descriptor::Number));
    assert!(u.is_subtype(&Descriptor::String));
    assert!(!u.is_subtype(&Descriptor::Boolean));
}

#[test]
fn union_against_union_must_cover_every_member_of_the_right() {
    let ab = Descriptor::union([Descriptor::Number, Descriptor::String]);
    let ba = Descriptor::union([Descriptor::String, Descriptor::Number]);
    let abc = Descriptor::union([Descriptor::Number, Descriptor::String, Descriptor::Boolean]);

    assert!(ab.is_subtype(&ba));
    assert!(ba.is_subtype(&ab));
    // Boolean on the right is not explained by any member on the left
    assert!(!ab.is_subtype(&abc));
    assert!(abc.is_subtype(&ab));
}

#[test]
fn empty_unions() {
    let empty = Descriptor::union([]);
    assert!(empty.is_subtype(&Descriptor::union([])));
    assert!(Descriptor::Number.is_subtype(&Descriptor::union([Descriptor::Number])));
    assert!(!Descriptor::Number.is_subtype(&empty));
    assert!(!empty.is_subtype(&Descriptor::Number));
    // Vacuously covers every member of an empty right-hand union
    assert!(Descriptor::union([Descriptor::Number]).is_subtype(&empty));
}

#[test]
fn scalar_into_union_needs_one_member() {
    let u = Descriptor::union([Descriptor::Number, Descriptor::optional(Descriptor::String)]);
    assert!(Descriptor::literal(3).is_subtype(&u));
    assert!(Descriptor::Nil.is_subtype(&u));
    assert!(!Descriptor::Boolean.is_subtype(&u));
}

#[test]
fn maps_with_unset_sides_are_unconstrained() {
    let typed = MapType::new(Some(Descriptor::String), Some(Descriptor::Number));
    let open = MapType::new(None, None);
    assert!(typed.is_subtype(&open));
    assert!(open.is_subtype(&typed));

    let literal_keys = MapType::new(Some(Descriptor::literal("k")), Some(Descriptor::Number));
    assert!(literal_keys.is_subtype(&typed));
    assert!(!typed.is_subtype(&literal_keys));
}

#[test]
fn fields_need_identical_keys() {
    let a = FieldType::named("a", Descriptor::Number);
    let b = FieldType::named("b", Descriptor::Number);
    assert!(!a.is_subtype(&b));

    let untyped = FieldType::new(Value::string("a"), None);
    assert!(a.is_subtype(&untyped));
    assert!(untyped.is_subtype(&a));

    let narrow = FieldType::named("a", Descriptor::literal(1));
    assert!(narrow.is_subtype(&a));
    assert!(!a.is_subtype(&narrow));
}

#[test]
fn maps_and_fields_relate_only_to_their_own_kind() {
    let map = Descriptor::map(None, None);
    let field = Descriptor::field("a", None);
    assert!(!map.is_subtype(&field));
    assert!(!field.is_subtype(&map));
    assert!(!map.is_subtype(&Descriptor::table([], [])));
}

#[test]
fn table_fields_must_be_explained_by_the_supertype() {
    let t1 = Descriptor::table([], [FieldType::named("a", Descriptor::Number)]);
    let t2 = Descriptor::table(
        [],
        [
            FieldType::named("a", Descriptor::Number),
            FieldType::named("b", Descriptor::String),
        ],
    );
    // Every field of t1 has a counterpart in t2.
    assert!(t1.is_subtype(&t2));
    // t2's `b` has no counterpart in t1.
    assert!(!t2.is_subtype(&t1));
}

#[test]
fn table_maps_of_the_supertype_must_be_covered() {
    let wide_tail = Descriptor::table([MapType::new(Some(Descriptor::String), None)], []);
    let narrow_tail = Descriptor::table(
        [MapType::new(Some(Descriptor::literal("x")), None)],
        [],
    );
    let no_tail = Descriptor::table([], []);

    assert!(narrow_tail.is_subtype(&wide_tail));
    assert!(!wide_tail.is_subtype(&narrow_tail));
    assert!(wide_tail.is_subtype(&no_tail));
    assert!(!no_tail.is_subtype(&wide_tail));
}

#[test]
fn tables_relate_to_nothing_else() {
    let t = Descriptor::table([], []);
    assert!(!t.is_subtype(&Descriptor::optional(t.clone())));
    assert!(!t.is_subtype(&Descriptor::union([t.clone()])));
}

#[test]
fn custom_kinds_match_by_name() {
    let a = Descriptor::custom("Vector3");
    assert!(a.is_subtype(&Descriptor::custom("Vector3")));
    assert!(!a.is_subtype(&Descriptor::custom("CFrame")));
    assert!(!a.is_subtype(&Descriptor::table([], [])));
    assert!(!Descriptor::table([], []).is_subtype(&a));
}

#[test]
fn nil_literal_absorbs_into_optional() {
    let nil = Descriptor::literal(Value::Nil);
    assert!(nil.is_subtype(&Descriptor::Nil));
    assert!(nil.is_subtype(&Descriptor::optional(Descriptor::Number)));
    assert!(!Descriptor::literal(true).is_subtype(&Descriptor::optional(Descriptor::Number)));
}

#[test]
fn optional_splits_across_a_union() {
    let opt = Descriptor::optional(Descriptor::Number);
    let nil_or_number = Descriptor::union([Descriptor::Nil, Descriptor::Number]);
    assert!(opt.is_subtype(&nil_or_number));
    assert!(nil_or_number.is_subtype(&opt));

    // Neither half may go missing.
    assert!(!opt.is_subtype(&Descriptor::union([Descriptor::Nil, Descriptor::String])));
    assert!(!opt.is_subtype(&Descriptor::union([Descriptor::Number])));

    // A whole-optional member still covers it.
    assert!(opt.is_subtype(&Descriptor::union([Descriptor::String, opt.clone()])));
}

use pretty_assertions::assert_eq;

use super::*;
use crate::api::{Diagnostic, Severity};
use crate::syntax::Pattern;
use crate::test_utils::init_test_logging;
use crate::types::{
    Kind, PolyType, PolyVar, Quantifiability, Ty, TypeDeclaration, TypeDefinitions,
};
use crate::{String, ToString};

struct Fixture {
    ctx: TypeContext,
    defs: TypeDefinitions,
}

impl Fixture {
    fn new() -> Self {
        init_test_logging();
        Fixture {
            ctx: TypeContext::new(),
            defs: TypeDefinitions::new(),
        }
    }

    fn variant(&mut self, name: &str, constructors: &[(&str, PolyType)]) -> MonoType {
        let decl = self.defs.declare_variant(&mut self.ctx, name, 0);
        for (ctor, payload) in constructors {
            self.defs
                .add_constructor(&decl.id, *ctor, payload.clone())
                .unwrap();
        }
        self.defs.variant_type(&decl.id, Vec::new()).unwrap()
    }

    /// `None | Some of 'a`
    fn option(&mut self) -> TypeDeclaration {
        let option = self.defs.declare_variant(&mut self.ctx, "option", 1);
        self.defs
            .add_constructor(&option.id, "None", PolyType::unit())
            .unwrap();
        self.defs
            .add_constructor(&option.id, "Some", option.param(0))
            .unwrap();
        option
    }

    fn check_with(
        &mut self,
        ty: &MonoType,
        branches: &[PatternBranch<()>],
        options: &CheckOptions,
    ) -> MatchReport {
        check_match(
            &mut self.ctx,
            &self.defs,
            Level::BOTTOM,
            branches,
            ty,
            Span::new(0, 10),
            options,
        )
    }

    fn check(&mut self, ty: &MonoType, branches: &[PatternBranch<()>]) -> MatchReport {
        self.check_with(ty, branches, &CheckOptions::default())
    }
}

fn plain(patterns: impl IntoIterator<Item = Pattern>) -> Vec<PatternBranch<()>> {
    patterns
        .into_iter()
        .map(|pattern| PatternBranch::new(pattern, ()))
        .collect()
}

fn indices(items: &[usize]) -> BTreeSet<usize> {
    items.iter().copied().collect()
}

fn rendered(witnesses: &[Instance]) -> Vec<String> {
    witnesses.iter().map(|w| w.to_string()).collect()
}

fn abc(fixture: &mut Fixture) -> MonoType {
    fixture.variant(
        "abc",
        &[
            ("A", PolyType::int()),
            ("B", PolyType::int()),
            ("C", PolyType::int()),
        ],
    )
}

fn a(name: &str) -> Pattern {
    Pattern::ctor(name, Pattern::Wildcard)
}

#[test]
fn test_bool_both_values_is_clean() {
    let mut fixture = Fixture::new();
    let report = fixture.check(
        &MonoType::bool(),
        &plain([Pattern::Bool(true), Pattern::Bool(false)]),
    );

    assert!(report.is_clean());
    assert_eq!(report.used, indices(&[0, 1]));
}

#[test]
fn test_bool_missing_false() {
    let mut fixture = Fixture::new();
    let report = fixture.check(&MonoType::bool(), &plain([Pattern::Bool(true)]));

    assert_eq!(rendered(&report.non_exhaustive), ["false"]);
    assert_eq!(report.used, indices(&[0]));
    assert!(report.unused.is_empty());
}

#[test]
fn test_no_branches_misses_everything() {
    let mut fixture = Fixture::new();
    let report = fixture.check(&MonoType::bool(), &[]);

    assert_eq!(rendered(&report.non_exhaustive), ["_"]);
    assert!(report.used.is_empty());
}

#[test]
fn test_list_nil_and_cons_is_exhaustive() {
    let mut fixture = Fixture::new();
    let ty = MonoType::list(MonoType::int());
    let report = fixture.check(
        &ty,
        &plain([
            Pattern::EndOfList,
            Pattern::cons(Pattern::var("x"), Pattern::var("xs")),
        ]),
    );

    assert!(report.is_clean());
    assert_eq!(report.used, indices(&[0, 1]));
}

#[test]
fn test_list_of_bounded_length() {
    let mut fixture = Fixture::new();
    let ty = MonoType::list(MonoType::int());
    let report = fixture.check(
        &ty,
        &plain([Pattern::EndOfList, Pattern::list([Pattern::var("x")])]),
    );

    assert_eq!(rendered(&report.non_exhaustive), ["_ :: _ :: _"]);
}

#[test]
fn test_variant_with_final_wildcard_is_clean() {
    let mut fixture = Fixture::new();
    let ty = abc(&mut fixture);
    let report = fixture.check(&ty, &plain([a("A"), a("B"), Pattern::Wildcard]));

    assert!(report.is_clean());
    assert_eq!(report.used, indices(&[0, 1, 2]));
}

#[test]
fn test_variant_duplicate_branch_and_missing_constructor() {
    let mut fixture = Fixture::new();
    let ty = abc(&mut fixture);
    let report = fixture.check(&ty, &plain([a("A"), a("B"), a("A")]));

    assert_eq!(rendered(&report.non_exhaustive), ["C(_)"]);
    assert_eq!(report.unused, [2]);
}

#[test]
fn test_nullary_constructors_render_bare() {
    let mut fixture = Fixture::new();
    let ty = fixture.variant(
        "color",
        &[
            ("Red", PolyType::unit()),
            ("Green", PolyType::unit()),
            ("Blue", PolyType::unit()),
        ],
    );
    let report = fixture.check(
        &ty,
        &plain([Pattern::nullary("Red"), Pattern::nullary("Green")]),
    );

    assert_eq!(rendered(&report.non_exhaustive), ["Blue"]);
}

#[test]
fn test_option_payload_literals() {
    let mut fixture = Fixture::new();
    let option = fixture.option();
    let ty = fixture
        .defs
        .variant_type(&option.id, vec![MonoType::int()])
        .unwrap();
    let report = fixture.check(
        &ty,
        &plain([
            Pattern::ctor("Some", Pattern::Int(0)),
            Pattern::nullary("None"),
        ]),
    );

    assert_eq!(rendered(&report.non_exhaustive), ["Some(1)"]);
    assert_eq!(report.used, indices(&[0, 1]));
}

#[test]
fn test_guarded_branch_alone_is_guard_unverified() {
    let mut fixture = Fixture::new();
    let branches = vec![
        PatternBranch::guarded(Pattern::Bool(true), (), ()),
        PatternBranch::new(Pattern::Bool(false), ()),
    ];
    let report = fixture.check(&MonoType::bool(), &branches);

    assert!(report.is_exhaustive());
    assert_eq!(rendered(&report.guard_unverified), ["true"]);
    assert_eq!(report.used, indices(&[0, 1]));
}

#[test]
fn test_lone_guarded_branch_splits_its_findings() {
    let mut fixture = Fixture::new();
    let branches = vec![PatternBranch::guarded(Pattern::Bool(true), (), ())];
    let report = fixture.check(&MonoType::bool(), &branches);

    assert_eq!(rendered(&report.non_exhaustive), ["false"]);
    assert_eq!(rendered(&report.guard_unverified), ["true"]);
    assert_eq!(report.used, indices(&[0]));
}

#[test]
fn test_guard_followed_by_catch_all_is_clean() {
    let mut fixture = Fixture::new();
    let branches = vec![
        PatternBranch::guarded(Pattern::var("x"), (), ()),
        PatternBranch::new(Pattern::Wildcard, ()),
    ];
    let report = fixture.check(&MonoType::int(), &branches);

    assert!(report.is_clean());
}

#[test]
fn test_branches_after_catch_all_are_unused() {
    let mut fixture = Fixture::new();
    let report = fixture.check(
        &MonoType::bool(),
        &plain([Pattern::Bool(true), Pattern::Wildcard, Pattern::Bool(false)]),
    );

    assert!(report.is_exhaustive());
    assert_eq!(report.unused, [2]);
}

#[test]
fn test_ten_digits_are_not_exhaustive() {
    let mut fixture = Fixture::new();
    let report = fixture.check(&MonoType::int(), &plain((0..10).map(Pattern::Int)));

    assert_eq!(rendered(&report.non_exhaustive), ["10"]);
    assert!(report.unused.is_empty());
}

#[test]
fn test_string_remainder_witness() {
    let mut fixture = Fixture::new();
    let report = fixture.check(
        &MonoType::string(),
        &plain([Pattern::str(""), Pattern::str("x")]),
    );

    assert_eq!(rendered(&report.non_exhaustive), [r#""xx""#]);
}

#[test]
fn test_tuple_gap_is_rebuilt() {
    let mut fixture = Fixture::new();
    let ty = MonoType::product(vec![MonoType::bool(), MonoType::bool()]);
    let report = fixture.check(
        &ty,
        &plain([
            Pattern::tuple([Pattern::Bool(true), Pattern::Wildcard]),
            Pattern::tuple([Pattern::Wildcard, Pattern::Bool(true)]),
        ]),
    );

    assert_eq!(rendered(&report.non_exhaustive), ["(false, false)"]);
    assert_eq!(report.used, indices(&[0, 1]));
}

#[test]
fn test_as_binding_keeps_inner_shape() {
    let mut fixture = Fixture::new();
    let report = fixture.check(
        &MonoType::bool(),
        &plain([Pattern::Bool(true).as_binding("b"), Pattern::Bool(false)]),
    );

    assert!(report.is_clean());

    let report = fixture.check(
        &MonoType::bool(),
        &plain([Pattern::Bool(true).as_binding("b")]),
    );
    assert_eq!(rendered(&report.non_exhaustive), ["false"]);
}

#[test]
fn test_synonym_scrutinee_is_expanded() {
    let mut fixture = Fixture::new();
    let flag = fixture
        .defs
        .declare_alias(&mut fixture.ctx, "flag", 0, |_| PolyType::bool());
    let ty = fixture
        .defs
        .alias_type(&mut fixture.ctx, Level::BOTTOM, &flag.id, Vec::new())
        .unwrap();

    let report = fixture.check(&ty, &plain([Pattern::Bool(true)]));
    assert_eq!(rendered(&report.non_exhaustive), ["false"]);
}

#[test]
fn test_alias_identity_is_expanded_through_environment() {
    let mut fixture = Fixture::new();
    let option = fixture.option();
    let maybe = fixture.defs.declare_alias(&mut fixture.ctx, "maybe", 1, |params| {
        Ty::Variant(vec![Ty::Var(PolyVar::Bound(params[0]))], option.id.clone())
    });
    let ty = Ty::Variant(vec![MonoType::bool()], maybe.id.clone());

    let report = fixture.check(
        &ty,
        &plain([
            Pattern::nullary("None"),
            Pattern::ctor("Some", Pattern::Bool(true)),
        ]),
    );
    assert_eq!(rendered(&report.non_exhaustive), ["Some(false)"]);
}

#[test]
fn test_same_named_types_keep_their_own_constructors() {
    let mut fixture = Fixture::new();
    let outer = fixture.variant("t", &[("A", PolyType::unit()), ("B", PolyType::unit())]);
    let inner = fixture.variant("t", &[("A", PolyType::int())]);

    let report = fixture.check(&outer, &plain([Pattern::nullary("A")]));
    assert_eq!(rendered(&report.non_exhaustive), ["B"]);

    let report = fixture.check(&inner, &plain([Pattern::ctor("A", Pattern::var("n"))]));
    assert!(report.is_clean());
}

#[test]
fn test_linked_scrutinee_is_resolved() {
    let mut fixture = Fixture::new();
    let var = fixture
        .ctx
        .fresh_free(Kind::Universal, Quantifiability::Quantifiable, Level::BOTTOM);
    fixture.ctx.link(var, MonoType::bool());

    let report = fixture.check(&Ty::Var(var), &plain([Pattern::Bool(false)]));
    assert_eq!(rendered(&report.non_exhaustive), ["true"]);
}

#[test]
fn test_witnesses_are_truncated() {
    let mut fixture = Fixture::new();
    let ty = fixture.variant(
        "dir",
        &[
            ("North", PolyType::unit()),
            ("East", PolyType::unit()),
            ("South", PolyType::unit()),
            ("West", PolyType::unit()),
        ],
    );
    let options = CheckOptions {
        max_witnesses: 2,
        ..CheckOptions::default()
    };
    let report = fixture.check_with(&ty, &plain([Pattern::nullary("North")]), &options);

    assert_eq!(rendered(&report.non_exhaustive), ["East", "South"]);
    assert_eq!(report.omitted_non_exhaustive, 1);
    assert_eq!(report.omitted_guard_unverified, 0);
}

#[test]
fn test_zero_witness_cap_still_reports_gaps() {
    let mut fixture = Fixture::new();
    let options = CheckOptions {
        max_witnesses: 0,
        ..CheckOptions::default()
    };
    let report = fixture.check_with(&MonoType::bool(), &plain([Pattern::Bool(true)]), &options);

    assert!(report.non_exhaustive.is_empty());
    assert_eq!(report.omitted_non_exhaustive, 1);
    assert!(!report.is_exhaustive());
    assert!(!report.is_clean());

    let diagnostic = report.to_diagnostic(&options).unwrap();
    assert_eq!(diagnostic.code.as_deref(), Some(NON_EXHAUSTIVE_CODE));
    assert_eq!(diagnostic.notes, ["non-exhaustive: 1 more case(s) not shown"]);
}

#[test]
fn test_omitted_witnesses_are_counted_per_category() {
    let mut fixture = Fixture::new();
    let options = CheckOptions {
        max_witnesses: 0,
        ..CheckOptions::default()
    };
    let branches = vec![PatternBranch::guarded(Pattern::Bool(true), (), ())];
    let report = fixture.check_with(&MonoType::bool(), &branches, &options);

    assert_eq!(report.omitted_non_exhaustive, 1);
    assert_eq!(report.omitted_guard_unverified, 1);
    assert!(report.relies_on_guards());
}

#[test]
fn test_report_match_emits_one_warning() {
    let mut fixture = Fixture::new();
    let mut sink: Vec<Diagnostic> = Vec::new();
    let branches = plain([Pattern::Bool(true), Pattern::Wildcard, Pattern::Bool(false)]);

    report_match(
        &mut fixture.ctx,
        &fixture.defs,
        Level::BOTTOM,
        &branches,
        &MonoType::bool(),
        Span::new(4, 20),
        &CheckOptions::default(),
        &mut sink,
    );

    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].severity, Severity::Warning);
    assert_eq!(sink[0].code.as_deref(), Some(UNUSED_BRANCH_CODE));
    assert_eq!(sink[0].notes, ["pattern #3 is unused"]);
}

#[test]
fn test_report_match_is_silent_for_clean_match() {
    let mut fixture = Fixture::new();
    let mut sink: Vec<Diagnostic> = Vec::new();

    report_match(
        &mut fixture.ctx,
        &fixture.defs,
        Level::BOTTOM,
        &plain([Pattern::Unit]),
        &MonoType::unit(),
        Span::new(0, 1),
        &CheckOptions::default(),
        &mut sink,
    );

    assert!(sink.is_empty());
}

#[test]
#[should_panic(expected = "has no signature")]
fn test_literal_against_function_type_is_fatal() {
    let mut fixture = Fixture::new();
    let ty = MonoType::function(MonoType::int(), MonoType::int());
    fixture.check(&ty, &plain([Pattern::Int(1)]));
}

//! End-to-end checks of match expressions through the public facade.

use pretty_assertions::assert_eq;
use quire::{
    CheckOptions, Diagnostic, Level, MonoType, Pattern, PatternBranch, PolyType, Span,
    TypeContext, TypeDefinitions, check_match, render_diagnostics_to_string_no_color,
    report_match,
};

const SOURCE: &str = "match shape with\n| Circle(r) -> r\n| Square(s) when s > 0 -> s\n| Circle(_) -> 0";

struct Shapes {
    ctx: TypeContext,
    defs: TypeDefinitions,
    shape: MonoType,
}

fn shapes() -> Shapes {
    let mut ctx = TypeContext::new();
    let mut defs = TypeDefinitions::new();
    let decl = defs.declare_variant(&mut ctx, "shape", 0);
    defs.add_constructor(&decl.id, "Circle", PolyType::int()).unwrap();
    defs.add_constructor(&decl.id, "Square", PolyType::int()).unwrap();
    defs.add_constructor(&decl.id, "Point", PolyType::unit()).unwrap();
    let shape = defs.variant_type(&decl.id, Vec::new()).unwrap();
    Shapes { ctx, defs, shape }
}

fn shape_branches() -> Vec<PatternBranch<&'static str>> {
    vec![
        PatternBranch::new(Pattern::ctor("Circle", Pattern::var("r")), "r"),
        PatternBranch::guarded(Pattern::ctor("Square", Pattern::var("s")), "s > 0", "s"),
        PatternBranch::new(Pattern::ctor("Circle", Pattern::Wildcard), "0"),
    ]
}

#[test]
fn test_all_findings_of_one_match() {
    let mut shapes = shapes();
    let report = check_match(
        &mut shapes.ctx,
        &shapes.defs,
        Level::BOTTOM,
        &shape_branches(),
        &shapes.shape,
        Span::new(0, SOURCE.len()),
        &CheckOptions::default(),
    );

    let missing: Vec<String> = report.non_exhaustive.iter().map(|w| w.to_string()).collect();
    let guarded: Vec<String> = report.guard_unverified.iter().map(|w| w.to_string()).collect();
    assert_eq!(missing, ["Point"]);
    assert_eq!(guarded, ["Square(_)"]);
    assert_eq!(report.unused, [2]);
}

#[test]
fn test_rendered_warning() {
    let mut shapes = shapes();
    let mut sink: Vec<Diagnostic> = Vec::new();
    report_match(
        &mut shapes.ctx,
        &shapes.defs,
        Level::BOTTOM,
        &shape_branches(),
        &shapes.shape,
        Span::new(0, SOURCE.len()),
        &CheckOptions::default(),
        &mut sink,
    );

    assert_eq!(sink.len(), 1);
    assert_eq!(
        sink[0].notes,
        [
            "non-exhaustive: Point",
            "guard-unverified: Square(_)",
            "pattern #3 is unused"
        ]
    );

    let output = render_diagnostics_to_string_no_color(SOURCE, &sink);
    assert!(output.contains("W0001"));
    assert!(output.contains("non-exhaustive: Point"));
    assert!(output.contains("pattern #3 is unused"));
}

#[test]
fn test_options_restrict_reported_findings() {
    let mut shapes = shapes();
    let options = CheckOptions {
        report_unused: false,
        report_guard_unverified: false,
        ..CheckOptions::default()
    };
    let mut sink: Vec<Diagnostic> = Vec::new();
    report_match(
        &mut shapes.ctx,
        &shapes.defs,
        Level::BOTTOM,
        &shape_branches(),
        &shapes.shape,
        Span::new(0, SOURCE.len()),
        &options,
        &mut sink,
    );

    assert_eq!(sink[0].notes, ["non-exhaustive: Point"]);
}

#[test]
fn test_nested_tuple_of_lists() {
    let mut ctx = TypeContext::new();
    let defs = TypeDefinitions::new();
    let ints = MonoType::list(MonoType::int());
    let ty = MonoType::product(vec![ints.clone(), ints]);
    let branches = vec![
        PatternBranch::new(Pattern::tuple([Pattern::EndOfList, Pattern::Wildcard]), ()),
        PatternBranch::new(Pattern::tuple([Pattern::Wildcard, Pattern::EndOfList]), ()),
    ];

    let report = check_match(
        &mut ctx,
        &defs,
        Level::BOTTOM,
        &branches,
        &ty,
        Span::default(),
        &CheckOptions::default(),
    );

    let missing: Vec<String> = report.non_exhaustive.iter().map(|w| w.to_string()).collect();
    assert_eq!(missing, ["(_ :: _, _ :: _)"]);
    assert!(report.unused.is_empty());
}

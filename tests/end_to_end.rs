//! End-to-end checks through the public API, the way a host's semantic
//! traversal would drive them: register the type graph once, feed every
//! written generic site and assignment-shaped site to one checker, then
//! drain the bag.

use nullcheck::prelude::*;

fn build_graph() -> TypeGraph {
    let mut graph = TypeGraph::new();
    graph.register(TypeDecl::new("String"));
    graph.register(TypeDecl::new("NonNullTypeParam").with_param(TypeParam::new("E")));
    graph.register(
        TypeDecl::new("NullableTypeParam").with_param(TypeParam::new("E").with_nullable_bound()),
    );
    graph.register(TypeDecl::new("SuperClassC").with_param(TypeParam::new("P1").with_nullable_bound()));
    graph.register(
        TypeDecl::new("SuperClassB")
            .with_param(TypeParam::new("P").with_nullable_bound())
            .extending("SuperClassC", vec![TypeArgExpr::param(0)]),
    );
    graph.register(
        TypeDecl::new("SubClassA")
            .with_param(TypeParam::new("P").with_nullable_bound())
            .extending("SuperClassB", vec![TypeArgExpr::param(0)]),
    );
    graph.register(TypeDecl::new("FnImpl1").extending("SubClassA", vec![TypeArgExpr::concrete("String")]));
    graph
}

fn string() -> TypeUse {
    TypeUse::non_generic("String")
}

#[test]
fn full_pass_over_a_program_fragment() {
    let graph = build_graph();
    let mut checker = GenericsChecker::new(&graph, CheckerConfig::strict());

    // A bad instantiation site, visited with all its nested written sites
    let site = TypeNode::new("NonNullTypeParam", Span::file("main.nl")).with_arg(
        TypeArgNode::new(TypeNode::new("String", Span::file("main.nl"))).nullable(),
    );
    for node in site.generic_sites() {
        checker.check_instantiation(node);
    }

    // A multi-level inheritance assignment: FnImpl1 is SuperClassC<String>,
    // which does not match the nullable target
    let target = TypeUse::new("SuperClassC", vec![TypeArg::nullable(string())]);
    let value = Expr::typed(TypeUse::non_generic("FnImpl1"), Span::file("main.nl"));
    checker.check_assignment(&target, &value);

    // A function whose declared return type disagrees with one branch
    let declared = TypeUse::new("NullableTypeParam", vec![TypeArg::non_null(string())]);
    let body = vec![Stmt::If {
        then_branch: vec![Stmt::Return(Some(Expr::typed(
            TypeUse::new("NullableTypeParam", vec![TypeArg::nullable(string())]),
            Span::file("main.nl"),
        )))],
        else_branch: Some(vec![Stmt::Return(Some(Expr::typed(
            declared.clone(),
            Span::file("main.nl"),
        )))]),
    }];
    checker.check_function_returns(&declared, &body);

    let bag = checker.into_diagnostics();
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.error_count(), 3);

    let codes: Vec<&str> = bag.diagnostics().iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["E1001", "E1002", "E1002"]);

    let json = bag.to_json();
    assert!(json.contains("\"code\":\"E1001\""));
    assert!(json.contains("main.nl"));
}

#[test]
fn disabled_mode_reports_nothing() {
    let graph = build_graph();
    let mut checker = GenericsChecker::new(&graph, CheckerConfig::default());

    let site = TypeNode::new("NonNullTypeParam", Span::file("main.nl")).with_arg(
        TypeArgNode::new(TypeNode::new("String", Span::file("main.nl"))).nullable(),
    );
    checker.check_instantiation(&site);

    let target = TypeUse::new("NullableTypeParam", vec![TypeArg::non_null(string())]);
    let value = Expr::typed(
        TypeUse::new("NullableTypeParam", vec![TypeArg::nullable(string())]),
        Span::file("main.nl"),
    );
    checker.check_assignment(&target, &value);

    assert!(checker.into_diagnostics().is_empty());
}

//! Typechecker unit tests.

use super::*;
use crate::frontend::diagnostics::ErrorKind;
use crate::frontend::parser;

fn check_str(source: &str) -> Result<Program, Vec<CompileError>> {
    let mut ast = parser::parse(source)?;
    check(&mut ast)?;
    Ok(ast)
}

fn errors_of(source: &str) -> Vec<CompileError> {
    match check_str(source) {
        Ok(_) => panic!("expected errors for {source:?}"),
        Err(errs) => errs,
    }
}

// ========================================
// Scenarios
// ========================================

#[test]
fn test_while_loop_program_checks() {
    let ast = check_str("int x = 1; while x < 3 { x = x + 1; } return x;").unwrap();
    assert_eq!(ast.ret.ty(), &Type::INT);
}

#[test]
fn test_sibling_branches_may_reuse_a_name() {
    let src = "bool b = true; int r = 0; if b { int y = 1; r = y; } else { int y = 2; r = y; } return r;";
    let ast = check_str(src).unwrap();
    let ids: Vec<u32> = ast.declarations().iter().map(|d| d.id.ordinal()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_assignment_mismatch_is_single_error() {
    let errs = errors_of("int z = 5; z = true; return z;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert_eq!(errs[0].kind, ErrorKind::Type);
    assert_eq!(
        errs[0].message,
        "right-hand side of assignment statement is of type 'bool' but 'z' is declared of type 'int'"
    );
    assert_eq!(errs[0].labels.len(), 1);
}

#[test]
fn test_redeclaration_reports_both_spans() {
    let src = "int w = 1; int w = 2; return w;";
    let errs = errors_of(src);
    assert_eq!(errs.len(), 1, "{errs:?}");
    let e = &errs[0];
    assert_eq!(e.kind, ErrorKind::Name);
    assert_eq!(&src[e.span.start.offset..e.span.end.offset], "w");
    assert_eq!(e.span.start.offset, 15);
    assert_eq!(e.labels[0].span.start.offset, 4);
}

#[test]
fn test_projection_types_element() {
    let ast = check_str("(int, bool) t = (1, true); int i = t(0); bool b = t(1); return i;").unwrap();
    let decls = ast.declarations();
    assert_eq!(decls[0].ty.node, Type::Tuple(vec![Type::INT, Type::BOOL]));
    assert_eq!(decls[1].init.ty(), &Type::INT);
    assert_eq!(decls[2].init.ty(), &Type::BOOL);
}

// ========================================
// Scoping
// ========================================

#[test]
fn test_loop_local_is_invisible_after_loop() {
    let errs = errors_of("int x = 0; while x < 1 { int y = 1; x = y; } return y;");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].message, "identifier 'y' not found");
}

#[test]
fn test_shadowing_resolves_to_innermost() {
    let src = "int x = 1; { bool x = true; x = false; } x = 2; return x;";
    let ast = check_str(src).unwrap();
    let StmtKind::Block(block) = &ast.body.stmts[1].kind else {
        panic!("expected block");
    };
    let StmtKind::Assign(inner) = &block.stmts[1].kind else {
        panic!("expected assignment");
    };
    assert_eq!(inner.target.node.decl, Some(DeclId(1)));
    let StmtKind::Assign(outer) = &ast.body.stmts[2].kind else {
        panic!("expected assignment");
    };
    assert_eq!(outer.target.node.decl, Some(DeclId(0)));
    let ExprKind::Name(ret) = &ast.ret.kind else {
        panic!("expected name");
    };
    assert_eq!(ret.decl, Some(DeclId(0)));
}

#[test]
fn test_redeclaration_in_nested_scope_is_shadowing() {
    assert!(check_str("int x = 1; if true { int x = 2; } return x;").is_ok());
}

#[test]
fn test_scopes_do_not_leak_across_passes() {
    let mut checker = TypeChecker::new();
    let mut first = parser::parse("int x = 1; return x;").unwrap();
    assert!(checker.check_program(&mut first).is_ok());
    let mut second = parser::parse("int x = 2; return x;").unwrap();
    assert!(checker.check_program(&mut second).is_ok());
    assert!(checker.symbols.get(0).is_some());
    assert!(checker.symbols.get(1).is_none());
}

// ========================================
// Expressions
// ========================================

#[test]
fn test_operator_results() {
    let ast = check_str("int a = 1; bool p = a < 2 and not (a == 3); return -a * 2 + 1;").unwrap();
    assert_eq!(ast.declarations()[1].init.ty(), &Type::BOOL);
    assert_eq!(ast.ret.ty(), &Type::INT);
}

#[test]
fn test_operand_mismatch_keeps_nominal_type() {
    let errs = errors_of("int a = true + 1; return a;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert_eq!(
        errs[0].message,
        "left-hand side of operator '+' must be of type 'int' but is of type 'bool'"
    );

    let errs = errors_of("bool b = not 1; return b;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert!(errs[0].message.starts_with("operand of operator 'not'"));
}

#[test]
fn test_unknown_name_does_not_cascade() {
    let errs = errors_of("int a = q + 1; bool b = q and true; return q;");
    assert_eq!(errs.len(), 3, "{errs:?}");
    assert!(errs.iter().all(|e| e.message == "identifier 'q' not found"));
}

#[test]
fn test_declaration_mismatch_still_binds() {
    let errs = errors_of("int x = (1, 2); x = 3; return x + 1;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert_eq!(
        errs[0].message,
        "initialization of declaration statement is of type '(int, int)' but 'x' is declared of type 'int'"
    );
}

#[test]
fn test_tuple_structural_equality() {
    assert!(check_str("((int) (bool, int)) t = ((1,), (true, 2)); return t;").is_ok());
    let errs = errors_of("(int, bool) t = (true, 1); return t;");
    assert_eq!(errs.len(), 1);
    let errs = errors_of("(int, bool) t = (1, true, 2); return t;");
    assert_eq!(errs.len(), 1);
}

#[test]
fn test_conditions_must_be_bool() {
    let errs = errors_of("int x = 1; while x { x = 0; } if x + 1 { } return x;");
    assert_eq!(errs.len(), 2, "{errs:?}");
    assert!(errs[0].message.starts_with("condition of a while statement"));
    assert!(errs[1].message.starts_with("condition of an if statement"));
}

#[test]
fn test_condition_error_does_not_block_body() {
    let errs = errors_of("while 1 { int y = true; } return 0;");
    assert_eq!(errs.len(), 2, "{errs:?}");
}

// ========================================
// Projection
// ========================================

#[test]
fn test_projection_index_must_be_literal() {
    let errs = errors_of("(int, int) t = (1, 2); int i = 0; int j = t(i); return j;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert_eq!(errs[0].message, "tuple index must be an integer literal");
}

#[test]
fn test_projection_index_out_of_range() {
    let errs = errors_of("(int, int) t = (1, 2); int j = t(2); return j;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert_eq!(
        errs[0].message,
        "tuple index 2 out of range for type '(int, int)' with 2 element(s)"
    );
}

#[test]
fn test_projection_of_non_tuple() {
    let errs = errors_of("int x = 1; int y = x(0); return y;");
    assert_eq!(errs.len(), 1, "{errs:?}");
    assert!(errs[0].message.starts_with("left-hand side of operator '()' must be of type 'tuple'"));
}

#[test]
fn test_projection_of_unknown_name_reports_once() {
    let errs = errors_of("int y = t(0); return y;");
    assert_eq!(errs.len(), 1, "{errs:?}");
}

#[test]
fn test_nested_projection() {
    let ast = check_str("((int, bool), int) t = ((1, true), 2); bool b = t(0)(1); return b;").unwrap();
    assert_eq!(ast.declarations()[1].init.ty(), &Type::BOOL);
}

#[test]
fn test_projection_is_typed_by_its_element() {
    let ast = check_str("int x = (1, true)(0); bool b = (1, true)(1); return x;").unwrap();
    assert_eq!(ast.declarations()[0].init.ty(), &Type::INT);
    assert_eq!(ast.declarations()[1].init.ty(), &Type::BOOL);

    let mut checker = TypeChecker::new();
    let tuple = Expr::new(ExprKind::Tuple(vec![Expr::new(ExprKind::Int(7), Span::default())]), Span::default());
    let index = Expr::new(ExprKind::Int(0), Span::default());
    let mut proj = Expr::new(ExprKind::Binary(Box::new(tuple), BinaryOp::Project, Box::new(index)), Span::default());
    assert_eq!(checker.check_expr(&mut proj), Type::INT);
    assert!(checker.errors.is_empty());
}

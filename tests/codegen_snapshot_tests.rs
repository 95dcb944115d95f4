//! Golden snapshot tests for the text emitters
//!
//! Each test checks a small program and renders it in one target. Run with
//! `cargo test --test codegen_snapshot_tests`; review changes with `cargo insta review`.

use whilec::FormatConfig;
use whilec::backend::{RenderMode, render};
use whilec::frontend::{parser, typechecker};

fn emit(source: &str, mode: RenderMode) -> String {
    let mut ast = parser::parse(source).expect("parser failed");
    typechecker::check(&mut ast).expect("typechecker failed");
    render(&ast, mode, &FormatConfig::default())
}

const LOOP: &str = "int x = 1; while x < 3 { x = x + 1; } return x;";
const BRANCHES: &str =
    "bool b = true; int r = 0; if b { int y = 1; r = y; } else { int y = 2; r = y; } return r == 1;";
const TUPLES: &str = "(int, bool) t = (1, true); int i = t(0); return (i, t(1));";
const NESTED: &str = "((int) (bool, int)) t = ((1,), (true, 2)); while false { } return t;";

// ============================================================================
// Canonical
// ============================================================================

#[test]
fn test_canonical_loop() {
    insta::assert_snapshot!(emit(LOOP, RenderMode::Canonical), @r"
    int x = 1;
    while (x < 3) {
        x = (x + 1);
    }
    return x;
    ");
}

#[test]
fn test_canonical_tuples() {
    insta::assert_snapshot!(emit(TUPLES, RenderMode::Canonical), @r"
    (int, bool) t = (1, true);
    int i = (t(0));
    return (i, (t(1)));
    ");
}

// ============================================================================
// C
// ============================================================================

#[test]
fn test_c_loop() {
    insta::assert_snapshot!(emit(LOOP, RenderMode::C), @r#"
    #include <stdbool.h>
    #include <stdio.h>

    int main() {
        int _x = 1;
        while (_x < 3) {
            _x = (_x + 1);
        }
        printf("%i\n", _x);
        return 0;
    }
    "#);
}

#[test]
fn test_c_branches_keep_block_scoping() {
    insta::assert_snapshot!(emit(BRANCHES, RenderMode::C), @r#"
    #include <stdbool.h>
    #include <stdio.h>

    int main() {
        bool _b = true;
        int _r = 0;
        if (_b) {
            int _y = 1;
            _r = _y;
        } else {
            int _y = 2;
            _r = _y;
        }
        printf("%s\n", (_r == 1) ? "true" : "false");
        return 0;
    }
    "#);
}

#[test]
fn test_c_tuple_return_is_printed_componentwise() {
    insta::assert_snapshot!(emit(TUPLES, RenderMode::C), @r#"
    #include <stdbool.h>
    #include <stdio.h>

    typedef struct { int _0; bool _1; } tuple_t_i_b_;

    int main() {
        tuple_t_i_b_ _t = (tuple_t_i_b_){1, true};
        int _i = (_t._0);
        tuple_t_i_b_ ret = (tuple_t_i_b_){_i, (_t._1)};
        printf("(%i, %s)\n", ret._0, ret._1 ? "true" : "false");
        return 0;
    }
    "#);
}

#[test]
fn test_c_nested_typedefs_come_first() {
    insta::assert_snapshot!(emit(NESTED, RenderMode::C), @r#"
    #include <stdbool.h>
    #include <stdio.h>

    typedef struct { int _0; } tuple_t_i_;
    typedef struct { bool _0; int _1; } tuple_t_b_i_;
    typedef struct { tuple_t_i_ _0; tuple_t_b_i_ _1; } tuple_t_t_i__t_b_i__;

    int main() {
        tuple_t_t_i__t_b_i__ _t = (tuple_t_t_i__t_b_i__){(tuple_t_i_){1}, (tuple_t_b_i_){true, 2}};
        while (false) {
        }
        tuple_t_t_i__t_b_i__ ret = _t;
        printf("((%i,), (%s, %i))\n", ret._0._0, ret._1._0 ? "true" : "false", ret._1._1);
        return 0;
    }
    "#);
}

#[test]
fn test_c_shadowing_initializer_reads_outer_variable() {
    let src = "int x = 1; { int x = x + 1; x = x * 2; } return x;";
    insta::assert_snapshot!(emit(src, RenderMode::C), @r#"
    #include <stdbool.h>
    #include <stdio.h>

    int main() {
        int _x = 1;
        {
            int _x_1 = (_x + 1);
            int _x = _x_1;
            _x = (_x * 2);
        }
        printf("%i\n", _x);
        return 0;
    }
    "#);
}

#[test]
fn test_c_logical_operators() {
    let out = emit("bool p = not (1 < 2) or true and false; return p;", RenderMode::C);
    assert!(out.contains("    bool _p = (!((1 < 2)) | (true & false));\n"), "{out}");
}

// ============================================================================
// Python
// ============================================================================

#[test]
fn test_python_flattens_shadowed_names() {
    insta::assert_snapshot!(emit(BRANCHES, RenderMode::Python), @r#"
    b_0 = True
    r_1 = 0
    if b_0:
        y_2 = 1
        r_1 = y_2
    else:
        y_3 = 2
        r_1 = y_3
    print("true" if (r_1 == 1) else "false")
    "#);
}

#[test]
fn test_python_tuple_return() {
    insta::assert_snapshot!(emit(TUPLES, RenderMode::Python), @r#"
    t_0 = (1, True)
    i_1 = (t_0[0])
    ret = (i_1, (t_0[1]))
    print("(" + str(ret[0]) + ", " + ("true" if ret[1] else "false") + ")")
    "#);
}

#[test]
fn test_python_empty_body_and_nested_tuples() {
    insta::assert_snapshot!(emit(NESTED, RenderMode::Python), @r#"
    t_0 = ((1,), (True, 2))
    while False:
        pass
    ret = t_0
    print("((" + str(ret[0][0]) + ",), (" + ("true" if ret[1][0] else "false") + ", " + str(ret[1][1]) + "))")
    "#);
}

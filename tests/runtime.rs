//! End-to-end runs of the runtime against the call sequences an
//! instrumentation pass would emit.

use std::fs;
use std::path::PathBuf;

use z3::ast::Ast;
use z3::Context;

use symbolic_dse::{export, Address, BinOp, Config, Predicate, Runtime};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("symbolic-dse-it-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn bound_i64(rt: &Runtime, r: u32) -> Option<i64> {
    rt.lookup(Address::Register(r))
        .and_then(|v| v.as_int())
        .and_then(|x| x.simplify().as_i64())
}

#[test]
fn every_binop_applies_to_literals_in_push_order() {
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let dir = scratch_dir("binops");
    let cases = [
        (BinOp::Add, 9),
        (BinOp::Sub, 5),
        (BinOp::Mul, 14),
        (BinOp::SDiv, 3),
        (BinOp::UDiv, 3),
        (BinOp::SRem, 1),
        (BinOp::URem, 1),
    ];
    let mut rt = Runtime::init(&context, Config::in_dir(&dir)).unwrap();
    for (i, (op, expected)) in cases.iter().enumerate() {
        let dst = i as u32;
        rt.push_const(7);
        rt.push_const(2);
        rt.binop(dst, *op);
        assert_eq!(bound_i64(&rt, dst), Some(*expected), "{:?}", op);
    }
    rt.finalize().unwrap();
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn a_full_run_produces_all_three_artifacts() {
    let dir = scratch_dir("artifacts");
    let config = Config::in_dir(&dir);
    // replay the input so the branch directions are deterministic
    fs::write(&config.input_file, "X0,7\n").unwrap();
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, config.clone()).unwrap();

    const X_LOC: u64 = 0x1000;
    rt.alloca(0, X_LOC);
    let x = rt.new_input(Address::Memory(X_LOC), 0);
    assert_eq!(x, 7);

    rt.load(1, X_LOC);
    rt.push_register(1);
    rt.push_const(5);
    rt.icmp(2, Predicate::Sgt);
    rt.record_branch(0, 2, true);

    rt.push_register(1);
    rt.push_const(100);
    rt.icmp(3, Predicate::Slt);
    rt.record_branch(1, 3, true);

    rt.finalize().unwrap();

    let branches = fs::read_to_string(&config.branch_file).unwrap();
    assert_eq!(branches, "B0\nB1\n");

    let formula = fs::read_to_string(&config.formula_file).unwrap();
    assert!(formula.contains("(declare-fun X0 () Int)"));
    assert_eq!(formula.matches("(assert ").count(), 2);
    assert!(formula.ends_with("(check-sat)\n"));

    let log = fs::read_to_string(&config.log_file).unwrap();
    assert!(log.contains("=== Inputs ===\nX0 : 7\n"));
    assert!(log.contains("=== Symbolic Memory ===\n"));
    assert!(log.contains("=== Path Condition ===\nB0 : "));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn contradictory_path_is_reported_unsatisfiable() {
    let dir = scratch_dir("unsat");
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, Config::in_dir(&dir)).unwrap();

    // x == 5 both taken and not taken
    rt.push_register(0);
    rt.push_const(5);
    rt.icmp(1, Predicate::Eq);
    rt.record_branch(0, 1, true);
    rt.record_branch(1, 1, false);

    assert_eq!(rt.path_condition().len(), 2);
    assert!(!export::sat(&export::conjoin(rt.interpreter())));
    rt.finalize().unwrap();
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn store_then_load_keeps_the_address_identity() {
    // Documents the load semantics the runtime reproduces for
    // compatibility: a load binds the source address's identity, so the
    // stored symbolic value is not forwarded into the register.
    let dir = scratch_dir("load");
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, Config::in_dir(&dir)).unwrap();

    const LOC: u64 = 0x2000;
    rt.push_const(42);
    rt.store(LOC);
    rt.load(0, LOC);

    assert_eq!(bound_i64(&rt, 0), Some(LOC as i64));
    let stored = rt.lookup(Address::Memory(LOC)).unwrap();
    assert_eq!(stored.as_int().and_then(|x| x.as_i64()), Some(42));

    rt.finalize().unwrap();
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn repeated_input_reads_return_one_concrete_value() {
    let dir = scratch_dir("inputs");
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, Config::in_dir(&dir)).unwrap();

    let first = rt.new_input(Address::Memory(0x3000), 4);
    let second = rt.new_input(Address::Memory(0x3000), 4);
    assert_eq!(first, second);

    rt.finalize().unwrap();
    let log = fs::read_to_string(Config::in_dir(&dir).log_file).unwrap();
    assert!(log.contains(&format!("X4 : {}", first)));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn unknown_opcodes_are_ignored() {
    let dir = scratch_dir("unknown");
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, Config::in_dir(&dir)).unwrap();

    rt.push_const(1);
    rt.push_const(2);
    rt.binop_raw(0, 1234);
    assert!(rt.lookup(Address::Register(0)).is_none());
    rt.icmp_raw(0, 1234);
    assert!(rt.lookup(Address::Register(0)).is_none());

    rt.finalize().unwrap();
    fs::remove_dir_all(dir).unwrap();
}

use clap::Parser;
use z3::Context;

use symbolic_dse::{Address, BinOp, Config, Predicate, Result, Runtime};

/// Run a built-in instrumented example program under the DSE runtime
/// and write the branch-order, formula and trace-log artifacts.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory for the replay input and the three output artifacts
    #[clap(short, long, default_value = ".")]
    dir: String,
}

// The call sequence an instrumentation pass emits for:
//
//   int x; input(&x, 0);
//   int y = x * 2;
//   if (y < 100) { ... }
//   if (x == 7) { ... }
//
// The concrete values steer the branch directions; the runtime only
// shadows them.
fn run_example(rt: &mut Runtime) {
    const X_LOC: u64 = 0x1000;
    const Y_LOC: u64 = 0x1008;

    rt.alloca(0, X_LOC);
    rt.alloca(1, Y_LOC);

    let x = rt.new_input(Address::Memory(X_LOC), 0);

    rt.load(2, X_LOC);
    rt.push_register(2);
    rt.push_const(2);
    rt.binop(3, BinOp::Mul);
    rt.push_register(3);
    rt.store(Y_LOC);
    let y = x.wrapping_mul(2);

    rt.load(4, Y_LOC);
    rt.push_register(4);
    rt.push_const(100);
    rt.icmp(5, Predicate::Slt);
    rt.record_branch(0, 5, y < 100);

    rt.load(6, X_LOC);
    rt.push_register(6);
    rt.push_const(7);
    rt.icmp(7, Predicate::Eq);
    rt.record_branch(1, 7, x == 7);

    println!("x = {}, y = {}", x, y);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let z3_config = z3::Config::new();
    let context = Context::new(&z3_config);
    let mut rt = Runtime::init(&context, Config::in_dir(&args.dir))?;
    run_example(&mut rt);
    rt.finalize()
}

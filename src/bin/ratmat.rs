//! RatMat CLI: rational commitments and matrix claim checks on BN254
//!
//! Commands:
//!   ratmat on-curve      test whether a point lies on the curve
//!   ratmat mul           scalar multiple of the generator
//!   ratmat commit        commit to a rational
//!   ratmat verify-sum    verify a rational sum claim file
//!   ratmat verify-claim  verify a matrix product claim file
//!   ratmat demo          walk through every operation

use log::info;
use primitive_types::U256;
use ratmat_core::{
    ec_add, ec_mul, fermat_inv, is_on_curve, matrix_mul_basic, matrix_mul_ec, verify_matrix_mult_claim,
    IntegerOps, MatrixClaim, Point, RationalCommitment, RationalSumClaim,
};
use std::env;
use std::process;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn print_usage() {
    println!(
        r#"
RatMat v0.1 - rational commitments & matrix claims on BN254

Usage: ratmat <command> [options]

Commands:
  on-curve      <x> <y>         Check whether (x, y) is a G1 point
  mul           <k>             Print k·G
  commit        <num> <den>     Print the commitment to num/den
  verify-sum    <file.json>     Verify a rational sum claim
  verify-claim  <file.json>     Verify a matrix product claim
  demo                          Run every operation on sample data

Numbers on the command line are decimal; claim files use 0x-prefixed hex.

Examples:
  ratmat mul 2
  ratmat commit 3 4
  ratmat verify-claim claim.json
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "on-curve" => cmd_on_curve(&args[2..]),
        "mul" => cmd_mul(&args[2..]),
        "commit" => cmd_commit(&args[2..]),
        "verify-sum" => cmd_verify_sum(&args[2..]),
        "verify-claim" => cmd_verify_claim(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("  Error: {}", e);
        process::exit(1);
    }
}

fn parse_u256(arg: &str, name: &str) -> Result<U256, String> {
    U256::from_dec_str(arg).map_err(|e| format!("{} must be a decimal integer: {:?}", name, e))
}

fn require<'a>(args: &'a [String], count: usize, usage: &str) -> Result<&'a [String], String> {
    if args.len() < count {
        return Err(format!("Usage: {}", usage));
    }
    Ok(&args[..count])
}

fn print_point(label: &str, p: &Point) {
    println!("  {}:", label);
    println!("    x   = {}", p.x);
    println!("    y   = {}", p.y);
    println!("    hex = 0x{}", p.to_hex());
}

fn cmd_on_curve(args: &[String]) -> CmdResult {
    let args = require(args, 2, "ratmat on-curve <x> <y>")?;
    let p = Point::new(parse_u256(&args[0], "x")?, parse_u256(&args[1], "y")?);
    println!("\n  {} on curve: {}", p, is_on_curve(&p));
    Ok(())
}

fn cmd_mul(args: &[String]) -> CmdResult {
    let args = require(args, 1, "ratmat mul <k>")?;
    let k = parse_u256(&args[0], "k")?;
    let p = ec_mul(&Point::GENERATOR, k)?;
    print_point(&format!("{}·G", k), &p);
    Ok(())
}

fn cmd_commit(args: &[String]) -> CmdResult {
    let args = require(args, 2, "ratmat commit <num> <den>")?;
    let num = parse_u256(&args[0], "num")?;
    let den = parse_u256(&args[1], "den")?;
    let p = RationalCommitment::default().commit(num, den)?;
    print_point(&format!("commit({}/{})", num, den), &p);
    Ok(())
}

fn cmd_verify_sum(args: &[String]) -> CmdResult {
    let args = require(args, 1, "ratmat verify-sum <file.json>")?;
    let claim = RationalSumClaim::load(&args[0])?;
    let ok = claim.verify()?;
    println!(
        "\n  A + B = commit({}/{}): {}",
        claim.numerator,
        claim.denominator,
        if ok { "VALID" } else { "INVALID" }
    );
    if !ok {
        process::exit(3);
    }
    Ok(())
}

fn cmd_verify_claim(args: &[String]) -> CmdResult {
    let args = require(args, 1, "ratmat verify-claim <file.json>")?;
    let claim = MatrixClaim::load(&args[0])?;
    let ok = claim.verify(&RationalCommitment::default())?;
    println!(
        "\n  {}x{} matrix product claim: {}",
        claim.n,
        claim.n,
        if ok { "VALID" } else { "INVALID" }
    );
    if !ok {
        process::exit(3);
    }
    Ok(())
}

fn cmd_demo() -> CmdResult {
    let g = Point::GENERATOR;
    let u = |v: u64| U256::from(v);

    println!("\nStep 1: Group arithmetic...");
    println!("{}", "-".repeat(60));
    let two_g = ec_add(&g, &g)?;
    let three_g = ec_mul(&g, u(3))?;
    print_point("G + G", &two_g);
    print_point("3·G", &three_g);
    println!("  (0, 0) on curve: {}", is_on_curve(&Point::ZERO));

    println!("\nStep 2: Fermat inversion...");
    println!("{}", "-".repeat(60));
    for a in [2u64, 3, 5] {
        println!("  {}^-1 mod 17 = {}", a, fermat_inv(u(a), u(17))?);
    }

    println!("\nStep 3: Rational commitments...");
    println!("{}", "-".repeat(60));
    let rc = RationalCommitment::default();
    let pair = rc.construct_pair(u(1), u(2), u(1), u(3))?;
    println!("  1/2 + 1/3 = 5/6 : {}", rc.verify_pair_sum(&pair, u(5), u(6))?);
    println!("  1/2 + 1/3 = 1/2 : {}", rc.verify_pair_sum(&pair, u(1), u(2))?);

    println!("\nStep 4: Matrix products...");
    println!("{}", "-".repeat(60));
    let matrix = [u(1), u(2), u(3), u(4)];
    let ints = matrix_mul_basic(&matrix, 2, &[u(5), u(6)], &IntegerOps)?;
    println!("  [1 2; 3 4] · [5, 6] = [{}, {}]", ints[0], ints[1]);
    let points = matrix_mul_ec(&matrix, 2, &[g, two_g])?;
    println!(
        "  [1 2; 3 4] · [G, 2G] = [5G, 11G] : {}",
        points == vec![ec_mul(&g, u(5))?, ec_mul(&g, u(11))?]
    );

    println!("\nStep 5: Claim verification...");
    println!("{}", "-".repeat(60));
    let matrix = [u(2), u(3), u(1), u(4)];
    let s = [u(5), u(7)];
    for claimed in [[u(31), u(33)], [u(32), u(33)]] {
        let ok = verify_matrix_mult_claim(&matrix, 2, &s, &g, &claimed, &rc)?;
        println!("  claim [{}, {}] : {}", claimed[0], claimed[1], ok);
    }

    info!("Demo complete");
    Ok(())
}

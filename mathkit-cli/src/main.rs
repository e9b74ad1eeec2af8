use std::error::Error;
use std::time::Instant;

use clap::{Parser, Subcommand};
use mathkit_core::DenseMatrix;
use mathkit_lu::{LuSolver, SolveAlgorithm};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "mathkit",
    about = "Dense LU solving and prime factorization",
    version,
    propagate_version = true
)]
struct MathkitCli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve the bundled 3x3 reference system and log every step
    Demo,
    /// Solve A·X = B
    ///
    /// Example:
    ///   mathkit solve --a '[[2,1],[4,3]]' --b '[[3],[7]]'
    Solve {
        /// Coefficient matrix as JSON rows
        #[arg(long, value_name = "JSON")]
        a: String,
        /// Right-hand sides as JSON rows, one column per system
        #[arg(long, value_name = "JSON")]
        b: String,
        /// Pivots below this magnitude are treated as zero
        #[arg(long)]
        tolerance: Option<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the P, L and U factors of a square matrix
    Lu {
        /// Matrix as JSON rows
        #[arg(long, value_name = "JSON")]
        m: String,
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// List every prime up to N
    Primes {
        #[arg(
            value_name = "N",
            value_parser = clap::value_parser!(u64).range(..=mathkit_prime::MAX_PRIMES_BOUND)
        )]
        n: u64,
    },
    /// Factor N into primes
    Factor {
        #[arg(value_name = "N")]
        n: u64,
    },
}

#[derive(Debug, Serialize)]
struct SolveOutput {
    x: Vec<Vec<f64>>,
    row_exchanges: usize,
    min_pivot: f64,
}

fn parse_matrix(json: &str) -> Result<DenseMatrix<f64>, Box<dyn Error>> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
    Ok(DenseMatrix::from_rows(&rows)?)
}

fn solver(tolerance: Option<f64>) -> LuSolver<f64> {
    match tolerance {
        Some(tolerance) => LuSolver::with_params(tolerance),
        None => LuSolver::default(),
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let a = DenseMatrix::from_rows(&[[0.0, 1.0, 0.0], [-8.0, 8.0, 1.0], [2.0, -2.0, 0.0]])?;
    let b = DenseMatrix::from_rows(&[[1.0, 2.0], [2.0, 3.0], [4.0, 0.5]])?;
    log::info!("A =\n{}", a);
    log::info!("B =\n{}", b);

    let decomposition = LuSolver::<f64>::default().decompose(&a)?;
    log::info!("P =\n{}", decomposition.p());
    log::info!("L =\n{}", decomposition.l());
    log::info!("U =\n{}", decomposition.u());
    log::info!("det(A) = {}", decomposition.determinant());

    let x = decomposition.solve(&b)?;
    log::info!("X =\n{}", x);
    log::info!("A·X =\n{}", a.matmul(&x)?);
    Ok(())
}

fn run_solve(a: &str, b: &str, tolerance: Option<f64>, json: bool) -> Result<(), Box<dyn Error>> {
    let a = parse_matrix(a)?;
    let b = parse_matrix(b)?;

    let start_time = Instant::now();
    let result = solver(tolerance).solve(&a, &b)?;
    log::info!("Solved {} system in {:?}", a.shape(), start_time.elapsed());

    if json {
        let output = SolveOutput {
            x: result.x.to_rows(),
            row_exchanges: result.metadata.row_exchanges,
            min_pivot: result.metadata.min_pivot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.x);
    }
    Ok(())
}

fn run_lu(m: &str, tolerance: Option<f64>) -> Result<(), Box<dyn Error>> {
    let m = parse_matrix(m)?;
    let decomposition = solver(tolerance).decompose(&m)?;
    println!("P =\n{}", decomposition.p());
    println!("L =\n{}", decomposition.l());
    println!("U =\n{}", decomposition.u());
    println!("row exchanges: {}", decomposition.row_exchanges());
    Ok(())
}

fn run_primes(n: u64) {
    let start_time = Instant::now();
    let primes = mathkit_prime::primes(n);
    let listed: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
    println!("{}", listed.join(" "));
    log::info!(
        "{} primes up to {} in {:?}",
        primes.len(),
        n,
        start_time.elapsed()
    );
}

fn run_factor(n: u64) {
    let start_time = Instant::now();
    let factors = mathkit_prime::factors(n);
    println!("prime factors of {}: {}", n, factors);
    println!("elapsed: {:?}", start_time.elapsed());
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = MathkitCli::parse();
    match cli.cmd {
        Command::Demo => run_demo()?,
        Command::Solve {
            a,
            b,
            tolerance,
            json,
        } => run_solve(&a, &b, tolerance, json)?,
        Command::Lu { m, tolerance } => run_lu(&m, tolerance)?,
        Command::Primes { n } => run_primes(n),
        Command::Factor { n } => run_factor(n),
    }
    Ok(())
}

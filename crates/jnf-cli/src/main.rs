use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use jnf_core::jnf::{self, Spectrum};
use jnf_core::math::{Matrix, Rational};
use jnf_core::report;

mod input;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("JNF_LOG", "error,jnf_core=info"))
        .init();

    let matches = Command::new("jnf")
        .version(clap::crate_version!())
        .about("Jordan Normal Form of rational matrices from a factored characteristic polynomial")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Decompose the matrix described by a JSON problem file")
                .arg(
                    Arg::new("problem")
                        .help("Path to the JSON problem file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(seed_arg())
                .arg(no_basis_arg()),
        )
        .subcommand(
            Command::new("demo")
                .about("Decompose the built-in 6x6 mixed-spectrum example")
                .arg(seed_arg())
                .arg(no_basis_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("solve", sub)) => run_solve(sub),
        Some(("demo", sub)) => run_demo(sub),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .help(
            "Seed for the randomized basis search. A fixed seed produces \
             byte-identical output for identical input.",
        )
        .value_parser(clap::value_parser!(u64))
}

fn no_basis_arg() -> Arg {
    Arg::new("no_basis")
        .long("no-basis")
        .help("Report only the Jordan block sizes, skip the basis")
        .action(ArgAction::SetTrue)
}

fn run_solve(matches: &ArgMatches) -> Result<()> {
    let path: &PathBuf = matches.get_one("problem").expect("required by clap");
    log::info!("[jnf] Solving problem file {}", path.display());

    let problem = input::load_problem(path)?;
    // Command-line seed wins over the one in the file.
    let seed = matches.get_one::<u64>("seed").copied().or(problem.seed);
    decompose_and_report(
        &problem.matrix,
        &problem.spectrum,
        seed,
        !matches.get_flag("no_basis"),
    )
}

fn run_demo(matches: &ArgMatches) -> Result<()> {
    let (matrix, spectrum) = demo_problem();
    let seed = matches.get_one::<u64>("seed").copied();
    decompose_and_report(&matrix, &spectrum, seed, !matches.get_flag("no_basis"))
}

fn decompose_and_report(
    matrix: &Matrix<Rational>,
    spectrum: &Spectrum,
    seed: Option<u64>,
    with_basis: bool,
) -> Result<()> {
    let form = jnf::decompose(matrix, spectrum, seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_block_report(&mut out, &form)?;
    if with_basis {
        report::write_basis_report(&mut out, &form)?;
    }
    out.flush()?;
    Ok(())
}

/// The block-triangular 6x6 example: eigenvalue 5 with multiplicity 4 and
/// eigenvalue 4 with multiplicity 2.
fn demo_problem() -> (Matrix<Rational>, Spectrum) {
    let entries: Vec<Vec<i64>> = vec![
        vec![5, 3, -1, 0, 0, 0],
        vec![0, 3, 1, 0, 0, 0],
        vec![0, -2, 6, 0, 0, 0],
        vec![-3, -1, -3, 7, 1, 0],
        vec![6, 1, 8, -4, 3, 0],
        vec![-5, -5, -4, 2, 2, 4],
    ];
    let rows = entries
        .into_iter()
        .map(|row| row.into_iter().map(Rational::from).collect())
        .collect();
    let matrix = Matrix::from_rows(rows).expect("demo matrix is rectangular");
    let spectrum = vec![(Rational::from(5), 4), (Rational::from(4), 2)];
    (matrix, spectrum)
}

//! gf2gb command-line tool.
//!
//! Reads a system file, computes its reduced Gröbner basis and, unless
//! told otherwise, certifies it by solving both systems exhaustively.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gf2gb::certify::{certify, CertifyConfig};
use gf2gb::groebner::{Buchberger, BuchbergerConfig};
use gf2gb::parse::parse_system;
use gf2gb::poly::MonomialOrder;
use gf2gb::solve::System;

/// Exit code when the two solution sets differ.
const EXIT_MISMATCH: u8 = 2;

/// Comparison family applied on top of the variable order
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OrderKind {
    /// Pure lexicographic
    Lex,
    /// Total degree, then lexicographic
    Deglex,
    /// Total degree, then reverse lexicographic
    Degrevlex,
}

impl From<OrderKind> for MonomialOrder {
    fn from(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Lex => Self::Lex,
            OrderKind::Deglex => Self::DegLex,
            OrderKind::Degrevlex => Self::DegRevLex,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    Normal,
    /// Progress summaries
    Verbose,
    /// Per-phase detail
    Debug,
    /// Every S-polynomial and reduction step
    Trace,
}

impl Verbosity {
    fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Reduced Gröbner bases over GF(2), certified by exhaustive solving
#[derive(Parser, Debug, Clone)]
#[command(name = "gf2gb")]
#[command(version)]
#[command(about = "Reduced Gröbner bases over GF(2), certified by exhaustive solving")]
struct Args {
    /// System file: variable count, optional `#` order line, one polynomial per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Monomial order family
    #[arg(long, value_enum, default_value = "lex")]
    order_kind: OrderKind,

    /// Also skip pairs covered by the chain criterion
    #[arg(long)]
    chain_criterion: bool,

    /// Stop once the basis reaches this many generators (0 = no limit)
    #[arg(long, default_value = "0", value_name = "K")]
    max_basis_size: usize,

    /// Diagnostics written to stderr
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Same as `--verbosity quiet`
    #[arg(short, long, conflicts_with = "verbosity")]
    quiet: bool,

    /// Only compute the reduced basis, without solving (lifts the 63-variable limit of solving)
    #[arg(long)]
    no_certify: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_MISMATCH),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the tool. Returns whether the solution sets agree.
fn run(args: &Args) -> Result<bool> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let parsed = parse_system(&text)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let order = parsed.order.with_kind(args.order_kind.into());
    tracing::info!(order = %order, "term order");
    let system = System::new(parsed.num_vars, parsed.polynomials).context("invalid system")?;

    let config = CertifyConfig {
        buchberger: BuchbergerConfig {
            use_chain_criterion: args.chain_criterion,
            max_basis_size: args.max_basis_size,
            ..BuchbergerConfig::default()
        },
        ..CertifyConfig::default()
    };

    println!("N = {}", system.num_vars());
    println!("Original system:");
    print!("{system}");

    if args.no_certify {
        let mut buchberger = Buchberger::new(&order, config.buchberger);
        let basis = buchberger.compute(system.polynomials()).minimize_and_reduce();
        tracing::info!(stats = %buchberger.stats(), "basis computed");
        let reduced = system
            .with_polynomials(basis.polynomials().to_vec())
            .context("invalid basis")?;
        println!("New system:");
        print!("{reduced}");
        println!("Is minimal: {}", basis.is_minimal());
        println!("Is reduced: {}", basis.is_reduced());
        return Ok(true);
    }

    let cert = certify(&system, &order, &config).context("certification failed")?;
    tracing::info!(stats = %cert.stats, raw = cert.raw_basis_len, "basis statistics");
    if !cert.complete {
        tracing::warn!("basis size limit reached; the result may not be a Gröbner basis");
    }
    println!("{cert}");
    Ok(cert.solutions_agree)
}

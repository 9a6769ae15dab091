//! Command-line converter between Zernike indexing conventions.
//!
//! # Usage
//!
//! ```sh
//! zernike-index to-nm --ordering noll 1 2 3 11
//! zernike-index to-linear --ordering fringe 4 -2
//! zernike-index wyant 3 -1
//! zernike-index norm 2 2
//! zernike-index table --ordering fringe --count 16
//! zernike-index check --count 1000
//! ```
//!
//! Set `RUST_LOG=debug` to see what each subcommand does.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use zernike_index::{consistency::DEFAULT_CHECK_TERMS, ordering::OrderingKind};

mod commands;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderingArg {
    Fringe,
    Noll,
}

impl From<OrderingArg> for OrderingKind {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Fringe => Self::Fringe,
            OrderingArg::Noll => Self::Noll,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert linear indices to classical (n, m) pairs.
    #[command(allow_negative_numbers = true)]
    ToNm {
        /// Linear ordering of the indices.
        #[arg(short, long, value_name = "ORDERING", default_value = "noll")]
        ordering: OrderingArg,

        /// Linear indices (j >= 1).
        #[arg(value_name = "J", required = true, num_args = 1..)]
        indices: Vec<i64>,
    },

    /// Convert a classical (n, m) pair to a linear index.
    #[command(allow_negative_numbers = true)]
    ToLinear {
        /// Linear ordering to produce.
        #[arg(short, long, value_name = "ORDERING", default_value = "noll")]
        ordering: OrderingArg,

        /// Radial degree.
        n: i64,

        /// Azimuthal degree.
        m: i64,
    },

    /// Convert a classical (n, m) pair to the Wyant convention.
    #[command(allow_negative_numbers = true)]
    Wyant {
        /// Radial degree.
        n: i64,

        /// Azimuthal degree.
        m: i64,
    },

    /// Print the Noll normalization constant of (n, m).
    #[command(allow_negative_numbers = true)]
    Norm {
        /// Radial degree.
        n: i64,

        /// Azimuthal degree.
        m: i64,
    },

    /// List the first terms of an ordering.
    Table {
        /// Linear ordering to list.
        #[arg(short, long, value_name = "ORDERING", default_value = "noll")]
        ordering: OrderingArg,

        /// Number of terms to list.
        #[arg(
            short,
            long,
            value_name = "COUNT",
            default_value_t = DEFAULT_CHECK_TERMS,
            value_parser = clap::value_parser!(i64).range(0..),
        )]
        count: i64,
    },

    /// Verify the round-trip law of both orderings.
    Check {
        /// Number of terms to verify per ordering.
        #[arg(
            short,
            long,
            value_name = "COUNT",
            default_value_t = DEFAULT_CHECK_TERMS,
            value_parser = clap::value_parser!(i64).range(0..),
        )]
        count: i64,
    },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("running {:?}", args.command);

    match commands::run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("zernike-index").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_azimuthal_degree_is_positional() {
        assert!(matches!(
            parse(&["to-linear", "4", "-2"]),
            Command::ToLinear {
                ordering: OrderingArg::Noll,
                n: 4,
                m: -2
            }
        ));
        assert!(matches!(
            parse(&["to-linear", "--ordering", "fringe", "4", "-2"]),
            Command::ToLinear {
                ordering: OrderingArg::Fringe,
                n: 4,
                m: -2
            }
        ));
        assert!(matches!(
            parse(&["wyant", "3", "-1"]),
            Command::Wyant { n: 3, m: -1 }
        ));
        assert!(matches!(
            parse(&["norm", "2", "-2"]),
            Command::Norm { n: 2, m: -2 }
        ));
    }

    #[test]
    fn test_negative_indices_reach_validation() {
        let command = parse(&["to-nm", "1", "2", "3", "-1"]);
        assert!(matches!(&command, Command::ToNm { indices, .. } if indices == &[1, 2, 3, -1]));
        let err = commands::run(command).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_pair_exit_code() {
        let err = commands::run(parse(&["to-linear", "1", "0"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = commands::run(parse(&["wyant", "2", "-3"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = commands::run(parse(&["norm", "-1", "0"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_counts_share_default_and_reject_negatives() {
        assert!(matches!(
            parse(&["table"]),
            Command::Table { count: DEFAULT_CHECK_TERMS, .. }
        ));
        assert!(matches!(
            parse(&["check"]),
            Command::Check { count: DEFAULT_CHECK_TERMS }
        ));
        let argv = ["zernike-index", "table", "--count", "-5"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["zernike-index", "check", "--count", "-5"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}

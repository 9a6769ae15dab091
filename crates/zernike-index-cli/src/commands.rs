//! Subcommand implementations.
//!
//! Each subcommand renders its output as lines so that it can be tested
//! without capturing stdout.

use zernike_index::{
    IndexError, NmPair, WyantIndex, classical_nm_to_wyant,
    consistency::{self, ConsistencyError},
    noll_normalization,
    ordering::OrderingKind,
};

use crate::Command;

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("{_0}")]
    InvalidInput(#[from] IndexError),
    #[display("{_0}")]
    Inconsistent(#[from] ConsistencyError),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::Inconsistent(ConsistencyError::RoundTripMismatch { .. }) => 1,
            Self::InvalidInput(_) | Self::Inconsistent(ConsistencyError::Conversion(_)) => 2,
        }
    }
}

pub(crate) fn run(command: Command) -> Result<(), CliError> {
    let lines = match command {
        Command::ToNm { ordering, indices } => to_nm(ordering.into(), &indices)?,
        Command::ToLinear { ordering, n, m } => vec![to_linear(ordering.into(), n, m)?],
        Command::Wyant { n, m } => vec![classical_nm_to_wyant(n, m)?.to_string()],
        Command::Norm { n, m } => vec![noll_normalization(n, m)?.to_string()],
        Command::Table { ordering, count } => table(ordering.into(), count),
        Command::Check { count } => check(count)?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn to_nm(kind: OrderingKind, indices: &[i64]) -> Result<Vec<String>, CliError> {
    indices
        .iter()
        .map(|&j| -> Result<String, CliError> {
            let pair = kind.to_nm(j)?;
            log::debug!("{kind} j = {j} -> {pair}");
            Ok(format!("{j}: {pair}"))
        })
        .collect()
}

fn to_linear(kind: OrderingKind, n: i64, m: i64) -> Result<String, CliError> {
    let pair = NmPair::new(n, m)?;
    let j = kind.to_linear(pair)?;
    log::debug!("{kind} {pair} -> j = {j}");
    Ok(j.to_string())
}

fn table(kind: OrderingKind, count: i64) -> Vec<String> {
    // Negative counts are rejected while parsing arguments.
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    let header = format!("{:>5}  {:<10}  {:<16}  {}", "j", "(n, m)", "Wyant", "norm");
    let rows = kind.terms(count).map(|(j, pair)| {
        format!(
            "{j:>5}  {:<10}  {:<16}  {:.6}",
            pair.to_string(),
            WyantIndex::from(pair).to_string(),
            pair.noll_normalization()
        )
    });
    std::iter::once(header).chain(rows).collect()
}

fn check(count: i64) -> Result<Vec<String>, CliError> {
    OrderingKind::ALL
        .into_iter()
        .map(|kind| -> Result<String, CliError> {
            consistency::check_round_trip_for(kind, count)?;
            Ok(format!("{kind}: {count} terms OK"))
        })
        .collect()
}

use anyhow::{Context, Result};
use itertools::{EitherOrBoth, Itertools};
use thiserror::Error;

const LABELS: [&str; 3] = ["Monnei", "Fjee", "Dolladollabilljoll"];

#[derive(Debug, PartialEq, Eq)]
struct LabeledAmount {
    label: &'static str,
    amount: i64,
}

#[derive(Error, Debug)]
pub enum AmountParseError {
    #[error("Int parse error parsing an amount")]
    ParseNumberError(#[from] std::num::ParseIntError),

    #[error("Ran out of input before an amount for {0}")]
    MissingAmountError(&'static str),
}

fn read_records(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<Vec<LabeledAmount>, AmountParseError> {
    let tokens = input.flat_map(|line| {
        let line: String = line.into();
        line.split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>()
    });

    LABELS
        .into_iter()
        .zip_longest(tokens)
        .map_while(|pair| match pair {
            EitherOrBoth::Both(label, token) => Some(
                token
                    .parse()
                    .map(|amount| LabeledAmount { label, amount })
                    .map_err(AmountParseError::ParseNumberError),
            ),
            EitherOrBoth::Left(label) => Some(Err(AmountParseError::MissingAmountError(label))),
            // labels exhausted, anything left on the stream stays unparsed
            EitherOrBoth::Right(_) => None,
        })
        .collect()
}

pub fn cheapest_service(input: impl Iterator<Item = impl Into<String>>) -> Result<&'static str> {
    let records = read_records(input)?;

    records
        .into_iter()
        .min_by_key(|record| record.amount)
        .map(|record| record.label)
        .context("No amounts read!")
}

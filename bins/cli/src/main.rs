//! Tally command-line tool.
//!
//! Usage:
//!   tally split <amount> <code> <parts>      - Split into equal parts
//!   tally allocate <amount> <code> <ratio>... - Allocate by integer ratios
//!   tally display <amount> <code>            - Format an amount
//!   tally sum <code> <amount>...             - Sum amounts of one currency
//!   tally json <amount> <code>               - Print the JSON encoding

use std::str::FromStr;

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::{CurrencyRegistry, JsonCodec, Money, MoneyCodec, aggregate};
use tally_shared::TallyConfig;

const USAGE: &str = "usage: tally <split|allocate|display|sum|json> ...";

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Split {
        amount: Decimal,
        code: String,
        parts: usize,
    },
    Allocate {
        amount: Decimal,
        code: String,
        ratios: Vec<i64>,
    },
    Display {
        amount: Decimal,
        code: String,
    },
    Sum {
        code: String,
        amounts: Vec<Decimal>,
    },
    Json {
        amount: Decimal,
        code: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!(USAGE);
        };

        match (name.as_str(), rest) {
            ("split", [amount, code, parts]) => Ok(Self::Split {
                amount: parse_amount(amount)?,
                code: code.clone(),
                parts: parts
                    .parse()
                    .with_context(|| format!("invalid part count: {parts}"))?,
            }),
            ("allocate", [amount, code, ratios @ ..]) if !ratios.is_empty() => Ok(Self::Allocate {
                amount: parse_amount(amount)?,
                code: code.clone(),
                ratios: ratios
                    .iter()
                    .map(|r| r.parse().with_context(|| format!("invalid ratio: {r}")))
                    .collect::<anyhow::Result<_>>()?,
            }),
            ("display", [amount, code]) => Ok(Self::Display {
                amount: parse_amount(amount)?,
                code: code.clone(),
            }),
            ("sum", [code, amounts @ ..]) => Ok(Self::Sum {
                code: code.clone(),
                amounts: amounts
                    .iter()
                    .map(|a| parse_amount(a))
                    .collect::<anyhow::Result<_>>()?,
            }),
            ("json", [amount, code]) => Ok(Self::Json {
                amount: parse_amount(amount)?,
                code: code.clone(),
            }),
            _ => bail!(USAGE),
        }
    }

    /// Runs the command and returns the lines to print.
    fn run(&self, registry: &CurrencyRegistry) -> anyhow::Result<Vec<String>> {
        let lines = match self {
            Self::Split { amount, code, parts } => {
                let parties = registry.money(*amount, code).split(*parts)?;
                parties.iter().map(Money::display).collect()
            }
            Self::Allocate {
                amount,
                code,
                ratios,
            } => {
                let parties = registry.money(*amount, code).allocate(ratios)?;
                parties.iter().map(Money::display).collect()
            }
            Self::Display { amount, code } => vec![registry.money(*amount, code).display()],
            Self::Sum { code, amounts } => {
                let values: Vec<Money> = amounts.iter().map(|a| registry.money(*a, code)).collect();
                let total = aggregate::sum(&values)?;
                if total.is_empty() {
                    vec![Money::zero(registry.resolve(code)).display()]
                } else {
                    vec![total.display()]
                }
            }
            Self::Json { amount, code } => vec![JsonCodec.encode(&registry.money(*amount, code))?],
        };
        Ok(lines)
    }
}

fn parse_amount(text: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .with_context(|| format!("invalid amount: {text}"))
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = TallyConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.logging.filter.as_str().into()),
    );
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if config.logging.json {
        subscriber.with(fmt_layer.json()).init();
    } else {
        subscriber.with(fmt_layer).init();
    }

    let registry = CurrencyRegistry::from_config(&config.registry)?;
    info!(currencies = registry.len(), "Currency registry ready");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    debug!(?command, "Running command");

    for line in command.run(&registry)? {
        println!("{line}");
    }

    Ok(())
}

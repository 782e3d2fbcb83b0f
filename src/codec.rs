//! Shareable-link parameter codec.
//!
//! This module serializes a [`Params`] value to a compact query string and
//! back, so a configured comparison can be shared as a link. Scalar fields
//! map to fixed short keys; equity grants are packed into a single key with
//! mode prefixes. Decoding is best-effort: any absent or malformed field
//! silently falls back to its documented default, while the computation
//! core stays strict.

use rust_decimal::Decimal;

use crate::models::{EquityGrant, GrantValuation, Params};

/// Query-string key for the annual gross salary.
pub const SALARY_KEY: &str = "s";
/// Query-string key for the monthly private health contribution.
pub const HEALTH_KEY: &str = "h";
/// Query-string key for the contractor tax rate.
pub const CONTRACTOR_RATE_KEY: &str = "c";
/// Query-string key for the unit fair value shared by unit-based grants.
pub const UNIT_FAIR_VALUE_KEY: &str = "fmv";
/// Query-string key for the packed equity grants.
pub const GRANTS_KEY: &str = "rsu";

/// Separator between grants inside the grants value.
pub const ARRAY_SEP: char = '_';
/// Separator between fields inside one grant.
pub const ITEM_SEP: char = '-';

const UNIT_MODE: &str = "u";
const DOLLAR_MODE: &str = "d";

/// Encodes a parameter set as a query string (without a leading `?`).
///
/// Fields equal to their documented defaults are omitted, so the default
/// parameter set encodes to an empty string. Unit-based grants carry their
/// shared fair value in the separate `fmv` key; a grant itself is encoded
/// as `<mode>.<amount>-<years>`.
///
/// # Example
///
/// ```
/// use salary_engine::codec::{decode_params, encode_params};
/// use salary_engine::models::{EquityGrant, Params};
/// use rust_decimal::Decimal;
///
/// let params = Params::new(
///     Decimal::from(120_000),
///     Decimal::from(100),
///     Some(Decimal::from(15)),
///     vec![EquityGrant::unit_based(Decimal::from(1_000), Decimal::from(50), 4).unwrap()],
/// )
/// .unwrap();
///
/// let query = encode_params(&params);
/// assert_eq!(query, "s=120000&c=15&fmv=50&rsu=u.1000-4");
/// assert_eq!(decode_params(&query), params);
/// ```
pub fn encode_params(params: &Params) -> String {
    let defaults = Params::default();
    let mut pairs: Vec<String> = Vec::new();

    if params.annual_gross_salary() != defaults.annual_gross_salary() {
        pairs.push(format!(
            "{}={}",
            SALARY_KEY,
            params.annual_gross_salary().normalize()
        ));
    }
    if params.monthly_health_contribution() != defaults.monthly_health_contribution() {
        pairs.push(format!(
            "{}={}",
            HEALTH_KEY,
            params.monthly_health_contribution().normalize()
        ));
    }
    if let Some(rate) = params.contractor_tax_rate_percent() {
        pairs.push(format!("{}={}", CONTRACTOR_RATE_KEY, rate.normalize()));
    }

    let fair_value = params.equity_grants().iter().find_map(|grant| {
        match grant.valuation() {
            GrantValuation::UnitBased {
                unit_fair_value, ..
            } => Some(*unit_fair_value),
            GrantValuation::DollarBased { .. } => None,
        }
    });
    if let Some(fair_value) = fair_value {
        pairs.push(format!(
            "{}={}",
            UNIT_FAIR_VALUE_KEY,
            fair_value.normalize()
        ));
    }

    if !params.equity_grants().is_empty() {
        let grants = params
            .equity_grants()
            .iter()
            .map(encode_grant)
            .collect::<Vec<_>>()
            .join(&ARRAY_SEP.to_string());
        pairs.push(format!("{}={}", GRANTS_KEY, grants));
    }

    pairs.join("&")
}

fn encode_grant(grant: &EquityGrant) -> String {
    match grant.valuation() {
        GrantValuation::UnitBased { unit_count, .. } => format!(
            "{}.{}{}{}",
            UNIT_MODE,
            unit_count.normalize(),
            ITEM_SEP,
            grant.vesting_period_years()
        ),
        GrantValuation::DollarBased { dollar_value } => format!(
            "{}.{}{}{}",
            DOLLAR_MODE,
            dollar_value.normalize(),
            ITEM_SEP,
            grant.vesting_period_years()
        ),
    }
}

/// Decodes a query string (with or without a leading `?`) into a parameter
/// set.
///
/// Every field is resolved independently: an absent key takes its default,
/// a present key overrides it, unknown keys are ignored, and a malformed or
/// out-of-domain value falls back to the default for that field alone. A
/// unit-based grant with no usable `fmv` value is dropped rather than
/// guessed. Decoding never fails.
pub fn decode_params(query: &str) -> Params {
    let query = query.strip_prefix('?').unwrap_or(query);
    let defaults = Params::default();

    let mut salary: Option<&str> = None;
    let mut health: Option<&str> = None;
    let mut contractor: Option<&str> = None;
    let mut fair_value: Option<&str> = None;
    let mut grants: Option<&str> = None;

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let slot = match key {
            SALARY_KEY => &mut salary,
            HEALTH_KEY => &mut health,
            CONTRACTOR_RATE_KEY => &mut contractor,
            UNIT_FAIR_VALUE_KEY => &mut fair_value,
            GRANTS_KEY => &mut grants,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let salary = salary
        .and_then(parse_money)
        .unwrap_or(defaults.annual_gross_salary());
    let health = health
        .and_then(parse_money)
        .unwrap_or(defaults.monthly_health_contribution());
    let contractor = contractor
        .and_then(parse_money)
        .filter(|rate| *rate <= Decimal::ONE_HUNDRED);
    let fair_value = fair_value.and_then(parse_money);

    let grants = grants
        .map(|raw| {
            raw.split(ARRAY_SEP)
                .filter_map(|item| decode_grant(item, fair_value))
                .collect()
        })
        .unwrap_or_default();

    Params::new(salary, health, contractor, grants).unwrap_or_default()
}

/// Parses a non-negative decimal, rejecting anything else.
fn parse_money(value: &str) -> Option<Decimal> {
    value
        .parse::<Decimal>()
        .ok()
        .filter(|parsed| !parsed.is_sign_negative())
}

fn decode_grant(item: &str, fair_value: Option<Decimal>) -> Option<EquityGrant> {
    let (mode, rest) = item.split_once('.')?;
    let (amount, years) = rest.split_once(ITEM_SEP)?;
    let amount = parse_money(amount)?;
    let years = years.parse::<u32>().ok()?;

    match mode {
        UNIT_MODE => EquityGrant::unit_based(amount, fair_value?, years).ok(),
        DOLLAR_MODE => EquityGrant::dollar_based(amount, years).ok(),
        _ => None,
    }
}

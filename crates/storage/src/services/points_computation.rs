use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ParseError, ReceiptField};
use crate::models::{Item, Receipt};

const ROUND_DOLLAR_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_BONUS: u64 = 6;
const AFTERNOON_BONUS: u64 = 10;

/// Purchases in `[14:00, 16:00)` earn the afternoon bonus.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Points contributed by each rule for one receipt.
///
/// Every rule is evaluated; a rule that does not apply contributes zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name
    pub retailer_name: u64,
    /// Total has no cents
    pub round_dollar_total: u64,
    /// Total is a multiple of 0.25
    pub quarter_multiple_total: u64,
    /// Five points for every two items
    pub item_pairs: u64,
    /// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3
    pub item_descriptions: u64,
    /// Day of the purchase date is odd
    pub odd_purchase_day: u64,
    /// Purchase time falls in the afternoon window
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Compute the points awarded to a receipt.
pub fn compute_points(receipt: &Receipt) -> Result<u64, ParseError> {
    let breakdown = compute_breakdown(receipt)?;
    let points = breakdown.total();

    tracing::debug!(?breakdown, points, retailer = %receipt.retailer, "Receipt scored");

    Ok(points)
}

/// Evaluate every rule against the receipt.
///
/// All numeric and temporal fields are parsed before any points are counted,
/// so a receipt with one malformed field yields an error and no partial score.
pub fn compute_breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ParseError> {
    let total = parse_amount(&receipt.total, ReceiptField::Total)?;
    let prices = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_amount(&item.price, ReceiptField::ItemPrice(index)))
        .collect::<Result<Vec<_>, _>>()?;
    let purchase_date = NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d")
        .map_err(|_| ParseError::new(ReceiptField::PurchaseDate, &receipt.purchase_date))?;
    let purchase_time = NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M")
        .map_err(|_| ParseError::new(ReceiptField::PurchaseTime, &receipt.purchase_time))?;

    let mut item_descriptions = 0u64;
    for (index, (item, price)) in receipt.items.iter().zip(prices).enumerate() {
        let points = description_points(item, price)
            .ok_or_else(|| ParseError::new(ReceiptField::ItemPrice(index), &item.price))?;
        item_descriptions = item_descriptions.saturating_add(points);
    }

    Ok(PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(total),
        quarter_multiple_total: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions,
        odd_purchase_day: odd_day_points(purchase_date),
        afternoon_purchase: afternoon_points(purchase_time),
    })
}

/// Parse a sign-free, non-negative base-10 amount: ASCII digits with at
/// most one decimal point. No upper bound is enforced.
fn parse_amount(value: &str, field: ReceiptField) -> Result<Decimal, ParseError> {
    let plain_decimal = value.bytes().any(|b| b.is_ascii_digit())
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|&b| b == b'.').count() <= 1;
    if !plain_decimal {
        return Err(ParseError::new(field, value));
    }

    Decimal::from_str(value).map_err(|_| ParseError::new(field, value))
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// Whole dollars are always quarter multiples, so only the cents are tested.
/// Scaling the whole total to cents could overflow `Decimal`.
fn quarter_multiple_points(total: Decimal) -> u64 {
    let quarter = Decimal::new(25, 2);
    if (total.fract() % quarter).is_zero() {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// `None` when the rounded bonus does not fit in the points range.
fn description_points(item: &Item, price: Decimal) -> Option<u64> {
    let trimmed_len = item.short_description.trim().chars().count();
    if trimmed_len % 3 != 0 {
        return Some(0);
    }

    // 0.2 as an exact decimal
    let fifth = Decimal::new(2, 1);
    price.checked_mul(fifth)?.ceil().to_u64()
}

fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 { ODD_DAY_BONUS } else { 0 }
}

fn afternoon_points(time: NaiveTime) -> u64 {
    if AFTERNOON_HOURS.contains(&time.hour()) {
        AFTERNOON_BONUS
    } else {
        0
    }
}

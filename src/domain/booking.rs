use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat fee added to every booking at the payment step (2.50)
pub const PROCESSING_FEE: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

const CARD_DIGITS: usize = 16;
const EXPIRY_DIGITS: usize = 4;

/// Bookable session lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    HalfHour,
    #[default]
    OneHour,
    NinetyMinutes,
    TwoHours,
}

impl SessionDuration {
    pub const ALL: [SessionDuration; 4] = [
        SessionDuration::HalfHour,
        SessionDuration::OneHour,
        SessionDuration::NinetyMinutes,
        SessionDuration::TwoHours,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            SessionDuration::HalfHour => 30,
            SessionDuration::OneHour => 60,
            SessionDuration::NinetyMinutes => 90,
            SessionDuration::TwoHours => 120,
        }
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        SessionDuration::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or_else(|| format!("Unsupported duration: {} minutes", minutes))
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> Self {
        duration.minutes()
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `rate * (minutes / 60) * students`, rounded to cents. `None` when the
/// product leaves the `Decimal` range.
pub fn session_total(rate: Decimal, duration: SessionDuration, students: u32) -> Option<Decimal> {
    rate.checked_mul(Decimal::from(duration.minutes()))?
        .checked_mul(Decimal::from(students))?
        .checked_div(Decimal::from(60))
        .map(round_money)
}

/// Price breakdown shown on the payment step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub currency: String,
    pub total: Decimal,
    pub fee: Decimal,
    pub payable: Decimal,
}

impl Quote {
    pub fn new(currency: impl Into<String>, total: Decimal) -> Option<Self> {
        let payable = total.checked_add(PROCESSING_FEE)?;
        Some(Self {
            currency: currency.into(),
            total,
            fee: PROCESSING_FEE,
            payable: round_money(payable),
        })
    }

    /// Prefixes the currency symbol verbatim, e.g. "$450.00"
    pub fn display(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps the first 16 digits, grouped in fours: "4111 1111 1111 1111"
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = digits_only(raw).chars().take(CARD_DIGITS).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders up to four digits as "MM/YY"; the slash appears once two
/// digits are present.
pub fn format_expiry_date(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(EXPIRY_DIGITS).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

use chrono::NaiveDate;
use std::fmt;

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Reasons a personal identification code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonalCodeError {
    #[error("personal code must be {CODE_LENGTH} characters, got {0}")]
    Length(usize),
    #[error("personal code must contain only digits")]
    NonDigit,
    #[error("century digit {0} is outside 1-6")]
    Century(u8),
    #[error("personal code does not encode a calendar date")]
    BirthDate,
    #[error("check digit {actual} does not match expected {expected}")]
    Checksum { expected: u8, actual: u8 },
}

/// Validated Estonian personal identification code.
///
/// Layout: century/gender digit, YYMMDD birth date, three-digit serial, check digit. The
/// last four digits double as the customer's risk segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalCode {
    digits: [u8; CODE_LENGTH],
    birth_date: NaiveDate,
}

impl PersonalCode {
    pub fn parse(raw: &str) -> Result<Self, PersonalCodeError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length != CODE_LENGTH {
            return Err(PersonalCodeError::Length(length));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(trimmed.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(PersonalCodeError::NonDigit);
            }
            *slot = byte - b'0';
        }

        let birth_date = birth_date_from(&digits)?;

        let expected = check_digit(&digits);
        let actual = digits[CODE_LENGTH - 1];
        if expected != actual {
            return Err(PersonalCodeError::Checksum { expected, actual });
        }

        Ok(Self { digits, birth_date })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Completed years of age on `today`, or `None` for a birth date after it.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        today.years_since(self.birth_date)
    }

    /// Risk segment key: the last four digits read as a number.
    pub fn segment(&self) -> u16 {
        self.digits[CODE_LENGTH - 4..]
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(*digit))
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

fn birth_date_from(digits: &[u8; CODE_LENGTH]) -> Result<NaiveDate, PersonalCodeError> {
    let century = match digits[0] {
        1 | 2 => 1800,
        3 | 4 => 1900,
        5 | 6 => 2000,
        other => return Err(PersonalCodeError::Century(other)),
    };

    let pair = |index: usize| u32::from(digits[index]) * 10 + u32::from(digits[index + 1]);
    let year = century + pair(1) as i32;

    NaiveDate::from_ymd_opt(year, pair(3), pair(5)).ok_or(PersonalCodeError::BirthDate)
}

fn check_digit(digits: &[u8; CODE_LENGTH]) -> u8 {
    let weighted = |weights: &[u32; 10]| {
        digits
            .iter()
            .zip(weights)
            .map(|(digit, weight)| u32::from(*digit) * weight)
            .sum::<u32>()
            % 11
    };

    match weighted(&PRIMARY_WEIGHTS) {
        10 => match weighted(&SECONDARY_WEIGHTS) {
            10 => 0,
            remainder => remainder as u8,
        },
        remainder => remainder as u8,
    }
}

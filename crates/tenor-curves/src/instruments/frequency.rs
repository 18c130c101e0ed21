//! Coupon payment frequency.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Payment frequency for coupon bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the length of one period in years.
    #[must_use]
    pub fn period(&self) -> f64 {
        1.0 / f64::from(self.periods_per_year())
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CurveError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            _ => Err(CurveError::invalid_instrument(format!(
                "unsupported frequency: {n} payments per year"
            ))),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Quarterly.period(), 0.25);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Frequency::try_from(4).unwrap(), Frequency::Quarterly);
        assert!(Frequency::try_from(3).is_err());
        assert!(Frequency::try_from(0).is_err());
    }

    #[test]
    fn test_serde_and_display() {
        assert_eq!(
            serde_json::to_string(&Frequency::SemiAnnual).unwrap(),
            r#""semi-annual""#
        );
        let f: Frequency = serde_json::from_str(r#""monthly""#).unwrap();
        assert_eq!(f, Frequency::Monthly);
        assert_eq!(Frequency::default(), Frequency::SemiAnnual);
        assert_eq!(Frequency::SemiAnnual.to_string(), "Semi-Annual");
    }
}

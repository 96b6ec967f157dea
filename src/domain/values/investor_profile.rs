use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAppetite {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskAppetite::Low => write!(f, "Low"),
            RiskAppetite::Medium => write!(f, "Medium"),
            RiskAppetite::High => write!(f, "High"),
        }
    }
}

impl FromStr for RiskAppetite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskAppetite::Low),
            "medium" => Ok(RiskAppetite::Medium),
            "high" => Ok(RiskAppetite::High),
            _ => Err(format!("Unknown risk appetite: {s}")),
        }
    }
}

/// Investment horizon. Serialized the way the recommender was trained on
/// ("Short Term", "Medium Term", "Long Term").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentTerm {
    #[serde(rename = "Short Term", alias = "short")]
    Short,
    #[serde(rename = "Medium Term", alias = "medium")]
    Medium,
    #[serde(rename = "Long Term", alias = "long")]
    Long,
}

impl fmt::Display for InvestmentTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestmentTerm::Short => write!(f, "Short Term"),
            InvestmentTerm::Medium => write!(f, "Medium Term"),
            InvestmentTerm::Long => write!(f, "Long Term"),
        }
    }
}

impl FromStr for InvestmentTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim_end_matches(" term") {
            "short" => Ok(InvestmentTerm::Short),
            "medium" => Ok(InvestmentTerm::Medium),
            "long" => Ok(InvestmentTerm::Long),
            _ => Err(format!("Unknown investment term: {s}")),
        }
    }
}

/// Inputs to the investment recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub risk_appetite: RiskAppetite,
    pub term: InvestmentTerm,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub loan: Option<f64>,
    #[serde(default)]
    pub investment_amount: Option<f64>,
}

impl Default for InvestorProfile {
    fn default() -> Self {
        Self {
            risk_appetite: RiskAppetite::Medium,
            term: InvestmentTerm::Long,
            age: None,
            loan: None,
            investment_amount: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_parse_and_display() {
        assert_eq!("Long Term".parse::<InvestmentTerm>().unwrap(), InvestmentTerm::Long);
        assert_eq!("short".parse::<InvestmentTerm>().unwrap(), InvestmentTerm::Short);
        assert_eq!(InvestmentTerm::Medium.to_string(), "Medium Term");
        assert!("forever".parse::<InvestmentTerm>().is_err());
    }

    #[test]
    fn test_term_serde_uses_display_form() {
        let json = serde_json::to_string(&InvestmentTerm::Short).unwrap();
        assert_eq!(json, "\"Short Term\"");
        let back: InvestmentTerm = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(back, InvestmentTerm::Long);
    }

    #[test]
    fn test_risk_parse() {
        assert_eq!("HIGH".parse::<RiskAppetite>().unwrap(), RiskAppetite::High);
        assert!("reckless".parse::<RiskAppetite>().is_err());
    }
}

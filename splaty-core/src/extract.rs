//! Sub-field extraction from loan repayment descriptions.
//!
//! Expected description text (single line, whitespace runs vary):
//!   KAPITAŁ: 1 250,31 ODSETKI: 412,07 ODSETKI SKAPIT.: 0,00 ODSETKI KARNE: 3,10 40012345
//!
//! The `ODSETKI KARNE` (penalty interest) segment is optional.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Penalty interest used when the description has no `ODSETKI KARNE` segment.
pub const DEFAULT_PENALTY_INTEREST: &str = "0,00";

/// Amount token: space-grouped thousands with decimals, or plain digits/commas.
const AMOUNT: &str = r"\d{1,3}(?:[ \x{A0}]\d{3})+,\d+|[0-9,]+";

/// Raw sub-fields captured from a description. Amounts stay as source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub principal: String,
    pub interest: String,
    pub capitalized_interest: String,
    pub penalty_interest: String,
    pub loan_id: String,
}

/// Owns the compiled description pattern.
#[derive(Debug, Clone)]
pub struct DescriptionExtractor {
    re: Regex,
}

impl DescriptionExtractor {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            concat!(
                r"KAPITAŁ:\s*(?P<principal>{amt})\s+",
                r"ODSETKI:\s*(?P<interest>{amt})\s+",
                r"ODSETKI\s+SKAPIT\.:\s*(?P<capitalized>{amt})",
                r"(?:\s+ODSETKI\s+KARNE:\s*(?P<penalty>{amt}))?",
                r"\s+(?P<id>\d+)(?:[^\d,]|$)"
            ),
            amt = AMOUNT
        );
        let re = Regex::new(&pattern)?;
        Ok(Self { re })
    }

    /// Extract sub-fields from the first match in `description`.
    ///
    /// Returns `None` when the pattern does not match; a partial match (for
    /// example a missing trailing loan id) is not a match.
    pub fn extract(&self, description: &str) -> Option<ExtractedFields> {
        let caps = self.re.captures(description)?;

        let penalty_interest = caps
            .name("penalty")
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PENALTY_INTEREST)
            .to_string();

        Some(ExtractedFields {
            principal: caps["principal"].to_string(),
            interest: caps["interest"].to_string(),
            capitalized_interest: caps["capitalized"].to_string(),
            penalty_interest,
            loan_id: caps["id"].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> DescriptionExtractor {
        DescriptionExtractor::new().unwrap()
    }

    #[test]
    fn test_basic_description() {
        let f = extractor()
            .extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5,00 999")
            .unwrap();
        assert_eq!(f.principal, "100,00");
        assert_eq!(f.interest, "20,00");
        assert_eq!(f.capitalized_interest, "5,00");
        assert_eq!(f.penalty_interest, DEFAULT_PENALTY_INTEREST);
        assert_eq!(f.loan_id, "999");
    }

    #[test]
    fn test_penalty_present() {
        let f = extractor()
            .extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5,00 ODSETKI KARNE: 12,34 999")
            .unwrap();
        assert_eq!(f.penalty_interest, "12,34");
        assert_eq!(f.loan_id, "999");
    }

    #[test]
    fn test_variable_whitespace_and_surrounding_text() {
        let desc = "Spłata raty nr 12  KAPITAŁ:  1 250,31\tODSETKI: 412,07   ODSETKI  SKAPIT.: 0,00 \n 40012345 ref. 7/2024";
        let f = extractor().extract(desc).unwrap();
        assert_eq!(f.principal, "1 250,31");
        assert_eq!(f.interest, "412,07");
        assert_eq!(f.capitalized_interest, "0,00");
        assert_eq!(f.loan_id, "40012345");
    }

    #[test]
    fn test_grouped_amount_before_id() {
        let f = extractor()
            .extract("KAPITAŁ: 1,00 ODSETKI: 2,00 ODSETKI SKAPIT.: 1 000,00 77")
            .unwrap();
        assert_eq!(f.capitalized_interest, "1 000,00");
        assert_eq!(f.loan_id, "77");
    }

    #[test]
    fn test_missing_id_is_no_match() {
        let x = extractor();
        assert!(x.extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5,00").is_none());
        assert!(x.extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5,00 ODSETKI KARNE: 3,00").is_none());
    }

    #[test]
    fn test_grouped_last_amount_without_id_is_no_match() {
        let x = extractor();
        assert!(x.extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5 000,00").is_none());
        assert!(x
            .extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 0,00 ODSETKI KARNE: 1 200,50")
            .is_none());
        assert!(x.extract("KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5 000,00 \n").is_none());
    }

    #[test]
    fn test_grouped_penalty_before_id() {
        let f = extractor()
            .extract("KAPITAŁ: 1,00 ODSETKI: 2,00 ODSETKI SKAPIT.: 0,00 ODSETKI KARNE: 1 200,50 31.")
            .unwrap();
        assert_eq!(f.penalty_interest, "1 200,50");
        assert_eq!(f.loan_id, "31");
    }

    #[test]
    fn test_labels_out_of_order_is_no_match() {
        let x = extractor();
        assert!(x.extract("ODSETKI: 20,00 KAPITAŁ: 100,00 ODSETKI SKAPIT.: 5,00 999").is_none());
        assert!(x.extract("Przelew na rachunek 12 3456").is_none());
        assert!(x.extract("").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let desc = concat!(
            "KAPITAŁ: 1,00 ODSETKI: 2,00 ODSETKI SKAPIT.: 3,00 111 ",
            "KAPITAŁ: 9,00 ODSETKI: 9,00 ODSETKI SKAPIT.: 9,00 222"
        );
        let f = extractor().extract(desc).unwrap();
        assert_eq!(f.loan_id, "111");
        assert_eq!(f.principal, "1,00");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let x = extractor();
        let desc = "KAPITAŁ: 10,00 ODSETKI: 1,00 ODSETKI SKAPIT.: 0,00 ODSETKI KARNE: 0,50 5";
        assert_eq!(x.extract(desc), x.extract(desc));
        assert_eq!(x.extract(desc), extractor().extract(desc));
    }
}

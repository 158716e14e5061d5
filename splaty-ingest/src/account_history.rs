//! Bank `account-history` XML export reader.
//!
//! Expected document:
//!   <account-history>
//!     <search>...</search>
//!     <operations>
//!       <operation>
//!         <order-date>2024-03-15</order-date>
//!         <exec-date>2024-03-15</exec-date>
//!         <type>Spłata kredytu</type>
//!         <description>KAPITAŁ: 100,00 ODSETKI: 20,00 ...</description>
//!         <amount curr="PLN">-125,00</amount>
//!         <ending-balance curr="PLN">+1 000,00</ending-balance>
//!       </operation>
//!     </operations>
//!   </account-history>

use anyhow::{Context, Result};
use serde::Deserialize;
use splaty_core::{Amount, RawTransaction};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct XmlAccountHistory {
    #[serde(default)]
    operations: XmlOperations,
}

#[derive(Debug, Default, Deserialize)]
struct XmlOperations {
    #[serde(rename = "operation", default)]
    items: Vec<XmlOperation>,
}

#[derive(Debug, Deserialize)]
struct XmlOperation {
    #[serde(rename = "order-date", default)]
    order_date: String,
    #[serde(rename = "exec-date", default)]
    exec_date: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    amount: XmlAmount,
    #[serde(rename = "ending-balance", default)]
    ending_balance: XmlAmount,
}

#[derive(Debug, Default, Deserialize)]
struct XmlAmount {
    #[serde(rename = "@curr", default)]
    currency: String,
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<XmlAmount> for Amount {
    fn from(a: XmlAmount) -> Self {
        Amount::new(a.currency.trim(), a.value.trim())
    }
}

impl From<XmlOperation> for RawTransaction {
    fn from(op: XmlOperation) -> Self {
        RawTransaction {
            order_date: op.order_date.trim().to_string(),
            exec_date: op.exec_date.trim().to_string(),
            category: op.kind,
            description: op.description,
            amount: op.amount.into(),
            ending_balance: op.ending_balance.into(),
        }
    }
}

/// Parse an account history document, keeping document order.
pub fn parse_account_history_str(xml: &str) -> Result<Vec<RawTransaction>> {
    let history: XmlAccountHistory =
        quick_xml::de::from_str(xml).context("parsing account-history XML")?;

    let txns: Vec<RawTransaction> = history
        .operations
        .items
        .into_iter()
        .map(RawTransaction::from)
        .collect();

    debug!(count = txns.len(), "read account history operations");
    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_operations_and_attributes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<account-history>
  <search>
    <account>PL00 1234 5678</account>
    <date since="2024-01-01" to="2024-03-31"/>
    <filtering>all</filtering>
  </search>
  <operations>
    <operation>
      <order-date>2024-03-15</order-date>
      <exec-date>2024-03-16</exec-date>
      <type>Spłata kredytu</type>
      <description>KAPITAŁ: 100,00 ODSETKI: 20,00 ODSETKI SKAPIT.: 5,00 999</description>
      <amount curr="PLN">-125,00</amount>
      <ending-balance curr="PLN">+1 000,00</ending-balance>
    </operation>
    <operation>
      <order-date>2024-03-20</order-date>
      <exec-date>2024-03-20</exec-date>
      <type>Przelew &amp; zlecenie</type>
      <description>Czynsz</description>
      <amount curr="EUR">-10,00</amount>
      <ending-balance curr="EUR">0,00</ending-balance>
    </operation>
  </operations>
</account-history>"#;

        let txns = parse_account_history_str(xml).unwrap();
        assert_eq!(txns.len(), 2);

        let first = &txns[0];
        assert_eq!(first.order_date, "2024-03-15");
        assert_eq!(first.exec_date, "2024-03-16");
        assert_eq!(first.category, "Spłata kredytu");
        assert!(first.description.ends_with("999"));
        assert_eq!(first.amount, Amount::new("PLN", "-125,00"));
        assert_eq!(first.ending_balance, Amount::new("PLN", "+1 000,00"));

        assert_eq!(txns[1].category, "Przelew & zlecenie");
        assert_eq!(txns[1].amount.currency, "EUR");
    }

    #[test]
    fn test_missing_children_default_to_empty() {
        let xml = r#"<account-history><operations>
            <operation><type>Spłata kredytu</type></operation>
        </operations></account-history>"#;
        let txns = parse_account_history_str(xml).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].order_date, "");
        assert_eq!(txns[0].description, "");
        assert_eq!(txns[0].amount, Amount::default());
    }

    #[test]
    fn test_no_operations_element() {
        let txns = parse_account_history_str("<account-history><search/></account-history>").unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let err = parse_account_history_str("<account-history><operations></account-history>").unwrap_err();
        assert!(format!("{err:#}").contains("account-history"));
    }
}

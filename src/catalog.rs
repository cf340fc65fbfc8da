//! Loan products offered by the simulator.
//!
//! A [`ProductCatalog`] is loaded once from JSON and handed to whoever builds
//! loan inputs. It is immutable after construction.
//!
//! ```json
//! {
//!   "products": [
//!     { "id": "consignado", "name": "Crédito Consignado",
//!       "annual_rate_percent": "21.5", "min_months": 6, "max_months": 96 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::rates::{convert_yearly_to_monthly_rate, percent_to_rate};
use crate::types::{AmortizationType, LoanCalculationInput, Money, Rate};
use crate::LoanResult;

/// A loan product and the terms it allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: String,
    pub name: String,
    /// The annual interest rate as a percentage (e.g., 21.5 for 21.5%).
    pub annual_rate_percent: Decimal,
    pub min_months: u32,
    pub max_months: u32,
}

impl LoanProduct {
    /// Compound-equivalent monthly rate as a fraction.
    pub fn monthly_rate(&self) -> LoanResult<Rate> {
        convert_yearly_to_monthly_rate(percent_to_rate(self.annual_rate_percent))
    }

    /// Whether the product offers `months` installments.
    pub fn allows_term(&self, months: u32) -> bool {
        (self.min_months..=self.max_months).contains(&months)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<LoanProduct>,
}

/// An immutable set of loan products, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<LoanProduct>,
}

impl ProductCatalog {
    /// Builds a catalog, rejecting duplicate ids, negative rates and empty term ranges.
    pub fn new(products: Vec<LoanProduct>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                bail!("duplicate product id '{}'", product.id);
            }
            if product.annual_rate_percent < Decimal::ZERO {
                bail!("product '{}' has a negative rate", product.id);
            }
            if product.min_months == 0 || product.min_months > product.max_months {
                bail!(
                    "product '{}' has an invalid term range {}..={}",
                    product.id,
                    product.min_months,
                    product.max_months
                );
            }
        }

        Ok(Self { products })
    }

    /// Parses and validates a catalog document.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).context("failed to parse product catalog")?;
        Self::new(document.products)
    }

    /// Reads and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read product catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("invalid product catalog {}", path.display()))?;

        info!("loaded {} loan products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&LoanProduct> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in file order.
    pub fn products(&self) -> &[LoanProduct] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Builds a schedule input for a product, using its monthly-equivalent rate.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProduct` for a missing id, `TermOutOfRange` when the
    /// product does not offer `months` installments, and `Overflow` when its
    /// rate cannot be converted.
    pub fn build_input(
        &self,
        product_id: &str,
        principal: Money,
        months: u32,
        first_due_date: NaiveDate,
        amortization_type: AmortizationType,
    ) -> LoanResult<LoanCalculationInput> {
        let product = self
            .get(product_id)
            .ok_or_else(|| LoanError::UnknownProduct(product_id.to_string()))?;

        if !product.allows_term(months) {
            return Err(LoanError::TermOutOfRange {
                product: product.id.clone(),
                months,
                min: product.min_months,
                max: product.max_months,
            });
        }

        Ok(LoanCalculationInput::new(principal, product.monthly_rate()?, months, first_due_date)
            .with_amortization_type(amortization_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const CATALOG: &str = r#"{
        "products": [
            { "id": "pessoal", "name": "Crédito Pessoal", "annual_rate_percent": "12", "min_months": 3, "max_months": 48 },
            { "id": "imobiliario", "name": "Financiamento Imobiliário", "annual_rate_percent": "10.5", "min_months": 60, "max_months": 420 }
        ]
    }"#;

    fn first_due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = ProductCatalog::from_json_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("imobiliario").unwrap().max_months, 420);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_monthly_rate_is_compound_equivalent() {
        let catalog = ProductCatalog::from_json_str(CATALOG).unwrap();
        let rate = catalog.get("pessoal").unwrap().monthly_rate().unwrap();

        assert!(rate > dec!(0.0094) && rate < dec!(0.0095));
    }

    #[test]
    fn test_build_input() {
        let catalog = ProductCatalog::from_json_str(CATALOG).unwrap();

        let input = catalog
            .build_input("pessoal", dec!(5000), 24, first_due_date(), AmortizationType::Sac)
            .unwrap();

        assert_eq!(input.principal, dec!(5000));
        assert_eq!(input.months, 24);
        assert_eq!(input.amortization_type, AmortizationType::Sac);
        assert_eq!(input.rate_monthly, catalog.get("pessoal").unwrap().monthly_rate().unwrap());
    }

    #[test]
    fn test_build_input_rejects_term_outside_range() {
        let catalog = ProductCatalog::from_json_str(CATALOG).unwrap();

        let result = catalog.build_input("pessoal", dec!(5000), 60, first_due_date(), AmortizationType::Price);

        assert_eq!(
            result,
            Err(LoanError::TermOutOfRange {
                product: "pessoal".to_string(),
                months: 60,
                min: 3,
                max: 48,
            })
        );
    }

    #[test]
    fn test_build_input_unknown_product() {
        let catalog = ProductCatalog::from_json_str(CATALOG).unwrap();

        let result = catalog.build_input("auto", dec!(5000), 12, first_due_date(), AmortizationType::Price);

        assert_eq!(result, Err(LoanError::UnknownProduct("auto".to_string())));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"{ "products": [
            { "id": "a", "name": "A", "annual_rate_percent": "1", "min_months": 1, "max_months": 2 },
            { "id": "a", "name": "B", "annual_rate_percent": "1", "min_months": 1, "max_months": 2 }
        ] }"#;

        let error = ProductCatalog::from_json_str(json).unwrap_err();
        assert!(error.to_string().contains("duplicate product id 'a'"));
    }

    #[test]
    fn test_invalid_term_range_is_rejected() {
        let json = r#"{ "products": [
            { "id": "a", "name": "A", "annual_rate_percent": "1", "min_months": 12, "max_months": 6 }
        ] }"#;

        assert!(ProductCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let error = ProductCatalog::from_json_str("{ \"products\": 3 }").unwrap_err();
        assert!(error.to_string().contains("failed to parse product catalog"));
    }

    #[test]
    fn test_load_missing_file() {
        let error = ProductCatalog::load("/nonexistent/products.json").unwrap_err();
        assert!(error.to_string().contains("failed to read product catalog"));
    }
}

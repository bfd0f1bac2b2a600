use quantdash_core::{format_price, CatalogProvider, CompanyRecord, PriceChange, StaticCatalog};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CompaniesResponseData<'a> {
    companies: &'a [CompanyRecord],
}

pub fn run() -> Result<CommandResult, CliError> {
    let catalog = StaticCatalog::builtin();
    let companies = catalog.list();

    let mut lines = vec![format!(
        "{:<7}{:<28}{:>10}  {:<24}{}",
        "SYMBOL", "NAME", "PRICE", "CHANGE", "SECTOR"
    )];
    lines.extend(companies.iter().map(|company| {
        let change = PriceChange::compute(company.current_price, company.previous_close);
        format!(
            "{:<7}{:<28}{:>10}  {:<24}{}",
            company.symbol,
            company.name,
            format_price(company.current_price),
            format!("{} {change}", change.trend().arrow()),
            company.sector
        )
    }));

    let data = serde_json::to_value(CompaniesResponseData { companies })?;
    Ok(CommandResult::new(data, lines.join("\n")))
}

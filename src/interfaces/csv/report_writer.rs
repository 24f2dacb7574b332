use std::io::Write;

use crate::domain::catalog::Sku;
use crate::domain::order::Order;
use crate::domain::partner::Partner;
use crate::error::Result;

/// Writes the end-of-run report as three CSV sections (partners, catalog,
/// orders) separated by blank lines. Money columns are formatted to two
/// decimal places.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(
        &mut self,
        partners: &[Partner],
        catalog: &[Sku],
        orders: &[Order],
    ) -> Result<()> {
        self.write_partners(partners)?;
        writeln!(self.writer)?;
        self.write_catalog(catalog)?;
        writeln!(self.writer)?;
        self.write_orders(orders)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_partners(&mut self, partners: &[Partner]) -> Result<()> {
        let mut csv = csv::Writer::from_writer(&mut self.writer);
        csv.write_record(["partner", "name", "ceiling", "available"])?;
        for p in partners {
            csv.write_record([
                p.id.to_string(),
                p.name.clone(),
                p.credit_ceiling.to_string(),
                p.available.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog: &[Sku]) -> Result<()> {
        let mut csv = csv::Writer::from_writer(&mut self.writer);
        csv.write_record(["sku", "name", "category", "price", "stock"])?;
        for s in catalog {
            csv.write_record([
                s.id.to_string(),
                s.name.clone(),
                s.category.clone(),
                s.unit_price.to_string(),
                s.stock.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }

    fn write_orders(&mut self, orders: &[Order]) -> Result<()> {
        let mut csv = csv::Writer::from_writer(&mut self.writer);
        csv.write_record(["order", "buyer", "partner", "total", "status"])?;
        for o in orders {
            csv.write_record([
                o.id.to_string(),
                o.buyer.clone(),
                o.partner_id.to_string(),
                o.total.to_string(),
                o.status.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::order::{LineItem, Order};
    use crate::domain::partner::Partner;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_sections_and_formatting() {
        let partner = Partner::onboard("Northwind", "ops@northwind.example", Money::new(dec!(5000)));
        let sku = Sku::new("Anglepoise Lamp", "office", Money::new(dec!(63.006)), 25);
        let order = Order::place(
            "buyer-ada",
            partner.id,
            vec![LineItem {
                sku_id: sku.id,
                quantity: 2,
                unit_price: Money::new(dec!(63.00)),
            }],
        );

        let mut out = Vec::new();
        ReportWriter::new(&mut out)
            .write_report(&[partner], &[sku], &[order])
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("partner,name,ceiling,available"));
        assert!(text.contains("Northwind,5000,5000"));
        assert!(text.contains("sku,name,category,price,stock"));
        // Price rounded to two decimals for display.
        assert!(text.contains("Anglepoise Lamp,office,63.01,25"));
        assert!(text.contains("order,buyer,partner,total,status"));
        assert!(text.contains("buyer-ada"));
        assert!(text.contains("126.00,pending"));
    }
}

use crate::domain::summary::OrderSummary;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// An order summary rounded to cents, as shown to a shopper.
#[derive(Debug, Serialize, PartialEq)]
pub struct SummaryRow {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl From<&OrderSummary> for SummaryRow {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.to_cents(),
            shipping: summary.shipping.to_cents(),
            tax: summary.tax.to_cents(),
            discount: summary.discount.to_cents(),
            total: summary.total.to_cents(),
        }
    }
}

/// Writes order summaries as CSV rows.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summary(&mut self, summary: &OrderSummary) -> Result<()> {
        self.writer.serialize(SummaryRow::from(summary))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes an order summary as pretty JSON followed by a newline.
pub fn write_summary_json<W: Write>(mut sink: W, summary: &OrderSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, &SummaryRow::from(summary))?;
    writeln!(sink)?;
    Ok(())
}

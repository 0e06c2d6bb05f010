use crate::domain::snapshot::LedgerSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes the final snapshot as a two-row CSV summary, one row per wallet.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_summary(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        self.writer
            .write_record(["wallet", "balance", "bank", "offline", "transactions", "active"])?;

        let user = &snapshot.user_wallet;
        self.writer.write_record([
            "user".to_string(),
            user.balance.to_string(),
            user.phone_balance.to_string(),
            user.offline_count.to_string(),
            user.transactions.len().to_string(),
            user.is_active.to_string(),
        ])?;

        let merchant = &snapshot.merchant_wallet;
        self.writer.write_record([
            "merchant".to_string(),
            merchant.balance.to_string(),
            merchant.bank_balance.to_string(),
            "0".to_string(),
            merchant.transactions.len().to_string(),
            merchant.is_active.to_string(),
        ])?;

        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Balance;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_layout() {
        let mut snapshot = LedgerSnapshot::new();
        snapshot.user_wallet.balance = Balance::new(dec!(180));
        snapshot.user_wallet.phone_balance = Balance::new(dec!(9700));
        snapshot.user_wallet.offline_count = 1;

        let mut buffer = Vec::new();
        SummaryWriter::new(&mut buffer)
            .write_summary(&snapshot)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "wallet,balance,bank,offline,transactions,active"
        );
        assert_eq!(lines.next().unwrap(), "user,180.00,9700.00,1,0,true");
        assert_eq!(lines.next().unwrap(), "merchant,0.00,0.00,0,0,true");
    }
}

use crate::application::engine::LedgerEngine;
use crate::domain::money::Amount;
use crate::domain::wallet::{LinkKind, WalletTarget};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandOp {
    Load,
    Request,
    Approve,
    Sync,
    Toggle,
    Withdraw,
    Connect,
}

/// Either a wallet or a link, depending on the op it accompanies.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    User,
    Merchant,
    Wifi,
    Bluetooth,
}

/// One row of a command script: `op, target, amount, value`.
///
/// Unused columns stay empty; which ones are required depends on the op.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: CommandOp,
    pub target: Option<Target>,
    pub amount: Option<Decimal>,
    pub value: Option<bool>,
}

impl Command {
    /// Dispatches the command onto the engine, mapping script columns onto
    /// the operation's typed arguments.
    pub fn apply(&self, engine: &mut LedgerEngine) -> Result<()> {
        match self.op {
            CommandOp::Load => engine.load_wearable(self.required_amount()?),
            CommandOp::Request => engine.request_payment(self.required_amount()?),
            CommandOp::Approve => {
                let approve = self
                    .value
                    .ok_or_else(|| missing("approve", "a true/false value"))?;
                engine.approve_payment(approve)
            }
            CommandOp::Sync => engine.sync_wearable(),
            CommandOp::Toggle => {
                let target = match self.target {
                    Some(Target::User) => WalletTarget::User,
                    Some(Target::Merchant) => WalletTarget::Merchant,
                    _ => return Err(missing("toggle", "a user/merchant target")),
                };
                engine.toggle_active(target)
            }
            CommandOp::Withdraw => engine.withdraw_merchant().map(|_| ()),
            CommandOp::Connect => {
                let kind = match self.target {
                    Some(Target::Wifi) => LinkKind::Wifi,
                    Some(Target::Bluetooth) => LinkKind::Bluetooth,
                    _ => return Err(missing("connect", "a wifi/bluetooth target")),
                };
                let value = self
                    .value
                    .ok_or_else(|| missing("connect", "a true/false value"))?;
                engine.set_connectivity(kind, value)
            }
        }
    }

    fn required_amount(&self) -> Result<Amount> {
        let amount = self
            .amount
            .ok_or_else(|| missing("load/request", "an amount"))?;
        Amount::new(amount)
    }
}

fn missing(op: &str, what: &str) -> LedgerError {
    LedgerError::Validation(format!("{op} requires {what}"))
}

pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_script() {
        let data = "op, target, amount, value\n\
                    load, , 300, \n\
                    request, , 120, \n\
                    approve, , , true";
        let reader = CommandReader::new(data.as_bytes());
        let commands: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(commands.len(), 3);
        let load = commands[0].as_ref().unwrap();
        assert_eq!(load.op, CommandOp::Load);
        assert_eq!(load.amount, Some(dec!(300)));
        assert_eq!(load.target, None);

        let approve = commands[2].as_ref().unwrap();
        assert_eq!(approve.op, CommandOp::Approve);
        assert_eq!(approve.value, Some(true));
    }

    #[test]
    fn test_reader_parses_targets() {
        let data = "op, target, amount, value\n\
                    connect, wifi, , true\n\
                    toggle, merchant, , ";
        let reader = CommandReader::new(data.as_bytes());
        let commands: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(commands[0].as_ref().unwrap().target, Some(Target::Wifi));
        assert_eq!(commands[1].as_ref().unwrap().target, Some(Target::Merchant));
    }

    #[test]
    fn test_reader_malformed_op() {
        let data = "op, target, amount, value\nteleport, , 10, ";
        let reader = CommandReader::new(data.as_bytes());
        let commands: Vec<Result<Command>> = reader.commands().collect();

        assert!(commands[0].is_err());
    }

    #[test]
    fn test_apply_rejects_missing_arguments() {
        use crate::application::engine::{EngineConfig, LedgerEngine};
        use crate::infrastructure::in_memory::InMemorySnapshotStore;

        let mut engine = LedgerEngine::new(
            Box::new(InMemorySnapshotStore::new()),
            EngineConfig::default(),
        )
        .unwrap();

        let command = Command {
            op: CommandOp::Load,
            target: None,
            amount: None,
            value: None,
        };
        assert!(matches!(
            command.apply(&mut engine),
            Err(LedgerError::Validation(_))
        ));

        let command = Command {
            op: CommandOp::Toggle,
            target: Some(Target::Wifi),
            amount: None,
            value: None,
        };
        assert!(matches!(
            command.apply(&mut engine),
            Err(LedgerError::Validation(_))
        ));
    }
}

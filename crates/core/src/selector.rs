//! Greedy input selection for legacy asset transfers.
//!
//! Entries are consumed first-fit in the order presented, deliberately not
//! optimized for input count. Consumers rely on this policy's fee and
//! privacy characteristics, so it must stay stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::tx::{TransactionInput, TransactionOutput};
use crate::uint160::UInt160;
use crate::uint256::UInt256;

/// One spendable output known to the balance indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub tx_id: UInt256,
    pub index: u16,
    pub value: Fixed8,
    pub asset_id: UInt256,
}

impl BalanceEntry {
    fn as_input(&self) -> TransactionInput {
        TransactionInput::new(self.tx_id, self.index)
    }
}

/// Spendable entries grouped by asset, preserving presentation order
/// within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    assets: BTreeMap<UInt256, Vec<BalanceEntry>>,
}

impl Balance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: BalanceEntry) {
        self.assets.entry(entry.asset_id).or_default().push(entry);
    }

    pub fn entries(&self, asset_id: &UInt256) -> Option<&[BalanceEntry]> {
        self.assets.get(asset_id).map(Vec::as_slice)
    }

    pub fn total(&self, asset_id: &UInt256) -> CoreResult<Fixed8> {
        let mut total = Fixed8::ZERO;
        for entry in self.assets.get(asset_id).into_iter().flatten() {
            total = total.checked_add(entry.value)?;
        }
        Ok(total)
    }
}

impl FromIterator<BalanceEntry> for Balance {
    fn from_iter<I: IntoIterator<Item = BalanceEntry>>(iter: I) -> Self {
        let mut balance = Balance::new();
        for entry in iter {
            balance.add(entry);
        }
        balance
    }
}

/// A transfer request: send `amount` of `asset_id` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub asset_id: UInt256,
    pub amount: Fixed8,
    pub to: UInt160,
}

impl Intent {
    pub fn new(asset_id: UInt256, amount: Fixed8, to: UInt160) -> Self {
        Intent {
            asset_id,
            amount,
            to,
        }
    }

    pub fn to_output(&self) -> TransactionOutput {
        TransactionOutput::new(self.asset_id, self.amount, self.to)
    }
}

/// The inputs chosen to fund a set of intents, plus any change outputs
/// routed back to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub inputs: Vec<TransactionInput>,
    pub change: Vec<TransactionOutput>,
}

/// Selects inputs covering `intents` plus `fee` (charged in `fee_asset`).
///
/// Per required asset: entries accumulate in presentation order until the
/// running sum covers the requirement; a change output back to `sender` is
/// emitted only when the overshoot is positive. Fails with `UnknownAsset`
/// when no balance group exists for a required asset and with
/// `InsufficientFunds` when the group cannot cover the requirement.
pub fn calculate_inputs(
    balance: &Balance,
    intents: &[Intent],
    fee: Fixed8,
    fee_asset: UInt256,
    sender: UInt160,
) -> CoreResult<Selection> {
    let mut required: BTreeMap<UInt256, Fixed8> = BTreeMap::new();
    for intent in intents {
        if intent.amount.is_negative() {
            return Err(CoreError::Format(format!(
                "negative transfer amount {}",
                intent.amount
            )));
        }
        let slot = required.entry(intent.asset_id).or_insert(Fixed8::ZERO);
        *slot = slot.checked_add(intent.amount)?;
    }
    if !fee.is_zero() {
        if fee.is_negative() {
            return Err(CoreError::Format(format!("negative fee {fee}")));
        }
        let slot = required.entry(fee_asset).or_insert(Fixed8::ZERO);
        *slot = slot.checked_add(fee)?;
    }

    let mut inputs = Vec::new();
    let mut change = Vec::new();
    for (asset_id, amount) in required {
        if amount.is_zero() {
            continue;
        }
        let entries = balance
            .entries(&asset_id)
            .ok_or(CoreError::UnknownAsset(asset_id))?;

        let mut accumulated = Fixed8::ZERO;
        let mut taken = 0usize;
        for entry in entries {
            if accumulated >= amount {
                break;
            }
            accumulated = accumulated.checked_add(entry.value)?;
            taken += 1;
        }
        if accumulated < amount {
            return Err(CoreError::InsufficientFunds {
                asset: asset_id,
                required: amount,
                available: accumulated,
            });
        }
        inputs.extend(entries[..taken].iter().map(BalanceEntry::as_input));

        let overshoot = accumulated.checked_sub(amount)?;
        if !overshoot.is_zero() {
            change.push(TransactionOutput::new(asset_id, overshoot, sender));
        }
    }
    Ok(Selection { inputs, change })
}

//! Pre-submission transaction validation.
//!
//! Each check takes the collaborator data it needs (current height, dry-run
//! gas, a computed minimum fee) and either passes, fails with a typed error
//! carrying the suggested correction, or, when auto-fix is requested,
//! applies the correction in place and reports it. Field corrections change
//! the signing digest, so run them before witnesses are attached.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::network::NetworkConfig;
use crate::tx::Transaction;
use crate::wallet::verification;

/// Raw fee units charged per signature check during verification.
const CHECKSIG_PRICE: i64 = 1_000_000;

/// Serialized size of a single-sig witness: a 66-byte invocation
/// (length prefix, push opcode, 64-byte signature) plus a 40-byte
/// verification script (length prefix, key push, syscall).
const SINGLE_SIG_WITNESS_SIZE: usize = 106;

/// A correction applied by an auto-fix validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix<T> {
    pub previous: T,
    pub updated: T,
}

/// The corrections applied by [`validate_all`]. Empty fields mean the
/// corresponding check passed unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid_until_block: Option<Fix<u32>>,
    pub system_fee: Option<Fix<Fixed8>>,
    pub network_fee: Option<Fix<Fixed8>>,
}

/// Checks that `validUntilBlock` lies strictly between the current height
/// and `currentHeight + max increment`. The auto-fix pushes it to the far
/// edge of that window.
pub fn validate_expiry(
    tx: &mut Transaction,
    current_height: u32,
    config: &NetworkConfig,
    auto_fix: bool,
) -> CoreResult<Option<Fix<u32>>> {
    let vub = tx.valid_until_block();
    let horizon = current_height.saturating_add(config.max_valid_until_block_increment);
    if vub > current_height && vub < horizon {
        return Ok(None);
    }
    let suggestion = horizon.saturating_sub(1);
    if !auto_fix {
        return Err(CoreError::ExpiredValidUntilBlock {
            valid_until_block: vub,
            current_height,
            suggestion,
        });
    }
    tracing::debug!(previous = vub, updated = suggestion, "fixed validUntilBlock");
    tx.valid_until_block = suggestion;
    Ok(Some(Fix {
        previous: vub,
        updated: suggestion,
    }))
}

/// Checks the system fee against dry-run gas consumption, rounded up to
/// whole fee units.
pub fn validate_system_fee(
    tx: &mut Transaction,
    gas_consumed: Fixed8,
    auto_fix: bool,
) -> CoreResult<Option<Fix<Fixed8>>> {
    let required = gas_consumed.ceil()?;
    let assigned = tx.system_fee();
    if assigned >= required {
        if assigned > required {
            tracing::warn!(%assigned, %required, "system fee overpays the dry-run estimate");
        }
        return Ok(None);
    }
    if !auto_fix {
        return Err(CoreError::FeeTooLow { assigned, required });
    }
    tracing::debug!(previous = %assigned, updated = %required, "fixed system fee");
    tx.system_fee = required;
    Ok(Some(Fix {
        previous: assigned,
        updated: required,
    }))
}

/// Checks the network fee against a computed minimum.
pub fn validate_network_fee(
    tx: &mut Transaction,
    min_fee: Fixed8,
    auto_fix: bool,
) -> CoreResult<Option<Fix<Fixed8>>> {
    let assigned = tx.network_fee();
    if assigned >= min_fee {
        return Ok(None);
    }
    if !auto_fix {
        return Err(CoreError::FeeTooLow {
            assigned,
            required: min_fee,
        });
    }
    tracing::debug!(previous = %assigned, updated = %min_fee, "fixed network fee");
    tx.network_fee = min_fee;
    Ok(Some(Fix {
        previous: assigned,
        updated: min_fee,
    }))
}

/// Checks that every declared signer has exactly one witness.
pub fn validate_signing(tx: &Transaction) -> CoreResult<()> {
    for signer in tx.signers() {
        let matching = tx
            .witnesses()
            .iter()
            .filter(|w| w.script_hash() == signer.account)
            .count();
        if matching != 1 {
            return Err(CoreError::SignerMismatch {
                script_hash: signer.account,
                detail: format!("expected exactly one witness, found {matching}"),
            });
        }
    }
    Ok(())
}

/// The minimum network fee for a transaction: per-byte size cost plus the
/// signature-check cost of each witness.
///
/// Witnesses not yet attached are estimated as one single-sig witness per
/// uncovered signer, in both the size and the verification terms.
pub fn network_fee_estimate(tx: &Transaction, fee_per_byte: i64) -> CoreResult<Fixed8> {
    use neoforge_io::Serializable;

    let uncovered = tx.signers().len().saturating_sub(tx.witnesses().len());
    let estimated_size = tx
        .size()
        .checked_add(uncovered.saturating_mul(SINGLE_SIG_WITNESS_SIZE))
        .ok_or(CoreError::Overflow("network_fee_estimate"))?;
    let size_cost = Fixed8::from_raw(
        (estimated_size as i64)
            .checked_mul(fee_per_byte)
            .ok_or(CoreError::Overflow("network_fee_estimate"))?,
    );

    let mut verification_cost = Fixed8::ZERO;
    for witness in tx.witnesses() {
        // Multi-sig verification performs up to `m` signature checks over
        // `n` candidate keys.
        let checks = if verification::is_multi_sig(&witness.verification_script) {
            let threshold = verification::signing_threshold(&witness.verification_script)?;
            let keys = verification::public_keys(&witness.verification_script)?.len();
            (threshold + keys) as i64
        } else {
            1
        };
        verification_cost =
            verification_cost.checked_add(Fixed8::from_raw(CHECKSIG_PRICE).checked_mul_raw(checks)?)?;
    }
    verification_cost = verification_cost
        .checked_add(Fixed8::from_raw(CHECKSIG_PRICE).checked_mul_raw(uncovered as i64)?)?;

    size_cost.checked_add(verification_cost)
}

/// Runs the expiry and both fee checks, collecting any auto-fix
/// corrections. Signing coverage is checked separately with
/// [`validate_signing`] once witnesses are attached.
pub fn validate_all(
    tx: &mut Transaction,
    current_height: u32,
    gas_consumed: Fixed8,
    config: &NetworkConfig,
    auto_fix: bool,
) -> CoreResult<ValidationReport> {
    let valid_until_block = validate_expiry(tx, current_height, config, auto_fix)?;
    let system_fee = validate_system_fee(tx, gas_consumed, auto_fix)?;
    let min_network_fee = network_fee_estimate(tx, config.fee_per_byte)?;
    let network_fee = validate_network_fee(tx, min_network_fee, auto_fix)?;
    Ok(ValidationReport {
        valid_until_block,
        system_fee,
        network_fee,
    })
}

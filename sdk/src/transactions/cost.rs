//! # Energy Cost
//!
//! The protocol-fixed formula for the maximum energy a transaction may
//! spend:
//!
//! ```text
//! cost = specific_cost + 100 * signature_count + 1 * (header_size + payload_size)
//! ```
//!
//! The signature term is why headers are built at sign time: the count is
//! the signer's to declare, and the node checks that the signed energy
//! figure matches what the signature set implies.

use crate::config::{COST_PER_HEADER_AND_PAYLOAD_BYTE, COST_PER_SIGNATURE};
use crate::transactions::header::AccountTransactionHeader;
use crate::types::energy::EnergyAmount;
use crate::types::payload_size::PayloadSize;

/// Calculates the energy cost of a transaction.
///
/// Pure function of its inputs. All arithmetic is u64; signature counts and
/// sizes are bounded by protocol limits well below anything that could
/// overflow, so an overflow here would be a defect upstream, not a condition
/// to recover from.
pub fn calculate_energy_cost(
    signature_count: u32,
    transaction_specific_cost: EnergyAmount,
    payload_size: PayloadSize,
) -> EnergyAmount {
    let header_and_payload_bytes =
        AccountTransactionHeader::BYTES_LENGTH as u64 + u64::from(payload_size.size());

    EnergyAmount::new(
        transaction_specific_cost.energy()
            + COST_PER_SIGNATURE * u64::from(signature_count)
            + COST_PER_HEADER_AND_PAYLOAD_BYTE * header_and_payload_bytes,
    )
}

//! Walkthrough of the full prepare → sign pipeline for a CCD transfer.
//!
//! Builds a 10 CCD transfer, stages it, signs it with three keys across two
//! credentials, and prints the resulting header bytes, digest, and
//! signature map.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example transfer

use ccdkit::{
    AccountAddress, AccountKeypair, AccountSigner, AccountTransactionPayload, CcdAmount, Expiry,
    SequenceNumber, Transfer,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fresh demo identities. Real senders come from wallet key files.
    let sender = AccountAddress::from_bytes([0x01; 32]);
    let receiver = AccountAddress::from_bytes([0x02; 32]);

    let signer = AccountSigner::new()
        .with_key(0.into(), 0.into(), AccountKeypair::generate())
        .with_key(0.into(), 1.into(), AccountKeypair::generate())
        .with_key(1.into(), 1.into(), AccountKeypair::generate());

    let amount = CcdAmount::from_ccd(10)?;
    println!("transferring {amount} from {sender} to {receiver}");

    let signed = Transfer::new(receiver, amount)
        .prepare(
            sender,
            SequenceNumber::new(1)?,
            Expiry::from_minutes_from_now(30),
        )
        .sign(&signer);

    println!("header bytes ({}): {}", signed.header_bytes().len(), hex::encode(signed.header_bytes()));
    println!("max energy:   {}", signed.header().max_energy_cost());
    println!("digest:       {}", hex::encode(signed.digest()));
    println!("signatures:");
    for (credential, key, signature) in signed.signature().iter() {
        println!("  ({credential},{key}) {signature}");
    }

    Ok(())
}

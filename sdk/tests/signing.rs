//! End-to-end signing tests.
//!
//! These exercise the full prepare → sign pipeline against fixed reference
//! vectors, byte for byte. The register-data case pins the exact signatures
//! a conforming implementation must produce for known keys, so any drift in
//! header layout, energy accounting, digest construction, or signature
//! placement fails loudly here.
//!
//! Each test stands alone; there is no shared state between them.

use ccdkit::{
    AccountAddress, AccountKeypair, AccountSigner, AccountTransactionHeader,
    AccountTransactionPayload, AccountSignature, CcdAmount, Expiry, RegisterData,
    SequenceNumber, Transfer, TransferWithMemo,
};
use ccdkit::transactions::payload::{Memo, RegisteredData};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Well-known sender address used throughout the reference vectors.
const SENDER: &str = "3QuZ47NkUk5icdDSvnfX8HiJzCnSRjzi6KwGEmqgQ7hCXNBTWN";

/// Reference secret keys, indexed by (credential, key).
const SECRET_KEY_00: &str = "1ddce38dd4c6c4b98b9939542612e6a90928c35f8bbbf23aad218e888bb26fda";
const SECRET_KEY_01: &str = "68d7d0f3ae0581fd9b2b1c47daf1c9c7b5b8eddf3e48e4984ee16ca3c7efea32";
const SECRET_KEY_11: &str = "ebaf15cfd4182c98fdb81882591c9e96cf459870ebd1a0dda84288a7f9ab9211";

fn sender() -> AccountAddress {
    SENDER.parse().expect("reference address parses")
}

/// Three keys spread across two credentials: (0,0), (0,1), (1,1).
fn reference_signer() -> AccountSigner {
    AccountSigner::new()
        .with_key(
            0.into(),
            0.into(),
            AccountKeypair::from_hex(SECRET_KEY_00).unwrap(),
        )
        .with_key(
            0.into(),
            1.into(),
            AccountKeypair::from_hex(SECRET_KEY_01).unwrap(),
        )
        .with_key(
            1.into(),
            1.into(),
            AccountKeypair::from_hex(SECRET_KEY_11).unwrap(),
        )
}

fn register_data_payload() -> RegisterData {
    RegisterData::new(RegisteredData::from_hex("feedbeef").unwrap())
}

// ---------------------------------------------------------------------------
// Register-data reference vectors
// ---------------------------------------------------------------------------

#[test]
fn register_data_payload_bytes_match_reference() {
    assert_eq!(
        register_data_payload().to_bytes(),
        vec![21, 0, 4, 254, 237, 190, 239]
    );
}

#[test]
fn register_data_signatures_match_reference() {
    // Reference output of a conforming implementation for this exact
    // transaction. Ed25519 is deterministic, so equality is byte-exact.
    let signed = register_data_payload()
        .prepare(
            sender(),
            SequenceNumber::new(123).unwrap(),
            Expiry::from_seconds(65537),
        )
        .sign(&reference_signer());

    let expected_00 = AccountSignature::from_hex(
        "4e611658eb4d70c35cf35a959b4cf6f4da8dc94da0f3cf900d39ced627253e5a\
         c137af6a01ebae9d4c0131829c656fa5fcebab01282df4b464daae73c467a303",
    )
    .unwrap();
    let expected_01 = AccountSignature::from_hex(
        "7cbdc17785ff3dca2e5d165970e7276603cc3d00ea53a2dc507b14552fea68d6\
         45dc399fe70264f65d3f242ff8a6ed4ea862e7b24f55036592456b079cf27b07",
    )
    .unwrap();
    let expected_11 = AccountSignature::from_hex(
        "c7274b080e606d19656c2c18308463bffda70d16df927c05ae2ed2d8679f39db\
         e1d77bb0bd21cf29b06d62f7485a740e4d2d46baa9e7a494a96da115144d0604",
    )
    .unwrap();

    assert_eq!(signed.signature().count(), 3);
    assert_eq!(signed.signature().get(0.into(), 0.into()), Some(&expected_00));
    assert_eq!(signed.signature().get(0.into(), 1.into()), Some(&expected_01));
    assert_eq!(signed.signature().get(1.into(), 1.into()), Some(&expected_11));
}

#[test]
fn register_data_header_fields() {
    let signed = register_data_payload()
        .prepare(
            sender(),
            SequenceNumber::new(123).unwrap(),
            Expiry::from_seconds(65537),
        )
        .sign(&reference_signer());

    // 300 specific + 100*3 signatures + (60 header + 7 payload) bytes.
    assert_eq!(signed.header().max_energy_cost().energy(), 667);
    assert_eq!(signed.header().payload_size().size(), 7);
    assert_eq!(signed.header().sequence_number().value(), 123);
    assert_eq!(signed.header().expiry().seconds_since_epoch(), 65537);
    assert_eq!(signed.header_bytes().len(), AccountTransactionHeader::BYTES_LENGTH);
}

// ---------------------------------------------------------------------------
// Transfer scenario
// ---------------------------------------------------------------------------

#[test]
fn transfer_of_ten_ccd_with_three_keys() {
    let amount = CcdAmount::from_ccd(10).unwrap();
    assert_eq!(amount.micro_ccd(), 10_000_000);

    let receiver = AccountAddress::from_bytes([0x42; 32]);
    let signer = reference_signer();

    let signed = Transfer::new(receiver, amount)
        .prepare(
            sender(),
            SequenceNumber::new(123).unwrap(),
            Expiry::from_seconds(65537),
        )
        .sign(&signer);

    // Exactly three entries at the registered coordinates.
    assert_eq!(signed.signature().count(), 3);
    let coords: Vec<(u8, u8)> = signed
        .signature()
        .iter()
        .map(|(c, k, _)| (c.index(), k.index()))
        .collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (1, 1)]);

    // Every signature verifies over the same digest.
    let digest = signed.digest();
    for (hex_key, credential, key) in [
        (SECRET_KEY_00, 0u8, 0u8),
        (SECRET_KEY_01, 0, 1),
        (SECRET_KEY_11, 1, 1),
    ] {
        let public_key = AccountKeypair::from_hex(hex_key).unwrap().public_key();
        let signature = signed
            .signature()
            .get(credential.into(), key.into())
            .expect("signature present");
        assert!(
            public_key.verify(&digest, signature),
            "signature at ({credential},{key}) must verify over the digest"
        );
    }

    // The digest input is exactly header bytes ++ payload bytes.
    let mut expected_input = signed.header().to_bytes();
    expected_input.extend_from_slice(&signed.payload().to_bytes());
    assert_eq!(signed.digest_input(), expected_input);

    // Transfer payloads are 41 bytes: tag + receiver + amount.
    assert_eq!(signed.header().payload_size().size(), 41);
    assert_eq!(signed.header().max_energy_cost().energy(), 300 + 300 + 60 + 41);
}

#[test]
fn transfer_with_memo_signs_and_verifies() {
    let signed = TransferWithMemo::new(
        AccountAddress::from_bytes([0x42; 32]),
        Memo::from_hex("feedbeef").unwrap(),
        CcdAmount::from_ccd(1).unwrap(),
    )
    .prepare(
        sender(),
        SequenceNumber::new(1).unwrap(),
        Expiry::from_seconds(65537),
    )
    .sign(&reference_signer());

    // tag + receiver + (2 + 4 memo) + amount = 47 bytes.
    assert_eq!(signed.header().payload_size().size(), 47);

    let digest = signed.digest();
    let pk = AccountKeypair::from_hex(SECRET_KEY_00).unwrap().public_key();
    assert!(pk.verify(&digest, signed.signature().get(0.into(), 0.into()).unwrap()));
}

// ---------------------------------------------------------------------------
// Lifecycle properties
// ---------------------------------------------------------------------------

#[test]
fn signing_twice_is_reproducible() {
    let prepared = register_data_payload().prepare(
        sender(),
        SequenceNumber::new(123).unwrap(),
        Expiry::from_seconds(65537),
    );
    let signer = reference_signer();

    let first = prepared.clone().sign(&signer);
    let second = prepared.sign(&signer);

    assert_eq!(first.header_bytes(), second.header_bytes());
    assert_eq!(first.digest_input(), second.digest_input());
    assert_eq!(first.signature(), second.signature());
}

#[test]
fn zero_key_signer_produces_a_valid_empty_transaction() {
    let signed = register_data_payload()
        .prepare(
            sender(),
            SequenceNumber::new(123).unwrap(),
            Expiry::from_seconds(65537),
        )
        .sign(&AccountSigner::new());

    assert!(signed.signature().is_empty());
    // Energy reflects zero signatures: 300 + 0 + (60 + 7).
    assert_eq!(signed.header().max_energy_cost().energy(), 367);
}

#[test]
fn signed_transaction_survives_json_roundtrip() {
    let signed = register_data_payload()
        .prepare(
            sender(),
            SequenceNumber::new(123).unwrap(),
            Expiry::from_seconds(65537),
        )
        .sign(&reference_signer());

    let json = serde_json::to_string(&signed).unwrap();
    let decoded: ccdkit::SignedAccountTransaction<RegisterData> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, signed);
    assert_eq!(decoded.digest(), signed.digest());
}

#[test]
fn different_signer_count_changes_only_the_energy_field() {
    let prepared = register_data_payload().prepare(
        sender(),
        SequenceNumber::new(123).unwrap(),
        Expiry::from_seconds(65537),
    );

    let one = prepared.clone().sign(
        &AccountSigner::new().with_key(
            0.into(),
            0.into(),
            AccountKeypair::from_hex(SECRET_KEY_00).unwrap(),
        ),
    );
    let three = prepared.sign(&reference_signer());

    let one_bytes = one.header_bytes();
    let three_bytes = three.header_bytes();

    // Sender and sequence number agree...
    assert_eq!(one_bytes[..40], three_bytes[..40]);
    // ...the energy field differs...
    assert_ne!(one_bytes[40..48], three_bytes[40..48]);
    // ...and payload size and expiry agree again.
    assert_eq!(one_bytes[48..], three_bytes[48..]);
}

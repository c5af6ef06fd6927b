//! # End-to-End Flows
//!
//! ## Flows Tested:
//!
//! 1. **Key lifecycle**: generate → PEM export → facade sign/verify
//! 2. **Content identifiers**: canonical hash → `sign_hash` → `verify` over fields
//! 3. **Key encodings**: PEM, hex DER and Base64 DER are interchangeable
//! 4. **ECIES**: public-only engine encrypts, private engine decrypts
//! 5. **Port usage**: consumers holding `dyn SignatureApi`

#[cfg(test)]
mod tests {
    use norsh_crypto::{
        bytes_to_base64, bytes_to_hex, decode_flexible, fields, signature, CanonicalMessage,
        CryptographyEngine, Field, SignatureApi, SignatureService,
    };
    use proptest::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// A freshly generated key pair as (private PEM, public PEM)
    fn pem_pair() -> (String, String) {
        let engine = CryptographyEngine::generate().unwrap();
        (
            engine.export_private_pem().unwrap().to_string(),
            engine.export_public_pem().unwrap(),
        )
    }

    /// A transfer record as the ledger would sign it
    fn transfer(from: &str, to: &str, amount: u64, nonce: u64) -> Vec<Field> {
        fields![from, to, amount, nonce].to_vec()
    }

    // =============================================================================
    // KEY LIFECYCLE
    // =============================================================================

    #[test]
    fn test_generate_export_sign_verify() {
        let (private_pem, public_pem) = pem_pair();
        let record = transfer("alice", "bob", 250, 7);

        let sig = signature::sign(&private_pem, &record).unwrap();

        assert!(signature::verify(&public_pem, &sig, &record));
        assert!(!signature::verify(
            &public_pem,
            &sig,
            &transfer("alice", "bob", 251, 7)
        ));
    }

    #[test]
    fn test_reimported_keys_keep_working() {
        let original = CryptographyEngine::generate().unwrap();
        let private_der = original.private_key_der().unwrap();
        let public_der = original.public_key_der().unwrap();

        let restored = CryptographyEngine::from_keys(
            Some(private_der.as_slice()),
            Some(public_der.as_slice()),
        )
        .unwrap();

        let sig = restored.sign(b"restored").unwrap();
        assert!(original.verify(b"restored", &sig));
        assert_eq!(
            restored.export_public_pem().unwrap(),
            original.export_public_pem().unwrap()
        );
    }

    // =============================================================================
    // CONTENT IDENTIFIERS
    // =============================================================================

    #[test]
    fn test_hash_as_content_id() {
        let (private_pem, public_pem) = pem_pair();
        let record = transfer("carol", "dave", 10, 1);
        let content_id = CanonicalMessage::new(&record).digest_hex();

        let sig = signature::sign_hash(&private_pem, &content_id).unwrap();

        assert!(signature::verify_hash(&public_pem, &sig, &content_id));
        assert!(signature::verify(&public_pem, &sig, &record));
    }

    #[test]
    fn test_field_boundaries_are_not_signed() {
        let (private_pem, public_pem) = pem_pair();

        let sig = signature::sign(&private_pem, &fields!["ab", "c"]).unwrap();

        // Same concatenation, same digest
        assert!(signature::verify(&public_pem, &sig, &fields!["a", "bc"]));
        assert!(signature::verify(&public_pem, &sig, &fields!["abc", Field::Null]));
    }

    // =============================================================================
    // KEY ENCODINGS
    // =============================================================================

    #[test]
    fn test_key_encodings_are_interchangeable() {
        let engine = CryptographyEngine::generate().unwrap();
        let private_der = engine.private_key_der().unwrap();
        let public_der = engine.public_key_der().unwrap();

        let private_forms = [
            engine.export_private_pem().unwrap().to_string(),
            bytes_to_hex(&private_der),
            bytes_to_base64(&private_der),
        ];
        let public_forms = [
            engine.export_public_pem().unwrap(),
            bytes_to_hex(&public_der),
            bytes_to_base64(&public_der),
        ];

        for private_key in &private_forms {
            let sig = signature::sign(private_key, &fields!["form"]).unwrap();
            for public_key in &public_forms {
                assert!(signature::verify(public_key, &sig, &fields!["form"]));
            }
        }
    }

    #[test]
    fn test_pem_payload_decodes_to_der() {
        let engine = CryptographyEngine::generate().unwrap();
        let pem = engine.export_public_pem().unwrap();

        assert_eq!(decode_flexible(&pem).unwrap(), engine.public_key_der().unwrap());
    }

    // =============================================================================
    // ECIES
    // =============================================================================

    #[test]
    fn test_encrypt_to_public_key_holder() {
        let recipient = CryptographyEngine::generate().unwrap();
        let public_only =
            CryptographyEngine::from_public_key(&recipient.public_key_der().unwrap()).unwrap();

        let ciphertext = public_only.encrypt(b"wallet backup").unwrap();

        assert!(public_only.decrypt(&ciphertext).is_err());
        assert_eq!(recipient.decrypt(&ciphertext).unwrap(), b"wallet backup");
    }

    // =============================================================================
    // PORT USAGE
    // =============================================================================

    struct Ledger {
        signatures: Box<dyn SignatureApi>,
    }

    impl Ledger {
        fn accept(&self, public_key: &str, sig: &str, record: &[Field]) -> bool {
            self.signatures.verify(public_key, sig, record)
        }
    }

    #[test]
    fn test_consumer_through_port() {
        let ledger = Ledger {
            signatures: Box::new(SignatureService::new()),
        };
        let (private_pem, public_pem) = pem_pair();
        let record = transfer("erin", "frank", 5, 2);

        let sig = ledger.signatures.sign(&private_pem, &record).unwrap();

        assert!(ledger.accept(&public_pem, &sig, &record));
        assert!(!ledger.accept(&public_pem, "", &record));
        assert!(!ledger.accept("", &sig, &record));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_digest_signs_and_verifies(digest in prop::array::uniform32(any::<u8>())) {
            let (private_pem, public_pem) = pem_pair();
            let hash = hex::encode(digest);

            let sig = signature::sign_hash(&private_pem, &hash).unwrap();
            prop_assert!(signature::verify_hash(&public_pem, &sig, &hash));
        }
    }
}

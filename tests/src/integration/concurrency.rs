//! # Concurrency
//!
//! Engines are immutable and `Send + Sync`; one instance serves many threads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use norsh_crypto::{CryptographyEngine, SignatureApi, SignatureService};

    const THREADS: usize = 8;
    const ROUNDS: usize = 16;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_sync() {
        assert_send_sync::<CryptographyEngine>();
        assert_send_sync::<SignatureService>();
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let engine = Arc::new(CryptographyEngine::generate().unwrap());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for round in 0..ROUNDS {
                        let message = format!("thread-{t}-round-{round}");
                        let sig = engine.sign(message.as_bytes()).unwrap();
                        assert!(engine.verify(message.as_bytes(), &sig));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_shared_service_across_threads() {
        let service: Arc<dyn SignatureApi> = Arc::new(SignatureService::new());
        let engine = CryptographyEngine::generate().unwrap();
        let private_pem = Arc::new(engine.export_private_pem().unwrap().to_string());
        let public_pem = Arc::new(engine.export_public_pem().unwrap());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let service = Arc::clone(&service);
                let private_pem = Arc::clone(&private_pem);
                let public_pem = Arc::clone(&public_pem);
                thread::spawn(move || {
                    let record = norsh_crypto::fields!["worker", t as u64];
                    let sig = service.sign(&private_pem, &record).unwrap();
                    service.verify(&public_pem, &sig, &record)
                })
            })
            .collect();

        assert!(handles.into_iter().all(|h| h.join().unwrap()));
    }
}

//! Two handles on the same file see each other's writes.

use std::sync::Arc;
use std::thread;

use shopfloor_core::{CredentialStore, Credentials, SessionToken};
use shopfloor_store::FileCredentialStore;
use tempfile::TempDir;

#[test]
fn concurrent_writers_do_not_lose_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");

    let a = Arc::new(FileCredentialStore::new(&path));
    let b = Arc::new(FileCredentialStore::new(&path));

    let writer_a = {
        let a = Arc::clone(&a);
        thread::spawn(move || {
            for i in 0..20 {
                a.save_token(&SessionToken::new(format!("T{}", i))).unwrap();
            }
        })
    };
    let writer_b = {
        let b = Arc::clone(&b);
        thread::spawn(move || {
            for _ in 0..20 {
                b.save_credentials(&Credentials::new("worker@example.com", "pw"))
                    .unwrap();
            }
        })
    };
    writer_a.join().unwrap();
    writer_b.join().unwrap();

    assert_eq!(b.token().unwrap(), Some(SessionToken::new("T19")));
    assert_eq!(
        a.credentials().unwrap(),
        Some(Credentials::new("worker@example.com", "pw"))
    );
}

#[test]
fn logout_on_one_handle_is_seen_by_another() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    let a = FileCredentialStore::new(&path);
    let b = FileCredentialStore::new(&path);

    a.save_credentials(&Credentials::new("x", "y")).unwrap();
    assert!(b.is_registered().unwrap());

    b.clear().unwrap();
    assert!(!a.is_registered().unwrap());
}

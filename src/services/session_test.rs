use super::*;
use crate::state::test_helpers;

// =============================================================================
// bytes_to_hex / tokens
// =============================================================================

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn hash_token_is_stable_and_not_identity() {
    let token = "abc";
    assert_eq!(hash_token(token), hash_token(token));
    assert_ne!(hash_token(token), token);
    assert_eq!(hash_token(token), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn session_admin_flag_follows_role() {
    assert!(test_helpers::session(Role::Admin).is_admin());
    assert!(!test_helpers::session(Role::User).is_admin());
}

#[test]
fn session_user_serializes_flat() {
    let session = test_helpers::session(Role::Admin);
    let json = serde_json::to_value(SessionUser::from(&session)).unwrap();
    assert_eq!(json["email"], session.identity.email.as_str());
    assert_eq!(json["role"], "admin");
    assert_eq!(json["is_admin"], true);
    assert!(json.get("access_token").is_none());
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn store_insert_then_get() {
    let store = SessionStore::new();
    let token = store.insert(test_helpers::session(Role::User)).await;
    let found = store.get(&token).await.unwrap();
    assert_eq!(found.role, Role::User);
    assert!(store.get("unknown-token").await.is_none());
}

#[tokio::test]
async fn store_keys_by_digest_not_raw_token() {
    let store = SessionStore::new();
    let token = store.insert(test_helpers::session(Role::User)).await;
    let sessions = store.inner.read().await;
    assert!(!sessions.contains_key(&token));
    assert!(sessions.contains_key(&hash_token(&token)));
}

#[tokio::test]
async fn store_expired_session_reads_absent_and_is_removed() {
    let store = SessionStore::new();
    let mut session = test_helpers::session(Role::Admin);
    session.expires_at = Instant::now();
    let token = store.insert(session).await;
    assert!(store.get(&token).await.is_none());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn store_remove_returns_session_once() {
    let store = SessionStore::new();
    let token = store.insert(test_helpers::session(Role::User)).await;
    assert!(store.remove(&token).await.is_some());
    assert!(store.remove(&token).await.is_none());
    assert!(store.get(&token).await.is_none());
}

#[tokio::test]
async fn sweeper_purges_expired_sessions_in_background() {
    let store = SessionStore::new();
    let mut stale = test_helpers::session(Role::User);
    stale.expires_at = Instant::now();
    store.insert(stale).await;
    let live = store.insert(test_helpers::session(Role::User)).await;

    let sweeper = spawn_session_sweeper(store.clone(), Duration::from_millis(10));
    for _ in 0..100 {
        if store.len().await == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    sweeper.abort();

    assert_eq!(store.len().await, 1);
    assert!(store.get(&live).await.is_some());
}

#[tokio::test]
async fn store_purge_expired_keeps_live_sessions() {
    let store = SessionStore::new();
    let mut stale = test_helpers::session(Role::User);
    stale.expires_at = Instant::now();
    store.insert(stale).await;
    let live = store.insert(test_helpers::session(Role::User)).await;

    assert_eq!(store.purge_expired().await, 1);
    assert_eq!(store.len().await, 1);
    assert!(store.get(&live).await.is_some());
}

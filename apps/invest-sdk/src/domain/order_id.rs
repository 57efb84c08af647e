//! Client-side idempotency keys for order requests.
//!
//! The server treats two order requests with the same key as one order, so a
//! retried `PostOrder` never opens a second position.

/// Generate a fresh idempotency key (UUID v4, hyphenated).
#[must_use]
pub fn create_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Return `order_id` unchanged, or a fresh key if it is empty.
#[must_use]
pub fn ensure_order_id(order_id: String) -> String {
    if order_id.is_empty() {
        create_uid()
    } else {
        order_id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ten_thousand_keys_never_collide() {
        let keys: HashSet<String> = (0..10_000).map(|_| create_uid()).collect();
        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn key_is_hyphenated_uuid() {
        let key = create_uid();
        assert_eq!(key.len(), 36);
        assert!(uuid::Uuid::parse_str(&key).is_ok());
    }

    #[test]
    fn explicit_order_id_is_kept() {
        assert_eq!(ensure_order_id("my-order".to_string()), "my-order");
        assert_eq!(ensure_order_id(String::new()).len(), 36);
    }
}

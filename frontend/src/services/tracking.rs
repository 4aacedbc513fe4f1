//! Tracking code generation.
//!
//! Citizens retrieve their submission with a short public code instead of
//! an account. Codes are a truncated UUIDv4: short enough to write down,
//! unique enough for a moderate-traffic civic system. There is no
//! server-side uniqueness check; the accepted collision rate is a policy
//! knob (`TRACKING_CODE_LEN`), not a constant of the algorithm.

use uuid::Uuid;

/// Generate a tracking code of `len` characters (clamped to the 32
/// hex characters a UUID provides).
pub fn generate_tracking_code(len: usize) -> String {
    let id = Uuid::new_v4().simple().to_string();
    let n = len.min(id.len());
    id[..n].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TRACKING_CODE_LEN;

    #[test]
    fn test_code_has_configured_length() {
        let code = generate_tracking_code(TRACKING_CODE_LEN);
        assert_eq!(code.len(), 6);
        assert_eq!(generate_tracking_code(10).len(), 10);
    }

    #[test]
    fn test_code_is_lowercase_hex() {
        let code = generate_tracking_code(TRACKING_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(code, code.to_lowercase());
    }

    #[test]
    fn test_length_is_clamped_to_uuid_width() {
        assert_eq!(generate_tracking_code(64).len(), 32);
    }

    #[test]
    fn test_consecutive_codes_differ() {
        // Not a uniqueness guarantee, just a sanity check that the
        // generator is actually random.
        assert_ne!(generate_tracking_code(32), generate_tracking_code(32));
    }
}

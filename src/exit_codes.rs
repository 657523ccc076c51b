//! Exit code constants for the palaver CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad input)
//! - 2: Configuration error
//! - 3: Persistence failure (snapshot read/write)
//! - 4: Lock contract violation (malformed resource, broken invariant)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unusable input.
pub const USER_ERROR: i32 = 1;

/// Configuration could not be read, parsed, or validated.
pub const CONFIG_ERROR: i32 = 2;

/// Snapshot or export file could not be read or written.
pub const PERSISTENCE_FAILURE: i32 = 3;

/// The lock manager detected a contract violation.
pub const LOCK_CONTRACT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_ERROR,
            PERSISTENCE_FAILURE,
            LOCK_CONTRACT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}

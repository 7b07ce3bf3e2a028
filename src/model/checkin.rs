//! Daily check-in records.

use serde::{Deserialize, Serialize};

/// A daily energy/focus check-in.
///
/// `date` and `timestamp` are derived at log time (today's day stamp
/// and the full instant), never supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkin {
    /// Store-assigned, `checkin-…`.
    pub id: String,

    /// Day stamp, `YYYY-MM-DD`.
    pub date: String,

    /// RFC 3339 instant of the check-in.
    pub timestamp: String,

    /// Energy level, 1-10.
    pub energy: u8,

    /// Focus level, 1-10.
    pub focus: u8,
}

/// Caller input for a check-in.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinDraft {
    pub energy: u8,
    pub focus: u8,
}

impl CheckinDraft {
    /// Validate the 1-10 scales.
    ///
    /// # Errors
    ///
    /// Returns a message naming the out-of-range field.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=10).contains(&self.energy) {
            return Err(format!("energy must be 1-10, got {}", self.energy));
        }
        if !(1..=10).contains(&self.focus) {
            return Err(format!("focus must be 1-10, got {}", self.focus));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(CheckinDraft { energy: 1, focus: 10 }.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(CheckinDraft { energy: 0, focus: 5 }.validate().is_err());
        assert!(CheckinDraft { energy: 5, focus: 11 }.validate().is_err());
    }
}

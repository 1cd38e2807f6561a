use crate::error::{Result, ToolError};

/// Traveler counts subject to upstream seating rules
///
/// The upstream rejects these combinations anyway; validating locally avoids
/// spending a network round trip on a request that is known to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerCounts {
    pub adults: u32,
    pub children: Option<u32>,
    pub infants: Option<u32>,
}

impl TravelerCounts {
    pub fn new(adults: u32, children: Option<u32>, infants: Option<u32>) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Adults only, the hotel-search case
    pub fn adults_only(adults: u32) -> Self {
        Self::new(adults, None, None)
    }

    /// Check the seating rules in order; the first violated rule wins.
    ///
    /// The seated-travelers rule subsumes the upper bound on adults: with
    /// `children >= 0`, any `adults > 9` already exceeds the seat limit.
    pub fn validate(&self) -> Result<()> {
        if self.adults < 1 {
            return Err(ToolError::Validation(
                "Number of adults must be at least 1".to_string(),
            ));
        }

        let children = self.children.unwrap_or(0);
        if self.adults + children > 9 {
            return Err(ToolError::Validation(
                "Total number of seated travelers (adults + children) cannot exceed 9".to_string(),
            ));
        }

        if let Some(infants) = self.infants {
            if infants > self.adults {
                return Err(ToolError::Validation(
                    "Number of infants cannot exceed the number of adults".to_string(),
                ));
            }
        }

        Ok(())
    }
}

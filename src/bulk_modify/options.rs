use std::num::{NonZeroU32, NonZeroUsize};
use serde::Deserialize;
use crate::domain::Coupon;
use super::error::ModifyError;

/// Coupons updated per unit of work unless the operator says otherwise.
pub const DEFAULT_CHUNK_SIZE: i64 = 25;

/// Raw operator input, exactly as submitted.
///
/// Counts are signed so that non-positive submissions can be rejected with a
/// validation error instead of failing to parse. Missing fields take the
/// defaults of a fresh form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModifierOptions {
    /// Chunk size.
    pub modify_limit: i64,
    /// 0 = unlimited, 1 = limited to `usage_limit`.
    pub limit: u8,
    pub usage_limit: i64,
    /// 0 = unlimited, 1 = limited to `usage_limit_customer`.
    pub limit_customer: u8,
    pub usage_limit_customer: i64,
    pub promotion_id: Option<String>,
}

impl Default for ModifierOptions {
    fn default() -> Self {
        Self {
            modify_limit: DEFAULT_CHUNK_SIZE,
            limit: 0,
            usage_limit: 1,
            limit_customer: 0,
            usage_limit_customer: 1,
            promotion_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitMode {
    Unlimited,
    Limited(NonZeroU32),
}

impl LimitMode {
    /// Resolves a radio choice and its count. The count is only checked when
    /// the choice is "limited".
    pub fn from_choice(field: &str, choice: u8, count: i64) -> Result<Self, ModifyError> {
        match choice {
            0 => Ok(LimitMode::Unlimited),
            1 => u32::try_from(count)
                .ok()
                .and_then(NonZeroU32::new)
                .map(LimitMode::Limited)
                .ok_or_else(|| ModifyError::Validation(format!(
                    "{} must be a positive integer, got {}", field, count
                ))),
            other => Err(ModifyError::Validation(format!(
                "{} mode must be 0 (unlimited) or 1 (limited), got {}", field, other
            ))),
        }
    }

    /// Stored field value: 0 means unlimited.
    pub fn value(self) -> u32 {
        match self {
            LimitMode::Unlimited => 0,
            LimitMode::Limited(count) => count.get(),
        }
    }
}

/// A validated submission. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    promotion_id: String,
    usage_limit: LimitMode,
    customer_usage_limit: LimitMode,
    chunk_size: NonZeroUsize,
}

impl UpdateRequest {
    pub fn new(
        promotion_id: impl Into<String>,
        usage_limit: LimitMode,
        customer_usage_limit: LimitMode,
        chunk_size: NonZeroUsize,
    ) -> Self {
        Self {
            promotion_id: promotion_id.into(),
            usage_limit,
            customer_usage_limit,
            chunk_size,
        }
    }

    pub fn promotion_id(&self) -> &str {
        &self.promotion_id
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit.value()
    }

    pub fn customer_usage_limit(&self) -> u32 {
        self.customer_usage_limit.value()
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    pub fn apply(&self, coupon: &mut Coupon) {
        coupon.set_usage_limit(self.usage_limit());
        coupon.set_customer_usage_limit(self.customer_usage_limit());
    }
}

impl ModifierOptions {
    pub fn resolve(&self) -> Result<UpdateRequest, ModifyError> {
        let promotion_id = self
            .promotion_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ModifyError::Validation("A promotion must be selected".to_string()))?;

        let chunk_size = usize::try_from(self.modify_limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| ModifyError::Validation(format!(
                "modify_limit must be a positive integer, got {}", self.modify_limit
            )))?;

        let usage_limit = LimitMode::from_choice("usage_limit", self.limit, self.usage_limit)?;
        let customer_usage_limit =
            LimitMode::from_choice("usage_limit_customer", self.limit_customer, self.usage_limit_customer)?;

        Ok(UpdateRequest::new(promotion_id, usage_limit, customer_usage_limit, chunk_size))
    }
}

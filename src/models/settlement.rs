use serde::{Deserialize, Serialize};

use super::order::MemberId;

/// Monthly settlement row in a seller's yearly statement (admin view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementForAdmin {
    pub settlement_year: i32,
    pub settlement_month: u32,
    pub total_amount: i64,
    pub commission: i64,
    pub settlement_amount: i64,
}

/// A seller's own settlement for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementForSeller {
    pub settlement_year: i32,
    pub settlement_month: u32,
    pub total_amount: i64,
    pub commission: i64,
    pub settlement_amount: i64,
}

/// Seller sales ranking entry for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRankMonth {
    pub seller_id: MemberId,
    pub seller_name: String,
    pub total_price: i64,
}

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use sharito_core::domain::entities::order::OrderId;

/// Format of the `from` and `to` query parameters, interpreted as UTC
pub const RENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `?from=&to=` of a rent request
#[derive(Debug, Clone, Deserialize)]
pub struct RentQuery {
    pub from: String,
    pub to: String,
}

impl RentQuery {
    /// Parse both bounds; the error names the parameter that failed
    pub fn window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), &'static str> {
        let from = parse_rent_time(&self.from).ok_or("from")?;
        let to = parse_rent_time(&self.to).ok_or("to")?;
        Ok((from, to))
    }
}

fn parse_rent_time(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), RENT_TIME_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub mine: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub order_id: OrderId,
}

// Caller-facing JSON shape of a delivery result

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::models::{Delivery, Time};

pub const INFEASIBLE_MESSAGE: &str = "Delivery impossible for the current warehouse stocks.";
pub const NO_SUCH_ORIGIN_MESSAGE: &str = "Start vertex does not exist.";

/// `{"delivery_time": t}` or `{"error": message}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeliveryResponse {
    Delivered {
        #[serde(serialize_with = "serialize_time")]
        delivery_time: Time,
    },
    Error {
        error: String,
    },
}

impl DeliveryResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Delivered(delivery_time) => DeliveryResponse::Delivered { delivery_time },
            Delivery::Infeasible => DeliveryResponse::Error {
                error: INFEASIBLE_MESSAGE.to_string(),
            },
            Delivery::NoSuchOrigin => DeliveryResponse::Error {
                error: NO_SUCH_ORIGIN_MESSAGE.to_string(),
            },
        }
    }
}

// Whole numbers are written as JSON integers
fn serialize_time<S: Serializer>(time: &Time, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if time.fract() == 0.0 && *time >= 0.0 && *time < u64::MAX as f64 {
        serializer.serialize_u64(*time as u64)
    } else {
        serializer.serialize_f64(*time)
    }
}

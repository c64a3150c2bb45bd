//! Customer model

use serde::{Deserialize, Serialize};

/// Customer entity (the counter-party an estimate is issued to)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
}

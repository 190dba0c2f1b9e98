use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A demo order as stored in the orders JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub company_name: String,
    pub customer_id: String,
    pub order_date: String,
    #[serde(default)]
    pub ship_city: String,
    #[serde(default)]
    pub freight: f64,
}

/// Read orders from a JSON array file, sorted by order id.
pub fn load_orders(path: &Path) -> Result<Vec<Order>, OrdersError> {
    let content = std::fs::read_to_string(path).map_err(|e| OrdersError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut orders: Vec<Order> =
        serde_json::from_str(&content).map_err(|e| OrdersError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    orders.sort_by_key(|o| o.order_id);
    Ok(orders)
}

/// Orders whose company name contains `company_name`, ignoring case.
/// A blank filter matches everything.
pub fn search(orders: &[Order], company_name: &str) -> Vec<Order> {
    let needle = company_name.trim().to_lowercase();
    orders
        .iter()
        .filter(|o| needle.is_empty() || o.company_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum OrdersError {
    #[error("failed to read orders file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse orders file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

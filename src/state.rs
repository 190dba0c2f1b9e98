use std::sync::Arc;

use crate::config::Config;
use crate::orders::Order;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tera: Arc<tera::Tera>,
    pub orders: Arc<Vec<Order>>,
}

impl AppState {
    pub fn new(config: Config, tera: tera::Tera, orders: Vec<Order>) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            orders: Arc::new(orders),
        }
    }
}

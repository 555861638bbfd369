use std::sync::Arc;

use actix_web::web::Data;

use crate::entities::dish::Dish;
use crate::entities::order::Order;
use crate::repositories::ResourceStore;

/// Per-process application state: one store per resource collection,
/// injected into handlers rather than reached for as module globals.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn ResourceStore<Dish>>,
    pub orders: Arc<dyn ResourceStore<Order>>,
}

impl AppState {
    pub fn new<D, O>(dishes: D, orders: O) -> Data<Self>
    where
        D: ResourceStore<Dish> + 'static,
        O: ResourceStore<Order> + 'static,
    {
        Data::new(Self {
            dishes: Arc::new(dishes),
            orders: Arc::new(orders),
        })
    }
}

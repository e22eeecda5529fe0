use std::sync::Arc;

use crate::{backend::BackendClient, cart::CartStore};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub carts: Arc<CartStore>,
}

use std::sync::Arc;

use foodcheck_core::application::FoodCheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodCheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodCheckService) -> Self {
        Self { args, service }
    }
}

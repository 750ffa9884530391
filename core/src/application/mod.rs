use crate::domain::common::services::Service;

/// Concrete service consumed by the API crate.
pub type FoodCheckService = Service;

pub fn create_service() -> FoodCheckService {
    Service::new()
}

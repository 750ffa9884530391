/// Entry point for all domain services. Stateless: the classifier holds no
/// repositories or connections, so cloning is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    pub fn new() -> Self {
        Self
    }
}

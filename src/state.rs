use crate::{abstract_trait::DynJwtService, di::DependenciesInject};

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(jwt_config: DynJwtService, di_container: DependenciesInject) -> Self {
        Self {
            jwt_config,
            di_container,
        }
    }
}

use serde::Serialize;

use crate::services::auth::Claims;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: Option<f64>,
    pub level: Option<f64>,
    pub claims: Claims,
}

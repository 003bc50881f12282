use axum::{extract::Path, http::StatusCode, Json};
use contracts::enums;
use contracts::shared::catalogue::EnumInfo;

use crate::shared::gateway::{ApiError, GatewayError};

/// GET /api/enums
pub async fn list_all() -> Json<Vec<EnumInfo>> {
    Json(enums::all().iter().map(|e| EnumInfo::from(*e)).collect())
}

/// GET /api/enums/:name
pub async fn get_by_name(
    Path(name): Path<String>,
) -> Result<Json<EnumInfo>, (StatusCode, Json<ApiError>)> {
    let enumeration = enums::lookup(&name).map_err(GatewayError::from)?;
    Ok(Json(EnumInfo::from(enumeration)))
}

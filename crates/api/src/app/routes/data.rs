use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use loadsim_core::{CollectionStore, Snapshot};

use crate::app::dto::{DataResponse, ReplaceRequest, ValueQuery};
use crate::app::errors::{ApiError, parse_kind};
use crate::context::CallerContext;

type DataResult<T> = Result<Json<DataResponse<T>>, ApiError>;

fn respond<T>(caller: &CallerContext, data: T) -> Json<DataResponse<T>> {
    Json(DataResponse {
        id: caller.id(),
        data,
    })
}

pub async fn get_all(
    Extension(store): Extension<Arc<CollectionStore>>,
    Extension(caller): Extension<CallerContext>,
) -> Json<DataResponse<Snapshot>> {
    respond(&caller, store.snapshot())
}

pub async fn get_kind(
    Extension(store): Extension<Arc<CollectionStore>>,
    Extension(caller): Extension<CallerContext>,
    Path(kind): Path<String>,
) -> DataResult<Vec<i64>> {
    let kind = parse_kind(&kind)?;
    Ok(respond(&caller, store.get(kind)))
}

pub async fn create(
    Extension(store): Extension<Arc<CollectionStore>>,
    Extension(caller): Extension<CallerContext>,
    Path(kind): Path<String>,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<DataResponse<Vec<i64>>>), ApiError> {
    let kind = parse_kind(&kind)?;
    let Query(q) = query?;

    let items = store.append(kind, q.value);
    Ok((StatusCode::CREATED, respond(&caller, items)))
}

pub async fn replace(
    Extension(store): Extension<Arc<CollectionStore>>,
    Extension(caller): Extension<CallerContext>,
    Path(kind): Path<String>,
    body: Result<Json<ReplaceRequest>, JsonRejection>,
) -> DataResult<Vec<i64>> {
    let kind = parse_kind(&kind)?;
    let Json(req) = body?;

    let items = store.replace_first(kind, req.old, req.new).inspect_err(|_| {
        tracing::debug!(%kind, old = req.old, "replace target not found");
    })?;
    Ok(respond(&caller, items))
}

pub async fn remove(
    Extension(store): Extension<Arc<CollectionStore>>,
    Extension(caller): Extension<CallerContext>,
    Path(kind): Path<String>,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> DataResult<Vec<i64>> {
    let kind = parse_kind(&kind)?;
    let Query(q) = query?;

    let items = store.remove_first(kind, q.value).inspect_err(|_| {
        tracing::debug!(%kind, value = q.value, "delete target not found");
    })?;
    Ok(respond(&caller, items))
}

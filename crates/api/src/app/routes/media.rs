//! Boundary handler for the parse endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, FromRequest, Multipart, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

use captiond_media::ParseRequest;

use crate::app::services::AppServices;
use crate::app::{dto, errors::WireError};

pub async fn parse(
    Extension(services): Extension<Arc<AppServices>>,
    req: Request,
) -> axum::response::Response {
    let request = match decode_parse_request(req).await {
        Ok(request) => request,
        Err(response) => return response,
    };

    match services.media.parse(request).await {
        Ok(segments) => (StatusCode::OK, Json(dto::segments_to_json(&segments))).into_response(),
        Err(err) => WireError::from(&err).into_response(),
    }
}

/// Transport-level body decoding: JSON `{url, language}` or a multipart
/// upload carrying a `file` part and a `language` field. Schema errors are
/// the extractor rejections, not domain errors.
async fn decode_parse_request(req: Request) -> Result<ParseRequest, axum::response::Response> {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if !is_multipart {
        let Json(body) = Json::<dto::ParseUrlRequest>::from_request(req, &())
            .await
            .map_err(|rejection| rejection.into_response())?;
        return Ok(ParseRequest::Url {
            url: body.url,
            language: body.language,
        });
    }

    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|rejection| rejection.into_response())?;

    let mut content: Option<Vec<u8>> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| err.into_response())?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field.bytes().await.map_err(|err| err.into_response())?;
                content = Some(bytes.to_vec());
            }
            Some("language") => {
                language = Some(field.text().await.map_err(|err| err.into_response())?);
            }
            _ => {}
        }
    }

    match (content, language) {
        (Some(content), Some(language)) => Ok(ParseRequest::Content { content, language }),
        // A form without media or language carries nothing to parse.
        _ => Err(WireError::MediaEmpty.into_response()),
    }
}

// Request extractors for the caller's identity and paging parameters.
//
// Callers are authenticated upstream; the gateway trusts the `memberId` and
// `memberRole` headers and only authorizes.
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::error::ApiError;
use crate::config::PagingConfig;
use crate::models::{MemberId, PageParams, PageRequest, Sort};
use crate::security::{MemberRole, UnknownRole};

pub const MEMBER_ID_HEADER: &str = "memberId";
pub const MEMBER_ROLE_HEADER: &str = "memberRole";

fn header_value<'a>(req: &'a HttpRequest, name: &'static str) -> Result<&'a str, ApiError> {
    let value = req
        .headers()
        .get(name)
        .ok_or(ApiError::MissingHeader(name))?;

    value.to_str().map_err(|e| ApiError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}

fn member_role(req: &HttpRequest) -> Result<MemberRole, ApiError> {
    header_value(req, MEMBER_ROLE_HEADER)?
        .parse()
        .map_err(|e: UnknownRole| ApiError::InvalidHeader {
            name: MEMBER_ROLE_HEADER,
            reason: e.to_string(),
        })
}

fn member_id(req: &HttpRequest) -> Result<MemberId, ApiError> {
    header_value(req, MEMBER_ID_HEADER)?
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ApiError::InvalidHeader {
            name: MEMBER_ID_HEADER,
            reason: e.to_string(),
        })
}

/// Role of the caller, for endpoints that do not need the member id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRoleHeader(pub MemberRole);

impl FromRequest for MemberRoleHeader {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(member_role(req).map(MemberRoleHeader))
    }
}

/// Id and role of the calling member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub role: MemberRole,
}

impl FromRequest for Member {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(member_id(req).and_then(|id| member_role(req).map(|role| Member { id, role })))
    }
}

/// Page request built from `page`, `size` and `sort` query parameters.
///
/// Falls back to the first page, the configured default size and
/// `orderDate` descending. Sizes above the configured maximum are clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paging(pub PageRequest);

impl Paging {
    pub fn resolve(params: PageParams, config: &PagingConfig) -> Result<Self, ApiError> {
        let size = match params.size {
            Some(size) if size > 0 => size.min(config.max_size),
            _ => config.default_size,
        };

        let sort = match params.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<Sort>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            _ => Sort::default(),
        };

        Ok(Paging(PageRequest::new(params.page.unwrap_or(0), size, sort)))
    }

    pub fn into_inner(self) -> PageRequest {
        self.0
    }
}

impl FromRequest for Paging {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = req
            .app_data::<web::Data<PagingConfig>>()
            .map(|data| data.get_ref().clone())
            .unwrap_or_default();

        let result = web::Query::<PageParams>::from_query(req.query_string())
            .map_err(|e| ApiError::BadRequest(format!("malformed paging parameters: {}", e)))
            .and_then(|params| Paging::resolve(params.into_inner(), &config));

        ready(result)
    }
}

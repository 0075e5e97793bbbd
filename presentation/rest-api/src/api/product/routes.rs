use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::service::ProductService;
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, DeletedResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

/// Product controller.
///
/// Relays each request to the injected `ProductService` and relays the
/// result back; it never builds or mutates products itself.
pub struct ProductApi {
    service: Arc<dyn ProductService>,
}

impl ProductApi {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.service.create(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns every product, newest first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn find_all(&self) -> FindAllProductsResponse {
        match self.service.find_all().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                FindAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FindAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn find_one(&self, id: Path<String>) -> FindOneProductResponse {
        match self.service.find_one(&ProductId::new(id.0)).await {
            Ok(product) => FindOneProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FindOneProductResponse::NotFound(json),
                    _ => FindOneProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies a partial update; omitted fields are left unchanged.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        match self
            .service
            .update(&ProductId::new(id.0), body.0.into())
            .await
        {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Returns `{ "deleted": true }` once the product is gone.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn remove(&self, id: Path<String>) -> RemoveProductResponse {
        match self.service.remove(&ProductId::new(id.0)).await {
            Ok(outcome) => RemoveProductResponse::Ok(Json(DeletedResponse::from(outcome))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindOneProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<DeletedResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

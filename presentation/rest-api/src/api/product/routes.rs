use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Product catalog API
///
/// Endpoints for listing, reading, creating, updating, and deleting store products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The server assigns the id and timestamps. A supplied `createdAt` is kept
    /// unless it lies in the future.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let (details, created_at) = body.0.into_parts();
        let params = CreateProductParams {
            details,
            created_at,
        };

        match self.create_use_case.execute(params).await {
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

    /// List all products
    ///
    /// Returns every stored product. Ordering is not guaranteed.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every editable field. Identity and `createdAt` are preserved.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id());
        };

        let params = UpdateProductParams {
            id: uuid,
            details: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
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
    /// Deleting an id that does not exist also answers 204.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
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
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
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
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logger::TracingLogger;
    use persistence::product::memory::InMemoryProductRepository;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::setup::dependency_injection::build_product_api;

    fn client() -> TestClient<Route> {
        let api = build_product_api(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(TracingLogger),
        );
        let service = OpenApiService::new(api, "Retail Catalog API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    fn apples() -> serde_json::Value {
        json!({
            "name": "Organic Apples",
            "sku": "APL-ORG-001",
            "category": "Produce",
            "price": 3.99,
            "stock": 120,
            "location": "Aisle 2",
            "directions": "Second shelf on the right"
        })
    }

    async fn create(client: &TestClient<Route>, body: &serde_json::Value) -> String {
        let response = client.post("/products").body_json(body).send().await;
        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        json.value().object().get("id").string().to_string()
    }

    #[tokio::test]
    async fn should_create_and_list_product() {
        let client = client();

        let response = client.post("/products").body_json(&apples()).send().await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let created = json.value().object();
        created.get("name").assert_string("Organic Apples");
        created.get("category").assert_string("Produce");
        created
            .get("image")
            .assert_string("https://via.placeholder.com/600x400?text=Product");
        assert!(created.get("createdAt").i64() > 0);

        let list = client.get("/products").send().await;
        list.assert_status_is_ok();
        list.json().await.value().array().assert_len(1);
    }

    #[tokio::test]
    async fn should_reject_missing_sku_with_code() {
        let client = client();
        let mut body = apples();
        body["sku"] = json!("  ");

        let response = client.post("/products").body_json(&body).send().await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.sku_required");
        client
            .get("/products")
            .send()
            .await
            .json()
            .await
            .value()
            .array()
            .assert_len(0);
    }

    #[tokio::test]
    async fn should_answer_with_price_rounded_to_cents() {
        let client = client();
        let mut body = apples();
        body["price"] = json!(2.499);

        let id = create(&client, &body).await;

        let response = client.get(format!("/products/{}", id)).send().await;
        response.assert_status_is_ok();
        response
            .json()
            .await
            .value()
            .object()
            .get("price")
            .assert_f64(2.5);
    }

    #[tokio::test]
    async fn should_reject_price_beyond_store_precision() {
        let client = client();
        let mut body = apples();
        body["price"] = json!(1e10);

        let response = client.post("/products").body_json(&body).send().await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("product.price_too_large");
    }

    #[tokio::test]
    async fn should_keep_supplied_creation_time() {
        let client = client();
        let mut body = apples();
        body["createdAt"] = json!(1_700_000_000_000i64);

        let response = client.post("/products").body_json(&body).send().await;

        response.assert_status(StatusCode::CREATED);
        response
            .json()
            .await
            .value()
            .object()
            .get("createdAt")
            .assert_i64(1_700_000_000_000);
    }

    #[tokio::test]
    async fn should_update_fields_and_keep_creation_time() {
        let client = client();
        let mut body = apples();
        body["createdAt"] = json!(1_700_000_000_000i64);
        let id = create(&client, &body).await;
        let mut changed = apples();
        changed["stock"] = json!(3);
        changed["category"] = json!("Toys");

        let response = client
            .put(format!("/products/{}", id))
            .body_json(&changed)
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let updated = json.value().object();
        updated.get("id").assert_string(&id);
        updated.get("stock").assert_i64(3);
        updated.get("category").assert_string("Other");
        updated.get("createdAt").assert_i64(1_700_000_000_000);
        assert!(updated.get("updatedAt").i64() >= 1_700_000_000_000);
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_product() {
        let client = client();
        let missing = uuid::Uuid::new_v4();

        client
            .get(format!("/products/{}", missing))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        client
            .put(format!("/products/{}", missing))
            .body_json(&apples())
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_malformed_id() {
        let client = client();

        let response = client.get("/products/not-a-uuid").send().await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("product.invalid_id");
        client
            .delete("/products/not-a-uuid")
            .send()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let client = client();
        let id = create(&client, &apples()).await;

        client
            .delete(format!("/products/{}", id))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        client
            .delete(format!("/products/{}", id))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        client
            .get(format!("/products/{}", id))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

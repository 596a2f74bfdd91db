use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use uuid::Uuid;

use business::domain::catalog::errors::GatewayError;
use business::domain::catalog::gateway::{CatalogGateway, ProductSubmission};
use business::domain::product::model::{Product, ProductDetails};

use crate::client::CatalogClient;
use crate::dto::{ErrorBody, ProductBody, ProductPayload};

/// `CatalogGateway` over the REST API. One instance serves every UI surface.
pub struct ProductApiGateway {
    client: CatalogClient,
}

impl ProductApiGateway {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    fn transport(e: reqwest::Error) -> GatewayError {
        GatewayError::Transport(e.to_string())
    }

    /// Maps a non-success status to a gateway error, passing successes through.
    async fn check(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(rejection(status, message))
    }

    async fn read_product(response: Response) -> Result<Product, GatewayError> {
        let body: ProductBody = Self::check(response)
            .await?
            .json()
            .await
            .map_err(Self::transport)?;
        body.into_domain()
    }
}

fn rejection(status: StatusCode, message: String) -> GatewayError {
    GatewayError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl CatalogGateway for ProductApiGateway {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(Self::transport)?;

        let bodies: Vec<ProductBody> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(Self::transport)?;

        bodies.into_iter().map(ProductBody::into_domain).collect()
    }

    async fn create(&self, submission: &ProductSubmission) -> Result<Product, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .json(&ProductPayload::from(submission))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read_product(response).await
    }

    async fn update(&self, id: Uuid, details: &ProductDetails) -> Result<Product, GatewayError> {
        let response = self
            .client
            .client
            .put(self.client.product_url(id))
            .json(&ProductPayload::from_details(details))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read_product(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        let response = self
            .client
            .client
            .delete(self.client.product_url(id))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::check(response).await?;
        Ok(())
    }
}

//! Product endpoints.

use super::types::{Product, ProductInput, ProductListResponse, ProductQuery, ProductResponse};
use super::{ApiClient, ApiResult};

impl ApiClient {
    /// GET /products/: lists products matching the query.
    pub async fn list_products(&self, query: &ProductQuery) -> ApiResult<Vec<Product>> {
        let response: ProductListResponse =
            self.get_json("/products/", &query.to_pairs()).await?;
        Ok(response.products)
    }

    /// GET /products/{id}/: fetches one product.
    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        let response: ProductResponse = self.get_json(&format!("/products/{id}/"), &[]).await?;
        Ok(response.product)
    }

    /// POST /products/: creates a product.
    pub async fn create_product(&self, input: &ProductInput) -> ApiResult<Product> {
        let response: ProductResponse = self.post_json("/products/", input).await?;
        Ok(response.product)
    }

    /// PUT /products/{id}/: updates a product.
    pub async fn update_product(&self, id: i64, input: &ProductInput) -> ApiResult<Product> {
        let response: ProductResponse =
            self.put_json(&format!("/products/{id}/"), input).await?;
        Ok(response.product)
    }

    /// DELETE /products/{id}/: deletes a product.
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/products/{id}/")).await
    }
}

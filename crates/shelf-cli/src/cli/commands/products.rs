//! Product command handlers.

use anyhow::Result;
use comfy_table::{Table, presets};
use shelf_core::api::types::{Product, ProductInput, ProductOrdering, ProductQuery};
use shelf_core::config::Config;

/// Writable product fields shared by create and update.
pub struct ProductArgs {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock_quantity: i64,
    pub description: Option<String>,
    pub barcode: Option<String>,
}

impl ProductArgs {
    fn into_input(self) -> ProductInput {
        ProductInput {
            name: self.name,
            sku: self.sku,
            price: self.price,
            stock_quantity: self.stock_quantity,
            description: self.description,
            barcode: self.barcode,
        }
    }
}

pub async fn list(
    config: &Config,
    search: Option<String>,
    sku: Option<String>,
    ordering: Option<String>,
) -> Result<()> {
    let ordering = match ordering.as_deref() {
        Some(value) => Some(ProductOrdering::parse(value).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown ordering '{value}' (expected name, price, or created_at, '-' prefix for descending)"
            )
        })?),
        None => None,
    };

    let query = ProductQuery {
        search,
        sku,
        created_by: None,
        ordering,
    };

    let client = super::authenticated_client(config)?;
    let products = client.list_products(&query).await?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "SKU", "Price", "Stock", "Created by"]);
    for product in &products {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            product.sku.clone(),
            product.price.clone(),
            product.stock_quantity.to_string(),
            product.created_by_name.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn show(config: &Config, id: i64) -> Result<()> {
    let client = super::authenticated_client(config)?;
    let product = client.get_product(id).await?;
    print_product(&product);
    Ok(())
}

pub async fn create(config: &Config, args: ProductArgs) -> Result<()> {
    let client = super::authenticated_client(config)?;
    let product = client.create_product(&args.into_input()).await?;
    println!("Created product {} ({})", product.id, product.sku);
    Ok(())
}

pub async fn update(config: &Config, id: i64, args: ProductArgs) -> Result<()> {
    let client = super::authenticated_client(config)?;
    let product = client.update_product(id, &args.into_input()).await?;
    println!("Updated product {} ({})", product.id, product.sku);
    Ok(())
}

pub async fn delete(config: &Config, id: i64) -> Result<()> {
    let client = super::authenticated_client(config)?;
    client.delete_product(id).await?;
    println!("Deleted product {id}.");
    Ok(())
}

fn print_product(product: &Product) {
    println!("{}: {}", product.id, product.name);
    println!("SKU:      {}", product.sku);
    if !product.barcode.is_empty() {
        println!("Barcode:  {}", product.barcode);
    }
    println!("Price:    {}", product.price);
    println!("Stock:    {}", product.stock_quantity);
    if !product.description.is_empty() {
        println!("Description: {}", product.description);
    }
    if let Some(created_by) = &product.created_by_name {
        println!("Created by:  {created_by}");
    }
    println!("Created:  {}", product.created_at.to_rfc3339());
    println!("Updated:  {}", product.updated_at.to_rfc3339());
}

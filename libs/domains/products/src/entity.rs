use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Category, Product, ProductPayload};

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}

/// Insert model; the id comes from the `serial` column.
impl From<ProductPayload> for ActiveModel {
    fn from(input: ProductPayload) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            available: Set(input.available),
            category: Set(input.category),
        }
    }
}

/// Full-row update model.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            available: Set(product.available),
            category: Set(product.category),
        }
    }
}

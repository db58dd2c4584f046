//! Field schema repository.
//!
//! Ordering is stored in `sort_order`; the service decides positions and writes
//! them back through [`FieldRepository::resequence`].

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{
        card::ContentValue,
        field::FieldCardType,
    },
    server::{
        model::field::{Field, FieldBucket, NewField},
        util::parse::encode_json,
    },
};

pub struct FieldRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FieldRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets fields ordered by category then position.
    ///
    /// # Arguments
    /// - `card_type` - When set to a concrete card type, only fields for that type
    ///   or for `all`; `None` and `Some(FieldCardType::All)` return every field
    ///
    /// # Returns
    /// - `Ok(Vec<Field>)` - Matching fields
    /// - `Err(DbErr)` - Database error or malformed stored field
    pub async fn get_all(&self, card_type: Option<FieldCardType>) -> Result<Vec<Field>, DbErr> {
        let mut query = entity::prelude::Field::find();

        if let Some(card_type) = card_type.filter(|card_type| *card_type != FieldCardType::All) {
            query = query.filter(
                Condition::any()
                    .add(entity::field::Column::CardType.eq(card_type.as_str()))
                    .add(entity::field::Column::CardType.eq(FieldCardType::All.as_str())),
            );
        }

        let entities = query
            .order_by_asc(entity::field::Column::Category)
            .order_by_asc(entity::field::Column::SortOrder)
            .order_by_asc(entity::field::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Field::from_entity).collect()
    }

    pub async fn find_by_id(&self, field_id: i32) -> Result<Option<Field>, DbErr> {
        entity::prelude::Field::find_by_id(field_id)
            .one(self.db)
            .await?
            .map(Field::from_entity)
            .transpose()
    }

    pub async fn key_exists(&self, key: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Field::find()
            .filter(entity::field::Column::Key.eq(key))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ids of the fields in a bucket in their current order.
    pub async fn get_bucket_ids(&self, bucket: &FieldBucket) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Field::find()
            .filter(entity::field::Column::Category.eq(bucket.category.as_str()))
            .filter(entity::field::Column::CardType.eq(bucket.card_type.as_str()))
            .order_by_asc(entity::field::Column::SortOrder)
            .order_by_asc(entity::field::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|field| field.id).collect())
    }

    /// Inserts a field row at the position given in `field.order`.
    ///
    /// Siblings are not shifted here.
    pub async fn create(&self, field: NewField) -> Result<Field, DbErr> {
        let now = Utc::now();
        let entity = entity::field::ActiveModel {
            name: ActiveValue::Set(field.name),
            key: ActiveValue::Set(field.key),
            field_type: ActiveValue::Set(field.field_type.as_str().to_string()),
            category: ActiveValue::Set(field.bucket.category),
            sort_order: ActiveValue::Set(field.order),
            options: ActiveValue::Set(encode_json("field.options", &field.options)?),
            default_value: ActiveValue::Set(encode_default(field.default_value.as_ref())?),
            required: ActiveValue::Set(field.required),
            card_type: ActiveValue::Set(field.bucket.card_type.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Field::from_entity(entity)
    }

    /// Writes every column of the field except the key and position.
    pub async fn update(&self, field: &Field) -> Result<(), DbErr> {
        entity::field::ActiveModel {
            id: ActiveValue::Unchanged(field.id),
            name: ActiveValue::Set(field.name.clone()),
            field_type: ActiveValue::Set(field.field_type.as_str().to_string()),
            category: ActiveValue::Set(field.category.clone()),
            options: ActiveValue::Set(encode_json("field.options", &field.options)?),
            default_value: ActiveValue::Set(encode_default(field.default_value.as_ref())?),
            required: ActiveValue::Set(field.required),
            card_type: ActiveValue::Set(field.card_type.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Sets `sort_order` of each id to its index in `ordered_ids`.
    pub async fn resequence(&self, ordered_ids: &[i32]) -> Result<(), DbErr> {
        for (position, field_id) in ordered_ids.iter().enumerate() {
            entity::prelude::Field::update_many()
                .filter(entity::field::Column::Id.eq(*field_id))
                .filter(entity::field::Column::SortOrder.ne(position as i32))
                .col_expr(entity::field::Column::SortOrder, Expr::value(position as i32))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Deletes a field.
    ///
    /// # Returns
    /// - `Ok(true)` - Field deleted
    /// - `Ok(false)` - No field with that id
    pub async fn delete(&self, field_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Field::delete_by_id(field_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Field::find().count(self.db).await
    }
}

fn encode_default(value: Option<&ContentValue>) -> Result<Option<serde_json::Value>, DbErr> {
    value
        .map(|value| encode_json("field.default_value", value))
        .transpose()
}

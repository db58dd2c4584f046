//! Field schema registry.
//!
//! Fields are grouped into buckets by (category, card type). Within a bucket the
//! `order` values always form the dense sequence `0..n`; every write that adds,
//! moves or removes a field re-sequences the affected buckets in the same
//! transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::field::FieldCardType,
    server::{
        data::field::FieldRepository,
        error::AppError,
        model::field::{
            value_fits, CreateFieldParams, Field, FieldBucket, NewField, UpdateFieldParams,
        },
    },
};

/// Derives a field's content key from its name.
///
/// Lower-cases the name, turns each run of whitespace into `_` and drops every
/// character outside `[a-z0-9_]`.
pub fn derive_field_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            key.push(ch);
        }
    }

    key
}

/// Clamps a requested position into `0..=len`.
fn clamp_position(requested: i32, len: usize) -> usize {
    requested.clamp(0, len as i32) as usize
}

pub struct FieldService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists fields ordered by category then position.
    ///
    /// # Arguments
    /// - `card_type` - Concrete card type to filter by; `all` or `None` lists everything
    pub async fn get_all(&self, card_type: Option<FieldCardType>) -> Result<Vec<Field>, AppError> {
        Ok(FieldRepository::new(self.db).get_all(card_type).await?)
    }

    /// Creates a field.
    ///
    /// Inserts at the requested position (clamped to the bucket) or appends.
    ///
    /// # Returns
    /// - `Ok(Field)` - The created field
    /// - `Err(AppError::BadRequest)` - Name, type or category missing, the name yields an
    ///   empty key, or the default value does not fit the type
    /// - `Err(AppError::Conflict)` - Another field already has the derived key
    pub async fn create(&self, params: CreateFieldParams) -> Result<Field, AppError> {
        let field_type = match params.field_type {
            Some(field_type) if !params.name.is_empty() && !params.category.is_empty() => {
                field_type
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Все обязательные поля должны быть заполнены".to_string(),
                ))
            }
        };

        let key = derive_field_key(&params.name);
        if key.is_empty() {
            return Err(AppError::BadRequest(
                "Название поля должно содержать латинские буквы или цифры".to_string(),
            ));
        }

        if let Some(default) = &params.default_value {
            if !value_fits(field_type, &params.options, default) {
                return Err(invalid_default());
            }
        }

        let txn = self.db.begin().await?;
        let repo = FieldRepository::new(&txn);

        if repo.key_exists(&key).await? {
            return Err(AppError::Conflict(
                "Поле с таким именем уже существует".to_string(),
            ));
        }

        let bucket = FieldBucket {
            category: params.category,
            card_type: params.card_type,
        };
        let mut ordered_ids = repo.get_bucket_ids(&bucket).await?;
        let position = params
            .order
            .map(|order| clamp_position(order, ordered_ids.len()))
            .unwrap_or(ordered_ids.len());

        let field = repo
            .create(NewField {
                name: params.name,
                key,
                field_type,
                bucket,
                order: position as i32,
                options: params.options,
                default_value: params.default_value,
                required: params.required,
            })
            .await?;

        ordered_ids.insert(position, field.id);
        repo.resequence(&ordered_ids).await?;

        txn.commit().await?;

        Ok(field)
    }

    /// Updates a field. The key never changes.
    ///
    /// When the category, card type or order changes, the field leaves its old
    /// bucket (which is compacted) and is inserted into the target bucket at the
    /// requested position, or appended when moving without a position.
    ///
    /// # Returns
    /// - `Ok(Field)` - The updated field
    /// - `Err(AppError::NotFound)` - No field with that id
    /// - `Err(AppError::BadRequest)` - Empty name or category, or a default value
    ///   that does not fit the resulting type
    pub async fn update(&self, params: UpdateFieldParams) -> Result<Field, AppError> {
        let txn = self.db.begin().await?;
        let repo = FieldRepository::new(&txn);

        let mut field = repo.find_by_id(params.id).await?.ok_or_else(not_found)?;
        let old_bucket = field.bucket();
        let old_order = field.order;

        if let Some(name) = params.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Название поля обязательно".to_string()));
            }
            field.name = name;
        }
        if let Some(category) = params.category {
            if category.is_empty() {
                return Err(AppError::BadRequest("Категория обязательна".to_string()));
            }
            field.category = category;
        }
        if let Some(field_type) = params.field_type {
            field.field_type = field_type;
        }
        if let Some(options) = params.options {
            field.options = options;
        }
        if let Some(default_value) = params.default_value {
            field.default_value = Some(default_value);
        }
        if let Some(required) = params.required {
            field.required = required;
        }
        if let Some(card_type) = params.card_type {
            field.card_type = card_type;
        }

        if let Some(default) = &field.default_value {
            if !field.accepts(default) {
                return Err(invalid_default());
            }
        }

        repo.update(&field).await?;

        let new_bucket = field.bucket();
        let moved = new_bucket != old_bucket;
        if moved || params.order.is_some() {
            if moved {
                let remaining = repo.get_bucket_ids(&old_bucket).await?;
                repo.resequence(&remaining).await?;
            }

            let mut ordered_ids: Vec<i32> = repo
                .get_bucket_ids(&new_bucket)
                .await?
                .into_iter()
                .filter(|id| *id != field.id)
                .collect();
            let requested = params
                .order
                .unwrap_or(if moved { ordered_ids.len() as i32 } else { old_order });
            let position = clamp_position(requested, ordered_ids.len());

            ordered_ids.insert(position, field.id);
            repo.resequence(&ordered_ids).await?;
        }

        let field = repo.find_by_id(field.id).await?.ok_or_else(not_found)?;
        txn.commit().await?;

        Ok(field)
    }

    /// Deletes a field and compacts its bucket.
    ///
    /// # Returns
    /// - `Ok(())` - Field deleted
    /// - `Err(AppError::NotFound)` - No field with that id
    pub async fn delete(&self, field_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = FieldRepository::new(&txn);

        let field = repo.find_by_id(field_id).await?.ok_or_else(not_found)?;

        repo.delete(field.id).await?;
        let remaining = repo.get_bucket_ids(&field.bucket()).await?;
        repo.resequence(&remaining).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Поле не найдено".to_string())
}

fn invalid_default() -> AppError {
    AppError::BadRequest("Значение по умолчанию не соответствует типу поля".to_string())
}

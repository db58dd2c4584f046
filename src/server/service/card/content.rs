//! Content validation against the field registry.

use crate::{
    model::card::{CardType, Content},
    server::{error::AppError, model::field::Field},
};

/// Checks `content` against the fields that apply to `card_type` and fills in
/// defaults.
///
/// # Arguments
/// - `card_type` - Type of the card the content belongs to
/// - `fields` - Every field in the registry; fields for other types are ignored
/// - `content` - Submitted content map
///
/// # Returns
/// - `Ok(Content)` - Content with missing defaulted fields filled in
/// - `Err(AppError::BadRequest)` - Unknown key, value of the wrong kind, select value
///   outside its options, or a required field without value or default
pub fn validate_content(
    card_type: CardType,
    fields: &[Field],
    mut content: Content,
) -> Result<Content, AppError> {
    let applicable: Vec<&Field> = fields
        .iter()
        .filter(|field| field.card_type.applies_to(card_type))
        .collect();

    for (key, value) in &content {
        let Some(field) = applicable.iter().find(|field| field.key == *key) else {
            return Err(AppError::BadRequest(format!(
                "Неизвестное поле '{}' для карточки типа {}",
                key, card_type
            )));
        };

        if !field.accepts(value) {
            return Err(AppError::BadRequest(format!(
                "Недопустимое значение поля '{}'",
                field.name
            )));
        }
    }

    for field in applicable {
        if content.contains_key(&field.key) {
            continue;
        }

        match &field.default_value {
            Some(default) => {
                content.insert(field.key.clone(), default.clone());
            }
            None if field.required => {
                return Err(AppError::BadRequest(format!(
                    "Поле '{}' обязательно",
                    field.name
                )));
            }
            None => {}
        }
    }

    Ok(content)
}

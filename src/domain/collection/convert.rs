//! Conversions: CollectionResponse → Collection / OwnedCollection.

use super::wire::CollectionResponse;
use super::{Collection, OwnedCollection, ValidationError};

impl TryFrom<CollectionResponse> for Collection {
    type Error = ValidationError;

    fn try_from(source: CollectionResponse) -> Result<Self, Self::Error> {
        let raw = source.id.ok_or(ValidationError::MissingId)?;
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId(raw.clone()))?;
        let name = source.name.ok_or(ValidationError::MissingName(id))?;
        Ok(Collection {
            id,
            name,
            category_id: source.category_id,
        })
    }
}

impl TryFrom<CollectionResponse> for OwnedCollection {
    type Error = ValidationError;

    fn try_from(source: CollectionResponse) -> Result<Self, Self::Error> {
        Ok(OwnedCollection {
            category_id: source.category_id.ok_or(ValidationError::MissingCategory)?,
        })
    }
}

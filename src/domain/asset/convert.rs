//! Conversion: AssetResponse → Asset (TryFrom + validation).

use super::wire;
use super::{Asset, ValidationError};
use crate::shared::AssetId;

impl TryFrom<wire::AssetResponse> for Asset {
    type Error = ValidationError;

    fn try_from(source: wire::AssetResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let id = source.id.filter(|id| !id.is_empty()).unwrap_or_else(|| {
            errors.push(ValidationError::MissingId);
            String::new()
        });
        let name = source.name.unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });
        if let Some(price) = source.price.filter(|p| p.is_sign_negative() && !p.is_zero()) {
            errors.push(ValidationError::NegativePrice(price));
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(id, errors));
        }

        Ok(Asset {
            id: AssetId::new(id),
            name,
            pic_url: source.pic_url.filter(|u| !u.is_empty()),
            price: source.price,
            status: source.status,
            category_id: source.category_id,
            collection_id: source.collection_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row() -> wire::AssetResponse {
        wire::AssetResponse {
            id: Some("11".to_string()),
            name: Some("Punk".to_string()),
            pic_url: Some(String::new()),
            price: Some(Decimal::from(5)),
            status: 1,
            category_id: Some(1),
            collection_id: None,
        }
    }

    #[test]
    fn test_valid_row_converts() {
        let asset = Asset::try_from(row()).unwrap();
        assert_eq!(asset.id, AssetId::from("11"));
        assert_eq!(asset.pic_url, None);
        assert_eq!(asset.price, Some(Decimal::from(5)));
    }

    #[test]
    fn test_missing_name_fails() {
        let mut r = row();
        r.name = None;
        let err = Asset::try_from(r).unwrap_err();
        assert!(format!("{err}").contains("Missing name"));
    }

    #[test]
    fn test_negative_price_fails() {
        let mut r = row();
        r.price = Some(Decimal::from(-1));
        assert!(Asset::try_from(r).is_err());
    }
}

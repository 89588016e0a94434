use chrono::NaiveDate;
use stylepocket_domain::{
    DomainError, ImageRef, ItemCategory, ItemId, Outfit, OutfitId, Price, PurchaseStatus,
    ShoppingItem, StyleTag,
};

pub fn sample_outfits() -> Result<Vec<Outfit>, DomainError> {
    Ok(vec![
        outfit(
            "1",
            500,
            &[StyleTag::Korean, StyleTag::Minimalist],
            &["Beige blazer", "White T-shirt", "Straight-leg jeans"],
            (2023, 10, 1),
        )?,
        outfit(
            "2",
            501,
            &[StyleTag::Vintage, StyleTag::Japanese],
            &["Plaid shirt", "Khaki wide-leg trousers", "Canvas sneakers"],
            (2023, 10, 5),
        )?,
        outfit(
            "3",
            502,
            &[StyleTag::Western, StyleTag::Street],
            &["Leather jacket", "Mini skirt", "Knee-high boots"],
            (2023, 10, 12),
        )?,
    ])
}

pub fn sample_shopping_items() -> Result<Vec<ShoppingItem>, DomainError> {
    Ok(vec![
        item(
            "s1",
            "Beige blazer",
            1580.0,
            ItemCategory::Outerwear,
            &[StyleTag::Korean, StyleTag::Minimalist],
            PurchaseStatus::ToBuy,
        )?,
        item(
            "s2",
            "Vintage plaid shirt",
            890.0,
            ItemCategory::Top,
            &[StyleTag::Vintage],
            PurchaseStatus::ToBuy,
        )?,
        item(
            "s3",
            "High-waist straight trousers",
            1200.0,
            ItemCategory::Bottom,
            &[StyleTag::Korean],
            PurchaseStatus::Bought,
        )?,
        item(
            "s4",
            "Chunky silver chain necklace",
            450.0,
            ItemCategory::Accessories,
            &[StyleTag::Western, StyleTag::Street],
            PurchaseStatus::ToBuy,
        )?,
        item(
            "s5",
            "New Balance 530",
            2800.0,
            ItemCategory::Shoes,
            &[StyleTag::Korean, StyleTag::Vintage],
            PurchaseStatus::ToBuy,
        )?,
    ])
}

fn outfit(
    id: &str,
    image_height: u32,
    tags: &[StyleTag],
    detected: &[&str],
    (year, month, day): (i32, u32, u32),
) -> Result<Outfit, DomainError> {
    Ok(Outfit {
        id: OutfitId::new(id)?,
        image: ImageRef::placeholder(400, image_height),
        style_tags: tags.iter().copied().collect(),
        items_detected: detected.iter().map(ToString::to_string).collect(),
        // Hardcoded dates are all valid calendar days.
        created_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    })
}

fn item(
    id: &str,
    name: &str,
    price: f64,
    category: ItemCategory,
    tags: &[StyleTag],
    status: PurchaseStatus,
) -> Result<ShoppingItem, DomainError> {
    Ok(ShoppingItem {
        id: ItemId::new(id)?,
        name: name.to_string(),
        price: Price::new(price)?,
        category,
        style_tags: tags.iter().copied().collect(),
        status,
        link: None,
    })
}

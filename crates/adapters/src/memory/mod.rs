mod sample;

use std::cell::RefCell;

use stylepocket_application::{ApplicationError, WardrobeRepository};
use stylepocket_domain::{ItemId, Outfit, OutfitId, PurchaseStatus, ShoppingItem};

pub use sample::{sample_outfits, sample_shopping_items};

/// Process-local wardrobe. Everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryWardrobe {
    outfits: RefCell<Vec<Outfit>>,
    items: RefCell<Vec<ShoppingItem>>,
}

impl InMemoryWardrobe {
    pub fn new(outfits: Vec<Outfit>, items: Vec<ShoppingItem>) -> Self {
        Self {
            outfits: RefCell::new(outfits),
            items: RefCell::new(items),
        }
    }

    pub fn with_sample_data() -> Result<Self, ApplicationError> {
        let wardrobe = Self::new(sample_outfits()?, sample_shopping_items()?);
        tracing::debug!(
            outfits = wardrobe.outfits.borrow().len(),
            items = wardrobe.items.borrow().len(),
            "loaded sample wardrobe"
        );
        Ok(wardrobe)
    }
}

impl WardrobeRepository for InMemoryWardrobe {
    fn list_outfits(&self) -> Result<Vec<Outfit>, ApplicationError> {
        Ok(self.outfits.borrow().clone())
    }

    fn find_outfit(&self, outfit_id: &OutfitId) -> Result<Option<Outfit>, ApplicationError> {
        Ok(self
            .outfits
            .borrow()
            .iter()
            .find(|outfit| &outfit.id == outfit_id)
            .cloned())
    }

    fn prepend_outfit(&self, outfit: Outfit) -> Result<(), ApplicationError> {
        let mut outfits = self.outfits.borrow_mut();
        if outfits.iter().any(|existing| existing.id == outfit.id) {
            return Err(ApplicationError::InvalidInput(format!(
                "outfit id already exists: {}",
                outfit.id
            )));
        }
        outfits.insert(0, outfit);
        Ok(())
    }

    fn list_shopping_items(&self) -> Result<Vec<ShoppingItem>, ApplicationError> {
        Ok(self.items.borrow().clone())
    }

    fn append_shopping_item(&self, item: ShoppingItem) -> Result<(), ApplicationError> {
        let mut items = self.items.borrow_mut();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(ApplicationError::InvalidInput(format!(
                "shopping item id already exists: {}",
                item.id
            )));
        }
        items.push(item);
        Ok(())
    }

    fn toggle_item_status(
        &self,
        item_id: &ItemId,
    ) -> Result<Option<PurchaseStatus>, ApplicationError> {
        Ok(self
            .items
            .borrow_mut()
            .iter_mut()
            .find(|item| &item.id == item_id)
            .map(ShoppingItem::toggle_status))
    }
}

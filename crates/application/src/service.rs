use stylepocket_domain::{
    aggregate_style_tags, group_shopping_items, ItemId, Outfit, OutfitId, Price, PurchaseStatus,
    ShoppingGroups, ShoppingItem, StyleTagCount,
};

use crate::dashboard::{budget_summary, style_bars};
use crate::{
    AddDetectedItemCommand, AnalysisPipeline, AnalysisRequest, ApplicationError,
    BeginUploadCommand, CancelUploadCommand, Clock, Dashboard, DashboardQuery,
    EditCandidateTagCommand, GroupShoppingListQuery, ListOutfitsQuery, ListShoppingItemsQuery,
    PollUploadCommand, RenderThumbnailCommand, SaveUploadCommand, StyleStatsQuery,
    ThumbnailArtifact, ThumbnailRenderer, ToggleItemStatusCommand, UploadFlow, UploadStep,
    WardrobeRepository,
};

/// Largest thumbnail edge accepted; keeps the pixel buffer well inside memory.
pub const MAX_THUMBNAIL_EDGE: u32 = 4096;

pub struct ApplicationService {
    wardrobe: Box<dyn WardrobeRepository>,
    analysis: Box<dyn AnalysisPipeline>,
    thumbnails: Box<dyn ThumbnailRenderer>,
    clock: Box<dyn Clock>,
    upload: UploadFlow,
    detected_items_added: u64,
}

impl ApplicationService {
    pub fn new(
        wardrobe: Box<dyn WardrobeRepository>,
        analysis: Box<dyn AnalysisPipeline>,
        thumbnails: Box<dyn ThumbnailRenderer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            wardrobe,
            analysis,
            thumbnails,
            clock,
            upload: UploadFlow::default(),
            detected_items_added: 0,
        }
    }

    pub fn list_outfits(&self, _query: ListOutfitsQuery) -> Result<Vec<Outfit>, ApplicationError> {
        self.wardrobe.list_outfits()
    }

    pub fn list_shopping_items(
        &self,
        _query: ListShoppingItemsQuery,
    ) -> Result<Vec<ShoppingItem>, ApplicationError> {
        self.wardrobe.list_shopping_items()
    }

    pub fn group_shopping_list(
        &self,
        query: GroupShoppingListQuery,
    ) -> Result<ShoppingGroups, ApplicationError> {
        let items = self.wardrobe.list_shopping_items()?;
        Ok(group_shopping_items(&items, query.mode))
    }

    pub fn toggle_item_status(
        &self,
        command: ToggleItemStatusCommand,
    ) -> Result<PurchaseStatus, ApplicationError> {
        let status = self
            .wardrobe
            .toggle_item_status(&command.item_id)?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "shopping item not found for id={}",
                    command.item_id
                ))
            })?;
        tracing::debug!(item_id = %command.item_id, ?status, "toggled shopping item");
        Ok(status)
    }

    pub fn style_stats(
        &self,
        _query: StyleStatsQuery,
    ) -> Result<Vec<StyleTagCount>, ApplicationError> {
        let outfits = self.wardrobe.list_outfits()?;
        let items = self.wardrobe.list_shopping_items()?;
        Ok(aggregate_style_tags(&outfits, &items))
    }

    pub fn dashboard(&self, query: DashboardQuery) -> Result<Dashboard, ApplicationError> {
        if !query.monthly_budget.is_finite() || query.monthly_budget < 0.0 {
            return Err(ApplicationError::InvalidInput(format!(
                "monthly budget must be finite and non-negative, got {}",
                query.monthly_budget
            )));
        }

        let outfits = self.wardrobe.list_outfits()?;
        let items = self.wardrobe.list_shopping_items()?;
        let ranked = aggregate_style_tags(&outfits, &items);

        Ok(Dashboard {
            outfit_count: outfits.len(),
            bars: style_bars(&ranked, query.top_n),
            favourite: ranked.first().map(|entry| entry.tag),
            budget: budget_summary(&items, query.monthly_budget),
        })
    }

    pub fn upload_step(&self) -> &UploadStep {
        self.upload.step()
    }

    pub fn begin_upload(&mut self, _command: BeginUploadCommand) -> Result<u64, ApplicationError> {
        let ticket = self.upload.begin()?;
        if let Err(error) = self.analysis.submit_analysis(AnalysisRequest { ticket }) {
            // Nothing is in flight, so the flow must not stay in scanning.
            self.upload.abort_scan();
            return Err(error);
        }
        tracing::info!(ticket, "upload analysis started");
        Ok(ticket)
    }

    /// Moves scanning to result once the analysis for the pending ticket lands.
    pub fn poll_upload(
        &mut self,
        _command: PollUploadCommand,
    ) -> Result<&UploadStep, ApplicationError> {
        let Some(pending) = self.upload.scanning_ticket() else {
            return Ok(self.upload.step());
        };

        while let Some(report) = self.analysis.try_receive_analysis()? {
            if report.ticket != pending {
                tracing::warn!(ticket = report.ticket, pending, "dropping stale analysis report");
                continue;
            }

            let candidate = Outfit {
                id: OutfitId::new(self.clock.now_timestamp_millis().to_string())?,
                image: report.image,
                style_tags: report.style_tags,
                items_detected: report.items_detected,
                created_on: self.clock.today(),
            };
            tracing::info!(ticket = pending, outfit_id = %candidate.id, "upload analysis finished");
            self.upload.complete(pending, candidate)?;
            break;
        }

        Ok(self.upload.step())
    }

    pub fn add_candidate_tag(
        &mut self,
        command: EditCandidateTagCommand,
    ) -> Result<&Outfit, ApplicationError> {
        let candidate = self.upload.candidate_mut()?;
        candidate.style_tags.insert(command.tag);
        Ok(candidate)
    }

    pub fn remove_candidate_tag(
        &mut self,
        command: EditCandidateTagCommand,
    ) -> Result<&Outfit, ApplicationError> {
        let candidate = self.upload.candidate_mut()?;
        candidate.style_tags.remove(command.tag);
        Ok(candidate)
    }

    /// Sends one of the candidate's detected items to the shopping list as a
    /// to-buy entry carrying the candidate's style tags.
    pub fn add_detected_item_to_list(
        &mut self,
        command: AddDetectedItemCommand,
    ) -> Result<ShoppingItem, ApplicationError> {
        let candidate = self.upload.candidate()?;
        let name = candidate
            .items_detected
            .get(command.detected_index)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::InvalidInput(format!(
                    "detected item index {} out of range ({} detected)",
                    command.detected_index,
                    candidate.items_detected.len()
                ))
            })?;

        let item = ShoppingItem {
            id: ItemId::new(format!(
                "d{}-{}",
                self.clock.now_timestamp_millis(),
                self.detected_items_added + 1
            ))?,
            name,
            price: Price::default(),
            category: command.category,
            style_tags: candidate.style_tags.clone(),
            status: PurchaseStatus::ToBuy,
            link: None,
        };
        self.wardrobe.append_shopping_item(item.clone())?;
        self.detected_items_added += 1;
        tracing::debug!(item_id = %item.id, "added detected item to shopping list");
        Ok(item)
    }

    pub fn save_upload(&mut self, _command: SaveUploadCommand) -> Result<Outfit, ApplicationError> {
        let outfit = self.upload.candidate()?.clone();
        self.wardrobe.prepend_outfit(outfit.clone())?;
        self.upload.save()?;
        tracing::info!(outfit_id = %outfit.id, "saved uploaded outfit");
        Ok(outfit)
    }

    pub fn cancel_upload(&mut self, _command: CancelUploadCommand) -> Result<(), ApplicationError> {
        self.upload.cancel()?;
        tracing::info!("upload candidate discarded");
        Ok(())
    }

    pub fn render_thumbnail(
        &self,
        command: RenderThumbnailCommand,
    ) -> Result<ThumbnailArtifact, ApplicationError> {
        if command.max_edge == 0 || command.max_edge > MAX_THUMBNAIL_EDGE {
            return Err(ApplicationError::InvalidInput(format!(
                "thumbnail size must be between 1 and {MAX_THUMBNAIL_EDGE}, got {}",
                command.max_edge
            )));
        }
        let outfit = self
            .wardrobe
            .find_outfit(&command.outfit_id)?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("outfit not found for id={}", command.outfit_id))
            })?;
        self.thumbnails
            .render_placeholder(&outfit, &command.target, command.max_edge)
    }
}

use std::thread;
use std::time::{Duration, Instant};

use stylepocket_adapters::{
    BackgroundAnalysisPipeline, InMemoryWardrobe, PlaceholderThumbnailRenderer,
    RandomStyleAnalyzer, SystemClock,
};
use stylepocket_application::{
    AddDetectedItemCommand, ApplicationService, BeginUploadCommand, DashboardQuery,
    GroupShoppingListQuery, ListOutfitsQuery, ListShoppingItemsQuery, PollUploadCommand,
    RenderThumbnailCommand, SaveUploadCommand, StyleStatsQuery, ToggleItemStatusCommand,
    UploadStep,
};
use stylepocket_domain::{
    total_tag_mentions, GroupKey, GroupMode, ItemCategory, ItemId, PurchaseStatus, StyleTag,
};

fn build_service(seed: u64) -> ApplicationService {
    ApplicationService::new(
        Box::new(InMemoryWardrobe::with_sample_data().expect("sample data")),
        Box::new(BackgroundAnalysisPipeline::new(
            Duration::from_millis(10),
            Box::new(RandomStyleAnalyzer::seeded(seed)),
        )),
        Box::new(PlaceholderThumbnailRenderer),
        Box::new(SystemClock),
    )
}

fn wait_for_result(service: &mut ApplicationService) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        if matches!(
            service.poll_upload(PollUploadCommand).expect("poll"),
            UploadStep::Result { .. }
        ) {
            return;
        }
        assert!(Instant::now() < deadline, "analysis never finished");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn upload_save_updates_gallery_and_stats() {
    let mut service = build_service(42);
    service.begin_upload(BeginUploadCommand).expect("begin");
    wait_for_result(&mut service);

    service
        .add_detected_item_to_list(AddDetectedItemCommand {
            detected_index: 0,
            category: ItemCategory::Top,
        })
        .expect("add detected item");
    let saved = service.save_upload(SaveUploadCommand).expect("save");

    let outfits = service.list_outfits(ListOutfitsQuery).expect("outfits");
    let items = service
        .list_shopping_items(ListShoppingItemsQuery)
        .expect("items");
    assert_eq!(outfits.len(), 4);
    assert_eq!(outfits[0].id, saved.id);
    let seeded: Vec<&str> = outfits[1..].iter().map(|outfit| outfit.id.as_str()).collect();
    assert_eq!(seeded, vec!["1", "2", "3"]);
    assert_eq!(items.len(), 6);

    let stats = service.style_stats(StyleStatsQuery).expect("stats");
    let counted: usize = stats.iter().map(|entry| entry.count).sum();
    assert_eq!(counted, total_tag_mentions(&outfits, &items));
    assert!(stats.windows(2).all(|pair| pair[0].count >= pair[1].count));
}

#[test]
fn sample_list_groups_by_style_and_category() {
    let service = build_service(1);

    let by_style = service
        .group_shopping_list(GroupShoppingListQuery {
            mode: GroupMode::ByStyle,
        })
        .expect("group by style");
    let keys: Vec<GroupKey> = by_style.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            GroupKey::Style(StyleTag::Korean),
            GroupKey::Style(StyleTag::Vintage),
            GroupKey::Style(StyleTag::Western),
        ]
    );
    let korean: Vec<&str> = by_style[&GroupKey::Style(StyleTag::Korean)]
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(korean, vec!["s1", "s5", "s3"]);

    let by_category = service
        .group_shopping_list(GroupShoppingListQuery {
            mode: GroupMode::ByCategory,
        })
        .expect("group by category");
    assert_eq!(by_category.len(), 5);
    assert_eq!(by_category.values().map(Vec::len).sum::<usize>(), 5);
}

#[test]
fn toggling_changes_budget_and_back() {
    let service = build_service(1);
    let query = DashboardQuery {
        top_n: 4,
        monthly_budget: 10_000.0,
    };
    let before = service.dashboard(query).expect("dashboard");
    assert_eq!(before.budget.spent, 1200.0);
    assert_eq!(before.bars.len(), 4);
    assert_eq!(before.favourite, Some(StyleTag::Korean));

    let command = ToggleItemStatusCommand {
        item_id: ItemId::new("s5").expect("id"),
    };
    assert_eq!(
        service.toggle_item_status(command.clone()).expect("toggle"),
        PurchaseStatus::Bought
    );
    assert_eq!(service.dashboard(query).expect("dashboard").budget.spent, 4000.0);

    service.toggle_item_status(command).expect("toggle back");
    assert_eq!(service.dashboard(query).expect("dashboard"), before);
}

#[test]
fn thumbnail_is_written_for_sample_outfit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = build_service(1);
    let target = dir.path().join("outfit-2.png");

    let artifact = service
        .render_thumbnail(RenderThumbnailCommand {
            outfit_id: stylepocket_domain::OutfitId::new("2").expect("id"),
            target: target.clone(),
            max_edge: 128,
        })
        .expect("thumbnail");
    assert!(target.exists());
    assert_eq!(artifact.height, 128);
}

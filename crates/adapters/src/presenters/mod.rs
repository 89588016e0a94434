use stylepocket_application::{BudgetSummary, StyleBar, ThumbnailArtifact};
use stylepocket_domain::{GroupKey, GroupMode, Outfit, ShoppingItem, StyleTag, StyleTags};

pub const EMPTY_SHOPPING_LIST: &str =
    "Your shopping list is empty. Browse the outfit gallery for inspiration!";
const BAR_CELLS: usize = 20;

pub fn present_gallery_headline(outfit_count: usize) -> String {
    format!("AI has analysed {outfit_count} outfits for you")
}

pub fn present_outfit_row(outfit: &Outfit) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        outfit.id,
        outfit.created_on,
        present_tags(&outfit.style_tags),
        outfit.image.as_str()
    )
}

pub fn present_tags(tags: &StyleTags) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn present_group_header(key: &GroupKey, member_count: usize) -> String {
    format!("{key} ({member_count})")
}

/// Category view shows an item's tags, style view shows its category.
pub fn present_item_row(item: &ShoppingItem, mode: GroupMode) -> String {
    let marker = if item.is_bought() { "[x]" } else { "[ ]" };
    let detail = match mode {
        GroupMode::ByCategory => present_tags(&item.style_tags),
        GroupMode::ByStyle => item.category.to_string(),
    };
    let link = if item.link.is_some() { " ->" } else { "" };
    format!(
        "  {marker} {}\t${}\t{}\t{detail}{link}",
        item.id,
        item.price.amount(),
        item.name
    )
}

pub fn present_style_bar(bar: &StyleBar) -> String {
    let filled = ((bar.width_percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!(
        "#{:<12}{}{} {} items",
        bar.tag.label(),
        "=".repeat(filled),
        ".".repeat(BAR_CELLS - filled),
        bar.count
    )
}

pub fn present_insight(favourite: Option<StyleTag>) -> Option<String> {
    favourite.map(|tag| {
        format!(
            "You have been leaning towards #{tag} lately; \
             look out for earth tones when shopping."
        )
    })
}

pub fn present_budget(budget: &BudgetSummary) -> String {
    format!(
        "monthly budget: ${:.0} / ${:.0} ({:.0}% left)",
        budget.spent, budget.limit, budget.remaining_percent
    )
}

pub fn present_candidate(candidate: &Outfit) -> String {
    let mut lines = vec![
        format!("analysis complete for outfit {}", candidate.id),
        format!("  image: {}", candidate.image.as_str()),
        format!("  styles: {}", present_tags(&candidate.style_tags)),
    ];
    lines.extend(
        candidate
            .items_detected
            .iter()
            .enumerate()
            .map(|(index, name)| format!("  detected[{index}]: {name}")),
    );
    lines.join("\n")
}

pub fn present_thumbnail(artifact: &ThumbnailArtifact) -> String {
    format!(
        "wrote {} ({}x{})",
        artifact.file_path, artifact.width, artifact.height
    )
}

use serde::Serialize;
use stylepocket_domain::{ShoppingItem, StyleTag, StyleTagCount};

const BAR_MIN_PERCENT: f64 = 20.0;
const BAR_SPAN_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleBar {
    pub tag: StyleTag,
    pub count: usize,
    pub width_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub spent: f64,
    pub limit: f64,
    pub used_percent: f64,
    pub remaining_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub outfit_count: usize,
    pub bars: Vec<StyleBar>,
    pub favourite: Option<StyleTag>,
    pub budget: BudgetSummary,
}

/// Bars are scaled against the leading count so the top tag always spans 100%.
pub fn style_bars(ranked: &[StyleTagCount], top_n: usize) -> Vec<StyleBar> {
    let max_count = ranked.first().map_or(0, |entry| entry.count).max(1) as f64;
    ranked
        .iter()
        .take(top_n)
        .map(|entry| StyleBar {
            tag: entry.tag,
            count: entry.count,
            width_percent: entry.count as f64 / max_count * BAR_SPAN_PERCENT + BAR_MIN_PERCENT,
        })
        .collect()
}

pub fn budget_summary(items: &[ShoppingItem], limit: f64) -> BudgetSummary {
    let spent: f64 = items
        .iter()
        .filter(|item| item.is_bought())
        .map(|item| item.price.amount())
        .sum();
    let used_percent = if limit > 0.0 {
        spent * 100.0 / limit
    } else {
        100.0
    };
    BudgetSummary {
        spent,
        limit,
        used_percent,
        remaining_percent: (100.0 - used_percent).max(0.0),
    }
}

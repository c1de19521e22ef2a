//! Box-score parsing for both payload shapes.
//!
//! The tabular (HTML) and structured (summary JSON) variants are two
//! independent functions sharing one output contract: an ordered list of
//! [`RawStatObservation`]s plus a count of the sections that were recognized.

use scraper::{ElementRef, Html, Selector};

use crate::espn::types::{
    ProviderRef, RawStatObservation, StatBlock, StatCategory, SummaryPayload,
};
use crate::storage::PerformanceStats;
use crate::Result;

/// Performance line for one athlete in one statistic block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceLine {
    pub provider_ref: ProviderRef,
    pub stats: PerformanceStats,
}

/// Everything read from one game's payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBoxScore {
    pub observations: Vec<RawStatObservation>,
    pub performance: Vec<PerformanceLine>,
    /// Tables with a recognized caption, or named statistic blocks
    pub recognized_sections: usize,
}

struct TableSelectors {
    table: Selector,
    caption: Selector,
    row: Selector,
    cell: Selector,
}

impl TableSelectors {
    fn new() -> Option<Self> {
        Some(Self {
            table: Selector::parse("table").ok()?,
            caption: Selector::parse("caption").ok()?,
            row: Selector::parse("tbody > tr").ok()?,
            cell: Selector::parse("td").ok()?,
        })
    }
}

/// Concatenated text of an element with each text node trimmed.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// Parse a rendered game page.
///
/// Tables whose caption mentions `passing` or `rushing` contribute one
/// observation per body row: column 0 is the player's display name and
/// column 1 the category's stat string. Rows with fewer than two cells,
/// captionless tables and unrecognized captions are skipped.
pub fn parse_html_boxscore(html: &str) -> ParsedBoxScore {
    let Some(sel) = TableSelectors::new() else {
        return ParsedBoxScore::default();
    };
    let document = Html::parse_document(html);
    let mut parsed = ParsedBoxScore::default();

    for table in document.select(&sel.table) {
        let Some(caption) = table.select(&sel.caption).next() else {
            continue;
        };
        let Some(category) = StatCategory::from_caption(&stripped_text(caption)) else {
            continue;
        };
        parsed.recognized_sections += 1;

        for row in table.select(&sel.row) {
            let cells: Vec<String> = row.select(&sel.cell).map(stripped_text).collect();
            if cells.len() < 2 {
                continue;
            }
            parsed.observations.push(RawStatObservation {
                provider_ref: ProviderRef::Name(cells[0].clone()),
                stat_category: category.clone(),
                raw_value: cells[1].clone(),
            });
        }
    }

    parsed
}

/// Parse a summary endpoint document.
///
/// Each athlete entry in a named block yields one observation keyed by the
/// provider id, with the first stat cell as the raw value. Entries without a
/// usable id or without any stat cells are skipped. Fails only when the text
/// is not a JSON document of the expected shape.
pub fn parse_summary_boxscore(json: &str) -> Result<ParsedBoxScore> {
    let payload: SummaryPayload = serde_json::from_str(json)?;
    Ok(parse_summary_payload(&payload))
}

/// Structured-variant parsing over an already deserialized document.
pub fn parse_summary_payload(payload: &SummaryPayload) -> ParsedBoxScore {
    let mut parsed = ParsedBoxScore::default();

    for block in payload.blocks() {
        let Some(name) = block.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        parsed.recognized_sections += 1;
        let category = StatCategory::from_block_name(name);

        for entry in &block.athletes {
            let Some(espn_id) = entry.athlete.as_ref().and_then(|a| a.id) else {
                continue;
            };
            let provider_ref = ProviderRef::Id(espn_id);

            if let Some(first) = entry.stats.first() {
                parsed.observations.push(RawStatObservation {
                    provider_ref: provider_ref.clone(),
                    stat_category: category.clone(),
                    raw_value: first.clone(),
                });
            }

            if let Some(stats) = performance_from_cells(&category, block, &entry.stats) {
                parsed.performance.push(PerformanceLine {
                    provider_ref,
                    stats,
                });
            }
        }
    }

    parsed
}

/// Map keyed stat cells onto scoring inputs. `None` when the block has no
/// `keys` or none of them feed the scoring formula.
fn performance_from_cells(
    category: &StatCategory,
    block: &StatBlock,
    cells: &[String],
) -> Option<PerformanceStats> {
    let mut stats = PerformanceStats::default();
    let mut touched = false;

    for (key, cell) in block.keys.iter().zip(cells) {
        let value = || cell.trim().parse::<i32>().unwrap_or(0);
        match key.as_str() {
            "passingYards" => {
                stats.passing_yards = stats.passing_yards.saturating_add(value())
            }
            "rushingYards" => {
                stats.rushing_yards = stats.rushing_yards.saturating_add(value())
            }
            "receivingYards" => {
                stats.receiving_yards = stats.receiving_yards.saturating_add(value())
            }
            "passingTouchdowns" | "rushingTouchdowns" | "receivingTouchdowns" => {
                stats.touchdowns = stats.touchdowns.saturating_add(value().max(0) as u32)
            }
            // Defensive blocks use the same key for interceptions caught
            "interceptions" if *category == StatCategory::Passing => {
                stats.interceptions = stats.interceptions.saturating_add(value().max(0) as u32)
            }
            _ => continue,
        }
        touched = true;
    }

    touched.then_some(stats)
}

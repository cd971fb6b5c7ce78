//! Plain-text table of ranked attractions.

use crate::planner::ScoredAttraction;
use crate::present::format_score;

const HEADERS: [&str; 8] = [
    "Rank",
    "Station",
    "Attraction",
    "Total",
    "Tag (0.4)",
    "Walk (0.3)",
    "Price (0.2)",
    "Rating (0.1)",
];

/// Terminal columns a string occupies. CJK and other wide characters take two.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c >= '\u{2E80}' { 2 } else { 1 }).sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

fn row(item: &ScoredAttraction) -> [String; 8] {
    [
        item.rank.to_string(),
        item.attraction.mrt_station.to_string(),
        item.attraction.name.clone(),
        format_score(item.total_score),
        format_score(item.tag_score),
        format_score(item.walk_score),
        format_score(item.price_score),
        format_score(item.rating_score),
    ]
}

/// Render a boxed table, one line per attraction.
pub fn render_table(items: &[ScoredAttraction]) -> String {
    let rows: Vec<[String; 8]> = items.iter().map(row).collect();

    let mut widths = HEADERS.map(display_width);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }

    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: &[String]| {
        format!(
            "| {} |",
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad(cell, *w))
                .collect::<Vec<_>>()
                .join(" | ")
        )
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = vec![rule.clone(), line(&header), rule.clone()];
    for cells in &rows {
        out.push(line(cells));
    }
    out.push(rule);

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attraction, PreferenceTag};
    use crate::planner::{PlannerConfig, rank_attractions};

    fn ranked() -> Vec<ScoredAttraction> {
        let candidates = vec![
            Attraction::from_cells("西門紅樓", "西門", "3", "4.4", "low", "看展").unwrap(),
            Attraction::from_cells("Cinema Park", "西門", "6", "4.1", "medium", "電影").unwrap(),
        ];
        rank_attractions(
            candidates,
            &[PreferenceTag::Exhibition, PreferenceTag::Movie],
            2,
            &PlannerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("西門"), 4);
        assert_eq!(pad("西門", 6), "西門  ");
    }

    #[test]
    fn renders_header_and_rows() {
        let table = render_table(&ranked());
        let lines: Vec<&str> = table.lines().collect();

        // rule, header, rule, two rows, rule
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Rank"));
        assert!(lines[1].contains("Rating (0.1)"));
        assert!(lines[3].starts_with("| 1 "));
        assert!(lines[3].contains("西門紅樓"));
        assert!(lines[4].contains("Cinema Park"));
    }

    #[test]
    fn rows_align() {
        let table = render_table(&ranked());
        let widths: Vec<usize> = table.lines().map(display_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn scores_have_four_decimals() {
        let table = render_table(&ranked());
        assert!(table.contains("0.5000"));
    }

    #[test]
    fn empty_table_has_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 4);
    }
}

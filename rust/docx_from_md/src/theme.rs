// Fixed design system of the feature specification deliverable.

pub const DARK_NAVY: &str = "1A3C5E";
pub const MED_BLUE: &str = "2874A6";
pub const DARK_BLUEGRAY: &str = "2C3E50";
pub const RED: &str = "C0392B";
pub const ORANGE: &str = "D4740A";
pub const GREEN: &str = "27AE60";
pub const WHITE: &str = "FFFFFF";
pub const LIGHT_BLUE: &str = "EAF2F8";
pub const LIGHT_YELLOW: &str = "FEF5E7";
pub const VERY_LIGHT_GRAY: &str = "F4F6F7";
pub const BORDER: &str = "000000";

pub const FONT_MAIN: &str = "Arial Unicode MS";
pub const FONT_CODE: &str = "Courier New";

/// Text width of a Letter page with one-inch margins, in twips.
pub const CONTENT_WIDTH: u32 = 9360;
pub const PAGE_MARGIN: u32 = 1440;
pub const PAGE_WIDTH: u32 = 12240;
pub const PAGE_HEIGHT: u32 = 15840;

pub const BODY_PT: u32 = 9;

pub const FEATURE_COLUMNS: [u32; 5] = [700, 2000, 4360, 700, 1600];
pub const SECTION_CARD_COLUMNS: [u32; 2] = [700, 8660];
pub const COVER_META_COLUMNS: [u32; 2] = [1600, 3000];

/// Priority token rendered in red in feature tables.
pub const PRIORITY_CRITICAL: &str = "P0";
/// Priority token rendered in orange in feature tables.
pub const PRIORITY_HIGH: &str = "P1";
/// Generic-table cell values with reserved colors.
pub const LEVEL_HIGH: &str = "높음";
pub const LEVEL_LOW: &str = "낮음";

/// Column widths for a generic table, keyed by header shape.
pub fn generic_column_widths(header: &[String]) -> Vec<u32> {
    match header.len() {
        2 => vec![2400, 6960],
        3 if header[0].contains("단계") => vec![600, 1800, 6960],
        3 if header[0].contains("계층") => vec![2200, 2200, 4960],
        3 => vec![2400, 3480, 3480],
        5 => vec![1400, 1600, 2160, 2000, 2200],
        6 => vec![1000, 2000, 1400, 1400, 1400, 2160],
        7 => vec![600, 1800, 1100, 1600, 1000, 1060, 2200],
        n => even_split(CONTENT_WIDTH, n),
    }
}

/// Splits `total` into `n` equal columns, the last one taking the remainder.
pub fn even_split(total: u32, n: usize) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let each = total / n as u32;
    let mut widths = vec![each; n];
    widths[n - 1] = total - each * (n as u32 - 1);
    widths
}

/// Stretches or truncates `widths` to exactly `columns` entries by repeating the last width.
pub fn fit_widths(mut widths: Vec<u32>, columns: usize) -> Vec<u32> {
    if widths.is_empty() {
        return even_split(CONTENT_WIDTH, columns);
    }
    let last = widths[widths.len() - 1];
    widths.resize(columns, last);
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn three_column_widths_depend_on_first_header() {
        assert_eq!(generic_column_widths(&header(&["단계", "a", "b"])), vec![600, 1800, 6960]);
        assert_eq!(generic_column_widths(&header(&["계층", "a", "b"])), vec![2200, 2200, 4960]);
        assert_eq!(generic_column_widths(&header(&["항목", "a", "b"])), vec![2400, 3480, 3480]);
    }

    #[test]
    fn unknown_column_count_splits_evenly() {
        let widths = generic_column_widths(&header(&["a", "b", "c", "d"]));
        assert_eq!(widths, vec![2340, 2340, 2340, 2340]);
        let widths = generic_column_widths(&header(&["a", "b", "c", "d", "e", "f", "g", "h"]));
        assert_eq!(widths.iter().sum::<u32>(), CONTENT_WIDTH);
        assert_eq!(widths[7], 9360 - 1170 * 7);
    }

    #[test]
    fn single_column_takes_full_width() {
        assert_eq!(generic_column_widths(&header(&["only"])), vec![CONTENT_WIDTH]);
    }

    #[test]
    fn fit_widths_extends_with_last_and_truncates() {
        assert_eq!(fit_widths(vec![2400, 6960], 4), vec![2400, 6960, 6960, 6960]);
        assert_eq!(fit_widths(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(fit_widths(Vec::new(), 2), vec![4680, 4680]);
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for the resource view
pub struct LayoutInfo {
    pub title_area: Rect,
    pub table_area: Rect,
    /// Input bar for search / column filter entry (None when inactive)
    pub input_area: Option<Rect>,
    pub status_area: Rect,
    pub legend_area: Rect,
}

/// Calculate the vertical split for the resource screen
pub fn calculate_layout(size: Rect, input_bar_visible: bool) -> LayoutInfo {
    let constraints = if input_bar_visible {
        vec![
            Constraint::Length(1), // title / tab bar
            Constraint::Min(3),    // table
            Constraint::Length(3), // input bar
            Constraint::Length(1), // status bar
            Constraint::Length(1), // legend
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    if input_bar_visible {
        LayoutInfo {
            title_area: chunks[0],
            table_area: chunks[1],
            input_area: Some(chunks[2]),
            status_area: chunks[3],
            legend_area: chunks[4],
        }
    } else {
        LayoutInfo {
            title_area: chunks[0],
            table_area: chunks[1],
            input_area: None,
            status_area: chunks[2],
            legend_area: chunks[3],
        }
    }
}

/// Centered rectangle for popups, clamped to the parent area
pub fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let w = width.min(parent.width);
    let h = height.min(parent.height);
    Rect {
        x: parent.x + (parent.width.saturating_sub(w)) / 2,
        y: parent.y + (parent.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_input_bar() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), false);
        assert!(info.input_area.is_none());
        assert_eq!(info.title_area.height, 1);
        assert_eq!(info.legend_area.y, 23);
    }

    #[test]
    fn test_layout_with_input_bar() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), true);
        let input = info.input_area.unwrap();
        assert_eq!(input.height, 3);
        assert!(info.table_area.height >= 3);
    }

    #[test]
    fn test_centered_rect_clamps_to_parent() {
        let parent = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(60, 20, parent);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}

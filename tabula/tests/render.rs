use std::fmt;

use tabula::prelude::*;

struct FakeGrid {
    editing: bool,
    current: Option<(usize, String)>,
    rows: usize,
}

impl GridState for FakeGrid {
    fn is_editing(&self) -> bool {
        self.editing
    }

    fn current_row_idx(&self) -> Option<usize> {
        self.current.as_ref().map(|(idx, _)| *idx)
    }

    fn current_field(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, field)| field.as_str())
    }

    fn row_count(&self) -> usize {
        self.rows
    }
}

fn grid() -> FakeGrid {
    FakeGrid {
        editing: false,
        current: Some((2, "name".to_string())),
        rows: 10,
    }
}

#[derive(Debug)]
struct MissingIcon;

impl fmt::Display for MissingIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("icon not found")
    }
}

impl std::error::Error for MissingIcon {}

#[test]
fn test_no_renderer_returns_none() {
    let column = Column::new("Name", "name", TextType::new());
    let row = Row::new().with_cell("name", "Ada");
    let cell = row.cell("name").unwrap();

    assert!(!column.has_renderer());
    assert_eq!(column.render_cell(0, &row, cell, &grid()).unwrap(), None);
}

#[test]
fn test_renderer_sees_context() {
    let column = Column::new("Name", "name", TextType::new())
        .text_align(ColumnTextAlign::Right)
        .renderer(|cx| {
            let label = format!(
                "{}#{}:{}{}",
                cx.column.field,
                cx.row_idx,
                cx.cell.value,
                if cx.is_current_cell() { "*" } else { "" }
            );
            Ok(CellView::for_column(cx.column, label))
        });

    let row = Row::new().with_cell("name", "Ada");
    let cell = row.cell("name").unwrap();

    assert!(column.has_renderer());

    let view = column.render_cell(2, &row, cell, &grid()).unwrap().unwrap();
    assert_eq!(view.text(), "name#2:Ada*");
    assert_eq!(view.text_align, TextAlign::Right);

    let view = column.render_cell(3, &row, cell, &grid()).unwrap().unwrap();
    assert_eq!(view.text(), "name#3:Ada");
}

#[test]
fn test_renderer_reads_row_and_state() {
    let column = Column::new("Flag", "flag", TextType::new()).renderer(|cx| {
        let checked = if cx.row.checked { "on" } else { "off" };
        let mode = if cx.state.is_editing() { "edit" } else { "view" };
        Ok(CellView::new(format!("{checked}/{mode}/{}", cx.state.row_count())))
    });

    let row = Row::new().with_cell("flag", true).checked(true);
    let cell = row.cell("flag").unwrap();
    let mut state = grid();
    state.editing = true;

    let view = column.render_cell(0, &row, cell, &state).unwrap().unwrap();
    assert_eq!(view.text(), "on/edit/10");
}

#[test]
fn test_renderer_error_propagates() {
    let column = Column::new("Icon", "icon", TextType::new()).renderer(|_| Err(MissingIcon.into()));
    let row = Row::new().with_cell("icon", "star");
    let cell = row.cell("icon").unwrap();

    let err = column.render_cell(0, &row, cell, &grid()).unwrap_err();
    assert!(matches!(err, ColumnError::Renderer { ref field, .. } if field == "icon"));
}

#[test]
fn test_footer_renderer() {
    let plain = Column::new("Total", "total", NumberType::new());
    assert!(!plain.has_footer_renderer());
    assert_eq!(plain.render_footer(&grid()).unwrap(), None);

    let column = Column::new("Total", "total", NumberType::new())
        .footer_renderer(|cx| Ok(CellView::new(format!("{} rows", cx.state.row_count()))));

    assert!(column.has_footer_renderer());
    let view = column.render_footer(&grid()).unwrap().unwrap();
    assert_eq!(view.text(), "10 rows");
}

#[test]
fn test_cell_view_for_column_copies_style() {
    let column = Column::new("Name", "name", TextType::new())
        .text_align(ColumnTextAlign::Center)
        .background_color(Color::hex(0x223344))
        .cell_padding(EdgeInsets::horizontal(4.0));

    let view = CellView::for_column(&column, "Ada");

    assert_eq!(view.text_align, TextAlign::Center);
    assert_eq!(view.background, Some(Color::hex(0x223344)));
    assert_eq!(view.padding, Some(EdgeInsets::horizontal(4.0)));
}

#[test]
fn test_cell_view_background_rgb() {
    let view = CellView::new("Ada").background(Color::hex(0x223344));
    assert_eq!(view.background_rgb(), Some(Rgb::new(0x22, 0x33, 0x44)));

    assert_eq!(CellView::new("Ada").background_rgb(), None);
}

#[test]
fn test_cell_view_content_width_counts_wide_chars() {
    let view = CellView::new(RichText::new().span(Span::new("名前")).span(Span::new("!")));
    assert_eq!(view.content_width(), 5);
}

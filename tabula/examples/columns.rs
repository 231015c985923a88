use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::prelude::*;

struct DemoGrid {
    rows: usize,
}

impl GridState for DemoGrid {
    fn is_editing(&self) -> bool {
        false
    }

    fn current_row_idx(&self) -> Option<usize> {
        None
    }

    fn current_field(&self) -> Option<&str> {
        None
    }

    fn row_count(&self) -> usize {
        self.rows
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("columns.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let defaults = ColumnDefaults::new().min_width(60.0).width(140.0);

    let mut columns = vec![
        Column::with_defaults("Name", "name", TextType::new(), &defaults)
            .frozen(ColumnFrozen::Left)
            .sort(ColumnSort::Ascending),
        Column::with_defaults("Age", "age", NumberType::new(), &defaults)
            .text_align(ColumnTextAlign::Right)
            .check_read_only(|row, _| row.checked),
        Column::with_defaults(
            "Salary",
            "salary",
            NumberType::new().fraction_digits(2).fixed(),
            &defaults,
        )
        .formatter(|value| format!("$ {value}"))
        .apply_formatter_in_editing(true),
        Column::with_defaults(
            "Role",
            "role",
            SelectType::new(["Engineer", "Designer", "Manager"]),
            &defaults,
        ),
        Column::with_defaults("Joined", "joined", DateType::new(), &defaults)
            .background_color(Color::oklch(0.92, 0.04, 250.0))
            .renderer(|cx| {
                let text = cx.column.formatted_value_for_type(&cx.cell.value);
                Ok(CellView::for_column(cx.column, text))
            }),
    ];

    let mut groups = GroupRegistry::new();
    let info = groups.add_root(GroupSpec::new("Info"))?;
    groups.add_child(info, GroupSpec::new("Personal").fields(["name", "age"]))?;
    groups.add_child(info, GroupSpec::new("Salary").fields(["salary"]).expanded())?;
    groups.assign(&mut columns);

    let rows = [
        Row::new()
            .with_cell("name", "Ada Lovelace")
            .with_cell("age", 36)
            .with_cell("salary", 98250.5)
            .with_cell("role", "Engineer")
            .with_cell("joined", "2021-04-12"),
        Row::new()
            .with_cell("name", "Grace Hopper")
            .with_cell("age", 85)
            .with_cell("salary", 123000.0)
            .with_cell("role", "Manager")
            .with_cell("joined", "2019-11-02")
            .checked(true),
    ];

    let header: Vec<String> = columns
        .iter()
        .map(|column| column.title_with_group(&groups))
        .collect();
    println!("{}", header.join(" | "));

    for column in &columns {
        let offset = column.content_offset(TextDirection::Ltr, (column.width, 24.0), (40.0, 16.0));
        println!(
            "{}: header fits in {} cols, content at {:?}",
            column.field,
            column.header_extent(1.0),
            offset
        );
    }

    for row in &rows {
        let mut line = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = row.value(&column.field).cloned().unwrap_or_default();
            let shown = column.formatted_value(&value, false)?;
            let locked = column.resolve_read_only(Some(row), row.cell(&column.field));
            line.push(if locked { format!("{shown} (ro)") } else { shown });
        }
        println!("{}", line.join(" | "));
    }

    let joined = &columns[4];
    let grid = DemoGrid { rows: rows.len() };
    for (idx, row) in rows.iter().enumerate() {
        if let Some(cell) = row.cell(&joined.field)
            && let Some(view) = joined.render_cell(idx, row, cell, &grid)?
        {
            println!(
                "rendered {:?} ({} cols) on {:?}",
                view.text(),
                view.content_width(),
                view.background_rgb()
            );
        }
    }

    let salary = &columns[2];
    let raw = CellValue::from(98250.5);
    println!(
        "editing salary: {:?} / display: {:?}",
        salary.formatted_value(&raw, true)?,
        salary.formatted_value(&raw, false)?,
    );

    for kind in FilterKind::ALL {
        let hits = rows
            .iter()
            .filter(|row| {
                let value = row.value("age").cloned().unwrap_or_default();
                kind.matches(columns[1].column_type.as_ref(), &value, "50")
            })
            .count();
        println!("age {kind} 50: {hits} row(s)");
    }

    Ok(())
}

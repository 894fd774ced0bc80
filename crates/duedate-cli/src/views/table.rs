use chrono::{Datelike, NaiveDate, Weekday};
use comfy_table::{Attribute, Cell, Color, Row, Table};
use duedate_core::holiday::Holiday;

pub fn display_holidays(year: i32, holidays: &[(NaiveDate, Holiday)]) {
    if holidays.is_empty() {
        println!("No holidays found for {}.", year);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Weekday", "Holiday", "Note"]);

    for (date, holiday) in holidays {
        let mut row = Row::new();
        row.add_cell(Cell::new(date.format("%Y-%m-%d")));
        row.add_cell(Cell::new(date.format("%A")));
        row.add_cell(Cell::new(holiday.name()).add_attribute(Attribute::Bold));

        // Fixed-date holidays are not moved off weekends
        let note = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            Cell::new("falls on a weekend").fg(Color::DarkGrey)
        } else {
            Cell::new("")
        };
        row.add_cell(note);

        table.add_row(row);
    }

    println!("Holidays in {}", year);
    println!("{table}");
}

//! Drawing designs as terminal cells

use crossterm::style::{style, Color, Stylize};

use crate::{bitmap::Bitmap, config::Cells};

/// The design as plain text, one cell per LED
pub fn to_text(bitmap: &Bitmap, cells: &Cells) -> String {
    let mut text = String::new();

    for row in 0..bitmap.height() {
        for column in 0..bitmap.width() {
            text.push_str(if bitmap.pixel(column, row) {
                &cells.lit
            } else {
                &cells.unlit
            });
        }
        text.push('\n');
    }

    text
}

/// Writes the design to stdout, lit cells in colour
pub fn print(bitmap: &Bitmap, cells: &Cells) {
    println!("{}", bitmap);

    for row in 0..bitmap.height() {
        for column in 0..bitmap.width() {
            if bitmap.pixel(column, row) {
                print!("{}", style(&cells.lit).with(Color::Red));
            } else {
                print!("{}", style(&cells.unlit).with(Color::DarkGrey));
            }
        }
        println!();
    }

    println!();
}

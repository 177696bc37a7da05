use std::fmt::Display;
use itertools::Itertools;
use num_traits::ToPrimitive;
use prettytable::{Table, Row, Cell, format::{consts::FORMAT_CLEAN, Alignment}};

/// Wraps compound expressions such as `x + 1` in parentheses.
pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    match s.contains(' ') {
        true  => format!("({s})"),
        false => s
    }
}

/// Joins terms `(x, r)` into `r₀x₀ + r₁x₁ - ...`. Coefficient `1` and
/// generator `1` are left implicit; no terms gives `0`.
pub fn lc<X, R, S>(terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let signed = terms.map(|(x, r)| {
        let (x, r) = (x.to_string(), paren_expr(r));
        let (neg, r) = match r.strip_prefix('-') {
            Some(r) => (true, r.to_string()),
            None    => (false, r)
        };
        let t = if x == "1" {
            r
        } else if r == "1" {
            x
        } else {
            format!("{r}{x}")
        };
        (neg, t)
    });

    let mut res = String::new();
    for (k, (neg, t)) in signed.enumerate() {
        let sep = match (k, neg) {
            (0, true)  => "-",
            (0, false) => "",
            (_, true)  => " - ",
            (_, false) => " + "
        };
        res += sep;
        res += &t;
    }

    if res.is_empty() { "0".to_string() } else { res }
}

const SUB: [char; 11] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉', '₋'];
const SUP: [char; 11] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹', '⁻'];

// maps the decimal form of `i` through `table`, `-` to the last entry.
fn script<I>(i: I, table: &[char; 11]) -> String
where I: ToPrimitive {
    let Some(i) = i.to_i128() else {
        return String::new()
    };
    i.to_string().chars().map(|c| match c.to_digit(10) {
        Some(d) => table[d as usize],
        None    => table[10]
    }).collect()
}

pub fn subscript<I>(i: I) -> String
where I: ToPrimitive {
    script(i, &SUB)
}

pub fn superscript<I>(i: I) -> String
where I: ToPrimitive {
    script(i, &SUP)
}

fn text_row<I>(cells: I) -> Row
where I: IntoIterator<Item = String> {
    Row::new(cells.into_iter().map(|s| Cell::new(&s)).collect())
}

/// A borderless table with `head` in the corner, `cols` as titles and
/// `entry(i, j)` in each cell.
pub fn table<S, I, J, I1, I2, D, F>(head: S, rows: I1, cols: I2, entry: F) -> String
where
    S: Display,
    I: Display,
    J: Display,
    I1: Iterator<Item = I>,
    I2: Iterator<Item = J>,
    D: Display,
    F: Fn(&I, &J) -> D
{
    let cols = cols.collect_vec();

    let mut t = Table::new();
    t.set_format(*FORMAT_CLEAN);
    t.set_titles(text_row(
        std::iter::once(head.to_string()).chain(cols.iter().map(|j| j.to_string()))
    ));

    for i in rows {
        t.add_row(text_row(
            std::iter::once(i.to_string()).chain(cols.iter().map(|j| entry(&i, j).to_string()))
        ));
    }

    t.to_string()
}

/// Right-aligned grid of entries without headers, one line per row.
pub fn grid<D, F>(nrows: usize, ncols: usize, entry: F) -> String
where D: Display, F: Fn(usize, usize) -> D {
    let mut t = Table::new();
    t.set_format(*FORMAT_CLEAN);

    for i in 0..nrows {
        t.add_row(Row::new((0..ncols).map(|j|
            Cell::new_align(&entry(i, j).to_string(), Alignment::RIGHT)
        ).collect()));
    }

    t.to_string()
}

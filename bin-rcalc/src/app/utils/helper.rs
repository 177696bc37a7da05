use std::any::type_name;
use std::str::FromStr;
use itertools::Itertools;
use serde_json::Value;
use ringo::{Ring, RingOps};
use ringo::poly::Poly;
use ringo_matrix::Mat;

use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> CmdResult<R>
where F: FnOnce() -> CmdResult<R> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

/// Parses a JSON string or number as an element of `R`.
pub fn parse_elem<R: FromStr>(v: &Value) -> CmdResult<R> { 
    let s = match v { 
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return err!("invalid entry: {v}")
    };
    match R::from_str(&s) { 
        Ok(a) => Ok(a),
        Err(_) => err!("cannot parse '{s}' as {}.", type_name::<R>())
    }
}

/// Parses a JSON array of rows, e.g. `[[1, 2], [3, 4]]` or `[["1/2", "0"]]`.
pub fn parse_mat<R>(input: &str) -> CmdResult<Mat<R>>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> { 
    let Ok(rows) = serde_json::from_str::<Vec<Vec<Value>>>(input) else { 
        return err!("invalid input matrix: '{input}'")
    };

    let m = rows.len();
    let n = rows.first().map(|r| r.len()).unwrap_or(0);

    ensure!(rows.iter().all(|r| r.len() == n), "rows must have the same length: '{input}'");

    let entries: Vec<R> = rows.iter().flatten().map(parse_elem).try_collect()?;
    Ok(Mat::from_data((m, n), entries))
}

/// Parses a JSON array of coefficients in ascending order, e.g. `[-1, 0, 1]` for `x² - 1`.
pub fn parse_poly<R>(input: &str) -> CmdResult<Poly<'x', R>>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> { 
    let Ok(coeffs) = serde_json::from_str::<Vec<Value>>(input) else { 
        return err!("invalid input polynomial: '{input}'")
    };

    let coeffs: Vec<R> = coeffs.iter().map(parse_elem).try_collect()?;
    Ok(Poly::from_coeffs(coeffs))
}

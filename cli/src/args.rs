//! Value parsers for command-line arguments.

use canvas::{Point, Rect};
use image::Rgba;

#[cfg(test)]
#[path = "args_test.rs"]
mod tests;

/// `X,Y` as a pixel point. Fractional values are allowed.
pub fn parse_point(raw: &str) -> Result<Point, String> {
    let [x, y] = split_numbers::<f64, 2>(raw, "X,Y")?;
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return Err(format!("'{raw}' must be two non-negative numbers"));
    }
    Ok(Point::new(x, y))
}

/// `WxH` as a displayed size in (possibly fractional) pixels.
pub fn parse_display(raw: &str) -> Result<(f64, f64), String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("'{raw}' is not WxH"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("'{raw}': {e}"));
    let (w, h) = (parse(w)?, parse(h)?);
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return Err(format!("'{raw}' must be a positive size"));
    }
    Ok((w, h))
}

/// `X,Y,W,H` as a crop rectangle.
pub fn parse_rect(raw: &str) -> Result<Rect, String> {
    let [x, y, w, h] = split_numbers::<u32, 4>(raw, "X,Y,W,H")?;
    if w == 0 || h == 0 {
        return Err(format!("'{raw}' has zero area"));
    }
    Ok(Rect::new(x, y, w, h))
}

/// `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_color(raw: &str) -> Result<Rgba<u8>, String> {
    let hex = raw.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(format!("'{raw}' is not #rrggbb or #rrggbbaa"));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("'{raw}': {e}"));
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

fn split_numbers<T, const N: usize>(raw: &str, shape: &str) -> Result<[T; N], String>
where
    T: std::str::FromStr + Copy + Default,
    T::Err: std::fmt::Display,
{
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != N {
        return Err(format!("'{raw}' is not {shape}"));
    }
    let mut out = [T::default(); N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field.parse().map_err(|e| format!("'{raw}': {e}"))?;
    }
    Ok(out)
}

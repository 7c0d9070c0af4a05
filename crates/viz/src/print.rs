//! Non-interactive output for `--print`.

use std::io::Write;

use leibniz_series::ApproximationPoint;

use crate::error::Result;

/// Write the sequence as an aligned table: terms, value, pi, error.
pub fn write_table<W: Write>(out: &mut W, points: &[ApproximationPoint]) -> Result<()> {
    writeln!(
        out,
        "{:>5}  {:>18}  {:>18}  {:>18}",
        "terms", "value", "pi", "error"
    )?;
    for point in points {
        writeln!(
            out,
            "{:>5}  {:>18.15}  {:>18.15}  {:>18.15}",
            point.term_index, point.partial_sum, point.reference, point.absolute_error
        )?;
    }
    Ok(())
}

/// Write the sequence as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, points: &[ApproximationPoint]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, points)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leibniz_series::generate;

    #[test]
    fn test_table() {
        let mut out = Vec::new();
        write_table(&mut out, &generate(3)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("terms") && lines[0].contains("error"));
        assert!(lines[1].trim_start().starts_with('1'));
        assert!(lines[1].contains("4.000000000000000"));
        assert!(lines[1].contains("3.141592653589793"));
        assert!(lines[2].contains("2.666666666666667"));
        // Columns line up
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_json() {
        let points = generate(4);
        let mut out = Vec::new();
        write_json(&mut out, &points).unwrap();

        // Every float reads back bit for bit
        let parsed: Vec<ApproximationPoint> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, points);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[3]["termIndex"], 4);
    }

    #[test]
    fn test_json_full_range_is_lossless() {
        let points = generate(50);
        let mut out = Vec::new();
        write_json(&mut out, &points).unwrap();

        let parsed: Vec<ApproximationPoint> = serde_json::from_slice(&out).unwrap();
        for (a, b) in parsed.iter().zip(&points) {
            assert_eq!(a.partial_sum.to_bits(), b.partial_sum.to_bits());
            assert_eq!(a.absolute_error.to_bits(), b.absolute_error.to_bits());
        }
        assert_eq!(parsed.len(), 50);
    }

    #[test]
    fn test_empty_table_has_header() {
        let mut out = Vec::new();
        write_table(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}

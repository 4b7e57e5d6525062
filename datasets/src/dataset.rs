use std::io::Read;

use csv::ReaderBuilder;
use linfa::Dataset;
use ndarray::prelude::*;
use ndarray_csv::{Array2Reader, ReadError};

/// Convert CSV bytes into a 2D array of categorical values
pub fn array_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> Result<Array2<String>, ReadError> {
    // parse CSV
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv);

    // extract ndarray
    reader.deserialize_array2_dynamic()
}

/// Read in the weather dataset
///
/// Fourteen days described by `outlook`, `temperature`, `humidity` and `windy`, labelled with
/// whether tennis was played (`yes` or `no`).
// The `.csv` data is two dimensional: Axis(0) denotes y-axis (rows), Axis(1) denotes x-axis (columns)
pub fn weather() -> Dataset<String, String, Ix1> {
    let data = include_bytes!("../data/weather.csv");
    let array = array_from_csv(&data[..], true, b',').unwrap();

    let (data, targets) = (
        array.slice(s![.., 0..4]).to_owned(),
        array.column(4).to_owned(),
    );

    let feature_names = vec!["outlook", "temperature", "humidity", "windy"];

    Dataset::new(data, targets).with_feature_names(feature_names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather() {
        let ds = weather();

        assert_eq!(ds.records().nrows(), 14);
        assert_eq!(ds.records().ncols(), 4);
        assert_eq!(ds.records()[(2, 0)], "overcast");
        assert_eq!(ds.targets()[13], "no");
        assert_eq!(ds.feature_names()[3], "windy");
    }
}
